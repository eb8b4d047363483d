use super::*;

#[test]
fn token_from_query_trims_and_requires_value() {
    assert_eq!(token_from_query(Some("  abc.def  ".to_owned())), Some("abc.def".to_owned()));
    assert_eq!(token_from_query(Some("   ".to_owned())), None);
    assert_eq!(token_from_query(None), None);
}

#[test]
fn has_external_login_ignores_self_links() {
    assert!(!has_external_login("/login"));
    assert!(!has_external_login("/login?next=/profile"));
    assert!(!has_external_login(""));
    assert!(has_external_login("https://auth.example.com/sign-in"));
}
