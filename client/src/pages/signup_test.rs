use super::*;

#[test]
fn continue_url_appends_encoded_email() {
    assert_eq!(
        continue_url("/login", "jane+test@example.com"),
        "/login?email=jane%2Btest%40example.com"
    );
}

#[test]
fn continue_url_extends_existing_query() {
    assert_eq!(
        continue_url("https://auth.example.com/start?app=stayscope", "a@b.co"),
        "https://auth.example.com/start?app=stayscope&email=a%40b.co"
    );
}
