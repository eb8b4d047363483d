use super::*;

#[test]
fn should_redirect_unauth_when_loaded_and_session_missing() {
    assert!(should_redirect_unauth(true, None));
}

#[test]
fn should_not_redirect_before_session_is_read() {
    assert!(!should_redirect_unauth(false, None));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let session = Session::new("token");
    assert!(!should_redirect_unauth(true, Some(&session)));
}
