use super::*;

fn filled(terms: bool, privacy: bool) -> SignupForm {
    SignupForm {
        full_name: " Jane Doe ".to_owned(),
        email: " jane@example.com ".to_owned(),
        password: "pw".to_owned(),
        accept_terms: terms,
        accept_privacy: privacy,
    }
}

#[test]
fn submission_requires_both_acknowledgments() {
    assert_eq!(filled(false, false).submit(), Err(ValidationError::MissingConsent));
    assert_eq!(filled(true, false).submit(), Err(ValidationError::MissingConsent));
    assert_eq!(filled(false, true).submit(), Err(ValidationError::MissingConsent));
}

#[test]
fn consented_submission_trims_identity_fields() {
    let submission = filled(true, true).submit().expect("consented");
    assert_eq!(submission.full_name, "Jane Doe");
    assert_eq!(submission.email, "jane@example.com");
    assert_eq!(submission.password, "pw");
}

#[test]
fn password_is_passed_through_unchanged() {
    let mut form = filled(true, true);
    form.password = " spaced ".to_owned();
    assert_eq!(form.submit().expect("consented").password, " spaced ");
}

#[test]
fn consent_message_matches_alert_text() {
    assert_eq!(
        ValidationError::MissingConsent.to_string(),
        "You must agree to the Terms of Service and Privacy Policy"
    );
}
