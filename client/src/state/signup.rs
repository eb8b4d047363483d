//! Sign-up form model.
//!
//! Only the consent checkboxes are enforced here; the other fields rely on
//! `required` markup. Account creation is delegated to the host through the
//! form's success callback. There is deliberately no password-confirmation
//! check at registration, unlike the profile password change.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::state::validation::ValidationError;

/// Registration fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub accept_terms: bool,
    pub accept_privacy: bool,
}

/// What the host receives once the consent gate passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupSubmission {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Both acknowledgments checked.
    #[must_use]
    pub fn has_consent(&self) -> bool {
        self.accept_terms && self.accept_privacy
    }

    /// Gate the submission on consent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingConsent` if either checkbox is unchecked.
    pub fn submit(&self) -> Result<SignupSubmission, ValidationError> {
        if !self.has_consent() {
            return Err(ValidationError::MissingConsent);
        }
        Ok(SignupSubmission {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}
