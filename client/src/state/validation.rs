//! Client-side validation failures.
//!
//! These are raised before any request is built, so they never reach the
//! network or the log. `Display` is the exact user-facing text.

/// A user-correctable input problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Please enter your current password")]
    MissingCurrentPassword,
    #[error("Please enter a new password")]
    MissingNewPassword,
    #[error("New password must be at least 6 characters")]
    PasswordTooShort,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the Terms of Service and Privacy Policy")]
    MissingConsent,
    #[error("Select two listings to compare")]
    ScanSelectionIncomplete,
    #[error("Select two different listings to compare")]
    SameScanSelected,
}
