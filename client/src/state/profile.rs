//! Tabbed profile panel state: view profile, edit name, change password.
//!
//! DESIGN
//! ======
//! The panel is a three-state tab machine plus one `OpStatus` per request.
//! Each flow is split into `begin_*` (validate, build the request body, mark
//! in-flight) and `finish_*` (apply the response). A request body can only be
//! obtained from a successful `begin_*`, so invalid input never reaches the
//! network. Flows are independent: finishing one never touches another's
//! status, and a request started on one tab still applies after a tab switch.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::{ChangePasswordRequest, UpdateNameRequest, User};
use crate::state::notify::Feedback;
use crate::state::validation::ValidationError;

/// Minimum accepted length for a new password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The panel's active tab. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    EditName,
    ChangePassword,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Profile, Self::EditName, Self::ChangePassword];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::EditName => "Edit Name",
            Self::ChangePassword => "Change Password",
        }
    }
}

/// Lifecycle of one async operation, as seen by the rendering layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

impl OpStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// The three request flows the panel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileOp {
    Load,
    UpdateName,
    ChangePassword,
}

impl ProfileOp {
    /// Message shown when the server gives no usable detail.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load profile",
            Self::UpdateName => "Failed to update name",
            Self::ChangePassword => "Failed to change password",
        }
    }

    /// Whether `err` means the stored session is no longer valid.
    ///
    /// The password endpoint answers a wrong current password with 401, so a
    /// 401 there is an ordinary failure and the session is kept.
    #[must_use]
    pub fn ends_session(self, err: &ApiError) -> bool {
        err.is_unauthorized() && self != Self::ChangePassword
    }
}

/// Where the panel is hosted; decides what a failed profile load does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
    /// Full page: a failed load sends the user to the login screen.
    Page,
    /// Overlay: a failed load only notifies.
    Modal,
}

/// Follow-up to a failed `/me` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadFailure {
    pub end_session: bool,
    pub redirect_to_login: bool,
}

impl PanelVariant {
    /// The page variant always drops the session before leaving, otherwise the
    /// login screen would forward the still-stored session straight back here.
    /// The modal keeps the session unless the token itself was rejected.
    #[must_use]
    pub fn on_load_failure(self, err: &ApiError) -> LoadFailure {
        match self {
            Self::Page => LoadFailure { end_session: true, redirect_to_login: true },
            Self::Modal => LoadFailure {
                end_session: ProfileOp::Load.ends_session(err),
                redirect_to_login: false,
            },
        }
    }
}

/// Transient password-change input. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// Check the fields in order, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: missing current password, missing new
    /// password, new password shorter than `MIN_PASSWORD_LEN`, confirmation mismatch.
    pub fn validate(&self) -> Result<ChangePasswordRequest, ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingCurrentPassword);
        }
        if self.new_password.is_empty() {
            return Err(ValidationError::MissingNewPassword);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Build the rename request from raw input.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` when the input is empty after trimming.
pub fn validate_name(raw: &str) -> Result<UpdateNameRequest, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(UpdateNameRequest { full_name: trimmed.to_owned() })
}

/// Everything the profile panel renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub user: Option<User>,
    pub name_input: String,
    pub password: PasswordForm,
    pub load: OpStatus,
    pub update_name: OpStatus,
    pub change_password: OpStatus,
}

impl ProfileState {
    /// Start from a cached user record so the panel has something to show
    /// while the fresh copy loads.
    #[must_use]
    pub fn with_cached_user(user: Option<User>) -> Self {
        let name_input = user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default();
        Self { user, name_input, ..Self::default() }
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn begin_load(&mut self) {
        self.load = OpStatus::InFlight;
    }

    /// Apply the `GET /me` result.
    ///
    /// # Errors
    ///
    /// Returns the error notification when the load failed. Load failures
    /// always use the generic message.
    pub fn finish_load(&mut self, result: Result<User, ApiError>) -> Result<(), Feedback> {
        match result {
            Ok(user) => {
                self.name_input.clone_from(&user.full_name);
                self.user = Some(user);
                self.load = OpStatus::Idle;
                Ok(())
            }
            Err(_) => {
                let msg = ProfileOp::Load.fallback_message();
                self.load = OpStatus::Failed(msg.to_owned());
                Err(Feedback::error(msg))
            }
        }
    }

    /// Validate the name field and mark the rename in flight.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank input; state is unchanged.
    pub fn begin_update_name(&mut self) -> Result<UpdateNameRequest, ValidationError> {
        let request = validate_name(&self.name_input)?;
        self.update_name = OpStatus::InFlight;
        Ok(request)
    }

    /// Apply the rename response. On success the server's user replaces the
    /// cached one and the panel returns to the profile tab.
    pub fn finish_update_name(&mut self, result: Result<User, ApiError>) -> Feedback {
        match result {
            Ok(user) => {
                self.name_input.clone_from(&user.full_name);
                self.user = Some(user);
                self.update_name = OpStatus::Idle;
                self.tab = ProfileTab::Profile;
                Feedback::success("Name updated successfully")
            }
            Err(err) => self.fail(ProfileOp::UpdateName, &err),
        }
    }

    /// Validate the password fields and mark the change in flight.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`; state is unchanged.
    pub fn begin_change_password(&mut self) -> Result<ChangePasswordRequest, ValidationError> {
        let request = self.password.validate()?;
        self.change_password = OpStatus::InFlight;
        Ok(request)
    }

    /// Apply the password-change response. Fields clear only on success.
    pub fn finish_change_password(&mut self, result: Result<(), ApiError>) -> Feedback {
        match result {
            Ok(()) => {
                self.password.clear();
                self.change_password = OpStatus::Idle;
                self.tab = ProfileTab::Profile;
                Feedback::success("Password changed successfully")
            }
            Err(err) => self.fail(ProfileOp::ChangePassword, &err),
        }
    }

    fn fail(&mut self, op: ProfileOp, err: &ApiError) -> Feedback {
        let msg = err.user_message(op.fallback_message());
        let status = OpStatus::Failed(msg.clone());
        match op {
            ProfileOp::Load => self.load = status,
            ProfileOp::UpdateName => self.update_name = status,
            ProfileOp::ChangePassword => self.change_password = status,
        }
        Feedback::error(msg)
    }
}
