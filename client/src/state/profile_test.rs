use super::*;

fn user_named(name: &str) -> User {
    User {
        full_name: name.to_owned(),
        email: "jane@example.com".to_owned(),
        email_verified: false,
        plan: "free".to_owned(),
        remaining_scans: 3,
        used_scans: 0,
        subscription_status: None,
        created_at: None,
    }
}

fn form(current: &str, new: &str, confirm: &str) -> PasswordForm {
    PasswordForm {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn default_tab_is_profile() {
    assert_eq!(ProfileState::default().tab, ProfileTab::Profile);
    assert_eq!(ProfileTab::ALL.len(), 3);
}

#[test]
fn select_tab_switches_without_touching_requests() {
    let mut state = ProfileState::default();
    state.name_input = "New".to_owned();
    state.begin_update_name().expect("valid name");
    state.select_tab(ProfileTab::ChangePassword);
    assert_eq!(state.tab, ProfileTab::ChangePassword);
    assert!(state.update_name.is_in_flight());
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_success_seeds_name_field() {
    let mut state = ProfileState::default();
    state.begin_load();
    assert!(state.load.is_in_flight());
    assert_eq!(state.finish_load(Ok(user_named("Jane Doe"))), Ok(()));
    assert_eq!(state.name_input, "Jane Doe");
    assert_eq!(state.load, OpStatus::Idle);
}

#[test]
fn load_failure_is_generic_even_with_detail() {
    let mut state = ProfileState::default();
    let err = ApiError::Status { status: 500, detail: Some("db down".to_owned()) };
    let feedback = state.finish_load(Err(err)).expect_err("should fail");
    assert_eq!(feedback, Feedback::error("Failed to load profile"));
    assert_eq!(state.load.error(), Some("Failed to load profile"));
}

#[test]
fn cached_user_prefills_panel() {
    let state = ProfileState::with_cached_user(Some(user_named("Cached")));
    assert_eq!(state.name_input, "Cached");
    assert_eq!(state.user.map(|u| u.full_name), Some("Cached".to_owned()));
}

// =============================================================
// Update name
// =============================================================

#[test]
fn whitespace_names_never_produce_a_request() {
    for raw in ["", " ", "\t", "   \n  "] {
        let mut state = ProfileState::default();
        state.name_input = raw.to_owned();
        assert_eq!(state.begin_update_name(), Err(ValidationError::EmptyName));
        assert_eq!(state.update_name, OpStatus::Idle);
    }
}

#[test]
fn update_name_sends_trimmed_value() {
    let mut state = ProfileState::default();
    state.name_input = "  Jane Doe  ".to_owned();
    let req = state.begin_update_name().expect("valid");
    assert_eq!(req.full_name, "Jane Doe");
    assert!(state.update_name.is_in_flight());
}

#[test]
fn update_name_success_shows_server_name_and_returns_to_profile() {
    let mut state = ProfileState::with_cached_user(Some(user_named("Old")));
    state.select_tab(ProfileTab::EditName);
    state.name_input = "jane doe".to_owned();
    state.begin_update_name().expect("valid");
    let feedback = state.finish_update_name(Ok(user_named("Jane Doe")));
    assert_eq!(feedback.kind, crate::state::notify::NoticeKind::Success);
    assert_eq!(state.user.as_ref().map(|u| u.full_name.as_str()), Some("Jane Doe"));
    assert_eq!(state.name_input, "Jane Doe");
    assert_eq!(state.tab, ProfileTab::Profile);
    assert_eq!(state.update_name, OpStatus::Idle);
}

#[test]
fn update_name_failure_prefers_detail_then_fallback() {
    let mut state = ProfileState::default();
    state.select_tab(ProfileTab::EditName);
    let fb = state.finish_update_name(Err(ApiError::Status {
        status: 422,
        detail: Some("Too long".to_owned()),
    }));
    assert_eq!(fb, Feedback::error("Too long"));
    assert_eq!(state.tab, ProfileTab::EditName);

    let fb = state.finish_update_name(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(fb, Feedback::error("Failed to update name"));
    assert_eq!(state.update_name.error(), Some("Failed to update name"));
}

// =============================================================
// Change password
// =============================================================

#[test]
fn password_rules_apply_in_order() {
    assert_eq!(form("", "", "").validate(), Err(ValidationError::MissingCurrentPassword));
    assert_eq!(form("old", "", "x").validate(), Err(ValidationError::MissingNewPassword));
    assert_eq!(form("old", "abc", "abc").validate(), Err(ValidationError::PasswordTooShort));
    assert_eq!(form("old", "abcdef", "abcdeg").validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn short_new_password_blocks_regardless_of_confirmation() {
    for confirm in ["", "abc", "abcde", "something-else"] {
        for new in ["a", "ab", "abcde"] {
            assert_eq!(
                form("current", new, confirm).validate(),
                Err(ValidationError::PasswordTooShort)
            );
        }
    }
}

#[test]
fn mismatch_blocks_when_length_is_fine() {
    assert_eq!(
        form("current", "longenough", "longenougH").validate(),
        Err(ValidationError::PasswordMismatch)
    );
    assert_eq!(form("current", "123456", "").validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(
        form("c", "ééééé", "ééééé").validate(),
        Err(ValidationError::PasswordTooShort)
    );
    assert!(form("c", "éééééé", "éééééé").validate().is_ok());
}

#[test]
fn valid_password_form_builds_request() {
    let req = form("old-pass", "new-pass", "new-pass").validate().expect("valid");
    assert_eq!(req.current_password, "old-pass");
    assert_eq!(req.new_password, "new-pass");
}

#[test]
fn invalid_password_form_leaves_status_idle() {
    let mut state = ProfileState::default();
    state.password = form("old", "abc", "abc");
    assert_eq!(state.begin_change_password(), Err(ValidationError::PasswordTooShort));
    assert_eq!(state.change_password, OpStatus::Idle);
}

#[test]
fn password_success_clears_fields_and_returns_to_profile() {
    let mut state = ProfileState::default();
    state.select_tab(ProfileTab::ChangePassword);
    state.password = form("old-pass", "new-pass", "new-pass");
    state.begin_change_password().expect("valid");
    let fb = state.finish_change_password(Ok(()));
    assert_eq!(fb, Feedback::success("Password changed successfully"));
    assert_eq!(state.password, PasswordForm::default());
    assert_eq!(state.tab, ProfileTab::Profile);
}

#[test]
fn password_failure_shows_detail_verbatim_and_keeps_fields() {
    let mut state = ProfileState::default();
    state.select_tab(ProfileTab::ChangePassword);
    state.password = form("wrong", "new-pass", "new-pass");
    state.begin_change_password().expect("valid");
    let err = ApiError::from_response(400, r#"{"detail":"Incorrect current password"}"#);
    let fb = state.finish_change_password(Err(err));
    assert_eq!(fb.text, "Incorrect current password");
    assert_eq!(state.password, form("wrong", "new-pass", "new-pass"));
    assert_eq!(state.tab, ProfileTab::ChangePassword);
    assert_eq!(state.change_password.error(), Some("Incorrect current password"));
}

#[test]
fn flows_do_not_share_status() {
    let mut state = ProfileState::default();
    state.name_input = "Jane".to_owned();
    state.password = form("old-pass", "new-pass", "new-pass");
    state.begin_update_name().expect("valid");
    state.begin_change_password().expect("valid");
    state.finish_change_password(Err(ApiError::Network("x".to_owned())));
    assert!(state.update_name.is_in_flight());
    assert!(state.change_password.error().is_some());
}

// =============================================================
// Session rejection
// =============================================================

#[test]
fn unauthorized_ends_session_except_for_password_change() {
    let err = ApiError::Unauthorized { detail: None };
    assert!(ProfileOp::Load.ends_session(&err));
    assert!(ProfileOp::UpdateName.ends_session(&err));
    assert!(!ProfileOp::ChangePassword.ends_session(&err));
    assert!(!ProfileOp::Load.ends_session(&ApiError::Network("x".to_owned())));
}

#[test]
fn page_load_failure_always_drops_session_before_redirect() {
    let errors = [
        ApiError::Unauthorized { detail: None },
        ApiError::Status { status: 500, detail: None },
        ApiError::Network("offline".to_owned()),
    ];
    for err in &errors {
        let failure = PanelVariant::Page.on_load_failure(err);
        assert!(failure.redirect_to_login, "{err:?}");
        // A kept session would bounce /login straight back to /profile.
        assert!(failure.end_session, "{err:?}");
    }
}

#[test]
fn modal_load_failure_never_redirects_and_keeps_session_unless_rejected() {
    let rejected = PanelVariant::Modal.on_load_failure(&ApiError::Unauthorized { detail: None });
    assert_eq!(rejected, LoadFailure { end_session: true, redirect_to_login: false });

    let server =
        PanelVariant::Modal.on_load_failure(&ApiError::Status { status: 500, detail: None });
    assert_eq!(server, LoadFailure { end_session: false, redirect_to_login: false });

    let offline = PanelVariant::Modal.on_load_failure(&ApiError::Network("offline".to_owned()));
    assert_eq!(offline, LoadFailure { end_session: false, redirect_to_login: false });
}
