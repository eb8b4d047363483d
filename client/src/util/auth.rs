//! Shared session-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical redirect behavior when no session is
//! present, and identical teardown when the API rejects the token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::LocalStorage;

pub const LOGIN_PATH: &str = "/login";

/// Whether a protected screen should bounce to the login route.
///
/// Stays `false` until the session has been read from storage, so the server
/// render and the first hydrate pass do not redirect.
#[must_use]
pub fn should_redirect_unauth(session_loaded: bool, session: Option<&Session>) -> bool {
    session_loaded && session.is_none()
}

/// Redirect to `/login` whenever the session has loaded and is absent.
pub fn install_unauth_redirect<F>(ctx: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let loaded = ctx.loaded.get();
        if ctx.session.with(|s| should_redirect_unauth(loaded, s.as_ref())) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Drop the stored session (logout or rejected token).
pub fn end_session(session: RwSignal<Option<Session>>) {
    SessionStore::new(LocalStorage).clear();
    session.set(None);
    log::info!("session cleared");
}

/// Session signals shared through context by the app root.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    /// Becomes `true` once local storage has been read in the browser.
    pub loaded: RwSignal<bool>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self { session: RwSignal::new(None), loaded: RwSignal::new(false) }
    }

    /// Read the persisted session into the signals.
    pub fn restore(&self) {
        self.session.set(SessionStore::new(LocalStorage).load());
        self.loaded.set(true);
    }

    /// Tracked read of the bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    #[must_use]
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    #[must_use]
    pub fn cached_user_untracked(&self) -> Option<User> {
        self.session.with_untracked(|s| s.as_ref().and_then(|s| s.cached_user.clone()))
    }

    /// Persist a freshly handed-off session.
    pub fn sign_in(&self, session: Session) {
        SessionStore::new(LocalStorage).save(&session);
        self.session.set(Some(session));
        self.loaded.set(true);
    }

    /// Replace the cached user after the server returned a fresh copy.
    pub fn cache_user(&self, user: &User) {
        if self.session.with_untracked(Option::is_none) {
            return;
        }
        SessionStore::new(LocalStorage).cache_user(user);
        self.session.update(|s| {
            if let Some(s) = s {
                s.cached_user = Some(user.clone());
            }
        });
    }

    pub fn end(&self) {
        end_session(self.session);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-page navigation, used where a router handle is not at hand.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
