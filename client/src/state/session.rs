//! Signed-in session: bearer token plus the last user record the API returned.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` persists the session through any `KeyValueStore`; the app
//! root loads it once and shares it as `RwSignal<Option<Session>>` context.
//! Screens read the token from that signal and pass it explicitly to
//! `net::api`, so request code never reaches for global storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const TOKEN_KEY: &str = "stayscope_token";
pub const USER_KEY: &str = "stayscope_user";

/// An authenticated browser session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub cached_user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), cached_user: None }
    }
}

/// Persistence for `Session` over a key/value backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored session. A missing or blank token means signed out; an
    /// unreadable user record is dropped rather than failing the session.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        let cached_user = load_json::<User>(&self.storage, USER_KEY);
        Some(Session { token, cached_user })
    }

    pub fn save(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        match &session.cached_user {
            Some(user) => save_json(&self.storage, USER_KEY, user),
            None => self.storage.remove(USER_KEY),
        }
    }

    /// Replace only the cached user record.
    pub fn cache_user(&self, user: &User) {
        save_json(&self.storage, USER_KEY, user);
    }

    /// Forget token and user together.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
