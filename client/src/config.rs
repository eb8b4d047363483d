//! Client configuration: where the account API lives and where sign-in happens.
//!
//! Resolution order for each value is a runtime override in local storage,
//! then the build-time environment, then a development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::storage::{KeyValueStore, LocalStorage};

/// Local-storage key overriding the API base URL at runtime.
pub const API_BASE_OVERRIDE_KEY: &str = "stayscope_api_base";

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_LOGIN_URL: &str = "/login";

/// Resolved endpoints for the current browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin (plus optional path prefix), never ending in `/`.
    pub api_base: String,
    /// External sign-in page that hands a token back to `/login?token=`.
    pub login_url: String,
}

impl ClientConfig {
    /// Resolve configuration against the given store.
    pub fn resolve(store: &impl KeyValueStore) -> Self {
        let api_base = store
            .get(API_BASE_OVERRIDE_KEY)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| option_env!("STAYSCOPE_API_BASE").map(str::to_owned))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let login_url = option_env!("STAYSCOPE_LOGIN_URL").unwrap_or(DEFAULT_LOGIN_URL).to_owned();
        Self { api_base: normalize_base(&api_base), login_url }
    }

    /// Resolve configuration from browser local storage.
    pub fn from_browser() -> Self {
        Self::resolve(&LocalStorage)
    }
}

/// Strip whitespace and trailing slashes so paths can be appended verbatim.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
