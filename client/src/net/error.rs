//! Request errors surfaced by `net::api`.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call maps to one `ApiError`. Screens never inspect variants
//! for wording; they call `user_message` with their own fallback, which
//! prefers the server's `detail` string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The API rejected the bearer token.
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body text.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        if status == 401 {
            Self::Unauthorized { detail }
        } else {
            Self::Status { status, detail }
        }
    }

    /// Server detail when present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { detail: Some(d) } | Self::Status { detail: Some(d), .. } => {
                d.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    /// Whether the session token was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
