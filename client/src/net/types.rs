//! Wire DTOs for the account and comparison API.
//!
//! DESIGN
//! ======
//! Field names follow the API's snake_case JSON. Counters accept any
//! integer-compatible JSON number because some backends emit `3.0`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in account as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    /// Subscription plan identifier (e.g. `"free"`, `"pro"`).
    #[serde(default)]
    pub plan: String,
    /// Scans still available in the current billing period.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub remaining_scans: i64,
    /// Scans consumed so far.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub used_scans: i64,
    #[serde(default)]
    pub subscription_status: Option<String>,
    /// Account creation timestamp, ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A completed listing analysis that can be compared against another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub listing_url: String,
    #[serde(default)]
    pub listing_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// `GET /my-scans` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScansResponse {
    #[serde(default)]
    pub scans: Vec<Scan>,
}

/// `POST /profile/update-name` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateNameRequest {
    pub full_name: String,
}

/// `POST /profile/change-password` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// `POST /chat/compare` request body. `question` is sent as `null` when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompareRequest {
    pub scan_id_1: String,
    pub scan_id_2: String,
    pub question: Option<String>,
}

/// `POST /chat/compare` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CompareResponse {
    pub comparison: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub chat_id: String,
}

/// A rendered comparison, pairing the server narrative with the local scan records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonResult {
    pub scan1: Scan,
    pub scan2: Scan,
    pub content: String,
    pub chat_id: String,
}

/// Error body shape for non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the server sent a non-empty string.
    ///
    /// Validation failures from the API arrive as a list of objects; those
    /// carry no single message and yield `None`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Identifiers come back as strings or integers depending on the backend table.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
