//! REST client for the account and comparison API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Network` since the
//! bearer token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Responses are read as text first and interpreted by pure helpers, so the
//! status/body mapping is covered by native tests without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ChangePasswordRequest, CompareRequest, CompareResponse, Scan, ScansResponse,
    UpdateNameRequest, User,
};

pub const ME_PATH: &str = "/me";
pub const UPDATE_NAME_PATH: &str = "/profile/update-name";
pub const CHANGE_PASSWORD_PATH: &str = "/profile/change-password";
pub const MY_SCANS_PATH: &str = "/my-scans";
pub const COMPARE_PATH: &str = "/chat/compare";

/// Handle to the external API. Cheap to clone; holds only the base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: crate::config::normalize_base(&base.into()) }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Fetch the signed-in user via `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn fetch_me(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::get(&self.endpoint(ME_PATH))
                .header("Authorization", &bearer(token));
            let (status, body) = send(req.build()?).await?;
            interpret_json(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }

    /// Rename the account via `POST /profile/update-name`; returns the server's updated user.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn update_name(
        &self,
        token: &str,
        request: &UpdateNameRequest,
    ) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.post_json(UPDATE_NAME_PATH, token, request).await?;
            interpret_json(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            Err(unavailable())
        }
    }

    /// Change the account password via `POST /profile/change-password`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    pub async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.post_json(CHANGE_PASSWORD_PATH, token, request).await?;
            interpret_ack(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            Err(unavailable())
        }
    }

    /// List the user's previous scans via `GET /my-scans`, in server order.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn my_scans(&self, token: &str) -> Result<Vec<Scan>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::get(&self.endpoint(MY_SCANS_PATH))
                .header("Authorization", &bearer(token));
            let (status, body) = send(req.build()?).await?;
            interpret_scans(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }

    /// Request a narrative comparison of two scans via `POST /chat/compare`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn compare(
        &self,
        token: &str,
        request: &CompareRequest,
    ) -> Result<CompareResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.post_json(COMPARE_PATH, token, request).await?;
            interpret_json(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            Err(unavailable())
        }
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(u16, String), ApiError> {
        let req = gloo_net::http::Request::post(&self.endpoint(path))
            .header("Authorization", &bearer(token))
            .json(body)?;
        send(req).await
    }
}

#[cfg(feature = "hydrate")]
async fn send(req: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let url = req.url();
    let resp = req.send().await.map_err(|e| {
        log::warn!("request to {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !is_success(status) {
        log::warn!("request to {url} returned {status}");
    }
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a JSON body, or map a non-2xx response to its `ApiError`.
///
/// # Errors
///
/// Returns `ApiError::Status`/`Unauthorized` for non-2xx statuses and
/// `ApiError::Decode` when a 2xx body does not match `T`.
pub fn interpret_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Unwrap the `{ scans: [...] }` envelope of `GET /my-scans`.
///
/// # Errors
///
/// Same as `interpret_json`.
pub fn interpret_scans(status: u16, body: &str) -> Result<Vec<Scan>, ApiError> {
    interpret_json::<ScansResponse>(status, body).map(|r| r.scans)
}

/// Accept any 2xx body (including empty) as success.
///
/// # Errors
///
/// Returns `ApiError::Status`/`Unauthorized` for non-2xx statuses.
pub fn interpret_ack(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) { Ok(()) } else { Err(ApiError::from_response(status, body)) }
}
