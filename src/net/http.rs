//! Uniform HTTP request contract for the REST backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Outside the
//! browser the `*_api` modules return an unavailable error so the logic
//! layer stays natively testable.
//!
//! ERROR HANDLING
//! ==============
//! Failures normalize into [`ApiError`]: a missing token short-circuits to
//! `Unauthenticated` before any request is issued, transport failures map to
//! `Network`, and non-success statuses map to `Rejected` with the backend's
//! `message`/`error` field when one is present.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::error::ApiError;

/// Backend origin, fixed at build time like the rest of the bundle.
pub fn base_url() -> &'static str {
    option_env!("COLLABLY_API_URL").unwrap_or("http://localhost:5000")
}

/// Join an absolute API path onto the configured backend origin.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_url(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Extract a human-readable failure message from an error response body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_owned();
                }
            }
        }
    }
    format!("request failed with status {status}")
}

/// How a call authenticates against the backend.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// `Authorization: Bearer <token>`, token read from storage at call time.
    Bearer,
    /// Browser cookies (`credentials: include`), no bearer header.
    Cookies,
    /// No credentials attached (login/signup/verify).
    Public,
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

#[cfg(feature = "hydrate")]
pub(crate) use hydrate_impl::{get_json, post_json, post_multipart};

#[cfg(feature = "hydrate")]
mod hydrate_impl {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, AuthMode, api_url, failure_message};
    use crate::state::session;

    fn apply_auth(builder: RequestBuilder, auth: AuthMode) -> Result<RequestBuilder, ApiError> {
        match auth {
            AuthMode::Bearer => {
                let token = session::persisted_token().ok_or(ApiError::Unauthenticated)?;
                Ok(builder.header("Authorization", &format!("Bearer {token}")))
            }
            AuthMode::Cookies => Ok(builder.credentials(web_sys::RequestCredentials::Include)),
            AuthMode::Public => Ok(builder),
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status == 401 {
            return Err(ApiError::Unauthenticated);
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { status, message: failure_message(status, &body) });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Rejected {
            status,
            message: format!("unexpected response body: {e}"),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, auth: AuthMode) -> Result<T, ApiError> {
        let builder = apply_auth(Request::get(&api_url(path)), auth)?;
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub(crate) async fn post_json<T, B>(path: &str, auth: AuthMode, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let builder = apply_auth(Request::post(&api_url(path)), auth)?;
        let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    /// Multipart POST. No explicit content type is set so the browser can
    /// supply the multipart boundary itself.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        path: &str,
        auth: AuthMode,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let builder = apply_auth(Request::post(&api_url(path)), auth)?;
        let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }
}
