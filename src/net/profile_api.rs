//! Personal-info and linked-socials calls.
//!
//! The personal-info endpoint is cookie-credentialed rather than bearer
//! authenticated; linked-socials status is a best-effort read that never
//! fails its caller.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::{LinkedSocialsStatus, PersonalInfo};

/// Fetch the saved personal-info record via `GET /api/personal-info`.
pub async fn get_personal_info() -> Result<PersonalInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/personal-info", AuthMode::Cookies).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Create or update the personal-info record via `POST /api/personal-info`.
pub async fn upsert_personal_info(data: &PersonalInfo) -> Result<PersonalInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/personal-info", AuthMode::Cookies, data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        http::unavailable()
    }
}

/// Fetch linked-socials status via `GET /api/linkSocials/status`.
///
/// Best-effort: any failure yields the empty default so status badges simply
/// render as unlinked.
pub async fn fetch_linked_socials() -> LinkedSocialsStatus {
    #[cfg(feature = "hydrate")]
    {
        match http::get_json("/api/linkSocials/status", AuthMode::Bearer).await {
            Ok(status) => status,
            Err(err) => {
                log::warn!("linked socials status unavailable: {err}");
                LinkedSocialsStatus::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        LinkedSocialsStatus::default()
    }
}
