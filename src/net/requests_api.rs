//! Collaboration-request calls (business → influencer).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "requests_api_test.rs"]
mod requests_api_test;

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::{Ad, CollabRequest, RequestStatus};
#[cfg(feature = "hydrate")]
use super::types::SendRequestPayload;

#[cfg(any(test, feature = "hydrate"))]
fn influencer_ads_endpoint(influencer_id: &str) -> String {
    format!("/api/requestAds/influencer/{influencer_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_status_endpoint(influencer_id: &str) -> String {
    format!("/api/requestAds/status/{influencer_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn respond_endpoint(request_id: &str) -> String {
    format!("/api/requestAds/{request_id}/respond")
}

/// Fetch the ads available to an influencer via
/// `GET /api/requestAds/influencer/:influencerId`.
pub async fn fetch_available_ads(influencer_id: &str) -> Result<Vec<Ad>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(&influencer_ads_endpoint(influencer_id), AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = influencer_id;
        http::unavailable()
    }
}

/// Send a collaboration request via `POST /api/requestAds/sendRequest`.
///
/// JSON when no file accompanies the request; multipart (serialized payload
/// JSON plus the file part) when one does.
#[cfg(feature = "hydrate")]
pub async fn send_request(
    payload: &SendRequestPayload,
    attachment: Option<web_sys::File>,
) -> Result<CollabRequest, ApiError> {
    match attachment {
        Some(file) => {
            let form = web_sys::FormData::new()
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            let json = serde_json::to_string(payload).map_err(|e| ApiError::Network(e.to_string()))?;
            form.append_with_str("request", &json)
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            form.append_with_blob_and_filename("image", &file, &file.name())
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            http::post_multipart("/api/requestAds/sendRequest", AuthMode::Bearer, form).await
        }
        None => http::post_json("/api/requestAds/sendRequest", AuthMode::Bearer, payload).await,
    }
}

/// Fetch the signed-in influencer's requests with their statuses via
/// `GET /api/requestAds/status/:influencerId`.
pub async fn fetch_request_status(influencer_id: &str) -> Result<Vec<CollabRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(&request_status_endpoint(influencer_id), AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = influencer_id;
        http::unavailable()
    }
}

/// Resolve a pending request via `POST /api/requestAds/:id/respond`.
pub async fn respond_to_request(request_id: &str, status: RequestStatus) -> Result<CollabRequest, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        http::post_json(&respond_endpoint(request_id), AuthMode::Bearer, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request_id, status);
        http::unavailable()
    }
}
