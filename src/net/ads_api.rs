//! Business-side ad (campaign) calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "ads_api_test.rs"]
mod ads_api_test;

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::Ad;
#[cfg(feature = "hydrate")]
use super::types::CampaignDraft;

#[cfg(any(test, feature = "hydrate"))]
fn apply_endpoint(ad_id: &str) -> String {
    format!("/api/ads/{ad_id}/apply")
}

/// Fetch the ads owned by the signed-in business via `GET /api/ads`.
pub async fn fetch_ads() -> Result<Vec<Ad>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/ads", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Create an ad via `POST /api/ads`.
///
/// With an image the call goes out as multipart (serialized campaign JSON
/// plus the file part); without one it is a plain JSON POST.
#[cfg(feature = "hydrate")]
pub async fn create_ad(draft: &CampaignDraft, image: Option<web_sys::File>) -> Result<Ad, ApiError> {
    match image {
        Some(file) => {
            let form = campaign_form_data(draft, &file)?;
            http::post_multipart("/api/ads", AuthMode::Bearer, form).await
        }
        None => http::post_json("/api/ads", AuthMode::Bearer, draft).await,
    }
}

/// Apply to an ad as the signed-in influencer.
pub async fn apply_to_ad(ad_id: &str) -> Result<Ad, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({});
        http::post_json(&apply_endpoint(ad_id), AuthMode::Bearer, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ad_id;
        http::unavailable()
    }
}

/// Build the multipart body for an ad with an attached image.
#[cfg(feature = "hydrate")]
pub(crate) fn campaign_form_data(
    draft: &CampaignDraft,
    image: &web_sys::File,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    let json = serde_json::to_string(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    form.append_with_str("campaignData", &json)
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    Ok(form)
}
