//! Business-side influencer discovery.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::InfluencerSummary;

/// Fetch the influencers available for collaboration via `GET /api/influencers`.
pub async fn fetch_available_influencers() -> Result<Vec<InfluencerSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/influencers", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}
