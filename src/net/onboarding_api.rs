//! Onboarding get/upsert calls for both marketplace sides.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::{BusinessOnboarding, InfluencerOnboarding};

/// Fetch the saved business onboarding record, if any.
pub async fn get_business() -> Result<BusinessOnboarding, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/onboarding/business", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Create or update the business onboarding record.
pub async fn upsert_business(data: &BusinessOnboarding) -> Result<BusinessOnboarding, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/onboarding/business", AuthMode::Bearer, data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        http::unavailable()
    }
}

/// Fetch the saved influencer onboarding record, if any.
pub async fn get_influencer() -> Result<InfluencerOnboarding, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/onboarding/influencer", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Create or update the influencer onboarding record.
pub async fn upsert_influencer(data: &InfluencerOnboarding) -> Result<InfluencerOnboarding, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/onboarding/influencer", AuthMode::Bearer, data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        http::unavailable()
    }
}
