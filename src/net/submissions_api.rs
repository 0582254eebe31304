//! Proof-of-posting submission calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submissions_api_test.rs"]
mod submissions_api_test;

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::http::AuthMode;
use super::types::{Submission, SubmissionStatus};
#[cfg(feature = "hydrate")]
use super::types::SubmissionDraft;

#[cfg(any(test, feature = "hydrate"))]
fn review_endpoint(submission_id: &str) -> String {
    format!("/api/submissions/{submission_id}/review")
}

/// Fetch the signed-in influencer's own submissions.
pub async fn fetch_my_submissions() -> Result<Vec<Submission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/submissions/mine", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Fetch submissions against the signed-in business's campaigns.
pub async fn fetch_business_submissions() -> Result<Vec<Submission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/submissions/business", AuthMode::Bearer).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Submit proof via `POST /api/submissions`.
///
/// JSON when there is no screenshot; multipart (serialized payload JSON plus
/// the file part) when one is attached.
#[cfg(feature = "hydrate")]
pub async fn submit_proof(
    draft: &SubmissionDraft,
    screenshot: Option<web_sys::File>,
) -> Result<Submission, ApiError> {
    match screenshot {
        Some(file) => {
            let form = web_sys::FormData::new()
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            let json = serde_json::to_string(draft).map_err(|e| ApiError::Network(e.to_string()))?;
            form.append_with_str("payload", &json)
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            form.append_with_blob_and_filename("screenshot", &file, &file.name())
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
            http::post_multipart("/api/submissions", AuthMode::Bearer, form).await
        }
        None => http::post_json("/api/submissions", AuthMode::Bearer, draft).await,
    }
}

/// Resolve a pending submission via `POST /api/submissions/:id/review`.
/// Rejections carry the reviewer's reason.
pub async fn review_submission(
    submission_id: &str,
    status: SubmissionStatus,
    reason: Option<&str>,
) -> Result<Submission, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status, "reason": reason });
        http::post_json(&review_endpoint(submission_id), AuthMode::Bearer, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submission_id, status, reason);
        http::unavailable()
    }
}
