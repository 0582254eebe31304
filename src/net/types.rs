//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Nullable backend fields are explicit `Option`s to force handling
//! at render sites, and closed vocabularies (role, platform, compensation,
//! statuses) are enums rather than strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which side of the marketplace an account belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Business,
    Influencer,
}

impl Role {
    /// Root route of this role's dashboard subtree.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Business => "/dashboard/business",
            Self::Influencer => "/dashboard/influencer",
        }
    }

    /// Entry route of this role's onboarding wizard.
    pub fn onboarding_path(self) -> &'static str {
        match self {
            Self::Business => "/onboarding/business",
            Self::Influencer => "/onboarding/influencer",
        }
    }
}

/// An authenticated user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Marketplace side.
    pub role: Role,
    /// Whether the email/OTP verification step has completed.
    #[serde(default)]
    pub verified: bool,
}

/// Social platform a campaign can target. Fixed vocabulary; the wire value is
/// the variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Facebook,
    TikTok,
    YouTube,
}

impl Platform {
    pub const ALL: [Self; 4] = [Self::Instagram, Self::Facebook, Self::TikTok, Self::YouTube];

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
        }
    }
}

/// How a campaign compensates influencers. `Paid` requires a budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompensationMode {
    #[default]
    Barter,
    Paid,
}

/// A campaign/ad owned by a business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    /// Unique ad identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning business user id.
    pub user: String,
    pub campaign_name: String,
    /// Targeted platforms; the backend guarantees non-empty.
    pub platforms: Vec<Platform>,
    /// ISO `YYYY-MM-DD` date.
    pub start_date: String,
    /// ISO `YYYY-MM-DD` date, not before `start_date`.
    pub end_date: String,
    /// Number of posts/stories expected.
    pub task_count: u32,
    #[serde(rename = "barterOrPaid")]
    pub compensation: CompensationMode,
    /// Present iff `compensation` is paid.
    pub budget: Option<f64>,
    /// Free-form follower/niche requirements.
    pub requirements: Option<String>,
    /// Uploaded campaign image reference.
    pub image: Option<String>,
    pub campaign_description: Option<String>,
    /// Whether the current influencer already applied (influencer views only).
    #[serde(default)]
    pub has_applied: bool,
    /// Influencer ids that applied (business views only).
    #[serde(default)]
    pub applied_influencers: Vec<String>,
}

/// Validated campaign data as composed client-side, sent on ad creation and
/// inside collaboration requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub campaign_name: String,
    pub platforms: Vec<Platform>,
    pub start_date: String,
    pub end_date: String,
    pub task_count: u32,
    #[serde(rename = "barterOrPaid")]
    pub compensation: CompensationMode,
    pub budget: Option<f64>,
    pub requirements: Option<String>,
    pub campaign_description: Option<String>,
}

/// An influencer as listed in business-side discovery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Display-formatted follower count (e.g. `"120K"`).
    pub followers: Option<String>,
    /// Content category used for filtering.
    pub niche: Option<String>,
    pub profile_image_url: Option<String>,
    pub instagram_username: Option<String>,
    /// Daily Instagram reach, when the account is linked.
    pub instagram_reach: Option<u64>,
    pub gender: Option<String>,
}

/// Status of a business-initiated collaboration request.
///
/// Transitions exactly once out of `Pending`; resolved states are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the lifecycle admits moving from `self` to `next`.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(self, Self::Pending) && !matches!(next, Self::Pending)
    }
}

/// A collaboration proposal from a business to a specific influencer,
/// referencing either an existing ad or inline campaign data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollabRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub business_name: Option<String>,
    /// Existing ad this request refers to, if any.
    pub ad: Option<Ad>,
    /// Inline campaign data, if the request was not built from an ad.
    pub campaign_data: Option<CampaignDraft>,
    /// Short pitch from the business.
    pub message: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
}

/// Body of `POST /api/requestAds/sendRequest`.
///
/// Exactly one of `ad_id` and `campaign_data` is populated; the other is
/// serialized as an explicit `null` so the backend can distinguish the modes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequestPayload {
    pub influencer_id: String,
    pub ad_id: Option<String>,
    pub campaign_data: Option<CampaignDraft>,
}

/// Status of an influencer's proof submission. Terminal once resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(self, Self::Pending) && !matches!(next, Self::Pending)
    }
}

/// One piece of posted content inside a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLink {
    pub url: String,
    /// Platform tag; free-form because story/reel variants exist.
    pub platform: String,
}

/// Influencer proof-of-posting for a campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(alias = "_id")]
    pub id: String,
    pub campaign_name: String,
    /// Populated on business-side views.
    pub influencer_name: Option<String>,
    pub links: Vec<ContentLink>,
    pub screenshot: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    /// ISO 8601 timestamp, when known.
    pub submitted_at: Option<String>,
}

/// Body of `POST /api/submissions` (serialized into the `payload` part when a
/// screenshot accompanies it).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub campaign_id: String,
    pub links: Vec<ContentLink>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Auth flow payloads
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of login/signup/verify calls. `token` is present once the backend
/// considers the account signed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: Option<CurrentUser>,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Profile + onboarding records
// ---------------------------------------------------------------------------

/// Linked social accounts status; defaults to nothing-linked because the
/// fetch is best-effort.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedSocialsStatus {
    #[serde(default)]
    pub instagram_linked: bool,
    #[serde(default)]
    pub instagram_username: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    /// ISO `YYYY-MM-DD` date.
    pub date_of_birth: Option<String>,
    pub bio: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOnboarding {
    #[serde(default)]
    pub business_name: String,
    pub business_website: Option<String>,
    pub phone_number: Option<String>,
    pub industry: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub additional_info: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerOnboarding {
    #[serde(default)]
    pub full_name: String,
    pub niche: Option<String>,
    /// Display-formatted follower count.
    pub followers: Option<String>,
    pub instagram_username: Option<String>,
    pub bio: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}
