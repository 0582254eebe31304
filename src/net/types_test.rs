use super::*;

fn sample_ad_json() -> &'static str {
    r#"{
        "_id": "ad-1",
        "user": "biz-9",
        "campaignName": "Summer Menu Launch",
        "platforms": ["Instagram", "TikTok"],
        "startDate": "2026-06-01",
        "endDate": "2026-06-30",
        "taskCount": 3,
        "barterOrPaid": "paid",
        "budget": 500.0,
        "requirements": "Min. 5k followers",
        "image": "/uploads/ad-1.jpg",
        "campaignDescription": "Promote our new summer menu."
    }"#
}

// =============================================================
// Ad wire shape
// =============================================================

#[test]
fn ad_deserializes_from_backend_json() {
    let ad: Ad = serde_json::from_str(sample_ad_json()).expect("ad should parse");
    assert_eq!(ad.id, "ad-1");
    assert_eq!(ad.campaign_name, "Summer Menu Launch");
    assert_eq!(ad.platforms, vec![Platform::Instagram, Platform::TikTok]);
    assert_eq!(ad.compensation, CompensationMode::Paid);
    assert_eq!(ad.budget, Some(500.0));
    assert!(!ad.has_applied);
    assert!(ad.applied_influencers.is_empty());
}

#[test]
fn ad_optionals_may_be_absent() {
    let json = r#"{
        "_id": "ad-2",
        "user": "biz-9",
        "campaignName": "Barter Collab",
        "platforms": ["Facebook"],
        "startDate": "2026-07-01",
        "endDate": "2026-07-15",
        "taskCount": 1,
        "barterOrPaid": "barter",
        "budget": null,
        "requirements": null,
        "image": null,
        "campaignDescription": null
    }"#;
    let ad: Ad = serde_json::from_str(json).expect("minimal ad should parse");
    assert_eq!(ad.compensation, CompensationMode::Barter);
    assert_eq!(ad.budget, None);
    assert_eq!(ad.image, None);
}

// =============================================================
// Send-request payload modes
// =============================================================

#[test]
fn send_request_with_existing_ad_serializes_null_campaign_data() {
    let payload = SendRequestPayload {
        influencer_id: "inf-1".to_owned(),
        ad_id: Some("ad-1".to_owned()),
        campaign_data: None,
    };
    let json = serde_json::to_value(&payload).expect("payload should serialize");
    assert_eq!(json["influencerId"], "inf-1");
    assert_eq!(json["adId"], "ad-1");
    assert!(json["campaignData"].is_null());
}

#[test]
fn send_request_with_inline_campaign_serializes_null_ad_id() {
    let draft = CampaignDraft {
        campaign_name: "Pop-up Store".to_owned(),
        platforms: vec![Platform::Instagram],
        start_date: "2026-08-01".to_owned(),
        end_date: "2026-08-10".to_owned(),
        task_count: 2,
        compensation: CompensationMode::Barter,
        budget: None,
        requirements: None,
        campaign_description: None,
    };
    let payload = SendRequestPayload {
        influencer_id: "inf-1".to_owned(),
        ad_id: None,
        campaign_data: Some(draft),
    };
    let json = serde_json::to_value(&payload).expect("payload should serialize");
    assert!(json["adId"].is_null());
    assert_eq!(json["campaignData"]["campaignName"], "Pop-up Store");
    assert_eq!(json["campaignData"]["barterOrPaid"], "barter");
    assert_eq!(json["campaignData"]["taskCount"], 2);
}

// =============================================================
// Status lifecycles
// =============================================================

#[test]
fn request_status_transitions_once_out_of_pending() {
    assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Accepted));
    assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Declined));
    assert!(!RequestStatus::Accepted.can_transition_to(RequestStatus::Declined));
    assert!(!RequestStatus::Declined.can_transition_to(RequestStatus::Accepted));
    assert!(!RequestStatus::Pending.can_transition_to(RequestStatus::Pending));
}

#[test]
fn submission_status_is_terminal_once_resolved() {
    assert!(SubmissionStatus::Pending.can_transition_to(SubmissionStatus::Approved));
    assert!(SubmissionStatus::Pending.can_transition_to(SubmissionStatus::Rejected));
    assert!(!SubmissionStatus::Approved.can_transition_to(SubmissionStatus::Rejected));
    assert!(!SubmissionStatus::Rejected.can_transition_to(SubmissionStatus::Approved));
}

#[test]
fn statuses_use_lowercase_wire_values() {
    assert_eq!(serde_json::to_value(RequestStatus::Accepted).unwrap(), "accepted");
    assert_eq!(serde_json::to_value(SubmissionStatus::Rejected).unwrap(), "rejected");
    let status: RequestStatus = serde_json::from_str("\"declined\"").unwrap();
    assert_eq!(status, RequestStatus::Declined);
}

// =============================================================
// Role + user
// =============================================================

#[test]
fn role_uses_lowercase_wire_values() {
    assert_eq!(serde_json::to_value(Role::Business).unwrap(), "business");
    let role: Role = serde_json::from_str("\"influencer\"").unwrap();
    assert_eq!(role, Role::Influencer);
}

#[test]
fn role_paths_point_at_their_subtrees() {
    assert_eq!(Role::Business.dashboard_path(), "/dashboard/business");
    assert_eq!(Role::Influencer.onboarding_path(), "/onboarding/influencer");
}

#[test]
fn current_user_accepts_mongo_style_id() {
    let json = r#"{"_id": "u-1", "name": "Dana", "email": "dana@example.com", "role": "influencer"}"#;
    let user: CurrentUser = serde_json::from_str(json).expect("user should parse");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, Role::Influencer);
    assert!(!user.verified);
}

// =============================================================
// Best-effort reads
// =============================================================

#[test]
fn linked_socials_defaults_from_empty_object() {
    let status: LinkedSocialsStatus = serde_json::from_str("{}").expect("empty object should parse");
    assert_eq!(status, LinkedSocialsStatus::default());
    assert!(!status.instagram_linked);
}

#[test]
fn submission_parses_with_links_and_defaults() {
    let json = r#"{
        "_id": "sub-1",
        "campaignName": "Summer Menu Launch",
        "influencerName": "Dana",
        "links": [{"url": "https://instagram.com/p/1", "platform": "Instagram"}],
        "screenshot": null,
        "notes": null,
        "submittedAt": "2026-06-05T10:00:00Z"
    }"#;
    let submission: Submission = serde_json::from_str(json).expect("submission should parse");
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.links.len(), 1);
    assert_eq!(submission.links[0].platform, "Instagram");
}
