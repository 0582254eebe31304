use super::*;
use crate::net::types::{Ad, CampaignDraft, CompensationMode, Platform};

fn ad(id: &str, name: &str) -> Ad {
    Ad {
        id: id.to_owned(),
        user: "biz-1".to_owned(),
        campaign_name: name.to_owned(),
        platforms: vec![Platform::Instagram],
        start_date: "2026-06-01".to_owned(),
        end_date: "2026-06-30".to_owned(),
        task_count: 1,
        compensation: CompensationMode::Barter,
        budget: None,
        requirements: None,
        image: None,
        campaign_description: None,
        has_applied: false,
        applied_influencers: Vec::new(),
    }
}

fn draft(name: &str) -> CampaignDraft {
    CampaignDraft {
        campaign_name: name.to_owned(),
        platforms: vec![Platform::TikTok],
        start_date: "2026-07-01".to_owned(),
        end_date: "2026-07-10".to_owned(),
        task_count: 2,
        compensation: CompensationMode::Barter,
        budget: None,
        requirements: None,
        campaign_description: None,
    }
}

fn request(id: &str, status: RequestStatus, ad: Option<Ad>, campaign: Option<CampaignDraft>) -> CollabRequest {
    CollabRequest {
        id: id.to_owned(),
        business_name: None,
        ad,
        campaign_data: campaign,
        message: None,
        status,
    }
}

// =============================================================
// Campaign option derivation
// =============================================================

#[test]
fn only_accepted_requests_become_options() {
    let requests = vec![
        request("r1", RequestStatus::Accepted, Some(ad("ad-1", "Summer")), None),
        request("r2", RequestStatus::Pending, Some(ad("ad-2", "Autumn")), None),
        request("r3", RequestStatus::Declined, Some(ad("ad-3", "Winter")), None),
    ];
    let options = campaign_options(&requests);
    assert_eq!(options, vec![("ad-1".to_owned(), "Summer".to_owned())]);
}

#[test]
fn inline_campaign_requests_key_by_request_id() {
    let requests = vec![request("r9", RequestStatus::Accepted, None, Some(draft("Pop-up")))];
    let options = campaign_options(&requests);
    assert_eq!(options, vec![("r9".to_owned(), "Pop-up".to_owned())]);
}

#[test]
fn requests_without_campaign_info_get_a_fallback_name() {
    let requests = vec![request("r5", RequestStatus::Accepted, None, None)];
    let options = campaign_options(&requests);
    assert_eq!(options, vec![("r5".to_owned(), "Campaign".to_owned())]);
}

#[test]
fn no_accepted_requests_means_no_options() {
    let requests = vec![request("r1", RequestStatus::Pending, None, None)];
    assert!(campaign_options(&requests).is_empty());
}
