use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn influencer_ads_endpoint_formats_expected_path() {
    assert_eq!(influencer_ads_endpoint("inf-42"), "/api/requestAds/influencer/inf-42");
}

#[test]
fn request_status_endpoint_formats_expected_path() {
    assert_eq!(request_status_endpoint("inf-42"), "/api/requestAds/status/inf-42");
}

#[test]
fn respond_endpoint_formats_expected_path() {
    assert_eq!(respond_endpoint("req-9"), "/api/requestAds/req-9/respond");
}
