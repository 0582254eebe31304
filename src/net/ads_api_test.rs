use super::*;

#[test]
fn apply_endpoint_formats_expected_path() {
    assert_eq!(apply_endpoint("ad-7"), "/api/ads/ad-7/apply");
}
