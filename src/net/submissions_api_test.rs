use super::*;

#[test]
fn review_endpoint_formats_expected_path() {
    assert_eq!(review_endpoint("sub-3"), "/api/submissions/sub-3/review");
}
