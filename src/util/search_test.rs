use super::*;

const NAMES: [&str; 3] = ["Sarah Wilson", "Michael Chen", "Emma Johnson"];

// =============================================================
// Single-field matching
// =============================================================

#[test]
fn substring_matches_case_insensitively() {
    assert!(matches_query("Sarah Wilson", "sarah"));
    assert!(matches_query("Sarah Wilson", "WILSON"));
    assert!(matches_query("Sarah Wilson", "ah Wil"));
}

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("anything", ""));
    assert!(matches_query("anything", "   "));
}

#[test]
fn unmatched_query_returns_false() {
    assert!(!matches_query("Sarah Wilson", "zzz"));
}

#[test]
fn filter_returns_exactly_the_matching_subset() {
    let matched: Vec<&str> = NAMES.iter().copied().filter(|n| matches_query(n, "chen")).collect();
    assert_eq!(matched, vec!["Michael Chen"]);

    let none: Vec<&str> = NAMES.iter().copied().filter(|n| matches_query(n, "nobody")).collect();
    assert!(none.is_empty());
}

// =============================================================
// Multi-field matching
// =============================================================

#[test]
fn any_field_can_satisfy_the_query() {
    assert!(matches_any(["Sarah Wilson", "Fashion"], "fash"));
    assert!(matches_any(["Sarah Wilson", "Fashion"], "sarah"));
    assert!(!matches_any(["Sarah Wilson", "Fashion"], "tech"));
}

#[test]
fn blank_query_matches_any_fields() {
    assert!(matches_any(["a", "b"], "  "));
    assert!(matches_any(std::iter::empty::<&str>(), ""));
}
