//! Case-insensitive substring matching for list filters.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Whether `haystack` contains `query`, ignoring case. A blank query matches
/// everything so an empty search box leaves lists unfiltered.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Whether any of `fields` matches `query`. Used by list filters that search
/// across several display fields at once (name, niche, location).
pub fn matches_any<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    fields.into_iter().any(|f| matches_query(f, query))
}
