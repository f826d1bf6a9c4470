// src/services/search.rs
//
// In-memory list filtering: case-insensitive substring over a view's display
// fields, applied after the rows are fetched. No server-side query pushdown.

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// True when any of the given fields matches, or when the query is blank.
pub fn any_field_matches(fields: &[&str], query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| contains_ci(f, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(contains_ci("TechCorp Inc.", "techcorp"));
        assert!(contains_ci("john@techcorp.com", "TECHCORP"));
        assert!(!contains_ci("StartupXYZ", "techcorp"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(any_field_matches(&["anything"], ""));
        assert!(any_field_matches(&["anything"], "   "));
    }

    #[test]
    fn any_field_is_enough() {
        assert!(any_field_matches(&["John Smith", "john@techcorp.com"], "smith"));
        assert!(!any_field_matches(&["John Smith", "john@techcorp.com"], "sarah"));
    }
}
