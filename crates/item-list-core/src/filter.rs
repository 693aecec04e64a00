//! Filter predicate used by the filter input.

/// Case-insensitive substring match; an empty query matches everything
pub fn matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::matches;

    #[test]
    fn ignores_case() {
        assert!(matches("Apple Juice", "juice"));
        assert!(matches("apple juice", "APPLE"));
        assert!(!matches("Milk", "juice"));
    }

    #[test]
    fn empty_query_matches_all() {
        assert!(matches("Anything", ""));
    }
}
