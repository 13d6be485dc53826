//! Committed search state.

use super::pagination::Pagination;

/// Minimum number of characters (after trimming) that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;

/// The last committed search: what was asked for and how many results exist.
///
/// Replaced wholesale on every committed search or page change. Once a
/// successful result has arrived, `page <= ceil(total_results / PAGE_SIZE)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Trimmed query, empty before the first search or after clearing.
    pub query: String,
    /// Current page, 1-based.
    pub page: u32,
    /// Total matches reported by the API for `query`.
    pub total_results: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_results: 0,
        }
    }
}

impl SearchState {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_results)
    }
}

/// Number of characters in `query` once trimmed.
///
/// Counts Unicode scalar values, so "ён" is two characters.
#[must_use]
pub fn query_len(query: &str) -> usize {
    query.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_first_page() {
        let state = SearchState::default();
        assert!(state.query.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.total_results, 0);
        assert!(!state.pagination().is_visible());
    }

    #[test]
    fn query_len_counts_chars_after_trim() {
        assert_eq!(query_len("   "), 0);
        assert_eq!(query_len(" a "), 1);
        assert_eq!(query_len("ён"), 2);
    }
}
