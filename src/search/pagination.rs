//! Page arithmetic for OMDb's fixed page size.

/// Results per page, fixed by the OMDb API.
pub const PAGE_SIZE: u64 = 10;

/// Number of pages needed to show `total_results` results.
///
/// # Example
///
/// ```
/// use movieseek::search::pagination::total_pages;
///
/// assert_eq!(total_pages(0), 0);
/// assert_eq!(total_pages(10), 1);
/// assert_eq!(total_pages(23), 3);
/// ```
#[must_use]
pub fn total_pages(total_results: u64) -> u32 {
    u32::try_from(total_results.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Pager state derived from the current page and result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    /// `ceil(total_results / PAGE_SIZE)`.
    pub total_pages: u32,
}

impl Pagination {
    #[must_use]
    pub fn new(page: u32, total_results: u64) -> Self {
        Self {
            page,
            total_pages: total_pages(total_results),
        }
    }

    /// Previous is enabled everywhere except the first page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Next is enabled everywhere except the last page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The pager is only shown when there is more than one page.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(20), 2);
        assert_eq!(total_pages(21), 3);
    }

    #[test]
    fn first_page_of_three() {
        let p = Pagination::new(1, 23);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert!(p.is_visible());
    }

    #[test]
    fn last_page_disables_next() {
        let p = Pagination::new(3, 23);
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn single_page_hides_pager() {
        let p = Pagination::new(1, 7);
        assert_eq!(p.total_pages, 1);
        assert!(!p.is_visible());
        assert!(!p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn no_results_hides_pager() {
        let p = Pagination::new(1, 0);
        assert!(!p.is_visible());
        assert!(!p.has_next());
    }
}
