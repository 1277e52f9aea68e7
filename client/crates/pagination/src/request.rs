//! Page/limit request parameters.

use serde::Serialize;

use crate::error::PaginationError;

/// Limit applied when callers do not choose one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest limit accepted by the remote API.
pub const MAX_LIMIT: u32 = 100;

/// One-based page selection sent alongside paginated queries.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 20).expect("valid request");
/// assert_eq!(request.offset(), 20);
/// assert!(request.has_next(41));
/// assert!(!request.has_next(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPage`] for page `0` and
    /// [`PaginationError::LimitOutOfRange`] when `limit` is `0` or above
    /// [`MAX_LIMIT`].
    pub const fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(PaginationError::LimitOutOfRange {
                limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    /// Selected page, starting at one.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of elements per page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of elements before the first one of this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64).saturating_sub(1) * self.limit as u64
    }

    /// Request for the following page with the same limit.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }

    /// Whether a collection of `total` elements extends past this page.
    #[must_use]
    pub const fn has_next(&self, total: u64) -> bool {
        self.offset() + (self.limit as u64) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Page request validation and arithmetic.

    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_first_page() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    #[case::zero_page(0, 10, PaginationError::ZeroPage)]
    #[case::zero_limit(1, 0, PaginationError::LimitOutOfRange { limit: 0, max: MAX_LIMIT })]
    #[case::limit_too_large(1, 101, PaginationError::LimitOutOfRange { limit: 101, max: MAX_LIMIT })]
    fn rejects_invalid_requests(
        #[case] page: u32,
        #[case] limit: u32,
        #[case] expected: PaginationError,
    ) {
        assert_eq!(PageRequest::new(page, limit), Err(expected));
    }

    #[rstest]
    #[case::more_remaining(1, 10, 11, true)]
    #[case::exactly_full(1, 10, 10, false)]
    #[case::third_page(3, 5, 16, true)]
    #[case::past_the_end(4, 5, 16, false)]
    fn has_next_reflects_remaining_elements(
        #[case] page: u32,
        #[case] limit: u32,
        #[case] total: u64,
        #[case] expected: bool,
    ) {
        let request = PageRequest::new(page, limit).expect("valid request");
        assert_eq!(request.has_next(total), expected);
    }

    #[test]
    fn next_advances_page_only() {
        let request = PageRequest::new(2, 25).expect("valid request").next();
        assert_eq!(request.page(), 3);
        assert_eq!(request.limit(), 25);
    }
}
