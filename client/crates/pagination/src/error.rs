//! Error types for pagination primitives.

use thiserror::Error;

/// Errors raised while building or decoding pagination values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The envelope carries more elements than its reported total.
    #[error("page holds {elements} elements but total is {total}")]
    ElementsExceedTotal {
        /// Number of elements in the page.
        elements: usize,
        /// Total reported by the server.
        total: u64,
    },

    /// Page numbers start at one.
    #[error("page number must be at least 1")]
    ZeroPage,

    /// The requested limit is outside the accepted range.
    #[error("limit {limit} must be between 1 and {max}")]
    LimitOutOfRange {
        /// Requested limit.
        limit: u32,
        /// Largest accepted limit.
        max: u32,
    },
}
