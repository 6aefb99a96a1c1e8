//! Error types for query validation.

/// Errors raised when a range query is rejected before evaluation.
///
/// Query bounds are accepted as signed integers so that non-positive input
/// can be reported instead of silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// One or both bounds are zero or negative.
    #[error("bounds must be positive, got ({lo}, {hi})")]
    NonPositiveBound {
        /// First bound as supplied by the caller
        lo: i64,
        /// Second bound as supplied by the caller
        hi: i64,
    },
}

impl QueryError {
    /// Create a `NonPositiveBound` error for the supplied pair.
    pub fn non_positive(lo: i64, hi: i64) -> Self {
        QueryError::NonPositiveBound { lo, hi }
    }
}
