//! Normalized range query type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::QueryError;

/// An inclusive range query with both bounds validated and normalized.
///
/// The original `lo`/`hi` order is preserved for echoing answers back in the
/// order they were asked; evaluation always works on `lower..=upper`.
///
/// # Examples
///
/// ```
/// use collatzscan::RangeQuery;
///
/// let query = RangeQuery::new(10, 1).unwrap();
/// assert_eq!(query.lower(), 1);
/// assert_eq!(query.upper(), 10);
/// assert_eq!(query.to_string(), "10 1");
/// assert!(query.is_anchored());
///
/// assert!(RangeQuery::new(0, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeQuery {
    lo: u64,
    hi: u64,
}

impl RangeQuery {
    /// Validate a pair of bounds; both must be strictly positive
    pub fn new(lo: i64, hi: i64) -> Result<Self, QueryError> {
        if lo <= 0 || hi <= 0 {
            return Err(QueryError::non_positive(lo, hi));
        }
        // Positive i64 values always fit in u64
        Ok(Self {
            lo: lo.unsigned_abs(),
            hi: hi.unsigned_abs(),
        })
    }

    /// First bound as supplied
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    /// Second bound as supplied
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// `min(lo, hi)`
    pub fn lower(&self) -> u64 {
        self.lo.min(self.hi)
    }

    /// `max(lo, hi)`
    pub fn upper(&self) -> u64 {
        self.lo.max(self.hi)
    }

    /// Number of starting values covered (inclusive)
    pub fn len(&self) -> u64 {
        self.upper() - self.lower() + 1
    }

    /// A validated query always covers at least one value
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if the range contains a specific starting value
    pub fn contains(&self, value: u64) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// True when the range starts at 1, the only case where prefix shortcuts apply
    pub fn is_anchored(&self) -> bool {
        self.lower() == 1
    }
}

impl fmt::Display for RangeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lo, self.hi)
    }
}
