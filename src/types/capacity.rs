//! Cycle cache capacity type

use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_CACHE_CAPACITY;

/// Exclusive upper bound on the starting values a cycle cache will store.
///
/// A cache with capacity `c` stores lengths for `1..c`. Values at or above the
/// capacity still resolve correctly, they are just never remembered.
///
/// # Examples
///
/// ```
/// use collatzscan::CacheCapacity;
///
/// let capacity = CacheCapacity::DEFAULT;
/// assert_eq!(capacity.as_u64(), 1_000_000);
/// assert!(capacity.holds(999_999));
/// assert!(!capacity.holds(1_000_000));
/// assert!(!capacity.holds(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheCapacity(u64);

impl CacheCapacity {
    /// Default capacity (1,000,000)
    pub const DEFAULT: Self = Self(DEFAULT_CACHE_CAPACITY);

    /// Largest capacity accepted from configuration (2^30 cells)
    ///
    /// Each cell is four bytes and the cache allocates every cell up front,
    /// so this caps the cache at 4 GiB.
    pub const MAX: Self = Self(1 << 30);

    /// A cache that stores nothing
    pub const DISABLED: Self = Self(0);

    /// Create a new capacity
    pub const fn new(capacity: u64) -> Self {
        Self(capacity)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// This capacity, lowered to [`MAX`](Self::MAX) if it is larger
    pub const fn clamped(self) -> Self {
        if self.0 > Self::MAX.0 {
            Self::MAX
        } else {
            self
        }
    }

    /// Check whether `value` falls inside the cacheable key space `1..capacity`
    pub const fn holds(&self, value: u64) -> bool {
        value != 0 && value < self.0
    }

    /// Number of slots needed to index every cacheable key directly
    pub fn slots(&self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for CacheCapacity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CacheCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} slots", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_holds_excludes_zero_and_bound() {
        let capacity = CacheCapacity::new(10);
        assert!(!capacity.holds(0));
        assert!(capacity.holds(1));
        assert!(capacity.holds(9));
        assert!(!capacity.holds(10));
        assert!(!capacity.holds(u64::MAX));
    }

    #[test]
    fn test_disabled_holds_nothing() {
        assert!(!CacheCapacity::DISABLED.holds(1));
        assert_eq!(CacheCapacity::DISABLED.slots(), 0);
    }

    #[test]
    fn test_clamped_caps_at_max() {
        assert_eq!(CacheCapacity::new(u64::MAX).clamped(), CacheCapacity::MAX);
        assert_eq!(
            CacheCapacity::new(CacheCapacity::MAX.as_u64() + 1).clamped(),
            CacheCapacity::MAX
        );
        assert_eq!(CacheCapacity::MAX.clamped(), CacheCapacity::MAX);
        assert_eq!(CacheCapacity::DEFAULT.clamped(), CacheCapacity::DEFAULT);
        assert_eq!(CacheCapacity::DISABLED.clamped(), CacheCapacity::DISABLED);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", CacheCapacity::new(42)), "42 slots");
    }

    #[test]
    fn test_serialization() {
        let capacity = CacheCapacity::DEFAULT;
        let json = serde_json::to_string(&capacity).unwrap();
        assert_eq!(json, "1000000");
        let deserialized: CacheCapacity = serde_json::from_str(&json).unwrap();
        assert_eq!(capacity, deserialized);
    }
}
