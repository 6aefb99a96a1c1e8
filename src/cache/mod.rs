// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Memoization of trajectory lengths.
//!
//! This module provides:
//!
//! - [`CycleCache`]: a fixed-capacity, write-once map from starting value to
//!   trajectory length
//! - [`Trajectory`]: the path walked while resolving an uncached value, used to
//!   backfill every intermediate value it passed through
//! - [`CacheStats`]: hit/miss and write counters
//!
//! # Examples
//!
//! ```rust
//! use collatzscan::{CacheCapacity, CycleCache, StepMode, Trajectory};
//!
//! let mut cache = CycleCache::new(CacheCapacity::new(100));
//! let trajectory = Trajectory::walk(6, StepMode::Plain, |v| cache.peek(v)).unwrap();
//! assert_eq!(trajectory.start_length(), 9);
//!
//! // 6 -> 3 -> 10 -> 5 -> 16 -> 8 -> 4 -> 2 -> 1, all below capacity
//! assert_eq!(cache.backfill(&trajectory).unwrap(), 9);
//! assert_eq!(cache.get(10), Some(7));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

mod cycle;
mod trajectory;

pub use cycle::{CycleCache, SetOutcome};
pub use trajectory::{Trajectory, TrajectoryPoint};

/// Statistics about cycle cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups for cacheable keys that found nothing
    pub misses: u64,
    /// Number of entries written
    pub stored: u64,
    /// Number of writes ignored because the key was outside the capacity
    pub skipped: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, stored={}, skipped={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.stored,
            self.skipped,
            self.entries,
            self.hit_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..CacheStats::default()
        };
        assert_eq!(stats.hit_rate(), 75.0);
    }

    #[test]
    fn test_display_formatting() {
        let stats = CacheStats {
            hits: 1,
            misses: 1,
            stored: 4,
            skipped: 2,
            entries: 4,
        };
        assert_eq!(
            stats.to_string(),
            "hits=1, misses=1, stored=4, skipped=2, entries=4, hit_rate=50.0%"
        );
    }

    #[test]
    fn test_serialization() {
        let stats = CacheStats {
            hits: 10,
            misses: 2,
            stored: 7,
            skipped: 0,
            entries: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: CacheStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
