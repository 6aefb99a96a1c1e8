// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity cycle length cache with trajectory backfill
//!
//! This module provides the memo table behind every range query. It maps
//! starting values below a configured capacity to their exact trajectory
//! length. Entries are write-once: the length of a value never changes, so a
//! conflicting write is reported as an internal consistency error.

use std::num::NonZeroU32;

use tracing::{trace, warn};

use super::{CacheStats, Trajectory};
use crate::errors::CacheError;
use crate::types::capacity::CacheCapacity;

/// What happened to a single [`CycleCache::set`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The entry was newly written
    Stored,
    /// The same length was already cached
    AlreadyPresent,
    /// The key is outside `1..capacity`; nothing was written
    Skipped,
}

/// Cache of trajectory lengths for starting values in `1..capacity`
///
/// Backed by one dense array of optional cells, indexed directly by value, so
/// both lookups and writes are O(1). The cache never evicts: it starts empty
/// and only grows.
///
/// # Features
///
/// - **Write-once entries**: rewriting a key with a different length fails
/// - **Out-of-range tolerance**: writes above the capacity are silently skipped
/// - **Backfill**: one trajectory walk populates every value it visited
///
/// # Performance
///
/// - Get/Set: O(1)
/// - Backfill: O(trajectory length)
/// - Memory: 4 bytes per slot, allocated up front (about 4 MB at the default capacity)
#[derive(Debug, Clone)]
pub struct CycleCache {
    capacity: CacheCapacity,
    cells: Vec<Option<NonZeroU32>>,
    stats: CacheStats,
}

impl CycleCache {
    /// Creates an empty cache able to hold values in `1..capacity`
    ///
    /// Capacities above [`CacheCapacity::MAX`] are lowered to it.
    pub fn new(capacity: CacheCapacity) -> Self {
        let requested = capacity;
        let capacity = requested.clamped();
        if capacity != requested {
            warn!(
                requested = requested.as_u64(),
                capacity = capacity.as_u64(),
                "Cycle cache capacity clamped"
            );
        }
        Self {
            capacity,
            cells: vec![None; capacity.slots()],
            stats: CacheStats::default(),
        }
    }

    /// The configured capacity
    pub fn capacity(&self) -> CacheCapacity {
        self.capacity
    }

    /// Look up the cached length of `value`, recording a hit or miss
    ///
    /// Keys outside the capacity always return `None` and are not counted as
    /// misses, since they could never have been cached.
    pub fn get(&mut self, value: u64) -> Option<u32> {
        if !self.capacity.holds(value) {
            return None;
        }
        let cached = self.peek(value);
        if cached.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        cached
    }

    /// Look up the cached length of `value` without touching statistics
    #[inline]
    pub fn peek(&self, value: u64) -> Option<u32> {
        if !self.capacity.holds(value) {
            return None;
        }
        self.cells[value as usize].map(NonZeroU32::get)
    }

    /// Check whether `value` has a cached length
    pub fn contains(&self, value: u64) -> bool {
        self.peek(value).is_some()
    }

    /// Store the trajectory length of `value`
    ///
    /// # Returns
    ///
    /// - `Ok(SetOutcome::Stored)` when the entry was new
    /// - `Ok(SetOutcome::AlreadyPresent)` when the same length was cached
    /// - `Ok(SetOutcome::Skipped)` when `value` is outside `1..capacity`
    ///
    /// # Errors
    ///
    /// [`CacheError::InconsistentLength`] when a different length is already
    /// cached for `value`. A zero length is reported the same way: no value
    /// has an empty trajectory.
    pub fn set(&mut self, value: u64, length: u32) -> Result<SetOutcome, CacheError> {
        if !self.capacity.holds(value) {
            self.stats.skipped += 1;
            return Ok(SetOutcome::Skipped);
        }

        let index = value as usize;
        let Some(length) = NonZeroU32::new(length) else {
            return Err(CacheError::InconsistentLength {
                value,
                cached: self.cells[index].map_or(0, NonZeroU32::get),
                computed: 0,
            });
        };

        match self.cells[index] {
            Some(cached) if cached == length => Ok(SetOutcome::AlreadyPresent),
            Some(cached) => Err(CacheError::InconsistentLength {
                value,
                cached: cached.get(),
                computed: length.get(),
            }),
            None => {
                self.cells[index] = Some(length);
                self.stats.stored += 1;
                self.stats.entries += 1;
                Ok(SetOutcome::Stored)
            }
        }
    }

    /// Store the length of every value a trajectory walk visited
    ///
    /// Each recorded point gets `(terminal offset - point offset) + terminal
    /// length`. Points above the capacity are skipped and points that are
    /// already cached are verified, not rewritten.
    ///
    /// # Returns
    ///
    /// The number of entries newly stored.
    ///
    /// # Errors
    ///
    /// [`CacheError::InconsistentLength`] if any point disagrees with an
    /// existing entry. Entries written before the conflicting point stay in
    /// place; they were computed from the same walk.
    pub fn backfill(&mut self, trajectory: &Trajectory) -> Result<usize, CacheError> {
        let mut stored = 0;
        for (value, length) in trajectory.lengths() {
            if self.set(value, length)? == SetOutcome::Stored {
                stored += 1;
            }
        }
        trace!(
            start = trajectory.start(),
            terminal = trajectory.terminal(),
            points = trajectory.len(),
            stored = stored,
            "Backfilled trajectory"
        );
        Ok(stored)
    }

    /// Get the total number of cached entries
    pub fn len(&self) -> usize {
        self.stats.entries
    }

    /// Check if the cache contains no entries
    pub fn is_empty(&self) -> bool {
        self.stats.entries == 0
    }

    /// Current usage statistics
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for CycleCache {
    fn default() -> Self {
        Self::new(CacheCapacity::DEFAULT)
    }
}
