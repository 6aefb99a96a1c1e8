// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Range-max evaluation over a shared cycle cache.
//!
//! [`RangeMaxEvaluator`] answers "what is the longest Collatz trajectory
//! starting anywhere in `[lo, hi]`?". It owns its [`CycleCache`] and
//! [`RecordTable`], so independent evaluators never share state.
//!
//! # Evaluation order
//!
//! 1. Normalize the bounds to `lower <= upper`.
//! 2. Ranges starting at 1 are answered straight from the record table when
//!    `upper` is within the table's verified bound. Past that bound the table
//!    still covers `[1, verified_through]`, so the scan only has to start
//!    above it.
//! 3. Ranges starting at 1 skip everything below `upper / 2`: for such `s`,
//!    `2s` is also in range and `L(2s) = L(s) + 1`.
//! 4. Every remaining value is read from the cache, or resolved by walking its
//!    trajectory and backfilling the cache with each value the walk visited.
//!
//! Shortcuts 2 and 3 are never applied when `lower > 1`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cache::{CacheStats, CycleCache, Trajectory};
use crate::config::EngineConfig;
use crate::errors::{EvaluationError, TrajectoryError};
use crate::records::RecordTable;
use crate::spans;
use crate::types::query::RangeQuery;

/// Counters describing how queries were answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorStats {
    /// Queries evaluated successfully
    pub queries: u64,
    /// Queries answered directly from the record table
    pub record_shortcuts: u64,
    /// Scans seeded with the record table's verified maximum
    pub seeded_scans: u64,
    /// Scans shortened by the upper-half reduction
    pub reductions: u64,
    /// Starting values examined by scans
    pub values_scanned: u64,
    /// Trajectories walked because of cache misses
    pub trajectories_resolved: u64,
    /// Cycle cache counters
    pub cache: CacheStats,
}

impl fmt::Display for EvaluatorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queries={}, record_shortcuts={}, seeded_scans={}, reductions={}, values_scanned={}, trajectories_resolved={}, cache=[{}]",
            self.queries,
            self.record_shortcuts,
            self.seeded_scans,
            self.reductions,
            self.values_scanned,
            self.trajectories_resolved,
            self.cache
        )
    }
}

/// Answers range-max queries using a memoized cycle cache
///
/// # Examples
///
/// ```rust
/// use collatzscan::{EngineConfig, RangeMaxEvaluator};
///
/// let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());
///
/// assert_eq!(evaluator.evaluate(1, 10).unwrap(), 20);
/// assert_eq!(evaluator.evaluate(10, 1).unwrap(), 20);
/// assert_eq!(evaluator.evaluate(100, 200).unwrap(), 125);
/// assert!(evaluator.evaluate(0, 10).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangeMaxEvaluator {
    config: EngineConfig,
    cache: CycleCache,
    records: RecordTable,
    stats: EvaluatorStats,
}

impl RangeMaxEvaluator {
    /// Create an evaluator with an empty cache sized by `config` and the standard record table
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(
            CycleCache::new(config.cache_capacity),
            RecordTable::standard(),
            config,
        )
    }

    /// Create an evaluator from explicit parts
    ///
    /// The cache's own capacity wins over `config.cache_capacity`.
    pub fn with_parts(cache: CycleCache, records: RecordTable, config: EngineConfig) -> Self {
        Self {
            config,
            cache,
            records,
            stats: EvaluatorStats::default(),
        }
    }

    /// Maximum trajectory length over `[min(lo, hi), max(lo, hi)]`
    ///
    /// # Errors
    ///
    /// - [`EvaluationError::InvalidRange`] when either bound is zero or negative
    /// - [`EvaluationError::Trajectory`] when a trajectory leaves the `u64` domain
    /// - [`EvaluationError::Cache`] when the cache detects an inconsistent write
    pub fn evaluate(&mut self, lo: i64, hi: i64) -> Result<u32, EvaluationError> {
        let query = RangeQuery::new(lo, hi)?;
        self.evaluate_query(&query)
    }

    /// Maximum trajectory length over an already validated query
    pub fn evaluate_query(&mut self, query: &RangeQuery) -> Result<u32, EvaluationError> {
        let (lower, upper) = (query.lower(), query.upper());

        let span = spans::evaluate(lower, upper);
        let _guard = span.enter();

        let mut scan_from = lower;
        let mut seed = 0;

        if query.is_anchored() {
            if self.config.record_shortcut {
                if let Some(holder) = self.records.holder_for(upper) {
                    self.stats.queries += 1;
                    self.stats.record_shortcuts += 1;
                    debug!(
                        upper = upper,
                        holder = holder.start,
                        length = holder.length,
                        "Answered from record table"
                    );
                    return Ok(holder.length);
                }
                // `upper` is past the verified bound; the table still covers everything below it
                seed = self.records.verified_max();
                scan_from = self.records.verified_through() + 1;
                self.stats.seeded_scans += 1;
            }

            if self.config.upper_half_reduction {
                let half = (upper / 2).max(1);
                if half > scan_from {
                    trace!(from = scan_from, to = half, "Upper-half reduction");
                    scan_from = half;
                    self.stats.reductions += 1;
                }
            }
        }

        let max = self.scan(scan_from, upper, seed)?;
        self.stats.queries += 1;
        debug!(
            lower = lower,
            upper = upper,
            scanned_from = scan_from,
            max_cycle_length = max,
            cache_entries = self.cache.len(),
            "Evaluated range"
        );
        Ok(max)
    }

    /// Running maximum of `L(s)` over `from..=to`, starting from `seed`
    fn scan(&mut self, from: u64, to: u64, seed: u32) -> Result<u32, EvaluationError> {
        let span = spans::scan_range(from, to);
        let _guard = span.enter();

        let mut max = seed;
        for start in from..=to {
            max = max.max(self.length_of(start)?);
        }
        self.stats.values_scanned += to - from + 1;
        Ok(max)
    }

    /// Trajectory length of one starting value, memoized
    ///
    /// On a cache miss the trajectory is walked until it reaches 1 or a cached
    /// value, and every cacheable value along the way is backfilled.
    pub fn length_of(&mut self, value: u64) -> Result<u32, EvaluationError> {
        if value == 0 {
            return Err(TrajectoryError::NonPositive.into());
        }
        if let Some(length) = self.cache.get(value) {
            return Ok(length);
        }

        let span = spans::resolve_trajectory(value, self.config.step_mode);
        let _guard = span.enter();

        let cache = &self.cache;
        let trajectory = Trajectory::walk(value, self.config.step_mode, |v| cache.peek(v))?;
        self.cache.backfill(&trajectory)?;
        self.stats.trajectories_resolved += 1;

        Ok(trajectory.start_length())
    }

    /// The configuration this evaluator was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The cycle cache
    pub fn cache(&self) -> &CycleCache {
        &self.cache
    }

    /// The record table
    pub fn records(&self) -> &RecordTable {
        &self.records
    }

    /// Usage counters, including a snapshot of the cache's own counters
    pub fn stats(&self) -> EvaluatorStats {
        EvaluatorStats {
            cache: self.cache.stats(),
            ..self.stats
        }
    }
}

impl Default for RangeMaxEvaluator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
