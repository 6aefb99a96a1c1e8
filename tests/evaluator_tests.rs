// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for range-max evaluation
//!
//! Covers the classic sample queries, agreement between every engine
//! configuration, and how shortcuts and the cache show up in the statistics.

mod helpers;

use collatzscan::{
    CollatzError, CycleCache, EngineConfig, EvaluationError, QueryError, RangeMaxEvaluator,
    RecordEntry, RecordTable,
};
use helpers::{all_configs, brute_force_max, small_cache_config};

#[test]
fn test_sample_queries() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    assert_eq!(evaluator.evaluate(1, 10).unwrap(), 20);
    assert_eq!(evaluator.evaluate(100, 200).unwrap(), 125);
    assert_eq!(evaluator.evaluate(201, 210).unwrap(), 89);
    assert_eq!(evaluator.evaluate(900, 1000).unwrap(), 174);
}

#[test]
fn test_sample_queries_in_every_config() {
    let queries = [(1, 10), (100, 200), (201, 210), (900, 1000), (10, 1), (1000, 900)];
    for config in all_configs() {
        let mut evaluator = RangeMaxEvaluator::new(config);
        for (lo, hi) in queries {
            assert_eq!(
                evaluator.evaluate(lo, hi).unwrap(),
                brute_force_max(lo as u64, hi as u64),
                "query ({lo}, {hi}) with {config:?}"
            );
        }
    }
}

#[test]
fn test_single_value_ranges() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    assert_eq!(evaluator.evaluate(1, 1).unwrap(), 1);
    assert_eq!(evaluator.evaluate(2, 2).unwrap(), 2);
    assert_eq!(evaluator.evaluate(5, 5).unwrap(), 6);
    assert_eq!(evaluator.evaluate(27, 27).unwrap(), 112);
}

#[test]
fn test_reversed_bounds_match_forward_bounds() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::minimal());
    for (lo, hi) in [(10, 20), (1, 3), (500, 1500)] {
        assert_eq!(
            evaluator.evaluate(lo, hi).unwrap(),
            evaluator.evaluate(hi, lo).unwrap()
        );
    }
    assert_eq!(evaluator.evaluate(20, 10).unwrap(), 21);
}

#[test]
fn test_anchored_ranges_agree_with_and_without_shortcuts() {
    let mut with_shortcuts = RangeMaxEvaluator::new(EngineConfig::default());
    let mut without_shortcuts = RangeMaxEvaluator::new(EngineConfig::minimal());

    for upper in [1, 2, 3, 26, 27, 28, 1_000, 9_999, 100_000] {
        assert_eq!(
            with_shortcuts.evaluate(1, upper).unwrap(),
            without_shortcuts.evaluate(1, upper).unwrap(),
            "[1, {upper}]"
        );
    }
    assert_eq!(with_shortcuts.evaluate(1, 100_000).unwrap(), 351);

    // The shortcut answered everything, so nothing was scanned
    let stats = with_shortcuts.stats();
    assert_eq!(stats.record_shortcuts, 10);
    assert_eq!(stats.values_scanned, 0);
    assert_eq!(with_shortcuts.cache().len(), 0);
}

#[test]
fn test_unanchored_ranges_never_use_the_record_table() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    assert_eq!(evaluator.evaluate(2, 100).unwrap(), 119);
    assert_eq!(evaluator.evaluate(100, 2).unwrap(), 119);

    let stats = evaluator.stats();
    assert_eq!(stats.queries, 2);
    assert_eq!(stats.record_shortcuts, 0);
    assert_eq!(stats.reductions, 0);
    assert_eq!(stats.values_scanned, 2 * 99);
}

#[test]
fn test_reversed_anchored_range_uses_the_record_table() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    assert_eq!(evaluator.evaluate(100, 1).unwrap(), 119);

    let stats = evaluator.stats();
    assert_eq!(stats.record_shortcuts, 1);
    assert_eq!(stats.values_scanned, 0);
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    for (lo, hi) in [(0, 10), (10, 0), (-5, 5), (0, 0), (i64::MIN, 1)] {
        let err = evaluator.evaluate(lo, hi).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvalidRange(QueryError::NonPositiveBound { lo, hi })
        );
    }

    // Rejected queries leave no trace
    assert_eq!(evaluator.stats().queries, 0);
    assert!(evaluator.cache().is_empty());
}

#[test]
fn test_errors_convert_to_unified_error() {
    fn answer(lo: i64, hi: i64) -> Result<u32, CollatzError> {
        let mut evaluator = RangeMaxEvaluator::default();
        Ok(evaluator.evaluate(lo, hi)?)
    }

    assert_eq!(answer(1, 10).unwrap(), 20);
    let err = answer(-1, 10).unwrap_err();
    assert!(matches!(err, CollatzError::Evaluation(_)));
    assert!(err.to_string().contains("bounds must be positive"));
}

#[test]
fn test_repeated_query_is_served_from_cache() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::minimal());

    let first = evaluator.evaluate(900, 1000).unwrap();
    let entries = evaluator.cache().len();
    let resolved = evaluator.stats().trajectories_resolved;

    let second = evaluator.evaluate(1000, 900).unwrap();
    assert_eq!(first, second);
    assert_eq!(evaluator.cache().len(), entries);
    assert_eq!(evaluator.stats().trajectories_resolved, resolved);
    assert!(evaluator.stats().cache.hits >= 101);
}

#[test]
fn test_small_cache_gives_same_answers() {
    let mut small = RangeMaxEvaluator::new(small_cache_config(16));
    let mut large = RangeMaxEvaluator::new(EngineConfig::default());

    for (lo, hi) in [(2, 50), (100, 200), (9_000, 9_100)] {
        assert_eq!(
            small.evaluate(lo, hi).unwrap(),
            large.evaluate(lo, hi).unwrap()
        );
    }

    // Only values 1..16 can ever be stored
    assert!(small.cache().len() <= 15);
    assert!(small.stats().cache.skipped > 0);
}

#[test]
fn test_disabled_cache_still_answers() {
    let mut evaluator = RangeMaxEvaluator::new(small_cache_config(0));

    assert_eq!(evaluator.evaluate(100, 200).unwrap(), 125);
    assert_eq!(evaluator.cache().len(), 0);
    assert_eq!(evaluator.stats().trajectories_resolved, 101);
}

#[test]
fn test_custom_record_table_seeds_scans_past_its_bound() {
    // A table verified through 30 only knows record holders up to 27
    let entries: Vec<RecordEntry> = [
        (1, 1),
        (2, 2),
        (3, 8),
        (6, 9),
        (7, 17),
        (9, 20),
        (18, 21),
        (25, 24),
        (27, 112),
    ]
    .into_iter()
    .map(RecordEntry::from)
    .collect();
    let records = RecordTable::from_entries(entries, 30).unwrap();
    let config = EngineConfig::default();
    let mut evaluator =
        RangeMaxEvaluator::with_parts(CycleCache::new(config.cache_capacity), records, config);

    assert_eq!(evaluator.evaluate(1, 30).unwrap(), 112);
    assert_eq!(evaluator.evaluate(1, 100).unwrap(), brute_force_max(1, 100));
    assert_eq!(evaluator.evaluate(1, 1_000).unwrap(), brute_force_max(1, 1_000));

    let stats = evaluator.stats();
    assert_eq!(stats.record_shortcuts, 1);
    assert_eq!(stats.seeded_scans, 2);
    // [1, 100] scans 50..=100 and [1, 1000] scans 500..=1000
    assert_eq!(stats.reductions, 2);
    assert_eq!(stats.values_scanned, 51 + 501);
}

#[test]
fn test_range_above_cache_capacity() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());

    assert_eq!(evaluator.evaluate(999_990, 1_000_010).unwrap(), 259);
    assert!(evaluator.stats().cache.skipped > 0);
}

#[test]
fn test_stats_display() {
    let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());
    evaluator.evaluate(1, 10).unwrap();

    let rendered = evaluator.stats().to_string();
    assert!(rendered.starts_with("queries=1, record_shortcuts=1"));
    assert!(rendered.contains("hit_rate="));
}
