// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for collatzscan integration tests
//!
//! Provides uncached reference answers and the set of engine configurations
//! whose answers must all agree.

#![allow(dead_code)]

use collatzscan::{reference_range_max, EngineConfig, EngineConfigBuilder, StepMode};

/// Uncached `max L(s)` over the closed range between `lo` and `hi`, in either order
pub fn brute_force_max(lo: u64, hi: u64) -> u32 {
    reference_range_max(lo.min(hi), lo.max(hi)).expect("reference range stays in u64")
}

/// Every combination of step mode and shortcut toggles
///
/// Any two of these must answer every query identically.
pub fn all_configs() -> Vec<EngineConfig> {
    let mut configs = Vec::new();
    for mode in [StepMode::Plain, StepMode::Combined] {
        for record_shortcut in [false, true] {
            for upper_half_reduction in [false, true] {
                configs.push(
                    EngineConfigBuilder::new()
                        .step_mode(mode)
                        .record_shortcut(record_shortcut)
                        .upper_half_reduction(upper_half_reduction)
                        .build()
                        .expect("valid config"),
                );
            }
        }
    }
    configs
}

/// A config with a small cache so that many values fall outside it
pub fn small_cache_config(capacity: u64) -> EngineConfig {
    EngineConfigBuilder::with_defaults()
        .cache_capacity(capacity)
        .build()
        .expect("valid config")
}
