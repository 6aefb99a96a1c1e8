// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Memoized Collatz range-max engine.
//!
//! Answers queries of the form "what is the longest Collatz trajectory among
//! the starting values in `[lo, hi]`?" against a cache of trajectory lengths
//! that grows with every query.
//!
//! - [`stepper`]: pure Collatz arithmetic and uncached reference lengths
//! - [`CycleCache`]: write-once memo table with trajectory backfill
//! - [`RecordTable`]: precomputed record holders for ranges starting at 1
//! - [`RangeMaxEvaluator`]: the query engine tying the three together
//! - [`EvaluatorJob`] and [`solve`]: concurrent access and the line-oriented driver
//!
//! # Example
//!
//! ```rust
//! use collatzscan::{EngineConfig, RangeMaxEvaluator};
//!
//! let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());
//! assert_eq!(evaluator.evaluate(1, 10).unwrap(), 20);
//! assert_eq!(evaluator.evaluate(201, 210).unwrap(), 89);
//! ```

pub mod bootstrap;
mod cache;
mod command;
mod config;
mod driver;
mod errors;
mod evaluator;
mod records;
mod spans;
pub mod stepper;
mod types;

pub use cache::*;
pub use command::*;
pub use config::constants;
pub use config::{EngineConfig, EngineConfigBuilder};
pub use driver::*;
pub use errors::*;
pub use evaluator::*;
pub use records::*;
pub use stepper::{next_value, reference_range_max, step, trajectory_length, Step, StepMode};
pub use types::capacity::CacheCapacity;
pub use types::query::RangeQuery;
