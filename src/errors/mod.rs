// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the collatzscan library.
//!
//! This module provides strongly-typed errors for all public APIs in collatzscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`QueryError`,
//!   `TrajectoryError`, `CacheError`, etc.)
//! - **Unified error type** (`CollatzError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`QueryError`] - Rejected query bounds
//! - [`TrajectoryError`] - Errors from the trajectory stepper
//! - [`CacheError`] - Internal consistency violations in the cycle cache
//! - [`RecordTableError`] - Malformed record tables
//! - [`EvaluationError`] - Errors from range-max evaluation (wraps the three above)
//! - [`ConfigError`] - Invalid engine configuration
//! - [`DriverError`] - Errors from the line-oriented query driver
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use collatzscan::{EngineConfig, EvaluationError, RangeMaxEvaluator};
//!
//! let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());
//!
//! match evaluator.evaluate(0, 10) {
//!     Ok(answer) => println!("max cycle length: {answer}"),
//!     Err(EvaluationError::InvalidRange(reason)) => eprintln!("bad query: {reason}"),
//!     Err(e) => eprintln!("engine failure: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use collatzscan::{CollatzError, EngineConfig, RangeMaxEvaluator};
//!
//! fn answer(lo: i64, hi: i64) -> Result<u32, CollatzError> {
//!     let mut evaluator = RangeMaxEvaluator::new(EngineConfig::default());
//!     // Errors automatically convert to CollatzError via From implementations
//!     Ok(evaluator.evaluate(lo, hi)?)
//! }
//!
//! assert_eq!(answer(1, 10).unwrap(), 20);
//! assert!(answer(-1, 10).is_err());
//! ```

mod cache;
mod config;
mod driver;
mod evaluation;
mod query;
mod records;
mod trajectory;

pub use cache::CacheError;
pub use config::ConfigError;
pub use driver::DriverError;
pub use evaluation::EvaluationError;
pub use query::QueryError;
pub use records::RecordTableError;
pub use trajectory::TrajectoryError;

/// Unified error type for all collatzscan operations.
///
/// All module-specific error types automatically convert to `CollatzError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum CollatzError {
    /// Error from range-max evaluation.
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Error from the record table.
    #[error("Record table error: {0}")]
    Records(#[from] RecordTableError),

    /// Error from engine configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the query driver.
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
}

impl From<QueryError> for CollatzError {
    fn from(err: QueryError) -> Self {
        CollatzError::Evaluation(err.into())
    }
}

impl From<TrajectoryError> for CollatzError {
    fn from(err: TrajectoryError) -> Self {
        CollatzError::Evaluation(err.into())
    }
}

impl From<CacheError> for CollatzError {
    fn from(err: CacheError) -> Self {
        CollatzError::Evaluation(err.into())
    }
}
