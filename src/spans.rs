//! Span creation helpers for collatzscan operations.
//!
//! This module provides span creation functions following an orthogonal design pattern
//! where telemetry concerns are separated from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation has
//! a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&mut self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::stepper::StepMode;

/// Create span for resolving the trajectory of one uncached starting value.
///
/// Parent: evaluate span
/// Children: None
#[inline]
pub(crate) fn resolve_trajectory(start: u64, step_mode: StepMode) -> Span {
    tracing::trace_span!(
        "collatz.resolve_trajectory",
        start = start,
        step_mode = step_mode.name(),
    )
}

/// Create span for scanning a sub-range with the cycle cache.
///
/// Parent: evaluate span
/// Children: resolve_trajectory spans (one per cache miss)
#[inline]
pub(crate) fn scan_range(from: u64, to: u64) -> Span {
    tracing::trace_span!(
        "collatz.scan_range",
        from = from,
        to = to,
        value_count = to.saturating_sub(from) + 1,
    )
}

/// Create span for evaluating a single range query.
///
/// This is the main public API entry point of the engine.
///
/// Parent: solve span, or None when called directly
/// Children: scan_range span
#[inline]
pub(crate) fn evaluate(lower: u64, upper: u64) -> Span {
    tracing::debug_span!(
        "collatz.evaluate",
        lower = lower,
        upper = upper,
        value_count = upper.saturating_sub(lower) + 1,
    )
}

/// Create span for the read/eval/print loop.
///
/// Parent: None (root span for this operation)
/// Children: evaluate spans (one per query, inside the evaluator job)
#[inline]
pub(crate) fn solve() -> Span {
    tracing::info_span!("collatz.solve")
}
