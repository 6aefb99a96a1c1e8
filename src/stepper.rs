// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Collatz trajectory stepping.
//!
//! Every function here is pure. The cached engine in
//! [`RangeMaxEvaluator`](crate::RangeMaxEvaluator) drives [`step`]; the
//! uncached helpers ([`trajectory_length`], [`reference_range_max`]) walk every
//! value from scratch and serve as ground truth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TrajectoryError};

/// How odd values are advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// `3n + 1`, counted as one step
    Plain,
    /// `(3n + 1) / 2`, counted as two steps
    ///
    /// `3n + 1` is always even for odd `n`, so the halving that follows it is
    /// folded into the same arithmetic operation. The intermediate value is
    /// never materialized.
    #[default]
    Combined,
}

impl StepMode {
    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            StepMode::Plain => "plain",
            StepMode::Combined => "combined",
        }
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StepMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(StepMode::Plain),
            "combined" => Ok(StepMode::Combined),
            other => Err(ConfigError::invalid_value(
                "step_mode",
                format!("expected \"plain\" or \"combined\", got {other:?}"),
            )),
        }
    }
}

/// Result of advancing one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The value reached
    pub value: u64,
    /// How many Collatz steps were taken to reach it (1 or 2)
    pub steps: u32,
}

/// Advance `n` toward 1.
///
/// Even values halve in one step. Odd values go to `3n + 1` (plain) or to
/// `(3n + 1) / 2` in two steps (combined).
///
/// # Errors
///
/// - [`TrajectoryError::NonPositive`] for `n == 0`
/// - [`TrajectoryError::Overflow`] when `3n + 1` exceeds `u64::MAX`
///
/// # Examples
///
/// ```
/// use collatzscan::{step, StepMode};
///
/// assert_eq!(step(10, StepMode::Plain).unwrap().value, 5);
/// assert_eq!(step(5, StepMode::Plain).unwrap().value, 16);
///
/// let combined = step(5, StepMode::Combined).unwrap();
/// assert_eq!((combined.value, combined.steps), (8, 2));
/// ```
#[inline]
pub fn step(n: u64, mode: StepMode) -> Result<Step, TrajectoryError> {
    if n == 0 {
        return Err(TrajectoryError::NonPositive);
    }
    if n % 2 == 0 {
        return Ok(Step {
            value: n / 2,
            steps: 1,
        });
    }
    match mode {
        StepMode::Plain => {
            let value = n
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or(TrajectoryError::Overflow { value: n })?;
            Ok(Step { value, steps: 1 })
        }
        StepMode::Combined => {
            // The skipped 3n + 1 must still be representable
            if n > (u64::MAX - 1) / 3 {
                return Err(TrajectoryError::Overflow { value: n });
            }
            // n + n/2 + 1 == (3n + 1) / 2 for odd n
            Ok(Step {
                value: n + (n >> 1) + 1,
                steps: 2,
            })
        }
    }
}

/// The plain Collatz successor of `n`.
pub fn next_value(n: u64) -> Result<u64, TrajectoryError> {
    step(n, StepMode::Plain).map(|s| s.value)
}

/// Uncached trajectory length `L(n)`, counting both `n` and the final 1.
///
/// # Examples
///
/// ```
/// use collatzscan::trajectory_length;
///
/// assert_eq!(trajectory_length(1).unwrap(), 1);
/// assert_eq!(trajectory_length(9).unwrap(), 20);
/// ```
pub fn trajectory_length(n: u64) -> Result<u32, TrajectoryError> {
    if n == 0 {
        return Err(TrajectoryError::NonPositive);
    }
    let mut current = n;
    let mut length = 1u32;
    while current != 1 {
        current = next_value(current)?;
        length += 1;
    }
    Ok(length)
}

/// Uncached maximum of `L(s)` over `lower..=upper`.
///
/// Bounds may be given in either order. Walks every trajectory in full, so
/// this is only practical for small ranges.
pub fn reference_range_max(lower: u64, upper: u64) -> Result<u32, TrajectoryError> {
    let (lower, upper) = (lower.min(upper), lower.max(upper));
    let mut max = 0;
    for start in lower..=upper {
        max = max.max(trajectory_length(start)?);
    }
    Ok(max)
}
