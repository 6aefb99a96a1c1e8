//! Error types for the trajectory stepper.

/// Errors that can occur while stepping a Collatz trajectory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrajectoryError {
    /// The stepper was asked to advance zero.
    ///
    /// Trajectories are only defined for positive integers; callers validate
    /// their input before stepping.
    #[error("trajectory start must be positive")]
    NonPositive,

    /// `3n + 1` does not fit in a `u64`.
    #[error("odd step from {value} overflows u64")]
    Overflow {
        /// The odd value whose successor overflowed
        value: u64,
    },
}
