//! Error types for range-max evaluation.

use super::{CacheError, QueryError, TrajectoryError};

/// Errors that can occur while evaluating a range query.
///
/// `InvalidRange` is the only variant a well-behaved caller can trigger.
/// The other two indicate an arithmetic limit or a broken cache invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// The query bounds were rejected.
    #[error("Invalid range: {0}")]
    InvalidRange(#[from] QueryError),

    /// A trajectory could not be stepped.
    #[error("Trajectory error: {0}")]
    Trajectory(#[from] TrajectoryError),

    /// The cycle cache detected an internal inconsistency.
    #[error("Cache consistency error: {0}")]
    Cache(#[from] CacheError),
}
