//! Error types for record table construction.

/// Errors that can occur when building a [`RecordTable`](crate::RecordTable)
/// from caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordTableError {
    /// No entries were supplied.
    #[error("record table must contain at least one entry")]
    Empty,

    /// The first record holder must be 1.
    #[error("first record holder must be 1, got {key}")]
    FirstKeyNotOne {
        /// The offending first key
        key: u64,
    },

    /// Keys or lengths are not strictly increasing.
    #[error("record entry {index} is not strictly greater than its predecessor")]
    NotAscending {
        /// Position of the first out-of-order entry
        index: usize,
    },

    /// The verified bound does not cover the last record holder.
    #[error("verified bound {verified_through} is below last record holder {last_key}")]
    BoundBelowLastKey {
        /// The supplied verification bound
        verified_through: u64,
        /// The largest record key in the table
        last_key: u64,
    },
}
