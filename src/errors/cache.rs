//! Error types for the cycle cache.

/// Errors raised by the cycle cache.
///
/// The cache never fails for ordinary input: values outside its capacity are
/// skipped, not rejected. The only failure is a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// A value was resolved twice with two different lengths.
    ///
    /// Cache entries are write-once. Seeing this means the stepper or the
    /// backfill arithmetic is wrong; it is never recovered at runtime.
    #[error("cycle length of {value} already cached as {cached}, recomputed as {computed}")]
    InconsistentLength {
        /// The key being written
        value: u64,
        /// Length already stored for `value`
        cached: u32,
        /// Conflicting length that was about to be written
        computed: u32,
    },
}
