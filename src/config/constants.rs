//! Configuration keys and defaults
//!
//! This module centralizes the environment variable names and default values
//! used to configure the engine, improving discoverability and maintainability.

/// Environment variable names read by [`EngineConfig::from_env`](super::EngineConfig::from_env)
pub mod env {
    /// Path to a JSON configuration file, applied before individual overrides
    pub const CONFIG_PATH: &str = "COLLATZ_CONFIG";

    /// Exclusive upper bound on cached starting values
    pub const CACHE_CAPACITY: &str = "COLLATZ_CACHE_CAPACITY";

    /// `plain` or `combined`
    pub const STEP_MODE: &str = "COLLATZ_STEP_MODE";

    /// Enable the record-table shortcut for ranges starting at 1
    pub const RECORD_SHORTCUT: &str = "COLLATZ_RECORD_SHORTCUT";

    /// Enable the upper-half reduction for ranges starting at 1
    pub const UPPER_HALF_REDUCTION: &str = "COLLATZ_UPPER_HALF_REDUCTION";
}

/// Default cycle cache capacity
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000_000;

/// Bound on queued queries between the driver and the evaluator job
pub const COMMAND_CHANNEL_CAPACITY: usize = 64;
