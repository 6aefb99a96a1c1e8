// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the range-max engine
//!
//! This module provides a flexible configuration system for controlling the
//! cache size, the stepping arithmetic, and which range shortcuts are applied.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use collatzscan::EngineConfig;
//!
//! // 1,000,000-slot cache, combined stepping, both shortcuts enabled
//! let config = EngineConfig::default();
//! assert!(config.record_shortcut);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use collatzscan::{EngineConfigBuilder, StepMode};
//!
//! let config = EngineConfigBuilder::with_defaults()
//!     .cache_capacity(10_000)
//!     .step_mode(StepMode::Plain)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.cache_capacity.as_u64(), 10_000);
//! ```
//!
//! # Example: No shortcuts
//!
//! ```rust
//! use collatzscan::EngineConfig;
//!
//! // Every query is answered by scanning its whole range
//! let config = EngineConfig::minimal();
//! assert!(!config.upper_half_reduction);
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::stepper::StepMode;
use crate::types::capacity::CacheCapacity;

pub mod constants;

use constants::env;

/// Configuration for a [`RangeMaxEvaluator`](crate::RangeMaxEvaluator)
///
/// Use [`EngineConfigBuilder`] for a fluent API to construct instances, or
/// [`EngineConfig::from_env`] to read `COLLATZ_*` environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starting values below this bound are memoized
    /// Default: 1,000,000
    pub cache_capacity: CacheCapacity,

    /// Arithmetic used for odd values
    /// Default: combined
    pub step_mode: StepMode,

    /// Answer ranges starting at 1 from the record table when possible
    /// Default: true
    pub record_shortcut: bool,

    /// Scan only the upper half of ranges starting at 1
    /// Default: true
    pub upper_half_reduction: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: CacheCapacity::DEFAULT,
            step_mode: StepMode::Combined,
            record_shortcut: true,
            upper_half_reduction: true,
        }
    }
}

impl EngineConfig {
    /// Create config with no shortcuts and plain stepping
    ///
    /// Keeps the default cache. Useful as a baseline when checking that the
    /// shortcuts never change an answer.
    pub fn minimal() -> Self {
        Self {
            cache_capacity: CacheCapacity::DEFAULT,
            step_mode: StepMode::Plain,
            record_shortcut: false,
            upper_half_reduction: false,
        }
    }

    /// Check every value is within its accepted range
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.cache_capacity > CacheCapacity::MAX {
            return Err(ConfigError::invalid_value(
                "cache_capacity",
                format!(
                    "{} exceeds the maximum of {}",
                    self.cache_capacity.as_u64(),
                    CacheCapacity::MAX.as_u64()
                ),
            ));
        }
        Ok(self)
    }

    /// Parse a JSON document; missing fields take their defaults
    ///
    /// # Example
    ///
    /// ```rust
    /// use collatzscan::{EngineConfig, StepMode};
    ///
    /// let config = EngineConfig::from_json_str(r#"{ "step_mode": "plain" }"#).unwrap();
    /// assert_eq!(config.step_mode, StepMode::Plain);
    /// assert_eq!(config.cache_capacity.as_u64(), 1_000_000);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| ConfigError::parse("invalid engine configuration JSON", e))?
            .validate()
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::parse(format!("cannot read {}", path.display()), e))?;
        Self::from_json_str(&contents)
    }

    /// Load configuration from `COLLATZ_*` environment variables
    ///
    /// Starts from the defaults, or from the JSON file named by
    /// `COLLATZ_CONFIG` when set, then applies the individual overrides.
    /// A `.env` file is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = match dotenvy::var(env::CONFIG_PATH) {
            Ok(path) => {
                debug!(path = %path, "Loading engine configuration file");
                Self::from_json_file(path)?
            }
            Err(_) => Self::default(),
        };

        if let Some(capacity) = env_override::<u64>(env::CACHE_CAPACITY)? {
            config.cache_capacity = CacheCapacity::new(capacity);
        }
        if let Some(mode) = env_override::<StepMode>(env::STEP_MODE)? {
            config.step_mode = mode;
        }
        if let Some(enabled) = env_override::<bool>(env::RECORD_SHORTCUT)? {
            config.record_shortcut = enabled;
        }
        if let Some(enabled) = env_override::<bool>(env::UPPER_HALF_REDUCTION)? {
            config.upper_half_reduction = enabled;
        }

        config.validate()
    }
}

/// Parse an optional environment override
fn env_override<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match dotenvy::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid_value(key, format!("{raw:?}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Builder for [`EngineConfig`]
///
/// Provides a fluent API for constructing engine configurations.
///
/// # Example
///
/// ```rust
/// use collatzscan::EngineConfigBuilder;
///
/// let config = EngineConfigBuilder::new()
///     .cache_capacity(500_000)
///     .record_shortcut(true)
///     .build()
///     .unwrap();
/// assert!(config.record_shortcut);
/// assert!(!config.upper_half_reduction);
/// ```
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfigBuilder {
    /// Create a new builder starting from [`EngineConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::minimal(),
        }
    }

    /// Start with [`EngineConfig::default`]
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the cache capacity
    pub fn cache_capacity(mut self, capacity: u64) -> Self {
        self.config.cache_capacity = CacheCapacity::new(capacity);
        self
    }

    /// Set the stepping arithmetic
    pub fn step_mode(mut self, mode: StepMode) -> Self {
        self.config.step_mode = mode;
        self
    }

    /// Enable or disable the record-table shortcut
    pub fn record_shortcut(mut self, enabled: bool) -> Self {
        self.config.record_shortcut = enabled;
        self
    }

    /// Enable or disable the upper-half reduction
    pub fn upper_half_reduction(mut self, enabled: bool) -> Self {
        self.config.upper_half_reduction = enabled;
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()
    }
}
