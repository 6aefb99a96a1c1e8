//! Error types for engine configuration.

/// Errors that can occur while loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value is out of range or unparseable.
    #[error("Invalid value for {key}: {details}")]
    InvalidValue {
        /// Name of the offending setting or environment variable
        key: String,
        /// Why the value was rejected
        details: String,
    },

    /// A JSON configuration document could not be read or parsed.
    #[error("Failed to parse configuration: {details}")]
    Parse {
        /// Details about the parse failure
        details: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(key: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            details: details.into(),
        }
    }

    /// Create a `Parse` error from any underlying error.
    pub fn parse(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::Parse {
            details: details.into(),
            source: Box::new(source),
        }
    }
}
