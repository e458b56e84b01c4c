//! Configuration error types.

use thiserror::Error;

/// Configuration error type.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A set environment variable holds an unusable value.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
