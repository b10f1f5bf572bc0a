//! crates/logging/src/error.rs
//!
//! Error types for configuration parsing and logger class checks.

use levels::ParseLevelError;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while building a [`LoggingConfig`](crate::LoggingConfig).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A directive named a level that could not be resolved.
    #[error("invalid level in directive `{directive}`: {source}")]
    Level {
        /// The offending directive.
        directive: String,
        /// Why the level did not resolve.
        #[source]
        source: ParseLevelError,
    },
    /// A directive did not have the `level` or `name=level` shape.
    #[error("malformed directive: `{0}`")]
    Directive(String),
    /// The configuration variable held non-unicode data.
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// A logger was not created with the class a wrapper expected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("logger `{name}` is a {found}, not a {expected}")]
pub struct ClassMismatch {
    /// Name of the logger.
    pub name: String,
    /// Class the caller asked for.
    pub expected: &'static str,
    /// Class the logger was created with.
    pub found: &'static str,
}
