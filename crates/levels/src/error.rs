//! crates/levels/src/error.rs
//!
//! Errors raised when a textual level token cannot be resolved.

use thiserror::Error;

/// Failure to resolve a level token against a [`LevelRegistry`](crate::LevelRegistry).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseLevelError {
    /// The token was empty or only whitespace.
    #[error("empty level token")]
    Empty,
    /// The token is neither an integer nor a registered level name.
    #[error("unknown level: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_error_names_the_token() {
        let err = ParseLevelError::Unknown("LOUD".to_owned());
        assert_eq!(err.to_string(), "unknown level: LOUD");
    }

    #[test]
    fn empty_error_message() {
        assert_eq!(ParseLevelError::Empty.to_string(), "empty level token");
    }
}
