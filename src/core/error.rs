/*!
# Unified Error Type

This module provides a unified error enum for every fallible operation exposed by the crate,
matching the error-handling design in the specification's §7: all errors are surfaced to the
caller, there is no local recovery, and a failed solve leaves no observable side effect since
every graph is owned locally by the call that failed.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all superstring-solving operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SspError {
    /// Empty input list, or input that is not substring-free.
    InvalidInput(String),

    /// The KMP sentinel byte collided with an input's alphabet.
    AlphabetConflict(String),

    /// Hit a branch an invariant should have excluded; indicates a bug in the solver.
    Unreachable(String),
}

impl SspError {
    /// Creates an invalid-input error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SspError::InvalidInput(message.into())
    }

    /// Creates an alphabet-conflict error with the given message.
    pub fn alphabet_conflict(message: impl Into<String>) -> Self {
        SspError::AlphabetConflict(message.into())
    }

    /// Creates an unreachable-branch error with the given message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        SspError::Unreachable(message.into())
    }
}

impl fmt::Display for SspError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SspError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SspError::AlphabetConflict(msg) => write!(f, "alphabet conflict: {}", msg),
            SspError::Unreachable(msg) => write!(f, "unreachable: {}", msg),
        }
    }
}

impl Error for SspError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SspError::invalid_input("strings must not be empty");
        assert_eq!(
            format!("{}", err),
            "invalid input: strings must not be empty"
        );

        let err = SspError::alphabet_conflict("every byte value is in use");
        assert_eq!(
            format!("{}", err),
            "alphabet conflict: every byte value is in use"
        );

        let err = SspError::unreachable("eulerian walk did not terminate at sink");
        assert_eq!(
            format!("{}", err),
            "unreachable: eulerian walk did not terminate at sink"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SspError::invalid_input("x"),
            SspError::InvalidInput("x".to_string())
        );
        assert_ne!(SspError::invalid_input("x"), SspError::invalid_input("y"));
    }
}
