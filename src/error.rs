//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input string is empty after normalization
    #[error("Input cannot be empty")]
    EmptyInput,

    /// Input contains a symbol outside the automaton's alphabet
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    /// Input exceeds the configured length guard
    #[error("Input is {length} symbols long, the limit is {limit}")]
    InputTooLong { length: usize, limit: usize },

    /// Automaton definition violates a structural invariant
    #[error("Malformed automaton definition: {0}")]
    MalformedDefinition(String),

    /// Automaton definition file parsing errors
    #[error("Definition parsing error in {file:?}: {message}")]
    DefinitionParse { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a malformed-definition error
    pub fn malformed_definition(msg: impl Into<String>) -> Self {
        Self::MalformedDefinition(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if the error stems from the user's input string rather than the
    /// automaton or the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::InvalidSymbol { .. } | Error::InputTooLong { .. }
        )
    }
}

// Implement From traits for common external error types

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::DefinitionParse {
            file: PathBuf::from("unknown"),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Custom(format!("JSON error: {}", err))
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::malformed_definition("start state missing");
        assert_eq!(
            err.to_string(),
            "Malformed automaton definition: start state missing"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(Error::EmptyInput.is_input_error());
        assert!(
            Error::InvalidSymbol {
                position: 2,
                symbol: 'c'
            }
            .is_input_error()
        );
        assert!(!Error::custom("other").is_input_error());
    }

    #[test]
    fn test_invalid_symbol_message() {
        let err = Error::InvalidSymbol {
            position: 2,
            symbol: 'c',
        };
        assert_eq!(err.to_string(), "Invalid symbol 'c' at position 2");
    }
}
