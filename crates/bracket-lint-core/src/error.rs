//! Error types for bracket-lint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// The configured bracket pairs cannot build a validator.
    #[error("invalid bracket configuration: {0}")]
    InvalidBrackets(#[from] CheckError),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while checking a sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The sentence has zero length.
    #[error("sentence can't be empty")]
    EmptyInput,

    /// The sentence contains a character outside the allowed alphabet.
    #[error("sentence contains invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The first offending character.
        symbol: char,
        /// Zero-based character index of `symbol`.
        position: usize,
    },

    /// A configured bracket pair is not exactly two characters.
    #[error("bracket pair {pair:?} must be exactly 2 characters, got {len}")]
    InvalidPair {
        /// The pair string as configured.
        pair: String,
        /// Number of characters in `pair`.
        len: usize,
    },
}

/// Result type alias using [`CheckError`].
pub type CheckResult<T> = Result<T, CheckError>;
