//! Core library for bracket-lint.
//!
//! This crate provides balanced-bracket validation over configurable bracket
//! pairs and ignorable symbols, used by the `bracket-lint` CLI and any
//! downstream consumers.
//!
//! # Modules
//!
//! - [`validator`] - The [`BracketsValidator`] pipeline (validate, clear, balance)
//! - [`balance`] - Stack and repeated-removal reducers
//! - [`pair`] - Bracket pairs and default alphabets
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use bracket_lint_core::{BracketsChecker, BracketsValidator, CheckError};
//!
//! let validator = BracketsValidator::default();
//! assert!(validator.check("(())").unwrap());
//! assert!(!validator.check(")(").unwrap());
//! assert_eq!(validator.check(""), Err(CheckError::EmptyInput));
//! ```
#![deny(unsafe_code)]

pub mod balance;

pub mod config;

pub mod error;

pub mod pair;

pub mod validator;

pub use balance::MatchStrategy;
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{CheckError, CheckResult, ConfigError, ConfigResult};
pub use pair::{BracketPair, DEFAULT_BRACKET_PAIRS, DEFAULT_IGNORABLE_SYMBOLS};
pub use validator::{BalanceReport, BracketsChecker, BracketsValidator};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
