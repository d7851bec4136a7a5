//! Balanced-bracket validation.
//!
//! [`BracketsValidator`] runs a linear pipeline over each sentence:
//!
//! 1. **Validate**: reject empty input and characters outside the allowed
//!    alphabet (every bracket character plus every ignorable symbol).
//! 2. **Clear**: drop every ignorable symbol.
//! 3. **Balance**: reduce the remaining brackets with the configured
//!    [`MatchStrategy`]; the sentence is balanced when nothing is left.
//!
//! The validator is immutable once built and can be shared across threads.
//!
//! ```
//! use bracket_lint_core::{BracketsChecker, BracketsValidator};
//!
//! let validator = BracketsValidator::new(["()", "{}"], [' ']).unwrap();
//! assert!(validator.check("( {} )").unwrap());
//! assert!(!validator.check("(}").unwrap());
//! ```

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::balance::MatchStrategy;
use crate::error::{CheckError, CheckResult};
use crate::pair::{BracketPair, DEFAULT_BRACKET_PAIRS, DEFAULT_IGNORABLE_SYMBOLS, parse_pairs};

/// Anything that can judge whether a sentence's brackets are balanced.
pub trait BracketsChecker {
    /// Returns `Ok(true)` when balanced, `Ok(false)` when not, or the reason
    /// the sentence could not be checked.
    fn check(&self, sentence: &str) -> CheckResult<bool>;
}

/// Outcome of checking one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceReport {
    /// Whether the brackets are balanced.
    pub balanced: bool,
    /// Number of characters in the input.
    pub length: usize,
    /// Number of bracket characters left after clearing ignorable symbols.
    pub bracket_count: usize,
    /// Number of bracket characters that could not be matched.
    pub unmatched: usize,
    /// Algorithm that produced the verdict.
    pub strategy: MatchStrategy,
}

/// Checks sentences against a fixed set of bracket pairs and ignorable symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketsValidator {
    pairs: Vec<BracketPair>,
    ignorable: BTreeSet<char>,
    alphabet: BTreeSet<char>,
    strategy: MatchStrategy,
}

impl Default for BracketsValidator {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_BRACKET_PAIRS.to_vec(),
            DEFAULT_IGNORABLE_SYMBOLS.iter().copied(),
            MatchStrategy::default(),
        )
    }
}

impl BracketsValidator {
    /// Build a validator from pair strings and ignorable characters.
    ///
    /// Each pair must be exactly two characters (opening then closing).
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidPair`] for the first malformed pair.
    pub fn new<P, S, I>(pairs: P, ignorable_symbols: I) -> CheckResult<Self>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = char>,
    {
        let pairs = parse_pairs(pairs)?;
        Ok(Self::from_parts(pairs, ignorable_symbols, MatchStrategy::default()))
    }

    /// Build a validator from already-parsed pairs.
    pub fn from_parts<I>(
        pairs: Vec<BracketPair>,
        ignorable_symbols: I,
        strategy: MatchStrategy,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let ignorable: BTreeSet<char> = ignorable_symbols.into_iter().collect();
        let alphabet = pairs
            .iter()
            .flat_map(|p| [p.open(), p.close()])
            .chain(ignorable.iter().copied())
            .collect();
        Self {
            pairs,
            ignorable,
            alphabet,
            strategy,
        }
    }

    /// Use `strategy` for the balance step.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Configured bracket pairs, in configuration order.
    pub fn pairs(&self) -> &[BracketPair] {
        &self.pairs
    }

    /// Characters removed before the balance step.
    pub const fn ignorable_symbols(&self) -> &BTreeSet<char> {
        &self.ignorable
    }

    /// Every character a sentence may contain.
    pub const fn allowed_alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Algorithm used for the balance step.
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Reject empty sentences and sentences with characters outside the alphabet.
    ///
    /// # Errors
    ///
    /// [`CheckError::EmptyInput`] or [`CheckError::InvalidSymbol`] naming the
    /// first offending character.
    pub fn validate(&self, sentence: &str) -> CheckResult<()> {
        if sentence.is_empty() {
            return Err(CheckError::EmptyInput);
        }
        if let Some((position, symbol)) = sentence
            .chars()
            .enumerate()
            .find(|(_, c)| !self.alphabet.contains(c))
        {
            return Err(CheckError::InvalidSymbol { symbol, position });
        }
        Ok(())
    }

    /// Copy of `sentence` without ignorable symbols.
    pub fn clear(&self, sentence: &str) -> String {
        sentence
            .chars()
            .filter(|c| !self.ignorable.contains(c))
            .collect()
    }

    /// Whether an already-cleared sequence reduces to nothing.
    pub fn is_balanced(&self, cleared: &str) -> bool {
        self.unmatched(cleared).is_empty()
    }

    fn unmatched(&self, cleared: &str) -> Vec<char> {
        let symbols: Vec<char> = cleared.chars().collect();
        self.strategy.reduce(&symbols, &self.pairs)
    }

    /// Check `sentence` and describe the result.
    ///
    /// # Errors
    ///
    /// Same as [`BracketsChecker::check`].
    #[tracing::instrument(skip_all, fields(len = sentence.len(), strategy = %self.strategy))]
    pub fn report(&self, sentence: &str) -> CheckResult<BalanceReport> {
        self.validate(sentence)?;
        let cleared = self.clear(sentence);
        let unmatched = self.unmatched(&cleared);
        let report = BalanceReport {
            balanced: unmatched.is_empty(),
            length: sentence.chars().count(),
            bracket_count: cleared.chars().count(),
            unmatched: unmatched.len(),
            strategy: self.strategy,
        };
        tracing::debug!(
            balanced = report.balanced,
            unmatched = report.unmatched,
            "brackets checked"
        );
        Ok(report)
    }
}

impl BracketsChecker for BracketsValidator {
    #[tracing::instrument(skip_all, fields(len = sentence.len()))]
    fn check(&self, sentence: &str) -> CheckResult<bool> {
        self.validate(sentence)?;
        Ok(self.is_balanced(&self.clear(sentence)))
    }
}
