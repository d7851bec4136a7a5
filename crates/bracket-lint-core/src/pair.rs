//! Bracket pairs and the default alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// Bracket pairs used when none are configured.
pub const DEFAULT_BRACKET_PAIRS: &[BracketPair] = &[BracketPair::new('(', ')')];

/// Characters stripped before the balance check when none are configured.
pub const DEFAULT_IGNORABLE_SYMBOLS: &[char] = &['\n', '\t', '\r', ' '];

/// One opening and one closing character that must match.
///
/// Pairs are written as two-character strings (`"()"`, `"{}"`, `"<>"`).
/// The two characters may be identical (`"||"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketPair {
    open: char,
    close: char,
}

impl BracketPair {
    /// Create a pair from its opening and closing characters.
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// The opening character.
    pub const fn open(&self) -> char {
        self.open
    }

    /// The closing character.
    pub const fn close(&self) -> char {
        self.close
    }

    /// Whether `open` followed by `close` forms this pair.
    pub fn matches(&self, open: char, close: char) -> bool {
        self.open == open && self.close == close
    }
}

impl FromStr for BracketPair {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(open), Some(close), None) => Ok(Self::new(open, close)),
            _ => Err(CheckError::InvalidPair {
                pair: s.to_string(),
                len: s.chars().count(),
            }),
        }
    }
}

impl fmt::Display for BracketPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open, self.close)
    }
}

/// Parse a list of pair strings, failing on the first malformed entry.
pub fn parse_pairs<I, S>(pairs: I) -> Result<Vec<BracketPair>, CheckError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs.into_iter().map(|p| p.as_ref().parse()).collect()
}
