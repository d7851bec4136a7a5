//! Reduction of bracket sequences to their unmatched remainder.
//!
//! A sequence is balanced when it reduces to nothing. Two reducers are
//! available:
//!
//! - [`MatchStrategy::Stack`] scans once, popping whenever the top of the
//!   stack and the next character form a configured pair. O(n).
//! - [`MatchStrategy::Removal`] repeatedly deletes the leftmost literal
//!   occurrence of each pair, in configuration order, until a full pass
//!   removes nothing. Each pass is linear; deep nesting of alternating pair
//!   types needs one pass per level.
//!
//! Both agree whenever no character belongs to more than one pair. When pairs
//! do share a character the pass order decides the outcome, so
//! [`MatchStrategy::Stack`] defers to the removal reducer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pair::BracketPair;

/// Algorithm used to decide whether a cleared sequence is balanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MatchStrategy {
    /// Single-pass shared stack with strict cross-pair nesting. Falls back to
    /// [`MatchStrategy::Removal`] when configured pairs share a character.
    #[default]
    Stack,
    /// Repeated removal of adjacent pairs in configuration order.
    Removal,
}

impl MatchStrategy {
    /// Returns the strategy name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Removal => "removal",
        }
    }

    /// Reduce `symbols` and return whatever could not be matched.
    pub fn reduce(self, symbols: &[char], pairs: &[BracketPair]) -> Vec<char> {
        match self {
            Self::Stack if !pairs_share_symbols(pairs) => reduce_by_stack(symbols, pairs),
            Self::Stack | Self::Removal => reduce_by_removal(symbols, pairs),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack reduction: push each character unless it closes the one on top.
pub fn reduce_by_stack(symbols: &[char], pairs: &[BracketPair]) -> Vec<char> {
    let mut stack: Vec<char> = Vec::with_capacity(symbols.len());
    for &c in symbols {
        let closes_top = stack
            .last()
            .is_some_and(|&top| pairs.iter().any(|p| p.matches(top, c)));
        if closes_top {
            stack.pop();
        } else {
            stack.push(c);
        }
    }
    stack
}

/// Removal reduction: delete adjacent pairs until a full pass changes nothing.
///
/// Deleting the leftmost occurrence of one pair until none is left always
/// ends in the same sequence, which a stack scan limited to that pair
/// computes directly.
pub fn reduce_by_removal(symbols: &[char], pairs: &[BracketPair]) -> Vec<char> {
    let mut working = symbols.to_vec();
    loop {
        let before = working.len();
        for pair in pairs {
            working = reduce_by_stack(&working, std::slice::from_ref(pair));
        }
        if working.len() == before {
            return working;
        }
    }
}

/// Whether any character belongs to more than one pair.
fn pairs_share_symbols(pairs: &[BracketPair]) -> bool {
    let mut seen = std::collections::BTreeSet::new();
    pairs.iter().any(|p| {
        let mut symbols = vec![p.open()];
        if p.close() != p.open() {
            symbols.push(p.close());
        }
        symbols.into_iter().any(|c| !seen.insert(c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::parse_pairs;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn both(s: &str, pairs: &[&str]) -> (bool, bool) {
        let pairs = parse_pairs(pairs).unwrap();
        let symbols = chars(s);
        (
            reduce_by_stack(&symbols, &pairs).is_empty(),
            reduce_by_removal(&symbols, &pairs).is_empty(),
        )
    }

    #[test]
    fn balanced_single_pair() {
        for s in ["()", "(())", "()()", "(()(()))"] {
            assert_eq!(both(s, &["()"]), (true, true), "{s}");
        }
    }

    #[test]
    fn unbalanced_single_pair() {
        for s in ["(", ")", "(()", ")(", "())("] {
            assert_eq!(both(s, &["()"]), (false, false), "{s}");
        }
    }

    #[test]
    fn multiple_pairs_nest() {
        assert_eq!(both("({[]})", &["()", "{}", "[]"]), (true, true));
        assert_eq!(both("(}", &["()", "{}"]), (false, false));
    }

    #[test]
    fn crossed_pairs_are_rejected() {
        assert_eq!(both("([)]", &["()", "[]"]), (false, false));
    }

    #[test]
    fn symmetric_pair() {
        assert_eq!(both("||||", &["||"]), (true, true));
        assert_eq!(both("|||", &["||"]), (false, false));
    }

    #[test]
    fn removal_keeps_unmatched_remainder() {
        let pairs = parse_pairs(["()"]).unwrap();
        assert_eq!(reduce_by_removal(&chars("(()))"), &pairs), vec![')']);
        assert_eq!(reduce_by_stack(&chars("(()))"), &pairs), vec![')']);
    }

    #[test]
    fn removal_order_matters_when_pairs_share_characters() {
        // 'b' closes "ab" and opens "bb": removing "bb" first strands the 'a's.
        assert_eq!(both("aabb", &["bb", "ab"]), (true, false));
    }

    #[test]
    fn stack_strategy_defers_to_removal_when_pairs_share_characters() {
        let pairs = parse_pairs(["bb", "ab"]).unwrap();
        let symbols = chars("aabb");
        assert_eq!(MatchStrategy::Stack.reduce(&symbols, &pairs), vec!['a', 'a']);
        assert_eq!(MatchStrategy::Removal.reduce(&symbols, &pairs), vec!['a', 'a']);
    }

    #[test]
    fn shared_symbols_detection() {
        assert!(!pairs_share_symbols(&parse_pairs(["()", "[]", "||"]).unwrap()));
        assert!(pairs_share_symbols(&parse_pairs(["bb", "ab"]).unwrap()));
        assert!(pairs_share_symbols(&parse_pairs(["()", ")("]).unwrap()));
        assert!(pairs_share_symbols(&parse_pairs(["()", "()"]).unwrap()));
    }

    /// Delete the leftmost occurrence one at a time, exactly as described.
    fn remove_one_at_a_time(symbols: &[char], pairs: &[BracketPair]) -> Vec<char> {
        let mut working = symbols.to_vec();
        let mut needs_pass = true;
        while needs_pass {
            needs_pass = false;
            for pair in pairs {
                while let Some(at) = working.windows(2).position(|w| pair.matches(w[0], w[1])) {
                    working.drain(at..at + 2);
                    needs_pass = true;
                }
            }
        }
        working
    }

    #[test]
    fn removal_matches_one_at_a_time_deletion() {
        let pair_sets: [&[&str]; 3] = [&["()", "[]", "||"], &["bb", "ab"], &["()", ")("]];
        let samples = [
            "aabb", "abab", "bbaa", "([)]", "(|)|", "||()[]", ")(()", "())(()", "((||[]))",
            "ab(b)a", "|(|)|",
        ];
        for pairs in pair_sets {
            let pairs = parse_pairs(pairs).unwrap();
            for s in samples {
                let symbols = chars(s);
                assert_eq!(
                    reduce_by_removal(&symbols, &pairs),
                    remove_one_at_a_time(&symbols, &pairs),
                    "{s} with {pairs:?}"
                );
            }
        }
    }

    #[test]
    fn removal_handles_large_flat_input() {
        let pairs = parse_pairs(["()", "[]"]).unwrap();
        let symbols = chars(&"()[]".repeat(500_000));
        assert!(reduce_by_removal(&symbols, &pairs).is_empty());

        let mut unbalanced = symbols;
        unbalanced.push('(');
        assert_eq!(reduce_by_removal(&unbalanced, &pairs), vec!['(']);
    }

    #[test]
    fn empty_sequence_is_balanced() {
        assert_eq!(both("", &["()"]), (true, true));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::Stack);
        assert_eq!(MatchStrategy::Stack.to_string(), "stack");
        assert_eq!(MatchStrategy::Removal.as_str(), "removal");
    }
}
