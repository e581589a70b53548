//! # Input Tokenizer
//!
//! File: cli/src/common/input.rs
//!
//! Turns a raw line of user input into the set of words handed to the
//! `Responder`. Words are lowercased and split on whitespace; punctuation is
//! left attached to the word it touches.
//!
use std::collections::HashSet;

/// Splits `line` into a set of lowercase words.
pub fn tokenize(line: &str) -> HashSet<String> {
    line.split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_dedups() {
        let words = tokenize("  My Printer is slow, so SLOW \t");
        let expected: HashSet<String> = ["my", "printer", "is", "slow,", "so", "slow"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_tokenize_blank_line_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }
}
