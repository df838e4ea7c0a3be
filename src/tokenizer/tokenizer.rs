//! Whitespace tokenizer shared by index construction and query parsing.
//!
//! Records and queries must agree on token boundaries, so both sides call
//! the same function: lower-case the input, split on runs of whitespace.
//! Token comparison everywhere else is exact string equality.

/// Tokenize text into an ordered list of lower-cased terms.
///
/// Splitting is on one-or-more whitespace characters; empty pieces from
/// leading or trailing whitespace are discarded. Token order follows the
/// input and is preserved so downstream result ordering is deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}
