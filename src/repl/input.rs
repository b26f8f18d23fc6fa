//! Input Tokenizing
//!
//! Normalizes one raw line of user input into command words.

/// Splits a line into lowercase words.
///
/// Surrounding whitespace is trimmed, the text is lowercased, and interior
/// runs of whitespace collapse into single separators. A blank line yields
/// an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
