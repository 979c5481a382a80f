//! Accepted-script character class
//!
//! Hosts and credentials may be written in Latin, Cyrillic, Arabic or
//! Georgian, mixed with script-neutral ("Common") characters such as digits,
//! punctuation and the underscore.

use once_cell::sync::Lazy;
use regex::Regex;

const ACCEPTED_SCRIPTS: &str = r"\p{Common}\p{Latin}\p{Cyrillic}\p{Arabic}\p{Georgian}";

// Longest leading run of accepted characters
static ACCEPTED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[{ACCEPTED_SCRIPTS}]*"))
        .expect("Failed to compile accepted-script pattern")
});

/// Byte length of the longest prefix of `text` made of accepted characters.
pub fn accepted_prefix_len(text: &str) -> usize {
    ACCEPTED_PREFIX.find(text).map_or(0, |m| m.end())
}

/// True when every character of `text` belongs to the accepted scripts.
pub fn is_accepted(text: &str) -> bool {
    accepted_prefix_len(text) == text.len()
}
