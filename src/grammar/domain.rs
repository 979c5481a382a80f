//! Internationalized domain names
//!
//! A domain is an optional `xn--` prefix and a run of accepted-script
//! characters, then a dot and a top-level label of 2 to 63 characters
//! that contains no ASCII digit, optionally followed by a root dot.
//!
//! The accepted-script class already covers `-`, `.`, `_` and the
//! Latin-only `xn--` prefix, so the labels before the top-level one need
//! no separate structure.

use super::script::accepted_prefix_len;
use crate::core::constants::domain::{MAX_TLD_LENGTH, MIN_TLD_LENGTH};

/// True when `host` has the shape of a domain name.
pub fn is_domain_name(host: &str) -> bool {
    // Every byte before the separating dot must be in the accepted class.
    let accepted_end = accepted_prefix_len(host);
    let tld_range = MIN_TLD_LENGTH..=MAX_TLD_LENGTH;
    let has_root_dot = host.ends_with('.');

    // Walk from the right so the top-level label grows one character at a time.
    let mut tld_chars = 0usize;
    for (index, c) in host.char_indices().rev() {
        if c.is_ascii_digit() || tld_chars > MAX_TLD_LENGTH + 1 {
            return false;
        }
        if c == '.' && index > 0 && index <= accepted_end {
            let fits = tld_range.contains(&tld_chars)
                || (has_root_dot && tld_chars > 0 && tld_range.contains(&(tld_chars - 1)));
            if fits {
                return true;
            }
        }
        tld_chars += 1;
    }
    false
}
