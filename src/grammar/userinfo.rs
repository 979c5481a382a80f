//! Userinfo (`username[:password]`) grammar

use super::script::is_accepted;

/// True when `userinfo` is a non-empty username without colons, optionally
/// followed by `:` and a password.
///
/// Only the first colon separates the two parts; later colons belong to the
/// password, which may also be empty (`user:`).
pub fn is_valid_userinfo(userinfo: &str) -> bool {
    let (username, password) = match userinfo.split_once(':') {
        Some((username, password)) => (username, password),
        None => (userinfo, ""),
    };
    !username.is_empty() && is_accepted(username) && is_accepted(password)
}
