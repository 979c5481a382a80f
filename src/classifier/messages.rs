use rustc_hash::FxHashMap;

use super::Outcome;
use crate::core::constants::messages;

/// Reason-code to message table handed to whoever reports outcomes
///
/// Starts from the default wording; individual entries can be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    entries: FxHashMap<Outcome, String>,
}

impl Default for MessageTable {
    fn default() -> Self {
        let entries = Outcome::ALL
            .into_iter()
            .map(|outcome| (outcome, default_message(outcome).to_string()))
            .collect();
        Self { entries }
    }
}

impl MessageTable {
    /// Replace the message for one outcome.
    pub fn with_message(mut self, outcome: Outcome, message: impl Into<String>) -> Self {
        self.entries.insert(outcome, message.into());
        self
    }

    /// Message for `outcome`.
    pub fn message(&self, outcome: Outcome) -> &str {
        match self.entries.get(&outcome) {
            Some(message) => message,
            None => default_message(outcome),
        }
    }
}

/// Built-in wording for `outcome`
pub fn default_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::ValidUrl => messages::VALID_URL,
        Outcome::NilOrBlankUrl => messages::NIL_OR_BLANK_URL,
        Outcome::InvalidUrl => messages::INVALID_URL,
        Outcome::InvalidScheme => messages::INVALID_SCHEME,
        Outcome::InvalidUserinfo => messages::INVALID_USERINFO,
        Outcome::LocalUrl => messages::LOCAL_URL,
        Outcome::SpaceSymbol => messages::SPACE_SYMBOL,
        Outcome::PublicSuffixRejected => messages::PUBLIC_SUFFIX,
    }
}
