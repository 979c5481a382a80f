use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of classifying one candidate
///
/// Variants are listed in the order the pipeline can produce them; each one
/// maps to a stable reason code used in configuration and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "valid_url")]
    ValidUrl,
    #[serde(rename = "nil_or_blank_url")]
    NilOrBlankUrl,
    #[serde(rename = "invalid_url")]
    InvalidUrl,
    #[serde(rename = "invalid_scheme")]
    InvalidScheme,
    #[serde(rename = "invalid_userinfo")]
    InvalidUserinfo,
    #[serde(rename = "local_url")]
    LocalUrl,
    #[serde(rename = "space_symbol")]
    SpaceSymbol,
    #[serde(rename = "public_suffix")]
    PublicSuffixRejected,
}

impl Outcome {
    /// Every outcome, in priority order
    pub const ALL: [Outcome; 8] = [
        Outcome::ValidUrl,
        Outcome::NilOrBlankUrl,
        Outcome::InvalidUrl,
        Outcome::InvalidScheme,
        Outcome::InvalidUserinfo,
        Outcome::LocalUrl,
        Outcome::SpaceSymbol,
        Outcome::PublicSuffixRejected,
    ];

    /// Reason code for this outcome
    pub fn code(self) -> &'static str {
        match self {
            Outcome::ValidUrl => "valid_url",
            Outcome::NilOrBlankUrl => "nil_or_blank_url",
            Outcome::InvalidUrl => "invalid_url",
            Outcome::InvalidScheme => "invalid_scheme",
            Outcome::InvalidUserinfo => "invalid_userinfo",
            Outcome::LocalUrl => "local_url",
            Outcome::SpaceSymbol => "space_symbol",
            Outcome::PublicSuffixRejected => "public_suffix",
        }
    }

    /// Look an outcome up by its reason code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|outcome| outcome.code() == code)
    }

    pub fn is_valid(self) -> bool {
        self == Outcome::ValidUrl
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unknown reason code '{s}'"))
    }
}
