//! Public suffix list lookups
//!
//! The classifier only needs one question answered: is this host a name
//! registered under a suffix from the list? [`SuffixList`] is that seam;
//! [`PublicSuffixList`] answers it from a `public_suffix_list.dat` file.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use publicsuffix::{List, Psl};

use crate::core::error::{Result, UrlFormatError};

/// Source of public suffix answers, shared read-only across threads
pub trait SuffixList: fmt::Debug + Send + Sync {
    /// True when `host` has a registrable name under a listed suffix.
    fn is_valid_suffix(&self, host: &str) -> bool;
}

/// Public suffix list backed by the `publicsuffix` crate
///
/// Both the ICANN and PRIVATE sections count. Hosts whose top-level label
/// is not listed are rejected rather than matched by the implicit `*` rule.
pub struct PublicSuffixList {
    list: List,
}

impl fmt::Debug for PublicSuffixList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicSuffixList").finish_non_exhaustive()
    }
}

impl PublicSuffixList {
    /// Parse a list from its textual form.
    pub fn parse(text: &str) -> Result<Self> {
        let list = text
            .parse::<List>()
            .map_err(|e| UrlFormatError::PublicSuffix(e.to_string()))?;
        Ok(Self { list })
    }

    /// Load a list from a `public_suffix_list.dat` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(UrlFormatError::FileNotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)?;
        debug!("Loaded public suffix list from {}", path.display());
        Self::parse(&text)
    }
}

impl SuffixList for PublicSuffixList {
    fn is_valid_suffix(&self, host: &str) -> bool {
        let Some(name) = normalize(host) else {
            return false;
        };
        self.list
            .domain(name.as_bytes())
            .is_some_and(|domain| domain.suffix().is_known())
    }
}

// Lower-cased host without its root dot; `None` when nothing can match.
fn normalize(host: &str) -> Option<String> {
    let name = host.trim().to_lowercase();
    let name = name.strip_suffix('.').unwrap_or(&name);
    if name.is_empty() || name.starts_with('.') || name.contains("..") {
        return None;
    }
    Some(name.to_string())
}
