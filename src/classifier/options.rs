use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::core::constants::schemes;
use crate::suffix::SuffixList;

/// Classification policy, built once and shared read-only between calls
///
/// ```
/// use urlformat::{Options, Outcome, classify};
///
/// let options = Options::default().with_schemes(["ftp"]).filter_local(true);
/// assert_eq!(classify(Some("ftp://example.com"), &options), Outcome::ValidUrl);
/// assert_eq!(classify(Some("ftp://192.168.1.1"), &options), Outcome::LocalUrl);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    allowed_schemes: FxHashSet<String>,
    allow_nil: bool,
    allow_blank: bool,
    filter_local: bool,
    check_public_suffix: bool,
    suffix_list: Option<Arc<dyn SuffixList>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allowed_schemes: schemes::DEFAULT.iter().map(|s| s.to_string()).collect(),
            allow_nil: false,
            allow_blank: false,
            filter_local: false,
            check_public_suffix: false,
            suffix_list: None,
        }
    }
}

impl Options {
    /// Replace the allowed schemes; they are matched case-insensitively.
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_schemes = schemes
            .into_iter()
            .map(|scheme| scheme.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Accept an absent value.
    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    /// Accept an empty or whitespace-only value.
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Reject loopback, private and local-network hosts.
    pub fn filter_local(mut self, filter: bool) -> Self {
        self.filter_local = filter;
        self
    }

    /// Check domains against a public suffix list.
    ///
    /// Without a list attached through [`Options::with_suffix_list`] every
    /// domain is rejected while this is on.
    pub fn check_public_suffix(mut self, check: bool) -> Self {
        self.check_public_suffix = check;
        self
    }

    /// Attach a public suffix list and turn the check on.
    pub fn with_suffix_list(mut self, list: Arc<dyn SuffixList>) -> Self {
        self.suffix_list = Some(list);
        self.check_public_suffix = true;
        self
    }

    pub fn allowed_schemes(&self) -> &FxHashSet<String> {
        &self.allowed_schemes
    }

    /// True when `scheme` (any case) is allowed.
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_schemes.contains(&scheme.to_ascii_lowercase())
    }

    pub fn allows_nil(&self) -> bool {
        self.allow_nil
    }

    pub fn allows_blank(&self) -> bool {
        self.allow_blank
    }

    pub fn filters_local(&self) -> bool {
        self.filter_local
    }

    pub fn checks_public_suffix(&self) -> bool {
        self.check_public_suffix
    }

    /// Answer from the attached list; no list means no name is valid.
    pub fn is_valid_suffix(&self, host: &str) -> bool {
        self.suffix_list
            .as_ref()
            .is_some_and(|list| list.is_valid_suffix(host))
    }
}
