//! Classify strings as well-formed, policy-compliant URLs.
//!
//! Every candidate maps to exactly one [`Outcome`]: either
//! [`Outcome::ValidUrl`] or a single reason code for the first check that
//! rejected it. Checks cover the scheme allow-list, userinfo, host shape
//! (IPv6, IPv4 or internationalized domain), spaces, local and private
//! hosts, and optionally the public suffix list.
//!
//! ```
//! use urlformat::{Options, Outcome, classify};
//!
//! let options = Options::default().filter_local(true);
//! assert_eq!(classify(Some("https://кириллица.рф/"), &options), Outcome::ValidUrl);
//! assert_eq!(classify(Some("http://192.168.1.1"), &options), Outcome::LocalUrl);
//! assert_eq!(classify(Some("http://example.com/a b"), &options), Outcome::SpaceSymbol);
//! ```

pub mod batch;
pub mod classifier;
pub mod config;
pub mod core;
pub mod grammar;
pub mod policy;
pub mod reporting;
pub mod suffix;
pub mod ui;
pub mod uri;

pub use classifier::{MessageTable, Options, Outcome, classify, classify_value};
pub use crate::core::error::{Result, UrlFormatError};
pub use suffix::{PublicSuffixList, SuffixList};
