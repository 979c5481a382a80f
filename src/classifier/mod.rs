//! URL classification pipeline
//!
//! [`classify`] runs a candidate through, in order:
//! 1. the nil/blank gate
//! 2. structural decomposition (scheme, userinfo, host)
//! 3. the scheme allow-list (a missing scheme or host fails here too)
//! 4. the userinfo grammar
//! 5. host-shape dispatch and the per-shape policy checks
//!
//! The first failing step decides the outcome.

pub mod messages;
pub mod options;
pub mod outcome;

pub use messages::MessageTable;
pub use options::Options;
pub use outcome::Outcome;

use log::{debug, trace};
use memchr::memchr;
use serde_json::Value;

use crate::grammar::{HostShape, is_valid_userinfo};
use crate::policy::{is_local_domain, is_local_ipv4};
use crate::uri::{ParsedUri, decompose};

/// Classify a candidate URL under `options`.
///
/// ```
/// use urlformat::{Options, Outcome, classify};
///
/// let options = Options::default();
/// assert_eq!(classify(Some("http://example.com"), &options), Outcome::ValidUrl);
/// assert_eq!(classify(Some("ftp://example.com"), &options), Outcome::InvalidScheme);
/// assert_eq!(classify(None, &options), Outcome::NilOrBlankUrl);
/// ```
pub fn classify(value: Option<&str>, options: &Options) -> Outcome {
    let outcome = match gate(value, options) {
        Gate::Decided(outcome) => outcome,
        Gate::Proceed(value) => classify_url(value, options),
    };
    debug!("{value:?} -> {outcome}");
    outcome
}

/// Classify an arbitrary JSON value.
///
/// `null` is the absent value and strings are classified as URLs; numbers,
/// booleans, arrays and objects are never URLs.
pub fn classify_value(value: &Value, options: &Options) -> Outcome {
    match value {
        Value::Null => classify(None, options),
        Value::String(text) => classify(Some(text), options),
        other => {
            debug!("non-string value {other} -> {}", Outcome::NilOrBlankUrl);
            Outcome::NilOrBlankUrl
        }
    }
}

enum Gate<'a> {
    Decided(Outcome),
    Proceed(&'a str),
}

fn gate<'a>(value: Option<&'a str>, options: &Options) -> Gate<'a> {
    match value {
        None if options.allows_nil() => Gate::Decided(Outcome::ValidUrl),
        None => Gate::Decided(Outcome::NilOrBlankUrl),
        Some(text) if text.trim().is_empty() => {
            if options.allows_blank() {
                Gate::Decided(Outcome::ValidUrl)
            } else {
                Gate::Decided(Outcome::NilOrBlankUrl)
            }
        }
        Some(text) => Gate::Proceed(text),
    }
}

fn classify_url(value: &str, options: &Options) -> Outcome {
    let ParsedUri {
        scheme,
        userinfo,
        host,
    } = match decompose(value) {
        Ok(parsed) => parsed,
        Err(reason) => {
            trace!("malformed URI: {reason}");
            return Outcome::InvalidUrl;
        }
    };

    let (Some(scheme), Some(host)) = (scheme, host) else {
        trace!("missing scheme or host");
        return Outcome::InvalidScheme;
    };
    if !options.allows_scheme(&scheme) {
        trace!("scheme '{scheme}' is not allowed");
        return Outcome::InvalidScheme;
    }

    if let Some(userinfo) = userinfo
        && !is_valid_userinfo(&userinfo)
    {
        trace!("userinfo rejected");
        return Outcome::InvalidUserinfo;
    }

    let shape = HostShape::of(&host);
    trace!("host '{host}' has shape {shape:?}");
    match shape {
        // Local IPv6 ranges are not filtered.
        HostShape::Ipv6 => Outcome::ValidUrl,
        HostShape::Ipv4(address) => {
            if options.filters_local() && is_local_ipv4(address) {
                Outcome::LocalUrl
            } else {
                Outcome::ValidUrl
            }
        }
        HostShape::Domain => check_domain(value, &host, options),
        HostShape::Unrecognized => Outcome::InvalidUrl,
    }
}

fn check_domain(value: &str, host: &str, options: &Options) -> Outcome {
    // The whole input, so spaces in the path or query count as well.
    if memchr(b' ', value.as_bytes()).is_some() {
        return Outcome::SpaceSymbol;
    }
    if options.filters_local() && is_local_domain(host) {
        return Outcome::LocalUrl;
    }
    if options.checks_public_suffix() && !options.is_valid_suffix(host) {
        return Outcome::PublicSuffixRejected;
    }
    Outcome::ValidUrl
}
