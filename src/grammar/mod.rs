//! Host and credential grammar
//!
//! Each host shape is recognised by a named predicate. [`HostShape::of`]
//! applies them in priority order: IPv6 literal, IPv4 literal, domain name.

pub mod domain;
pub mod ipv4;
pub mod ipv6;
pub mod script;
pub mod userinfo;

use std::net::Ipv4Addr;

pub use domain::is_domain_name;
pub use ipv4::parse_ipv4_literal;
pub use ipv6::{is_ipv6_address, is_ipv6_literal};
pub use userinfo::is_valid_userinfo;

/// The bucket a decoded host falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostShape {
    /// Bracketed IPv6 address
    Ipv6,
    /// Dotted-quad IPv4 address
    Ipv4(Ipv4Addr),
    /// Domain name
    Domain,
    /// None of the above
    Unrecognized,
}

impl HostShape {
    /// Classify a percent-decoded host.
    pub fn of(host: &str) -> Self {
        if is_ipv6_literal(host) {
            HostShape::Ipv6
        } else if let Some(address) = parse_ipv4_literal(host) {
            HostShape::Ipv4(address)
        } else if is_domain_name(host) {
            HostShape::Domain
        } else {
            HostShape::Unrecognized
        }
    }
}
