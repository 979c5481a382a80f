//! Local and private address policy
//!
//! Blocks hosts that only make sense inside a private network:
//! - Loopback, RFC 1918 private and link-local IPv4 ranges
//! - The unspecified (`0.0.0.0`) and limited broadcast addresses
//! - Domains under a reserved top-level label, or without any dot
//!
//! IPv6 literals are not filtered.

use std::net::Ipv4Addr;

use crate::core::constants::local_domains;

/// True when `address` is loopback, private, link-local, unspecified or broadcast.
///
/// ```
/// use std::net::Ipv4Addr;
/// use urlformat::policy::is_local_ipv4;
///
/// assert!(is_local_ipv4(Ipv4Addr::new(192, 168, 1, 1)));
/// assert!(!is_local_ipv4(Ipv4Addr::new(1, 0, 255, 249)));
/// ```
pub fn is_local_ipv4(address: Ipv4Addr) -> bool {
    address.is_loopback()          // 127.0.0.0/8
        || address.is_private()    // 10/8, 172.16/12, 192.168/16
        || address.is_link_local() // 169.254.0.0/16
        || address.is_unspecified()
        || address.is_broadcast()
}

/// True when `domain` has no dot or ends in a reserved top-level label.
///
/// Trailing root dots are ignored and labels compare case-insensitively.
pub fn is_local_domain(domain: &str) -> bool {
    if !domain.contains('.') {
        return true;
    }
    let top_level = domain
        .trim_end_matches('.')
        .rsplit('.')
        .next()
        .unwrap_or_default();

    local_domains::TOP_LEVEL
        .iter()
        .any(|label| label.eq_ignore_ascii_case(top_level))
}
