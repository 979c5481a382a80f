//! Dotted-quad IPv4 literals

use std::net::Ipv4Addr;

/// Parse a host written as four decimal octets (0-255, no leading zeros).
///
/// Returns `None` for anything else, including octal/hex forms, fewer or
/// more than four parts, and trailing dots.
pub fn parse_ipv4_literal(host: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = host.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    part.parse().ok()
}

/// Octet as written inside an IPv6 literal.
///
/// Same 0-255 range, but a two-digit form with a leading zero (`01`) is
/// tolerated there while three-digit forms must start with 1 or 2.
pub(crate) fn is_embedded_octet(part: &str) -> bool {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if bytes.len() == 3 && !matches!(bytes[0], b'1' | b'2') {
        return false;
    }
    part.parse::<u16>().is_ok_and(|value| value <= 255)
}

/// Dotted quad made of embedded octets, used for the IPv4 tail of an IPv6 literal.
pub(crate) fn is_embedded_ipv4(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    parts.len() == 4 && parts.iter().all(|part| is_embedded_octet(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_addresses() {
        assert_eq!(
            parse_ipv4_literal("1.0.255.249"),
            Some(Ipv4Addr::new(1, 0, 255, 249))
        );
        assert_eq!(parse_ipv4_literal("0.0.0.0"), Some(Ipv4Addr::UNSPECIFIED));
        assert_eq!(
            parse_ipv4_literal("255.255.255.255"),
            Some(Ipv4Addr::BROADCAST)
        );
    }

    #[test]
    fn test_rejects_out_of_range_octets() {
        assert_eq!(parse_ipv4_literal("256.0.0.1"), None);
        assert_eq!(parse_ipv4_literal("1.2.3.1000"), None);
    }

    #[test]
    fn test_rejects_leading_zeros() {
        assert_eq!(parse_ipv4_literal("01.2.3.4"), None);
        assert_eq!(parse_ipv4_literal("1.2.3.00"), None);
        assert!(parse_ipv4_literal("1.2.3.0").is_some());
    }

    #[test]
    fn test_rejects_wrong_part_count() {
        assert_eq!(parse_ipv4_literal("1.2.3"), None);
        assert_eq!(parse_ipv4_literal("2.2.2.2.2"), None);
        assert_eq!(parse_ipv4_literal("1.2.3.4."), None);
        assert_eq!(parse_ipv4_literal(""), None);
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(parse_ipv4_literal("1.2.3.a"), None);
        assert_eq!(parse_ipv4_literal("1.2.3.+4"), None);
        assert_eq!(parse_ipv4_literal("1.1.1.com"), None);
    }

    #[test]
    fn test_embedded_octets() {
        assert!(is_embedded_octet("01"));
        assert!(is_embedded_octet("199"));
        assert!(is_embedded_octet("255"));
        assert!(!is_embedded_octet("001"));
        assert!(!is_embedded_octet("256"));
        assert!(is_embedded_ipv4("192.0.2.33"));
        assert!(!is_embedded_ipv4("192.0.2"));
    }
}
