//! Bracketed IPv6 literals
//!
//! Accepted textual forms:
//!
//! | Form | Example |
//! |------|---------|
//! | full | `1:2:3:4:5:6:7:8` |
//! | compressed | `1::`, `1::8`, `::2:3:4:5:6:7:8`, `::` |
//! | link-local with zone | `fe80::7:8%eth0`, `fe80::7:8%1` |
//! | IPv4-mapped / translated | `::255.255.255.255`, `::ffff:255.255.255.255`, `::ffff:0:255.255.255.255` |
//! | IPv4-embedded | `2001:db8:3:4::192.0.2.33`, `64:ff9b::192.0.2.33`, `1:2:3:4:5:6:1.2.3.4` |

use super::ipv4::is_embedded_ipv4;

const LINK_LOCAL_PREFIX: &str = "fe80:";
const MAX_GROUPS: usize = 8;
const IPV4_TAIL_GROUPS: usize = MAX_GROUPS - 2;

/// True when `host` is `[` + an IPv6 address + `]`.
pub fn is_ipv6_literal(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .is_some_and(is_ipv6_address)
}

/// True when `text` is one of the accepted IPv6 textual forms, without brackets.
pub fn is_ipv6_address(text: &str) -> bool {
    if let Some((address, zone)) = text.split_once('%') {
        return is_zoned_link_local(address, zone);
    }
    if text.contains('.') {
        return is_ipv4_suffixed(text);
    }
    is_hex_address(text)
}

fn is_hex_group(group: &str) -> bool {
    (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit())
}

// Colon-separated hex groups; the empty string is zero groups.
fn hex_groups(text: &str) -> Option<usize> {
    if text.is_empty() {
        return Some(0);
    }
    let mut count = 0;
    for group in text.split(':') {
        if !is_hex_group(group) {
            return None;
        }
        count += 1;
    }
    Some(count)
}

fn is_hex_address(text: &str) -> bool {
    match text.split_once("::") {
        Some((left, right)) => match (hex_groups(left), hex_groups(right)) {
            (Some(l), Some(r)) => l + r < MAX_GROUPS,
            _ => false,
        },
        None => hex_groups(text) == Some(MAX_GROUPS),
    }
}

// `fe80:` followed by up to four `:` + 0-4 hex digit groups, then `%zone`.
fn is_zoned_link_local(address: &str, zone: &str) -> bool {
    if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }
    let Some(rest) = address.strip_prefix(LINK_LOCAL_PREFIX) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    let Some(rest) = rest.strip_prefix(':') else {
        return false;
    };
    let groups: Vec<&str> = rest.split(':').collect();
    groups.len() <= 4
        && groups
            .iter()
            .all(|g| g.len() <= 4 && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

// Hex groups worth six 16-bit words, then the IPv4 tail in place of the last two.
fn is_ipv4_suffixed(text: &str) -> bool {
    let Some(split) = text.rfind(':') else {
        return false;
    };
    let (head, ipv4) = (&text[..=split], &text[split + 1..]);
    if !is_embedded_ipv4(ipv4) {
        return false;
    }

    match head.split_once("::") {
        Some((left, right)) => {
            let right = match right.strip_suffix(':') {
                None if right.is_empty() => Some(0),
                Some(groups) if !groups.is_empty() => hex_groups(groups),
                _ => None,
            };
            match (hex_groups(left), right) {
                (Some(l), Some(r)) => l + r < IPV4_TAIL_GROUPS,
                _ => false,
            }
        }
        None => head.strip_suffix(':').and_then(hex_groups) == Some(IPV4_TAIL_GROUPS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_form() {
        assert!(is_ipv6_address("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(!is_ipv6_address("2001:0db8:85a3:0000:0000:8a2e:7334"));
        assert!(!is_ipv6_address("1:2:3:4:5:6:7:8:9"));
        assert!(!is_ipv6_address("12345::1"));
    }

    #[test]
    fn test_compressed_forms() {
        for text in [
            "::",
            "1::",
            "1:2:3:4:5:6:7::",
            "1::8",
            "2001:DB8::1",
            "::2:3:4:5:6:7:8",
            "::ffff:c000:0280",
            "1:2::8",
        ] {
            assert!(is_ipv6_address(text), "{text} should be accepted");
        }
        for text in ["1::2::3", ":1:2", "1:::2", "1:2:3:4::5:6:7:8", ""] {
            assert!(!is_ipv6_address(text), "{text} should be rejected");
        }
    }

    #[test]
    fn test_zoned_link_local() {
        assert!(is_ipv6_address("fe80::7:8%eth0"));
        assert!(is_ipv6_address("fe80::7:8%1"));
        assert!(!is_ipv6_address("fe80::7:8%"));
        assert!(!is_ipv6_address("fe80::7:8%eth-0"));
        assert!(!is_ipv6_address("2001::1%eth0"));
    }

    #[test]
    fn test_ipv4_suffixed_forms() {
        for text in [
            "::255.255.255.255",
            "::ffff:255.255.255.255",
            "::ffff:0:255.255.255.255",
            "2001:db8:3:4::192.0.2.33",
            "64:ff9b::192.0.2.33",
            "::abcd:1.2.3.4",
            "1:2:3:4:5::1.2.3.4",
            "1:2:3:4:5:6:1.2.3.4",
            "1::5:6:1.2.3.4",
        ] {
            assert!(is_ipv6_address(text), "{text} should be accepted");
        }
        for text in [
            "::ffff:256.1.1.1",
            "1:2:3:4:5:6::1.2.3.4",
            "1:2:3:4:5:1.2.3.4",
            "1:2:3:4:5:6:7:1.2.3.4",
            ":::1.2.3.4",
            "1::2::1.2.3.4",
            "1.2.3.4",
        ] {
            assert!(!is_ipv6_address(text), "{text} should be rejected");
        }
    }

    #[test]
    fn test_literal_requires_brackets() {
        assert!(is_ipv6_literal("[2001:DB8::1]"));
        assert!(!is_ipv6_literal("2001:DB8::1"));
        assert!(!is_ipv6_literal("[2001:DB8::1"));
        assert!(!is_ipv6_literal("[]"));
    }
}
