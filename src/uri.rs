//! Structural decomposition of a candidate URL
//!
//! The raw value is first percent-encoded so that spaces and non-ASCII
//! characters survive parsing, then split into scheme, userinfo and host.
//! Only the host is decoded back; userinfo stays in its encoded form.

use std::fmt;

use crate::grammar::is_ipv6_literal;

/// Components extracted from a candidate URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    /// Scheme as written (case preserved)
    pub scheme: Option<String>,
    /// Encoded `username[:password]` section
    pub userinfo: Option<String>,
    /// Percent-decoded host; IPv6 literals keep their brackets
    pub host: Option<String>,
}

/// Why a candidate could not be split into URI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Text before the first `:` is not a scheme but the segment contains one
    SchemeSyntax,
    /// More than one `@` in the authority
    AmbiguousUserinfo,
    /// `[` or `]` outside of a bracketed host
    StrayBracket,
    /// Bracketed host is not an IPv6 address
    IpLiteral,
    /// Port is not made of digits
    Port,
    /// Host does not decode to UTF-8
    HostEncoding,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Malformed::SchemeSyntax => "invalid scheme syntax",
            Malformed::AmbiguousUserinfo => "more than one '@' in authority",
            Malformed::StrayBracket => "bracket outside of IP literal",
            Malformed::IpLiteral => "invalid IP literal",
            Malformed::Port => "non-numeric port",
            Malformed::HostEncoding => "host is not valid UTF-8",
        };
        write!(f, "{reason}")
    }
}

impl std::error::Error for Malformed {}

// Unreserved and reserved characters kept verbatim by the pre-encoding step.
fn is_kept(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.!~*'();/?:@&=+$,[]".contains(&byte)
}

/// Percent-encode every byte outside the URI unreserved and reserved sets.
///
/// `%` itself is encoded, so escapes already present in the input are
/// preserved literally through the host round trip.
pub fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if is_kept(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Split `value` into scheme, userinfo and host.
pub fn decompose(value: &str) -> Result<ParsedUri, Malformed> {
    let encoded = encode(value);
    let (scheme, rest) = split_scheme(&encoded)?;

    let (authority, tail) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?']).unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    if tail.contains(['[', ']']) {
        return Err(Malformed::StrayBracket);
    }

    let mut parsed = ParsedUri {
        scheme: scheme.map(str::to_string),
        ..ParsedUri::default()
    };

    if let Some(authority) = authority {
        let (userinfo, host) = split_authority(authority)?;
        let host = urlencoding::decode(host).map_err(|_| Malformed::HostEncoding)?;
        if host.starts_with('[') && !is_ipv6_literal(&host) {
            return Err(Malformed::IpLiteral);
        }
        parsed.userinfo = userinfo.map(str::to_string);
        parsed.host = Some(host.into_owned());
    }

    Ok(parsed)
}

/// True when `candidate` is a syntactically valid URI scheme.
pub fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// A reference without a scheme may not carry a colon in its first segment.
fn split_scheme(encoded: &str) -> Result<(Option<&str>, &str), Malformed> {
    let segment_end = encoded.find(['/', '?']).unwrap_or(encoded.len());
    match encoded[..segment_end].find(':') {
        Some(colon) if is_scheme(&encoded[..colon]) => {
            Ok((Some(&encoded[..colon]), &encoded[colon + 1..]))
        }
        Some(_) => Err(Malformed::SchemeSyntax),
        None => Ok((None, encoded)),
    }
}

fn split_authority(authority: &str) -> Result<(Option<&str>, &str), Malformed> {
    let (userinfo, host_port) = match authority.split_once('@') {
        Some((userinfo, host_port)) => {
            if host_port.contains('@') {
                return Err(Malformed::AmbiguousUserinfo);
            }
            if userinfo.contains(['[', ']']) {
                return Err(Malformed::StrayBracket);
            }
            (Some(userinfo), host_port)
        }
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port.find(']').ok_or(Malformed::StrayBracket)?;
        let (host, after) = host_port.split_at(close + 1);
        if after.is_empty() {
            (host, None)
        } else {
            let port = after.strip_prefix(':').ok_or(Malformed::StrayBracket)?;
            (host, Some(port))
        }
    } else {
        if host_port.contains(['[', ']']) {
            return Err(Malformed::StrayBracket);
        }
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if port.is_some_and(|port| !port.bytes().all(|b| b.is_ascii_digit())) {
        return Err(Malformed::Port);
    }

    Ok((userinfo, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &str) -> ParsedUri {
        decompose(value).unwrap()
    }

    #[test]
    fn test_encode_keeps_reserved_characters() {
        assert_eq!(
            encode("http://u:p@example.com/a?b=c&d"),
            "http://u:p@example.com/a?b=c&d"
        );
        assert_eq!(encode("[::1]"), "[::1]");
    }

    #[test]
    fn test_encode_escapes_unsafe_characters() {
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("100%"), "100%25");
        assert_eq!(encode("#frag"), "%23frag");
        assert_eq!(encode("рф"), "%D1%80%D1%84");
    }

    #[test]
    fn test_decompose_simple_url() {
        let uri = parse("http://example.com/path?query");
        assert_eq!(uri.scheme.as_deref(), Some("http"));
        assert_eq!(uri.host.as_deref(), Some("example.com"));
        assert_eq!(uri.userinfo, None);
    }

    #[test]
    fn test_decompose_keeps_scheme_case() {
        assert_eq!(parse("HttP://example.com").scheme.as_deref(), Some("HttP"));
    }

    #[test]
    fn test_decompose_userinfo_and_port() {
        let uri = parse("http://u:u:u@example.com:8000/");
        assert_eq!(uri.userinfo.as_deref(), Some("u:u:u"));
        assert_eq!(uri.host.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_decompose_decodes_host_only() {
        let uri = parse("http://us er@кириллица.рф");
        assert_eq!(uri.userinfo.as_deref(), Some("us%20er"));
        assert_eq!(uri.host.as_deref(), Some("кириллица.рф"));

        let uri = parse("http://ex ample.com");
        assert_eq!(uri.host.as_deref(), Some("ex ample.com"));
    }

    #[test]
    fn test_decompose_ipv6_literal() {
        let uri = parse("http://[2001:DB8::1]:443/x");
        assert_eq!(uri.host.as_deref(), Some("[2001:DB8::1]"));

        let uri = parse("http://[fe80::7:8%eth0]");
        assert_eq!(uri.host.as_deref(), Some("[fe80::7:8%eth0]"));
    }

    #[test]
    fn test_decompose_without_scheme() {
        let uri = parse("www.example.com");
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.host, None);

        let uri = parse("//example.com/path");
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.host.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_decompose_without_authority() {
        let uri = parse("http:/");
        assert_eq!(uri.scheme.as_deref(), Some("http"));
        assert_eq!(uri.host, None);

        let uri = parse("mailto:user@example.com");
        assert_eq!(uri.host, None);
    }

    #[test]
    fn test_decompose_empty_host() {
        assert_eq!(parse("http://").host.as_deref(), Some(""));
    }

    #[test]
    fn test_query_ends_authority() {
        let uri = parse("http://r?ksmorgas.com");
        assert_eq!(uri.host.as_deref(), Some("r"));
    }

    #[test]
    fn test_scheme_syntax() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("ht tp"));
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(decompose(" http://x.com"), Err(Malformed::SchemeSyntax));
        assert_eq!(decompose("1http://x.com"), Err(Malformed::SchemeSyntax));
        assert_eq!(decompose("http://a@b@c.com"), Err(Malformed::AmbiguousUserinfo));
        assert_eq!(decompose("http://example.com:80a"), Err(Malformed::Port));
        assert_eq!(decompose("http://exa[mple.com"), Err(Malformed::StrayBracket));
        assert_eq!(decompose("http://example.com/[x]"), Err(Malformed::StrayBracket));
        assert_eq!(decompose("http://[::1]x"), Err(Malformed::StrayBracket));
        assert_eq!(
            decompose("http://[2001:0db8:85a3:0000:0000:8a2e:7334]"),
            Err(Malformed::IpLiteral)
        );
    }
}
