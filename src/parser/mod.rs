//! Recipient header parsing: RFC 2047 decoding and address extraction
//!
//! Takes one raw `To`/`Cc`/`Bcc` header value and produces normalized
//! `(email, name)` pairs. Recipients are split on commas, so a quoted
//! display name that itself contains a comma (`"Doe, Jane" <jane@x.com>`)
//! is mis-split and loses the part before the comma. This is a known
//! limitation of the legacy splitting behavior, kept as-is.

use regex::Regex;
use std::sync::LazyLock;

/// Permissive pattern for bare addresses in segments without angle brackets
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Invalid ADDRESS_REGEX pattern")
});

/// A single recipient extracted from an address header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    /// Email address (lowercase, trimmed)
    pub email: String,
    /// Display name, if the header carried one
    pub name: Option<String>,
}

/// Decode RFC 2047 encoded-words in a header value.
///
/// Returns the input unchanged when it carries no encoded-word structure
/// or cannot be parsed at all. Undecodable byte sequences are replaced,
/// never an error.
#[must_use]
pub fn decode_header_value(raw: &str) -> String {
    // mailparse expects a full "Key: value" header line
    let mut line = b"To: ".to_vec();
    line.extend_from_slice(raw.as_bytes());
    line.extend_from_slice(b"\r\n");

    match mailparse::parse_header(&line) {
        Ok((header, _idx)) => header.get_value(),
        Err(_) => raw.to_string(),
    }
}

/// Extract all recipient addresses from a raw header value.
///
/// The header is decoded, split on commas, and each segment is parsed
/// independently. Addresses equal to `own_address` (case-insensitive)
/// are dropped, as are segments yielding no address. Segment order is
/// preserved. Never fails; the worst case is an empty vector.
#[must_use]
pub fn extract_addresses(raw: &str, own_address: &str) -> Vec<AddressEntry> {
    let decoded = decode_header_value(raw);
    let own_lower = own_address.to_lowercase();

    let mut entries = Vec::new();
    for segment in decoded.split(',') {
        let (email, name) = split_segment(segment);
        if email.is_empty() {
            continue;
        }
        let email = email.to_lowercase();
        if email == own_lower {
            continue;
        }
        entries.push(AddressEntry { email, name });
    }

    entries
}

/// Split one comma-delimited segment into an address and an optional name.
///
/// A segment containing both `<` and `>` is treated as `Name <address>`:
/// the address runs from the first `<` to the first `>` after it, and the
/// name is whatever precedes the `<`, trimmed and stripped of surrounding
/// quotes. Anything else falls back to the first bare-address match.
fn split_segment(segment: &str) -> (String, Option<String>) {
    if let Some(lt) = segment.find('<') {
        if segment.contains('>') {
            let name = segment[..lt].trim().trim_matches(['"', '\'']).trim();
            let email = segment[lt + 1..]
                .split('>')
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            let name = if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            };
            return (email, name);
        }
    }

    let email = ADDRESS_REGEX
        .find(segment)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    (email, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str, name: Option<&str>) -> AddressEntry {
        AddressEntry {
            email: email.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_header() {
        assert!(extract_addresses("", "me@x.com").is_empty());
    }

    #[test]
    fn test_header_without_addresses() {
        assert!(extract_addresses("undisclosed recipients", "me@x.com").is_empty());
        assert!(extract_addresses("hello world, foo bar", "me@x.com").is_empty());
    }

    #[test]
    fn test_bare_address() {
        assert_eq!(
            extract_addresses("alice@x.com", "me@x.com"),
            vec![entry("alice@x.com", None)]
        );
    }

    #[test]
    fn test_bare_address_lowercased() {
        assert_eq!(
            extract_addresses("BOB@Y.COM", "me@x.com"),
            vec![entry("bob@y.com", None)]
        );
    }

    #[test]
    fn test_named_recipients() {
        assert_eq!(
            extract_addresses(r#""Name" <a@b.com>, "Name2" <c@d.com>"#, "me@x.com"),
            vec![entry("a@b.com", Some("Name")), entry("c@d.com", Some("Name2"))]
        );
    }

    #[test]
    fn test_single_quotes_stripped() {
        assert_eq!(
            extract_addresses("'Bob Smith' <bob@y.com>", "me@x.com"),
            vec![entry("bob@y.com", Some("Bob Smith"))]
        );
    }

    #[test]
    fn test_self_exclusion_is_case_insensitive() {
        assert_eq!(
            extract_addresses("Me <ME@X.com>, Bob <bob@y.com>", "me@x.com"),
            vec![entry("bob@y.com", Some("Bob"))]
        );
    }

    #[test]
    fn test_empty_angle_brackets_dropped() {
        assert!(extract_addresses("<>", "me@x.com").is_empty());
        assert_eq!(
            extract_addresses("<>, bob@y.com", "me@x.com"),
            vec![entry("bob@y.com", None)]
        );
    }

    #[test]
    fn test_multiple_angle_brackets_uses_first_pair() {
        assert_eq!(
            extract_addresses("A <a@x.com> <b@y.com>", "me@x.com"),
            vec![entry("a@x.com", Some("A"))]
        );
    }

    #[test]
    fn test_base64_encoded_word() {
        // "José" in UTF-8 base64
        assert_eq!(
            extract_addresses("=?UTF-8?B?Sm9zw6k=?= <jose@x.com>", "me@x.com"),
            vec![entry("jose@x.com", Some("José"))]
        );
    }

    #[test]
    fn test_quoted_printable_encoded_word() {
        assert_eq!(
            extract_addresses("=?UTF-8?Q?Jos=C3=A9?= <jose@x.com>", "me@x.com"),
            vec![entry("jose@x.com", Some("José"))]
        );
    }

    #[test]
    fn test_comma_inside_quoted_name_mis_splits() {
        // Legacy behavior: the comma splits the quoted name, so the part
        // before it is lost and the remainder parses as the name.
        assert_eq!(
            extract_addresses(r#""Doe, Jane" <jane@x.com>"#, "me@x.com"),
            vec![entry("jane@x.com", Some("Jane"))]
        );
    }

    #[test]
    fn test_decode_passthrough_for_plain_values() {
        assert_eq!(decode_header_value("Bob <bob@y.com>"), "Bob <bob@y.com>");
        assert_eq!(decode_header_value(""), "");
    }

    #[test]
    fn test_decode_folded_value() {
        assert_eq!(
            decode_header_value("Bob <bob@y.com>,\r\n Carol <carol@z.com>"),
            "Bob <bob@y.com>, Carol <carol@z.com>"
        );
    }
}
