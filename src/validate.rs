//! Structural predicates for the textual encodings this library accepts.
//! All of them are silent: malformed input yields `false`, never an error.

fn is_prefixed_hex_of_len(value: &str, digits: usize) -> bool {
    match value.strip_prefix("0x") {
        Some(body) => {
            body.len() == digits && body.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Syntactic ICAP check: `XE`, two check digits, then 30 or 31 base-36
/// characters. The IBAN checksum itself is not verified here.
fn is_icap_address(value: &str) -> bool {
    let bytes = value.as_bytes();
    matches!(bytes.len(), 34 | 35)
        && bytes.starts_with(b"XE")
        && bytes[2..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4..].iter().all(|b| b.is_ascii_alphanumeric())
}

/// True iff `value` is a 20-byte `0x` hex address or a syntactically valid
/// ICAP address.
pub fn is_address(value: &str) -> bool {
    is_prefixed_hex_of_len(value, 40) || is_icap_address(value)
}

/// True iff `value` decodes to exactly 256 bytes of logs bloom.
pub fn is_bloom(value: &str) -> bool {
    is_prefixed_hex_of_len(value, 512)
}

/// True iff `value` decodes to exactly 32 bytes of log topic.
pub fn is_topic(value: &str) -> bool {
    is_prefixed_hex_of_len(value, 64)
}
