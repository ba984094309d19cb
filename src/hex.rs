use crate::error::{BloomError, Result};

/// Input accepted at the hashing and membership boundaries: either a
/// `0x`-prefixed hex string or raw bytes. The shape is resolved exactly once,
/// in [`to_byte_array`]; everything downstream works on plain bytes.
#[derive(Debug, Clone, Copy)]
pub enum HexInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(value: &'a str) -> Self {
        HexInput::Text(value)
    }
}

impl<'a> From<&'a String> for HexInput<'a> {
    fn from(value: &'a String) -> Self {
        HexInput::Text(value)
    }
}

impl<'a> From<&'a [u8]> for HexInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        HexInput::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for HexInput<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        HexInput::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HexInput<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        HexInput::Bytes(value)
    }
}

/// Resolves an optional [`HexInput`] into an owned byte vector.
///
/// Hex strings must carry the `0x` prefix and contain only hex digits; an
/// odd digit count is zero-padded on the left before decoding. Byte inputs
/// are copied, never aliased. `None` stands in for the absent value of the
/// wire format and is always an error.
pub fn to_byte_array(value: Option<HexInput<'_>>) -> Result<Vec<u8>> {
    let Some(value) = value else {
        return Err(BloomError::NullInput);
    };

    match value {
        HexInput::Text(text) => decode_hex(text),
        HexInput::Bytes(bytes) => Ok(bytes.to_vec()),
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let Some(digits) = text.strip_prefix("0x") else {
        // Well-formed digits without the prefix get the more specific error.
        if text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BloomError::MissingHexPrefix);
        }
        return Err(BloomError::InvalidHex);
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BloomError::InvalidHex);
    }

    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        hex::decode(&padded).map_err(|_| BloomError::InvalidHex)
    } else {
        hex::decode(digits).map_err(|_| BloomError::InvalidHex)
    }
}

/// Encodes bytes as a `0x`-prefixed lowercase hex string, two digits per
/// byte in sequence order.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Left-pads the hex digits of `value` with `'0'` until at least `width`
/// digits, keeping a `0x` prefix in place if one was present.
pub fn pad_left(value: &str, width: usize) -> String {
    let (prefix, digits) = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(rest) => ("0x", rest),
        None => ("", value),
    };

    let padding = width.saturating_sub(digits.len());
    format!("{prefix}{}{digits}", "0".repeat(padding))
}
