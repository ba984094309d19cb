use sha3::{Digest, Keccak256};

use crate::error::Result;
use crate::hex::{HexInput, bytes_to_hex, to_byte_array};

/// Keccak-256 digest of raw bytes.
///
/// This is the original Keccak submission's padding as required by Ethereum,
/// not the later-standardized SHA3-256 (`sha3::Sha3_256` would produce
/// different digests for every input).
pub fn keccak256_digest(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Keccak-256 of a hex string or raw bytes, returned as a `0x`-prefixed
/// 64-digit hex string. Pure and deterministic.
pub fn keccak256<'a>(data: impl Into<HexInput<'a>>) -> Result<String> {
    let bytes = to_byte_array(Some(data.into()))?;
    Ok(bytes_to_hex(&keccak256_digest(&bytes)))
}
