use std::fmt;
use std::str::FromStr;

use bitvec::{order::Lsb0, view::BitView};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BloomError;
use crate::hash::keccak256_digest;
use crate::hex::{HexInput, bytes_to_hex, to_byte_array};

/// Size of the receipt logs bloom in bytes (2048 bits).
pub const BLOOM_BYTE_LENGTH: usize = 256;

/// Probes per candidate, per the yellowpaper.
pub const BLOOM_BITS: usize = 3;

const BLOOM_BIT_MASK: u16 = 2047;

/// Big-endian u16 at `offset`. Kept as a named helper so the index
/// derivation below stays independently verifiable.
pub fn read_u16_be(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}

/// Derives the three bit positions a candidate occupies in a logs bloom.
///
/// The first six bytes of the candidate's Keccak-256 digest are read as
/// three consecutive big-endian 16-bit words, each reduced mod 2048. The
/// three probes are slices of a single digest rather than independent
/// hashes; digest bits are uniform enough that the filter behaves as a
/// standard 3-probe Bloom filter.
pub fn bloom_indices(candidate: &[u8]) -> [u16; BLOOM_BITS] {
    let digest = keccak256_digest(candidate);
    [
        read_u16_be(&digest, 0) & BLOOM_BIT_MASK,
        read_u16_be(&digest, 2) & BLOOM_BIT_MASK,
        read_u16_be(&digest, 4) & BLOOM_BIT_MASK,
    ]
}

/// A 2048-bit Ethereum receipt logs bloom, externally supplied and
/// read-only. Parse one from its canonical hex form with [`FromStr`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bloom([u8; BLOOM_BYTE_LENGTH]);

impl Bloom {
    pub const fn new(bytes: [u8; BLOOM_BYTE_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOOM_BYTE_LENGTH] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Tests a single bit, index in `[0, 2047]`.
    ///
    /// The buffer is the big-endian image of the 2048-bit filter value, so
    /// bit index 0 lives in the least-significant bit of the LAST byte and
    /// index 2047 in the most-significant bit of the first. This matches
    /// the reference Ethereum clients; getting it backwards makes every
    /// membership test silently disagree with the network.
    pub fn bit(&self, index: u16) -> bool {
        let index = usize::from(index & BLOOM_BIT_MASK);
        let bits = self.0.view_bits::<Lsb0>();
        bits[(BLOOM_BYTE_LENGTH - 1 - index / 8) * 8 + index % 8]
    }

    /// True iff all three probe bits for `candidate` are set. False
    /// positives are inherent Bloom filter behavior; false negatives
    /// cannot occur for genuinely inserted members.
    pub fn contains_input(&self, candidate: &[u8]) -> bool {
        bloom_indices(candidate).into_iter().all(|idx| self.bit(idx))
    }
}

impl Default for Bloom {
    fn default() -> Self {
        Self([0u8; BLOOM_BYTE_LENGTH])
    }
}

impl FromStr for Bloom {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = to_byte_array(Some(HexInput::Text(s)))
            .map_err(|_| BloomError::InvalidBloom)?;
        let data: [u8; BLOOM_BYTE_LENGTH] =
            bytes.try_into().map_err(|_| BloomError::InvalidBloom)?;
        Ok(Self(data))
    }
}

impl fmt::Display for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_hex(&self.0))
    }
}

impl fmt::Debug for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bloom").field(&bytes_to_hex(&self.0)).finish()
    }
}

impl Serialize for Bloom {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&bytes_to_hex(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bloom {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
