//! Membership testing against the 2048-bit Ethereum receipt "logs bloom".
//!
//! Every block and transaction receipt carries a 256-byte Bloom filter
//! aggregating the addresses and topics of its logs. Off-chain consumers
//! (indexers, wallets, explorers) use it as a cheap pre-filter: only when a
//! candidate *might* be present is it worth fetching and scanning the full
//! logs.
//!
//! How a candidate maps onto the filter:
//!    * The candidate bytes (a 20-byte address or 32-byte topic) are hashed
//!      once with Keccak-256.
//!    * The first six digest bytes are read as three big-endian 16-bit
//!      words; each word mod 2048 names one bit of the filter.
//!    * The candidate is a probable member iff all three bits are set.
//!
//! Properties:
//!    * No false negatives: anything inserted into the source filter tests
//!      positive here.
//!    * False positives happen when unrelated candidates collide on all
//!      three bits; that is inherent, not a defect.
//!    * Everything is pure and synchronous; no state survives a call.
//!
//! Two API families share the same core test: silent predicates
//! ([`is_in_bloom`], [`is_address`], [`is_bloom`], [`is_topic`]) that fold
//! malformed input into `false`, and strict wrappers
//! ([`is_topic_in_bloom`], [`is_contract_address_in_bloom`],
//! [`is_user_ethereum_address_in_bloom`]) that surface it as an error.
//! Building a filter from logs is out of scope; filters are supplied by the
//! node and only read here.

mod bloom;
mod error;
mod hash;
mod hex;
mod membership;
mod validate;

pub use bloom::{
    BLOOM_BITS, BLOOM_BYTE_LENGTH, Bloom, bloom_indices, read_u16_be,
};
pub use error::{BloomError, Result};
pub use hash::{keccak256, keccak256_digest};
pub use hex::{HexInput, bytes_to_hex, pad_left, to_byte_array};
pub use membership::{
    is_contract_address_in_bloom, is_in_bloom, is_topic_in_bloom,
    is_user_ethereum_address_in_bloom,
};
pub use validate::{is_address, is_bloom, is_topic};
