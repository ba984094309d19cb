use tracing::{debug, trace};

use crate::bloom::{Bloom, bloom_indices};
use crate::error::{BloomError, Result};
use crate::hex::{HexInput, pad_left, to_byte_array};
use crate::validate::{is_address, is_bloom, is_topic};

/// Raw membership predicate: true iff all three probe bits derived from
/// `value` are set in `bloom`.
///
/// Silent so it can sit in hot filtering paths: a malformed bloom or
/// candidate yields `false` rather than an error. Callers that need to
/// distinguish malformed input from non-membership use the strict wrappers
/// below.
pub fn is_in_bloom<'a>(
    bloom: &str,
    value: impl Into<HexInput<'a>>,
) -> bool {
    let Ok(filter) = bloom.parse::<Bloom>() else {
        return false;
    };
    let Ok(candidate) = to_byte_array(Some(value.into())) else {
        return false;
    };

    let indices = bloom_indices(&candidate);
    trace!(?indices, "derived bloom probe positions");
    indices.into_iter().all(|idx| filter.bit(idx))
}

/// Membership test for a 32-byte log topic. Errors on a malformed bloom or
/// topic instead of folding those cases into `false`.
pub fn is_topic_in_bloom(bloom: &str, topic: &str) -> Result<bool> {
    if !is_bloom(bloom) {
        debug!("rejected malformed bloom");
        return Err(BloomError::InvalidBloom);
    }
    if !is_topic(topic) {
        debug!(topic, "rejected malformed topic");
        return Err(BloomError::InvalidTopic);
    }
    Ok(is_in_bloom(bloom, topic))
}

/// Membership test for a 20-byte contract address.
pub fn is_contract_address_in_bloom(
    bloom: &str,
    address: &str,
) -> Result<bool> {
    if !is_bloom(bloom) {
        debug!("rejected malformed bloom");
        return Err(BloomError::InvalidBloom);
    }
    if !is_address(address) {
        debug!(address, "rejected malformed contract address");
        return Err(BloomError::InvalidContractAddress(address.to_string()));
    }
    Ok(is_in_bloom(bloom, address))
}

/// Membership test for a 20-byte externally-owned account address.
///
/// User addresses land in the bloom as indexed event arguments, which the
/// EVM encodes as full 32-byte words. The address is therefore left-padded
/// to 64 hex digits before hashing; contract addresses enter the bloom raw
/// and must NOT be padded, hence the two separate wrappers.
pub fn is_user_ethereum_address_in_bloom(
    bloom: &str,
    address: &str,
) -> Result<bool> {
    if !is_bloom(bloom) {
        debug!("rejected malformed bloom");
        return Err(BloomError::InvalidBloom);
    }
    if !is_address(address) {
        debug!(address, "rejected malformed ethereum address");
        return Err(BloomError::InvalidEthereumAddress(address.to_string()));
    }
    let padded = pad_left(address, 64);
    Ok(is_in_bloom(bloom, padded.as_str()))
}
