use eth_logs_bloom::{is_address, is_bloom, is_topic};

const VALID_BLOOM: &str = "0x08200081a06415012858022200cc48143008908c0000824e5405b41520795989024800380a8d4b198910b422b231086c3a62cc402e2573070306f180446440ad401016c3e30781115844d028c89028008a12240c0a2c184c0425b90d7af0530002f981221aa565809132000818c82805023a132a25150400010530ba0080420a10a137054454021882505080a6b6841082d84151010400ba8100c8802d440d060388084052c1300105a0868410648a40540c0f0460e190400807008914361118000a5202e94445ccc088311050052c8002807205212a090d90ba428030266024a910644b1042011aaae05391cc2094c45226400000380880241282ce4e12518c";

#[cfg(test)]
mod address_tests {
    use super::*;

    #[test]
    fn accepts_hex_address() {
        assert!(is_address("0x494bfa3a4576ba6cfe835b0deb78834f0c3e3994"));
    }

    #[test]
    fn rejects_truncated_hex_address() {
        assert!(!is_address("0x494bfa3a4576ba6cfe878834f0c3e3994"));
    }

    #[test]
    fn rejects_unprefixed_hex_address() {
        assert!(!is_address("494bfa3a4576ba6cfe835b0deb78834f0c3e3994"));
    }

    #[test]
    fn rejects_non_hex_garbage() {
        assert!(!is_address("0"));
        assert!(!is_address("false"));
        assert!(!is_address(""));
    }

    #[test]
    fn accepts_icap_address() {
        assert!(is_address("XE472EVKU3CGMJF2YQ0J9RO1Y90BC0LDFZ"));
    }

    #[test]
    fn rejects_icap_with_bad_check_digits() {
        assert!(!is_address("XEA72EVKU3CGMJF2YQ0J9RO1Y90BC0LDFZ"));
    }

    #[test]
    fn rejects_icap_of_wrong_length() {
        assert!(!is_address("XE47"));
        assert!(!is_address("XE472EVKU3CGMJF2YQ0J9RO1Y90BC0LDFZAAAA"));
    }
}

#[cfg(test)]
mod bloom_tests {
    use super::*;

    #[test]
    fn accepts_receipt_bloom() {
        assert!(is_bloom(VALID_BLOOM));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(!is_bloom("invalid"));
        assert!(!is_bloom(""));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_bloom("0x1234"));
        // One digit short of the required 512.
        assert!(!is_bloom(&VALID_BLOOM[..VALID_BLOOM.len() - 1]));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!is_bloom(&VALID_BLOOM[2..]));
    }
}

#[cfg(test)]
mod topic_tests {
    use super::*;

    #[test]
    fn accepts_32_byte_topic() {
        assert!(is_topic(
            "0x000000000000000000000000b3bb037d2f2341a1c2775d51909a3d944597987d"
        ));
    }

    #[test]
    fn rejects_short_topic() {
        assert!(!is_topic("0x4d61"));
    }

    #[test]
    fn rejects_non_hex_topic() {
        assert!(!is_topic("233"));
        assert!(!is_topic("false"));
    }

    #[test]
    fn rejects_unprefixed_topic() {
        assert!(!is_topic(
            "000000000000000000000000b3bb037d2f2341a1c2775d51909a3d944597987d"
        ));
    }
}
