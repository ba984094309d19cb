use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomError>;

/// The display strings below (including the "hexidecimal" spelling) are a
/// compatibility contract with pre-existing consumers of this library and
/// must stay verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BloomError {
    #[error("Invalid bloom given")]
    InvalidBloom,

    #[error("Invalid topic")]
    InvalidTopic,

    #[error("Invalid contract address given: \"{0}\"")]
    InvalidContractAddress(String),

    #[error("Invalid ethereum address given: \"{0}\"")]
    InvalidEthereumAddress(String),

    #[error("cannot convert null value to array")]
    NullInput,

    #[error("invalid hexidecimal string")]
    InvalidHex,

    #[error("hex string must have 0x prefix")]
    MissingHexPrefix,
}
