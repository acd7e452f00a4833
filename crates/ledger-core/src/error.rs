use thiserror::Error;

/// Why a chain failed validation. `index` is the position of the offending block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainViolation {
    #[error("block {index} is not mined")]
    NotMined { index: usize },

    #[error("block {index} hash does not match its contents")]
    HashMismatch { index: usize },

    #[error("block {index} previous hash does not match its predecessor")]
    BrokenLink { index: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("block {index}: invalid {field} {value:?}, expected 64 lowercase hex characters")]
    InvalidDigest {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
