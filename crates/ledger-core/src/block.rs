use crate::hash::digest;
use serde::{Deserialize, Serialize};

/// A block binding `(previous_hash, timestamp, nonce)` to its SHA-256 digest.
///
/// Fields are private and there are no setters: the hash is computed once in
/// [`Block::new`] and any change to the inputs means building a new block.
/// Deserialized blocks keep whatever hash the document carried, which is how
/// tampering is detected by [`Chain::verify`](crate::chain::Chain::verify).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    previous_hash: String,
    timestamp: i64,
    nonce: u64,
    hash: String,
}

impl Block {
    pub fn new(previous_hash: impl Into<String>, timestamp: i64, nonce: u64) -> Self {
        let previous_hash = previous_hash.into();
        let hash = block_hash(&previous_hash, timestamp, nonce);
        Self {
            previous_hash,
            timestamp,
            nonce,
            hash,
        }
    }

    /// First block of a chain: empty previous hash, nonce 0. Not mined.
    pub fn genesis(timestamp: i64) -> Self {
        Self::new(String::new(), timestamp, 0)
    }

    /// A fresh block with the same previous hash and timestamp but another nonce.
    pub fn with_nonce(&self, nonce: u64) -> Self {
        Self::new(self.previous_hash.clone(), self.timestamp, nonce)
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The hash stored at construction (or as read from a document).
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Re-derives the hash from the current field values.
    pub fn calculated_hash(&self) -> String {
        block_hash(&self.previous_hash, self.timestamp, self.nonce)
    }

    /// Stored hash agrees with a fresh recomputation.
    pub fn is_consistent(&self) -> bool {
        self.hash == self.calculated_hash()
    }
}

/// Digest of `previous_hash ‖ timestamp ‖ nonce`, integers in decimal, no separators.
pub fn block_hash(previous_hash: &str, timestamp: i64, nonce: u64) -> String {
    let preimage = format!("{previous_hash}{timestamp}{nonce}");
    digest(preimage.as_bytes())
}
