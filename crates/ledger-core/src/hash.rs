//! SHA-256 content addressing for blocks.

use crate::constants::{HASH_HEX_SIZE, HASH_SIZE};
use sha2::{Digest, Sha256};

pub type Hash = [u8; HASH_SIZE];

/// Raw SHA-256 digest of `input`.
pub fn digest_bytes(input: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(input);
    let digest = hasher.finalize();
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&digest[..]);
    out
}

/// SHA-256 of `input` as 64 lowercase hex characters.
///
/// Leading zero bytes are kept, so the output length never varies.
pub fn digest(input: &[u8]) -> String {
    hex::encode(digest_bytes(input))
}

/// True if `s` looks like something [`digest`] produced.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == HASH_HEX_SIZE && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_empty_input() {
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(digest(b""), expected);
    }

    #[test]
    fn digest_abc() {
        let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        assert_eq!(digest(b"abc"), expected);
    }

    #[test]
    fn digest_keeps_leading_zeros() {
        // SHA-256("1600000000161") starts with a zero byte.
        let out = digest(b"1600000000161");
        assert_eq!(out.len(), HASH_HEX_SIZE);
        assert!(out.starts_with("0004"));
    }

    #[test]
    fn digest_is_deterministic() {
        let a = digest(b"previous-hash-1600000000-7");
        let b = digest(b"previous-hash-1600000000-7");
        assert_eq!(a, b);
    }

    #[test]
    fn digest_matches_bytes() {
        let raw = digest_bytes(b"abc");
        assert_eq!(hex::encode(raw), digest(b"abc"));
        assert_eq!(raw[0], 0xba);
    }

    #[test]
    fn hex_digest_shape() {
        assert!(is_hex_digest(&digest(b"x")));
        assert!(!is_hex_digest(""));
        assert!(!is_hex_digest(&"A".repeat(HASH_HEX_SIZE)));
        assert!(!is_hex_digest(&"0".repeat(HASH_HEX_SIZE - 1)));
        assert!(!is_hex_digest(&"g".repeat(HASH_HEX_SIZE)));
    }
}
