//! Minimal proof-of-work ledger: SHA-256 linked blocks, a nonce search and
//! whole-chain validation. Single node, in memory.

pub mod block;
pub mod chain;
pub mod constants;
pub mod error;
pub mod hash;
pub mod pow;

pub use block::Block;
pub use chain::Chain;
pub use error::{ChainViolation, Error, Result};
pub use hash::{digest, Hash};
