use crate::{constants::MINED_PREFIX, Block};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningStats {
    /// Candidate blocks hashed, including the winning one.
    pub attempts: u64,
    pub elapsed: Duration,
}

/// The fixed difficulty target: the stored hash starts with `"00"`.
pub fn is_mined(block: &Block) -> bool {
    block.hash().starts_with(MINED_PREFIX)
}

/// Rebuild the block with nonce, nonce + 1, ... until one is mined.
///
/// Unbounded. The search starts by re-deriving the block at its own nonce, so an
/// already mined block comes back unchanged. The nonce wraps to 0 after
/// `u64::MAX`, so a search started near the top may return a smaller nonce.
pub fn mine_block(block: &Block) -> Block {
    mine_block_with_stats(block).0
}

pub fn mine_block_with_stats(block: &Block) -> (Block, MiningStats) {
    let start = Instant::now();
    let mut attempts = 1u64;
    let mut mined = block.with_nonce(block.nonce());

    while !is_mined(&mined) {
        mined = mined.with_nonce(mined.nonce().wrapping_add(1));
        attempts += 1;
    }

    let stats = MiningStats {
        attempts,
        elapsed: start.elapsed(),
    };
    debug!(
        "nonce {} found after {} attempts in {:?}",
        mined.nonce(),
        attempts,
        stats.elapsed
    );
    info!("Mined block at timestamp {} with hash {}", mined.timestamp(), mined.hash());
    (mined, stats)
}
