use crate::{
    error::{ChainViolation, Error, Result},
    hash::is_hex_digest,
    pow, Block,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Append-only, in-memory sequence of blocks. Insertion order is chain order.
///
/// `add` does no checking; call [`Chain::is_valid`] or [`Chain::verify`] to
/// check the whole chain. Not synchronised: wrap it in a lock to share it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn add(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Last block, if any.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// See [`pow::mine_block`].
    pub fn mine(block: &Block) -> Block {
        pow::mine_block(block)
    }

    /// See [`pow::is_mined`].
    pub fn is_mined(block: &Block) -> bool {
        pow::is_mined(block)
    }

    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Whole-chain check, stopping at the first violation.
    ///
    /// An empty chain is valid. A single block must be mined and untampered.
    /// Otherwise every adjacent `(previous, current)` pair must both be mined,
    /// both hash to their stored value, and `current` must point at `previous`.
    pub fn verify(&self) -> std::result::Result<(), ChainViolation> {
        let result = match self.blocks.as_slice() {
            [] => Ok(()),
            [only] => check_block(0, only),
            blocks => blocks
                .windows(2)
                .enumerate()
                .try_for_each(|(i, pair)| check_pair(i + 1, &pair[0], &pair[1])),
        };
        if let Err(violation) = &result {
            warn!("chain of {} blocks is invalid: {}", self.len(), violation);
        }
        result
    }

    /// Parse a JSON array of blocks, rejecting malformed block hashes.
    ///
    /// Hashes are taken as written and previous hashes are not checked at all;
    /// whether they are correct and linked is for `verify`.
    pub fn from_json(json: &str) -> Result<Self> {
        let chain: Chain = serde_json::from_str(json)?;
        for (index, block) in chain.iter().enumerate() {
            if !is_hex_digest(block.hash()) {
                return Err(Error::InvalidDigest {
                    index,
                    field: "hash",
                    value: block.hash().to_string(),
                });
            }
        }
        Ok(chain)
    }
}

fn check_block(index: usize, block: &Block) -> std::result::Result<(), ChainViolation> {
    if !pow::is_mined(block) {
        return Err(ChainViolation::NotMined { index });
    }
    if !block.is_consistent() {
        return Err(ChainViolation::HashMismatch { index });
    }
    Ok(())
}

fn check_pair(
    index: usize,
    previous: &Block,
    current: &Block,
) -> std::result::Result<(), ChainViolation> {
    if !pow::is_mined(previous) {
        return Err(ChainViolation::NotMined { index: index - 1 });
    }
    if !pow::is_mined(current) {
        return Err(ChainViolation::NotMined { index });
    }
    if !current.is_consistent() {
        return Err(ChainViolation::HashMismatch { index });
    }
    if !previous.is_consistent() {
        return Err(ChainViolation::HashMismatch { index: index - 1 });
    }
    if current.previous_hash() != previous.hash() {
        return Err(ChainViolation::BrokenLink { index });
    }
    Ok(())
}

impl FromIterator<Block> for Chain {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Block> for Chain {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}

impl IntoIterator for Chain {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Mine `count` linked blocks on top of an empty chain, one second apart.
///
/// Timestamps saturate at `i64::MAX`.
pub fn mine_chain(count: usize, start_timestamp: i64) -> Chain {
    let mut chain = Chain::new();
    for i in 0..count {
        let previous_hash = chain.tip().map(|b| b.hash().to_string()).unwrap_or_default();
        let timestamp = start_timestamp.saturating_add(i as i64);
        let candidate = Block::new(previous_hash, timestamp, 0);
        chain.add(Chain::mine(&candidate));
    }
    chain
}
