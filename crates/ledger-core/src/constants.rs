pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;
/// Hex prefix a block hash must start with to count as mined.
pub const MINED_PREFIX: &str = "00";
