//! Block hash primitive
//!
//! The diffusion pass only ever hashes whole 32-byte blocks, so the primitive
//! is exposed as a pure `[u8; 32] -> [u8; 32]` function over SHA-256.

use sha2::{Digest, Sha256};

/// Size in bytes of a state block and of a block digest
pub const BLOCK_SIZE: usize = 32;

/// One state block (or one digest)
pub type Block = [u8; BLOCK_SIZE];

/// Hash a single block with SHA-256
///
/// # Example
/// ```
/// use prng_core_rs::core::hasher::hash_block;
///
/// let a = hash_block(&[0u8; 32]);
/// let b = hash_block(&[0u8; 32]);
/// assert_eq!(a, b);
/// ```
pub fn hash_block(block: &Block) -> Block {
    let mut hasher = Sha256::new();
    hasher.update(block);
    hasher.finalize().into()
}
