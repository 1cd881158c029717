//! Seed absorption and state diffusion
//!
//! A [`StateConditioner`] owns the N-byte state buffer used while a generator
//! is being constructed. The seed is XOR-folded into the buffer, then repeated
//! diffusion passes spread every seed bit across all blocks.
//!
//! # Diffusion
//!
//! One pass runs `2 * num_blocks` rounds. Round `i` mixes block `i % n` into
//! block `(i + 1) % n`:
//!
//! ```text
//! block1 ^= H(block0) ^ H(block1) ^ block0
//! ```
//!
//! Rounds update the buffer in place, so each round sees the output of the
//! previous one. When both blocks are byte-identical, block1 is first XORed
//! with `1, 2, ..., 32` so the two digests cannot cancel out.

pub mod params;

pub use params::{derive_parameters, ParameterSet};

use crate::core::hasher::{hash_block, Block, BLOCK_SIZE};
use crate::core::PrngError;

/// Owns the state buffer during construction
#[derive(Debug, Clone)]
pub struct StateConditioner {
    buffer: Vec<u8>,
    num_blocks: usize,
}

/// Check that `size` is a usable state buffer length
pub fn validate_state_size(size: usize) -> Result<(), PrngError> {
    if size % BLOCK_SIZE != 0 || size <= BLOCK_SIZE {
        return Err(PrngError::InvalidStateSize {
            size,
            block: BLOCK_SIZE,
        });
    }
    Ok(())
}

impl StateConditioner {
    /// Create a conditioner of `size` bytes and absorb `seed` into it
    ///
    /// Seed byte `i` is XORed into `buffer[i % size]`, so seeds shorter or
    /// longer than the buffer are both absorbed completely.
    ///
    /// # Errors
    /// - [`PrngError::InvalidStateSize`] unless `size % 32 == 0 && size > 32`
    /// - [`PrngError::EmptySeed`] if `seed` is empty
    ///
    /// # Example
    /// ```
    /// use prng_core_rs::conditioning::StateConditioner;
    ///
    /// let cond = StateConditioner::new(64, &[0xAB, 0xCD]).unwrap();
    /// assert_eq!(cond.buffer()[0], 0xAB);
    /// assert_eq!(cond.buffer()[1], 0xCD);
    /// assert_eq!(cond.num_blocks(), 2);
    /// ```
    pub fn new(size: usize, seed: &[u8]) -> Result<Self, PrngError> {
        validate_state_size(size)?;
        if seed.is_empty() {
            return Err(PrngError::EmptySeed);
        }

        let mut buffer = vec![0u8; size];
        for (i, byte) in seed.iter().enumerate() {
            buffer[i % size] ^= byte;
        }

        Ok(Self {
            buffer,
            num_blocks: size / BLOCK_SIZE,
        })
    }

    /// Wrap an existing buffer without absorbing anything
    ///
    /// Useful for driving single diffusion rounds on a hand-built state.
    pub fn from_buffer(buffer: Vec<u8>) -> Result<Self, PrngError> {
        validate_state_size(buffer.len())?;
        let num_blocks = buffer.len() / BLOCK_SIZE;
        Ok(Self { buffer, num_blocks })
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of 32-byte blocks
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Consume the conditioner and hand back the buffer
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    /// Run one full diffusion pass (`2 * num_blocks` rounds)
    pub fn diffuse(&mut self) {
        for round in 0..2 * self.num_blocks {
            self.diffuse_round(round);
        }
        log::trace!(
            "diffusion pass complete: {} blocks, {} rounds",
            self.num_blocks,
            2 * self.num_blocks
        );
    }

    /// Run a single diffusion round
    ///
    /// Round `round` reads block `round % n` and updates block
    /// `(round + 1) % n`.
    pub fn diffuse_round(&mut self, round: usize) {
        let idx0 = round % self.num_blocks;
        let idx1 = (round + 1) % self.num_blocks;

        let block0 = self.block(idx0);
        let mut block1 = self.block(idx1);

        if block0 == block1 {
            let start = idx1 * BLOCK_SIZE;
            for j in 0..BLOCK_SIZE {
                let salt = (j + 1) as u8;
                self.buffer[start + j] ^= salt;
                block1[j] ^= salt;
            }
        }

        let digest0 = hash_block(&block0);
        let digest1 = hash_block(&block1);

        let target = &mut self.buffer[idx1 * BLOCK_SIZE..(idx1 + 1) * BLOCK_SIZE];
        for (j, byte) in target.iter_mut().enumerate() {
            *byte ^= digest0[j] ^ digest1[j] ^ block0[j];
        }
    }

    /// Pack the buffer into little-endian u64 words (length N / 8)
    ///
    /// # Example
    /// ```
    /// use prng_core_rs::conditioning::StateConditioner;
    ///
    /// let cond = StateConditioner::new(64, &[0x01, 0x02]).unwrap();
    /// let words = cond.extract_u64();
    /// assert_eq!(words.len(), 8);
    /// assert_eq!(words[0], 0x0201);
    /// ```
    pub fn extract_u64(&self) -> Vec<u64> {
        self.buffer
            .chunks_exact(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect()
    }

    fn block(&self, index: usize) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(&self.buffer[index * BLOCK_SIZE..(index + 1) * BLOCK_SIZE]);
        block
    }
}
