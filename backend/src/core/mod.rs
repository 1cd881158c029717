//! Core primitives shared by every stage of the engine
//!
//! - **hasher**: the 32-byte block hash used by the diffusion pass
//! - **error**: the engine-wide error type

pub mod error;
pub mod hasher;

pub use error::{ErrorKind, PrngError};
pub use hasher::{hash_block, Block, BLOCK_SIZE};
