//! PRNG Core - Rust Engine
//!
//! Hash-seeded deterministic pseudo-random number generator.
//!
//! # Architecture
//!
//! - **core**: Block hash primitive and error types
//! - **conditioning**: Seed absorption, diffusion and parameter derivation
//! - **rng**: Generator state machine, snapshot store and the device facade
//! - **request**: Run configuration and generation requests
//! - **output**: Text state dump format
//! - **checkpoint**: JSON save/load of a device
//!
//! # Critical Invariants
//!
//! 1. Same seed + same state size produce the same stream, forever
//! 2. `mult_a ≡ 1 (mod 4)`, `mult_b` odd, `xor_a` even, `xor_b` odd
//! 3. Construction is the only fallible step; draws are total

// Module declarations
pub mod checkpoint;
pub mod conditioning;
pub mod core;
pub mod output;
pub mod request;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::DeviceCheckpoint;
pub use conditioning::{derive_parameters, ParameterSet, StateConditioner};
pub use crate::core::{hash_block, ErrorKind, PrngError, BLOCK_SIZE};
pub use request::{GenerationRequest, RunConfig, ValueKind};
pub use rng::{GeneratorState, RandomNumberDevice, SnapshotStore};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn prng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::device::PyRandomNumberDevice>()?;
    Ok(())
}
