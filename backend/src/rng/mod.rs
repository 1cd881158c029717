//! Deterministic random number generation
//!
//! - **state_machine**: the per-draw multiplicative/XOR feedback step
//! - **snapshot**: independent saved copy of generator state
//! - **device**: seeded construction plus save/restore
//!
//! Same seed and state size always yield the same stream. Nothing here reads
//! a clock or an entropy source.

mod device;
pub mod snapshot;
pub mod state_machine;

pub use device::RandomNumberDevice;
pub use snapshot::SnapshotStore;
pub use state_machine::{GeneratorState, F64_MANTISSA_MASK, F64_SCALE};
