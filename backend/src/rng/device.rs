//! The random number device
//!
//! Construction pipeline:
//!
//! 1. [`StateConditioner`] absorbs the seed into an N-byte buffer
//! 2. [`derive_parameters`] runs six diffuse+extract cycles and fixes parities
//! 3. the live [`GeneratorState`] starts with both cursors at 0
//! 4. the [`SnapshotStore`] saves that post-seed baseline
//!
//! After construction only the generator state (and, on request, the snapshot
//! store) is touched. The conditioned buffer is kept read-only for the
//! `v_state_u8` dump line.

use std::io::Write;

use crate::conditioning::{derive_parameters, StateConditioner};
use crate::core::PrngError;
use crate::output;

use super::snapshot::SnapshotStore;
use super::state_machine::GeneratorState;

/// Seeded deterministic generator with a single saved snapshot
///
/// # Example
/// ```
/// use prng_core_rs::RandomNumberDevice;
///
/// let mut a = RandomNumberDevice::new(&[0x00], 64).unwrap();
/// let mut b = RandomNumberDevice::new(&[0x00], 64).unwrap();
/// assert_eq!(a.generate_u64(16), b.generate_u64(16));
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumberDevice {
    state_bytes: Vec<u8>,
    current: GeneratorState,
    snapshots: SnapshotStore,
}

impl RandomNumberDevice {
    /// Build a device from `seed` with an internal state of `length_u8` bytes
    ///
    /// # Errors
    /// - [`PrngError::InvalidStateSize`] unless `length_u8 % 32 == 0` and
    ///   `length_u8 > 32`
    /// - [`PrngError::EmptySeed`] if `seed` is empty
    pub fn new(seed: &[u8], length_u8: usize) -> Result<Self, PrngError> {
        let mut conditioner = StateConditioner::new(length_u8, seed)?;
        let params = derive_parameters(&mut conditioner);
        let current = GeneratorState::new(params)?;
        let snapshots = SnapshotStore::new(&current);

        log::debug!(
            "constructed device: length_u8={} length_u64={} seed_len={}",
            length_u8,
            current.len(),
            seed.len()
        );

        Ok(Self {
            state_bytes: conditioner.into_buffer(),
            current,
            snapshots,
        })
    }

    /// Reassemble a device from already-validated parts
    pub(crate) fn from_parts(
        state_bytes: Vec<u8>,
        current: GeneratorState,
        previous: GeneratorState,
    ) -> Self {
        Self {
            state_bytes,
            current,
            snapshots: SnapshotStore::new(&previous),
        }
    }

    /// State buffer size in bytes (N)
    pub fn length_u8(&self) -> usize {
        self.state_bytes.len()
    }

    /// Parameter array length (L = N / 8)
    pub fn length_u64(&self) -> usize {
        self.current.len()
    }

    /// Conditioned buffer as it stood at the end of construction
    pub fn state_bytes(&self) -> &[u8] {
        &self.state_bytes
    }

    pub fn current_state(&self) -> &GeneratorState {
        &self.current
    }

    pub fn previous_state(&self) -> &GeneratorState {
        self.snapshots.previous()
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.current.next_u64()
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.current.next_f64()
    }

    pub fn generate_u64(&mut self, amount: usize) -> Vec<u64> {
        self.current.generate_u64(amount)
    }

    pub fn generate_f64(&mut self, amount: usize) -> Vec<f64> {
        self.current.generate_f64(amount)
    }

    /// Save the live state as the new "previous" snapshot
    pub fn save_state(&mut self) {
        self.snapshots.save(&self.current);
    }

    /// Roll the live state back to the last saved snapshot
    pub fn restore_state(&mut self) {
        self.snapshots.restore(&mut self.current);
    }

    /// Write the 9-line state dump
    pub fn write_state_dump<W: Write>(&self, writer: &mut W) -> Result<(), PrngError> {
        writer.write_all(self.state_dump().as_bytes())?;
        Ok(())
    }

    /// Render the 9-line state dump
    pub fn state_dump(&self) -> String {
        output::format_state_dump(&self.state_bytes, &self.current)
    }
}
