//! Checkpoint - Save/Load Device State
//!
//! Serializes a [`RandomNumberDevice`] (conditioned buffer, live state and
//! saved snapshot) to JSON so a stream can be resumed later.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored device continues exactly where the original
//!   stopped
//! - **Integrity**: the stored SHA-256 hash must match the payload
//! - **Consistency**: array lengths equal `length_u8 / 8`, parities hold,
//!   cursors are in range

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::conditioning::validate_state_size;
use crate::core::PrngError;
use crate::rng::{GeneratorState, RandomNumberDevice};

/// Serializable image of a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCheckpoint {
    /// State buffer size in bytes
    pub length_u8: usize,

    /// Conditioned buffer from construction
    pub state_bytes: Vec<u8>,

    /// Live generator state
    pub current: GeneratorState,

    /// Saved snapshot
    pub previous: GeneratorState,

    /// Lowercase hex SHA-256 over the fields above
    pub state_hash: String,
}

/// Hashed portion of a checkpoint, in a fixed field order
#[derive(Serialize)]
struct HashedFields<'a> {
    length_u8: usize,
    state_bytes: &'a [u8],
    current: &'a GeneratorState,
    previous: &'a GeneratorState,
}

fn compute_state_hash(
    length_u8: usize,
    state_bytes: &[u8],
    current: &GeneratorState,
    previous: &GeneratorState,
) -> Result<String, PrngError> {
    let json = serde_json::to_string(&HashedFields {
        length_u8,
        state_bytes,
        current,
        previous,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl DeviceCheckpoint {
    /// Capture a device
    pub fn capture(device: &RandomNumberDevice) -> Result<Self, PrngError> {
        let state_hash = compute_state_hash(
            device.length_u8(),
            device.state_bytes(),
            device.current_state(),
            device.previous_state(),
        )?;
        Ok(Self {
            length_u8: device.length_u8(),
            state_bytes: device.state_bytes().to_vec(),
            current: device.current_state().clone(),
            previous: device.previous_state().clone(),
            state_hash,
        })
    }

    pub fn to_json(&self) -> Result<String, PrngError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PrngError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check hash and structural invariants
    pub fn validate(&self) -> Result<(), PrngError> {
        let expected = compute_state_hash(
            self.length_u8,
            &self.state_bytes,
            &self.current,
            &self.previous,
        )?;
        if expected != self.state_hash {
            return Err(PrngError::Checkpoint(format!(
                "state hash mismatch: stored {}, computed {}",
                self.state_hash, expected
            )));
        }

        validate_state_size(self.length_u8)?;
        if self.state_bytes.len() != self.length_u8 {
            return Err(PrngError::InconsistentState(format!(
                "state_bytes has length {}, expected {}",
                self.state_bytes.len(),
                self.length_u8
            )));
        }

        let length_u64 = self.length_u8 / 8;
        for (name, state) in [("current", &self.current), ("previous", &self.previous)] {
            if state.len() != length_u64 {
                return Err(PrngError::InconsistentState(format!(
                    "{} state has {} slots, expected {}",
                    name,
                    state.len(),
                    length_u64
                )));
            }
        }
        Ok(())
    }

    /// Validate and rebuild the device
    pub fn restore(self) -> Result<RandomNumberDevice, PrngError> {
        self.validate()?;
        log::debug!(
            "restoring device from checkpoint: length_u8={} idx_mult={} idx_xor={}",
            self.length_u8,
            self.current.idx_mult(),
            self.current.idx_xor()
        );
        Ok(RandomNumberDevice::from_parts(
            self.state_bytes,
            self.current,
            self.previous,
        ))
    }
}

impl RandomNumberDevice {
    /// Capture this device as a checkpoint
    pub fn checkpoint(&self) -> Result<DeviceCheckpoint, PrngError> {
        DeviceCheckpoint::capture(self)
    }

    /// Rebuild a device from a checkpoint
    pub fn from_checkpoint(checkpoint: DeviceCheckpoint) -> Result<Self, PrngError> {
        checkpoint.restore()
    }
}
