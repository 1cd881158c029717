//! Saved copy of generator state
//!
//! The store owns its own [`GeneratorState`]; saving and restoring are deep
//! copies, so later draws on the live state never leak into the snapshot.

use super::state_machine::GeneratorState;

/// Holds the "previous" generator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    previous: GeneratorState,
}

impl SnapshotStore {
    /// Create a store holding a copy of `current`
    pub fn new(current: &GeneratorState) -> Self {
        Self {
            previous: current.clone(),
        }
    }

    /// Overwrite the saved state with a copy of `current`
    pub fn save(&mut self, current: &GeneratorState) {
        self.previous.clone_from(current);
    }

    /// Overwrite `current` with a copy of the saved state
    pub fn restore(&self, current: &mut GeneratorState) {
        current.clone_from(&self.previous);
    }

    pub fn previous(&self) -> &GeneratorState {
        &self.previous
    }
}
