//! Input mapping
//!
//! The platform layer delivers discrete, non-repeating key transitions;
//! this maps the three gameplay keys onto `ControlState`. Charge release
//! is detected inside the simulation, so nothing here is stateful beyond
//! the held booleans.

use serde::{Deserialize, Serialize};

use crate::sim::ControlState;

/// Logical gameplay keys, after the platform has translated scancodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKey {
    AimLeft,
    AimRight,
    Charge,
}

/// Tracks held keys between frames.
///
/// Callers must filter out auto-repeat before calling `apply`; a repeated
/// key-down would otherwise be indistinguishable from a held key, which
/// happens to be harmless here but is not part of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputMap {
    controls: ControlState,
}

impl InputMap {
    /// Apply one key transition.
    pub fn apply(&mut self, key: GameKey, pressed: bool) {
        match key {
            GameKey::AimLeft => self.controls.left = pressed,
            GameKey::AimRight => self.controls.right = pressed,
            GameKey::Charge => self.controls.charge = pressed,
        }
    }

    /// The control booleans for the next tick.
    pub fn controls(&self) -> ControlState {
        self.controls
    }
}
