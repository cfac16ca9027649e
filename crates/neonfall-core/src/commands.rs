//! Commands queued by the host and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::{Mode, RogueDifficulty};

/// Host-issued player commands.
///
/// Commands never take effect mid-tick; the engine drains its queue at the
/// start of each tick before running systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Begin a fresh run. Difficulty only matters in rogue mode.
    StartGame {
        mode: Mode,
        difficulty: RogueDifficulty,
    },
    /// Suspend the simulation; ignored outside of Playing.
    Pause,
    /// Resume a paused run.
    Resume,
    /// Restart the current mode from scratch after a game over.
    Restart,
    /// Teleport to the aim point, spending a blink charge (rogue mode).
    Blink,
    /// Desired movement direction; components are clamped to [-1, 1].
    SetMoveIntent { x: f32, y: f32 },
    /// Aim point in arena coordinates.
    SetAimTarget { x: f32, y: f32 },
    /// Whether the fire control is currently held.
    SetFireHeld { held: bool },
}
