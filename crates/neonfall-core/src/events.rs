//! One-shot events drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{BossKind, Mode};

/// Events emitted during a tick and handed to the host exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player's weapon discharged.
    ShotFired,
    /// A boss entered the arena.
    BossIncoming { kind: BossKind },
    /// A boss was destroyed and rewards were paid out.
    BossDefeated { kind: BossKind },
    /// The run ended; emitted exactly once per run.
    GameOver {
        score: u32,
        mode: Mode,
        elapsed_ticks: u64,
    },
}
