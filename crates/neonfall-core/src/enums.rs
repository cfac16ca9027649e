//! Closed vocabularies shared across the simulation crates.

use serde::{Deserialize, Serialize};

/// Which ruleset a run is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Energy-gated weapon, level-ups from score, 4 lives.
    Endless,
    /// Fixed-cooldown fan weapon, pickups drive power, 3 lives.
    Rogue,
}

/// Rogue-mode difficulty preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RogueDifficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl RogueDifficulty {
    /// Enemy HP multiplier for this preset.
    pub fn hp_factor(self) -> f32 {
        match self {
            RogueDifficulty::Easy => 1.0,
            RogueDifficulty::Normal => 1.5,
            RogueDifficulty::Hard => 2.0,
        }
    }

    /// Ticks between power item spawns for this preset.
    pub fn item_interval(self) -> f32 {
        match self {
            RogueDifficulty::Easy => 200.0,
            RogueDifficulty::Normal => 260.0,
            RogueDifficulty::Hard => 320.0,
        }
    }
}

/// Coarse lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Enemy archetype; selects the steering and action state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    /// Direct pursuit at low speed.
    Slow,
    /// Fast pursuit with a sideways drift.
    Sneak,
    /// Pursuit with a timed lateral flip.
    Zigzag,
    /// Keeps distance and fires aimed shots.
    Shooter,
    /// Telegraphed dash attack.
    Charger,
    /// Splits into two children on death.
    Splitter,
    /// Heavy, slow, high HP.
    Brute,
    /// Grants shields to nearby allies.
    Commander,
    /// Drops poison clouds while pursuing.
    Toxic,
    /// Teleports and turns invisible.
    Assassin,
    /// Opens minion-spawning rifts.
    Rift,
    /// Boss archetype; see [`BossKind`].
    Boss,
}

/// Which boss is on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    /// Spread/ring volleys plus minion summons.
    Matriarch,
    /// Fan, rotating cross, and spiral volleys.
    Warden,
}

/// Phase of the charger's dash cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargePhase {
    #[default]
    Chase,
    Windup,
    Dash,
}

/// Power item payloads (rogue mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Timed contact-kill state.
    Rampage,
    /// One extra simultaneous shot.
    Spread,
    /// One extra life.
    Life,
    /// One more orbiting satellite.
    Orbital,
    /// Timed wall-bouncing bullets.
    Ricochet,
    /// One blink charge.
    Blink,
    /// Timed enemy freeze.
    TimeStop,
    /// Flat bullet damage increase.
    Power,
}

/// Arena edge an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}
