//! Snapshot types returned from every tick.

use serde::{Deserialize, Serialize};

use crate::components::{HazardKind, Payload};
use crate::enums::{Behavior, BossKind, ChargePhase, GamePhase, Mode, RogueDifficulty};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Vec2};

/// Player fields the host renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Position,
    pub size: f32,
    pub energy: f32,
    pub energy_max: f32,
    pub shield: f32,
    pub invincible: f32,
    pub rampage: f32,
    pub ricochet: f32,
    pub time_stop: f32,
    pub blink_charges: u32,
    pub multiplier: f32,
}

/// One enemy as the host sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Position,
    pub behavior: Behavior,
    pub boss: Option<BossKind>,
    pub radius: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub shield_hp: f32,
    pub hit_flash: f32,
    /// Assassins render faded while this runs.
    pub invisible: f32,
    pub reappear_flash: f32,
    pub charge: ChargePhase,
    pub pending_death: bool,
}

/// A projectile (player or enemy) in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotView {
    pub pos: Position,
    pub vel: Vec2,
    pub radius: f32,
}

/// A pickup waiting on the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectibleView {
    pub pos: Position,
    pub radius: f32,
    pub payload: Payload,
}

/// A ground hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HazardView {
    pub pos: Position,
    pub life: f32,
    pub kind: HazardKind,
}

/// One particle of visual effect state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Position,
    pub radius: f32,
    pub alpha: f32,
    pub hue: f32,
}

/// An orbiting satellite (rogue mode).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalView {
    pub pos: Position,
    pub angle: f32,
}

/// Center-screen banner text with its remaining display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerView {
    pub text: String,
    pub timer: f32,
}

/// Boss health bar state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossStatusView {
    pub kind: BossKind,
    pub hp: f32,
    pub max_hp: f32,
}

/// Complete per-tick world state handed to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: Option<Mode>,
    pub difficulty: RogueDifficulty,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<ShotView>,
    pub enemy_shots: Vec<ShotView>,
    pub collectibles: Vec<CollectibleView>,
    pub hazards: Vec<HazardView>,
    pub particles: Vec<ParticleView>,
    pub orbitals: Vec<OrbitalView>,
    pub score: u32,
    pub level: u32,
    pub lives: i32,
    pub banner: Option<BannerView>,
    /// Screen shake magnitude for this frame; zero when idle.
    pub shake: f32,
    pub boss: Option<BossStatusView>,
    /// Events raised during this tick, drained in emission order.
    pub events: Vec<GameEvent>,
}
