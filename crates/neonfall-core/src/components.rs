//! ECS components attached to pooled entities.

use serde::{Deserialize, Serialize};

use crate::enums::{Behavior, BossKind, ChargePhase, ItemKind};
use crate::types::Vec2;

/// Core enemy data: archetype, sizing and hit points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub behavior: Behavior,
    /// Set for boss entities only.
    pub boss: Option<BossKind>,
    pub radius: f32,
    /// Unscaled movement speed; slow timers modulate it per tick.
    pub base_speed: f32,
    /// Template HP before wave scaling; splitter children derive from this.
    pub base_hp: f32,
    pub hp: f32,
    pub max_hp: f32,
    /// Commander-granted shield points, consumed before `hp`.
    pub shield_hp: f32,
    /// Children of a splitter do not split again.
    pub split_child: bool,
    /// Killed while time was stopped; despawn and score are deferred to thaw.
    pub pending_death: bool,
    /// Boss defeat rewards already paid out; guards the thaw path.
    pub boss_processed: bool,
}

impl Enemy {
    /// True for entities that still block bullets and deal contact damage.
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0 && !self.pending_death
    }
}

/// Transient per-enemy reaction timers set on every hit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Agitation {
    /// Render flash countdown.
    pub hit_flash: f32,
    /// While positive the enemy moves at the slow factor.
    pub slow: f32,
}

/// Mutable per-enemy state machine scratchpad.
///
/// A single struct covers all archetypes; each behavior reads and writes
/// only the fields it owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorState {
    pub zigzag_dir: f32,
    pub zigzag_timer: f32,
    pub shoot_cooldown: f32,
    pub dash_cooldown: f32,
    pub charge: ChargePhase,
    pub charge_timer: f32,
    pub dash_dir: Vec2,
    pub aura_cooldown: f32,
    pub toxin_timer: f32,
    pub phase_cooldown: f32,
    pub invisible_timer: f32,
    pub reappear_flash: f32,
    pub rift_cooldown: f32,
    pub wave_cooldown: f32,
    pub summon_cooldown: f32,
    /// Boss orbit angle around the player, radians.
    pub orbit_angle: f32,
    /// Warden cross volley rotation, degrees.
    pub cross_phase: f32,
}

/// A player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub radius: f32,
    /// Remaining enemies this bullet may pass through.
    pub pierce: u32,
    /// Damage override; `None` uses the mode default.
    pub damage: Option<f32>,
    /// Bounces off arena walls once before being culled.
    pub ricochet: bool,
    pub bounced: bool,
}

/// An enemy bullet; damages the player on contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot {
    pub radius: f32,
}

/// What a collectible grants when picked up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Payload {
    /// Endless-mode resource drop.
    Resource {
        score: u32,
        energy: f32,
        shield: f32,
        multiplier: f32,
        duration: f32,
    },
    /// Rogue-mode power item.
    Power(ItemKind),
}

/// A pickup waiting on the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    pub radius: f32,
    pub payload: Payload,
}

/// Hazard variants with their per-kind state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum HazardKind {
    /// Shrinking cloud that drains player energy on overlap.
    Poison { radius: f32 },
    /// Portal that periodically births minions.
    Rift { minion_timer: f32 },
}

/// A timed ground hazard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    /// Remaining lifetime in ticks.
    pub life: f32,
    pub kind: HazardKind,
}
