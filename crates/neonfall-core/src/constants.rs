//! Simulation constants and tuning parameters.
//!
//! All timer values are in reference-tick units (60 per second at the
//! reference frame rate); distances and radii are in arena pixels.

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 900.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 600.0;

/// Extra margin outside the arena before projectiles are culled.
pub const ARENA_CULL_MARGIN: f32 = 40.0;

/// Distance outside the visible bounds at which enemies enter.
pub const EDGE_SPAWN_OFFSET: f32 = 25.0;

// --- Clock ---

/// Maximum per-tick delta multiplier; frame stalls catch up only partially.
pub const MAX_DELTA: f32 = 2.0;

// --- Player ---

/// Base movement speed (pixels per reference tick).
pub const BASE_PLAYER_SPEED: f32 = 5.0;

/// Starting and default maximum energy.
pub const BASE_ENERGY_MAX: f32 = 100.0;

/// Passive energy regeneration per reference tick.
pub const ENERGY_REGEN: f32 = 0.35;

/// Base player bullet speed.
pub const BASE_BULLET_SPEED: f32 = 8.5;

/// Shield duration consumed when a shield absorbs a hit.
pub const SHIELD_HIT_COST: f32 = 120.0;

/// Invincibility granted after a shield absorbs a hit.
pub const SHIELD_HIT_GRACE: f32 = 30.0;

/// Invincibility granted after losing a life.
pub const LIFE_LOST_GRACE: f32 = 90.0;

/// Maximum stored blink charges (rogue mode).
pub const MAX_BLINK_CHARGES: u32 = 3;

/// Maximum simultaneous shots (rogue mode).
pub const MAX_ROGUE_SHOTS: u32 = 10;

/// Maximum orbiting satellites (rogue mode).
pub const MAX_ORBITALS: usize = 5;

/// Contact radius of an orbital satellite.
pub const ORBITAL_RADIUS: f32 = 6.0;

// --- Enemies ---

/// Speed factor applied while an enemy's slow timer is running.
pub const SLOW_FACTOR: f32 = 0.55;

/// Hit-flash duration applied on every hit.
pub const HIT_FLASH_TICKS: f32 = 12.0;

/// Slow duration applied on every hit.
pub const HIT_SLOW_TICKS: f32 = 18.0;

/// Enemy bullet speed.
pub const ENEMY_SHOT_SPEED: f32 = 4.2;

/// Enemy bullet contact radius.
pub const ENEMY_SHOT_RADIUS: f32 = 6.0;

// --- Scoring / progression ---

/// Score awarded per bullet hit in endless mode (before multiplier).
pub const ENDLESS_HIT_SCORE: u32 = 18;

/// Score awarded per non-boss kill in rogue mode.
pub const ROGUE_KILL_SCORE: u32 = 12;

/// Base score step between level-ups (endless mode).
pub const LEVEL_SCORE_STEP: u32 = 140;

// --- Collectibles ---

/// Maximum concurrent collectibles/items on the field.
pub const COLLECTIBLE_CAP: usize = 6;

// --- Hazards ---

/// Initial poison cloud radius.
pub const POISON_RADIUS: f32 = 32.0;

/// Poison cloud lifetime.
pub const POISON_LIFE: f32 = 420.0;

/// Per-tick fractional radius shrink of a poison cloud.
pub const POISON_SHRINK: f32 = 0.0005;

/// Poison clouds never shrink below this radius.
pub const POISON_MIN_RADIUS: f32 = 6.0;

/// Energy drained per reference tick while the player overlaps a cloud.
pub const POISON_DRAIN: f32 = 0.5;

/// Rift portal lifetime.
pub const RIFT_LIFE: f32 = 360.0;

/// Interval between minion births from an open rift.
pub const RIFT_MINION_INTERVAL: f32 = 90.0;

/// Radius of the commander's shield-granting aura.
pub const COMMANDER_AURA_RANGE: f32 = 150.0;
