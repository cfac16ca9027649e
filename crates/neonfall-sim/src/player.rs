//! Engine-held player and run state.
//!
//! The player is not an ECS entity: exactly one exists, nearly every
//! system reads it, and most of its state is timers. Keeping it as a
//! plain struct on the engine avoids a query for a singleton.

use rand::Rng;

use neonfall_core::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, BASE_BULLET_SPEED, BASE_ENERGY_MAX, BASE_PLAYER_SPEED,
    MAX_ORBITALS,
};
use neonfall_core::enums::Mode;
use neonfall_core::types::{Position, Vec2};

/// One orbiting satellite. Its world position is recomputed each tick.
#[derive(Debug, Clone, Copy)]
pub struct Orbital {
    pub angle: f32,
    pub speed: f32,
    pub pos: Position,
}

/// The player avatar and every status timer attached to it.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub pos: Position,
    /// Side length of the bounding box; collision radius is half this.
    pub size: f32,
    pub speed: f32,
    pub energy: f32,
    pub energy_max: f32,
    /// Shield time budget; absorbing a hit costs part of it.
    pub shield: f32,
    pub invincible: f32,
    pub fire_cooldown: f32,
    pub multiplier: f32,
    pub multiplier_timer: f32,
    pub rampage: f32,
    pub ricochet: f32,
    pub time_stop: f32,
    pub blink_charges: u32,
    /// Simultaneous shots per trigger pull (rogue).
    pub shots: u32,
    /// Flat bullet damage (rogue).
    pub damage: f32,
    pub bullet_speed: f32,
    pub lives: i32,
    pub orbitals: Vec<Orbital>,
}

impl PlayerState {
    pub fn new(mode: Mode) -> Self {
        let (size, speed, lives, blink_charges) = match mode {
            Mode::Endless => (32.0, BASE_PLAYER_SPEED, 4, 0),
            Mode::Rogue => (26.0, BASE_PLAYER_SPEED - 0.4, 3, 1),
        };
        Self {
            pos: Position::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            size,
            speed,
            energy: BASE_ENERGY_MAX,
            energy_max: BASE_ENERGY_MAX,
            shield: 0.0,
            invincible: 0.0,
            fire_cooldown: 0.0,
            multiplier: 1.0,
            multiplier_timer: 0.0,
            rampage: 0.0,
            ricochet: 0.0,
            time_stop: 0.0,
            blink_charges,
            shots: 1,
            damage: 1.0,
            bullet_speed: BASE_BULLET_SPEED,
            lives,
            orbitals: Vec::new(),
        }
    }

    /// Collision radius (half the bounding box).
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Adds a satellite, or speeds every satellite up once at the cap.
    pub fn add_orbital<R: Rng>(&mut self, rng: &mut R) {
        if self.orbitals.len() < MAX_ORBITALS {
            let speed = 0.05 + self.orbitals.len() as f32 * 0.01;
            self.orbitals.push(Orbital {
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                speed,
                pos: self.pos,
            });
        } else {
            for orb in &mut self.orbitals {
                orb.speed += 0.01;
            }
        }
    }

    /// Advances satellite angles and recomputes their world positions.
    pub fn update_orbitals(&mut self, delta: f32) {
        let base_radius = self.size * 1.6;
        let center = self.pos;
        for (idx, orb) in self.orbitals.iter_mut().enumerate() {
            let orbit_radius = base_radius + idx as f32 * 2.0;
            orb.angle += orb.speed * delta;
            orb.pos = center.translated(Vec2::from_angle(orb.angle).scaled(orbit_radius));
        }
    }
}

/// Score and level progression for the current run.
#[derive(Debug, Clone)]
pub struct RunState {
    pub score: u32,
    pub level: u32,
    pub next_level_score: u32,
    /// Index into the cyclic level-bonus table.
    pub bonus_index: usize,
    /// Extra on-field enemy cap earned from level bonuses.
    pub enemy_cap_bonus: u32,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            next_level_score: neonfall_core::constants::LEVEL_SCORE_STEP,
            bonus_index: 0,
            enemy_cap_bonus: 0,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Host input, applied at the tick boundary.
#[derive(Debug, Clone, Copy)]
pub struct InputState {
    /// Desired movement direction, each component in [-1, 1].
    pub move_intent: Vec2,
    /// Aim point in arena coordinates.
    pub aim: Position,
    pub fire_held: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_intent: Vec2::ZERO,
            aim: Position::new(ARENA_WIDTH / 2.0, 0.0),
            fire_held: false,
        }
    }
}
