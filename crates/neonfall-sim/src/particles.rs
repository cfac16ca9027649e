//! Visual-effect particle pool.
//!
//! Particles never affect gameplay; they live in a plain Vec on the
//! engine rather than the ECS world and are handed to the renderer
//! through the snapshot.

use rand::Rng;

use neonfall_core::state::ParticleView;
use neonfall_core::types::{Position, Vec2};

/// Hue values used by burst presets, matching the game's palette.
pub mod hue {
    pub const CYAN: f32 = 190.0;
    pub const RED: f32 = 0.0;
    pub const GOLD: f32 = 45.0;
    pub const PURPLE: f32 = 270.0;
    pub const WHITE: f32 = 0.0;
}

/// Parameters for one particle burst. Ranges are `(min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub count: usize,
    pub speed: (f32, f32),
    pub size: (f32, f32),
    pub life: (f32, f32),
    /// Emission arc in radians; a full circle unless narrowed.
    pub spread: f32,
    pub hue: f32,
}

impl BurstSpec {
    fn full(count: usize, speed: (f32, f32), size: (f32, f32), life: (f32, f32), hue: f32) -> Self {
        Self {
            count,
            speed,
            size,
            life,
            spread: std::f32::consts::TAU,
            hue,
        }
    }

    /// Per-hit flash on an enemy (endless mode).
    pub fn enemy_hit(hue: f32) -> Self {
        Self::full(18, (1.2, 3.8), (2.0, 5.0), (18.0, 32.0), hue)
    }

    /// Enemy removal burst.
    pub fn enemy_death(hue: f32) -> Self {
        Self::full(14, (1.2, 3.4), (2.0, 4.0), (16.0, 28.0), hue)
    }

    /// Collectible pickup sparkle.
    pub fn pickup(hue: f32) -> Self {
        Self::full(12, (0.9, 2.4), (2.0, 4.0), (16.0, 28.0), hue)
    }

    /// Shield absorbing a hit.
    pub fn shield_block() -> Self {
        Self::full(16, (1.0, 3.0), (2.0, 4.0), (16.0, 28.0), hue::CYAN)
    }

    /// Player losing a life.
    pub fn player_hit() -> Self {
        Self::full(20, (1.2, 3.5), (2.0, 5.0), (18.0, 30.0), hue::RED)
    }

    /// Blink arrival flash.
    pub fn blink() -> Self {
        Self::full(18, (1.2, 3.0), (2.0, 4.0), (14.0, 24.0), hue::CYAN)
    }

    /// Forward muzzle puff scaled by the number of shots.
    pub fn muzzle(shots: usize) -> Self {
        Self {
            count: 6 + shots,
            speed: (0.5, 1.6),
            size: (1.0, 2.5),
            life: (8.0, 16.0),
            spread: std::f32::consts::FRAC_PI_2,
            hue: hue::CYAN,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Position,
    vel: Vec2,
    radius: f32,
    life: f32,
    alpha: f32,
    decay: f32,
    hue: f32,
}

/// Pool of live particles.
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Emits one burst at `origin`.
    pub fn burst<R: Rng>(&mut self, rng: &mut R, origin: Position, spec: &BurstSpec) {
        for _ in 0..spec.count {
            let angle = rng.gen_range(0.0..spec.spread);
            let magnitude = rng.gen_range(spec.speed.0..spec.speed.1);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::from_angle(angle).scaled(magnitude),
                radius: rng.gen_range(spec.size.0..spec.size.1),
                life: rng.gen_range(spec.life.0..spec.life.1),
                alpha: 1.0,
                decay: rng.gen_range(0.02..0.05),
                hue: spec.hue,
            });
        }
    }

    /// Integrates, fades, and drops spent particles.
    pub fn update(&mut self, delta: f32) {
        self.particles.retain_mut(|p| {
            p.pos = p.pos.translated(p.vel.scaled(delta));
            p.vel = p.vel.scaled(1.0 - 0.04 * delta);
            p.radius *= 1.0 - 0.015 * delta;
            p.life -= delta;
            p.alpha -= p.decay * delta;
            p.life > 0.0 && p.alpha > 0.0 && p.radius > 0.1
        });
    }

    pub fn views(&self) -> Vec<ParticleView> {
        self.particles
            .iter()
            .map(|p| ParticleView {
                pos: p.pos,
                radius: p.radius,
                alpha: p.alpha,
                hue: p.hue,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
