//! Per-tick timer bookkeeping: energy regen, status expiry, agitation
//! decay, and the time-stop thaw.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use neonfall_core::components::{Agitation, Enemy};
use neonfall_core::constants::{ENERGY_REGEN, ROGUE_KILL_SCORE};
use neonfall_core::enums::Mode;
use neonfall_core::types::Position;

use crate::effects::Effects;
use crate::particles::{hue, BurstSpec, ParticlePool};
use crate::player::{PlayerState, RunState};

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    run: &mut RunState,
    mode: Mode,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticlePool,
    fx: &mut Effects,
    despawn_buffer: &mut Vec<Entity>,
    delta: f32,
) {
    player.energy = (player.energy + ENERGY_REGEN * delta).min(player.energy_max);
    player.shield = (player.shield - delta).max(0.0);
    player.invincible = (player.invincible - delta).max(0.0);
    player.fire_cooldown = (player.fire_cooldown - delta).max(0.0);
    player.rampage = (player.rampage - delta).max(0.0);
    player.ricochet = (player.ricochet - delta).max(0.0);

    if player.multiplier_timer > 0.0 {
        player.multiplier_timer -= delta;
        if player.multiplier_timer <= 0.0 {
            player.multiplier_timer = 0.0;
            player.multiplier = 1.0;
        }
    }

    if player.time_stop > 0.0 {
        player.time_stop -= delta;
        if player.time_stop <= 0.0 {
            player.time_stop = 0.0;
            thaw_frozen(world, run, mode, rng, particles, fx, despawn_buffer);
        }
    }

    for (_, agitation) in world.query_mut::<&mut Agitation>() {
        agitation.hit_flash = (agitation.hit_flash - delta).max(0.0);
        agitation.slow = (agitation.slow - delta).max(0.0);
    }

    fx.tick(delta);
}

/// Flushes every enemy killed while time was stopped: one death burst
/// and one score award each, all on the tick the stop expires.
fn thaw_frozen(
    world: &mut World,
    run: &mut RunState,
    mode: Mode,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticlePool,
    fx: &mut Effects,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut thawed: Vec<(Entity, Position, bool)> = Vec::new();
    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if enemy.pending_death {
            thawed.push((entity, *pos, enemy.boss.is_some()));
        }
    }
    if thawed.is_empty() {
        return;
    }
    fx.shake(16.0, 5.0);
    for (entity, pos, is_boss) in thawed {
        particles.burst(rng, pos, &BurstSpec::enemy_death(hue::PURPLE));
        if mode == Mode::Rogue && !is_boss {
            run.score += ROGUE_KILL_SCORE;
        }
        despawn_buffer.push(entity);
    }
}
