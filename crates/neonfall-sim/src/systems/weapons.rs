//! Player firing: the staged endless weapon and the rogue fan.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::templates::{weapon_stage_for_level, WEAPON_STAGES};
use neonfall_core::components::Projectile;
use neonfall_core::constants::MAX_ROGUE_SHOTS;
use neonfall_core::enums::Mode;
use neonfall_core::events::GameEvent;
use neonfall_core::types::Vec2;

use crate::particles::{BurstSpec, ParticlePool};
use crate::player::{InputState, PlayerState};
use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    input: &InputState,
    mode: Mode,
    level: u32,
    particles: &mut ParticlePool,
    events: &mut Vec<GameEvent>,
    rng: &mut ChaCha8Rng,
) {
    if !input.fire_held || player.fire_cooldown > 0.0 {
        return;
    }
    // Aiming at your own feet falls back to straight up.
    let aim = player.pos.offset_to(input.aim).normalized();
    let aim = if aim == Vec2::ZERO {
        Vec2::new(0.0, -1.0)
    } else {
        aim
    };

    match mode {
        Mode::Endless => fire_endless(world, player, aim, level, particles, events, rng),
        Mode::Rogue => fire_rogue(world, player, aim, particles, events, rng),
    }
}

fn fire_endless(
    world: &mut World,
    player: &mut PlayerState,
    aim: Vec2,
    level: u32,
    particles: &mut ParticlePool,
    events: &mut Vec<GameEvent>,
    rng: &mut ChaCha8Rng,
) {
    let stage = &WEAPON_STAGES[weapon_stage_for_level(level)];
    if player.energy < stage.cost {
        return;
    }
    // Every stage fires a straight shot even when 0° is absent from its
    // angle list.
    let mut angles: Vec<f32> = stage.angles.to_vec();
    if !angles.contains(&0.0) {
        angles.insert(0, 0.0);
    }
    angles.dedup();

    let speed = player.bullet_speed + stage.speed_bonus;
    for angle in &angles {
        world_setup::spawn_bullet(
            world,
            player.pos,
            aim.rotated_deg(*angle),
            speed,
            Projectile {
                radius: stage.bullet_radius,
                pierce: stage.pierce,
                damage: None,
                ricochet: false,
                bounced: false,
            },
        );
    }
    particles.burst(rng, player.pos, &BurstSpec::muzzle(angles.len()));
    player.energy -= stage.cost;
    player.fire_cooldown = stage.cooldown;
    events.push(GameEvent::ShotFired);
}

fn fire_rogue(
    world: &mut World,
    player: &mut PlayerState,
    aim: Vec2,
    particles: &mut ParticlePool,
    events: &mut Vec<GameEvent>,
    rng: &mut ChaCha8Rng,
) {
    let count = player.shots.clamp(1, MAX_ROGUE_SHOTS);
    let spread = if count == 1 {
        0.0
    } else {
        (12.0 + count as f32 * 5.0).min(55.0)
    };
    let step = if count == 1 {
        0.0
    } else {
        spread / (count - 1) as f32
    };
    let speed = player.bullet_speed + 0.5;

    for i in 0..count {
        let offset = -spread / 2.0 + step * i as f32;
        world_setup::spawn_bullet(
            world,
            player.pos,
            aim.rotated_deg(offset),
            speed,
            Projectile {
                radius: 4.0,
                pierce: 0,
                damage: Some(player.damage),
                ricochet: player.ricochet > 0.0,
                bounced: false,
            },
        );
    }
    particles.burst(rng, player.pos, &BurstSpec::muzzle(count as usize));
    player.fire_cooldown = 10.0;
    events.push(GameEvent::ShotFired);
}
