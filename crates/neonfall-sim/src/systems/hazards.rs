//! Poison clouds and rift portals.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use neonfall_core::components::{Hazard, HazardKind};
use neonfall_core::constants::{
    POISON_DRAIN, POISON_MIN_RADIUS, POISON_SHRINK, RIFT_MINION_INTERVAL,
};
use neonfall_core::enums::{Mode, RogueDifficulty};
use neonfall_core::types::Position;

use crate::player::PlayerState;
use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    mode: Mode,
    difficulty: RogueDifficulty,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
    delta: f32,
) {
    let mut births: Vec<Position> = Vec::new();

    for (entity, (pos, hazard)) in world.query_mut::<(&Position, &mut Hazard)>() {
        hazard.life -= delta;
        if hazard.life <= 0.0 {
            despawn_buffer.push(entity);
            continue;
        }
        match &mut hazard.kind {
            HazardKind::Poison { radius } => {
                *radius = (*radius * (1.0 - POISON_SHRINK * delta)).max(POISON_MIN_RADIUS);
                if pos.distance_to(player.pos) < *radius + player.radius() {
                    player.energy = (player.energy - POISON_DRAIN * delta).max(0.0);
                }
            }
            HazardKind::Rift { minion_timer } => {
                *minion_timer += delta;
                if *minion_timer >= RIFT_MINION_INTERVAL {
                    *minion_timer = 0.0;
                    births.push(*pos);
                }
            }
        }
    }

    for pos in births {
        world_setup::spawn_rift_minion(world, rng, pos, mode, difficulty);
    }
}
