//! Player movement and projectile integration.

use hecs::{Entity, World};

use neonfall_core::components::{EnemyShot, Projectile};
use neonfall_core::constants::{ARENA_CULL_MARGIN, ARENA_HEIGHT, ARENA_WIDTH};
use neonfall_core::types::{Position, Velocity};

use crate::player::{InputState, PlayerState};

/// Moves the player along the host's intent, clamped into the arena.
pub fn run_player(player: &mut PlayerState, input: &InputState, delta: f32) {
    let mut dx = input.move_intent.x.clamp(-1.0, 1.0) * player.speed * delta;
    let mut dy = input.move_intent.y.clamp(-1.0, 1.0) * player.speed * delta;
    if dx != 0.0 && dy != 0.0 {
        dx *= std::f32::consts::FRAC_1_SQRT_2;
        dy *= std::f32::consts::FRAC_1_SQRT_2;
    }
    player.pos = player
        .pos
        .translated(neonfall_core::types::Vec2::new(dx, dy))
        .clamped(player.radius());
}

fn outside_cull_bounds(pos: &Position) -> bool {
    pos.x < -ARENA_CULL_MARGIN
        || pos.x > ARENA_WIDTH + ARENA_CULL_MARGIN
        || pos.y < -ARENA_CULL_MARGIN
        || pos.y > ARENA_HEIGHT + ARENA_CULL_MARGIN
}

/// Integrates player bullets, applying the one-bounce ricochet rule,
/// and culls anything past the arena margin.
pub fn run_bullets(world: &mut World, despawn_buffer: &mut Vec<Entity>, delta: f32) {
    for (entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Projectile)>()
    {
        pos.x += vel.x * delta;
        pos.y += vel.y * delta;

        if projectile.ricochet {
            let mut bounced = false;
            if (pos.x <= 0.0 && vel.x < 0.0) || (pos.x >= ARENA_WIDTH && vel.x > 0.0) {
                vel.x = -vel.x;
                bounced = true;
            }
            if (pos.y <= 0.0 && vel.y < 0.0) || (pos.y >= ARENA_HEIGHT && vel.y > 0.0) {
                vel.y = -vel.y;
                bounced = true;
            }
            if bounced {
                if projectile.bounced {
                    despawn_buffer.push(entity);
                    continue;
                }
                projectile.bounced = true;
            }
        }

        if outside_cull_bounds(pos) {
            despawn_buffer.push(entity);
        }
    }
}

/// Integrates enemy bullets. They hang in the air while time is stopped.
pub fn run_enemy_shots(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    frozen: bool,
    delta: f32,
) {
    for (entity, (pos, vel, _shot)) in
        world.query_mut::<(&mut Position, &Velocity, &EnemyShot)>()
    {
        if !frozen {
            pos.x += vel.x * delta;
            pos.y += vel.y * delta;
        }
        if outside_cull_bounds(pos) {
            despawn_buffer.push(entity);
        }
    }
}
