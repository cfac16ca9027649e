//! Drives every enemy's state machine and applies the results.
//!
//! Evaluation is collect-then-apply: the pure state machines run over a
//! mutable query, their requested actions are buffered, and world
//! mutations (shots, hazards, summons) happen afterwards.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::boss::volley_shots;
use neonfall_behavior::steer::{evaluate, BehaviorAction, BehaviorContext};
use neonfall_core::components::{Agitation, BehaviorState, Enemy};
use neonfall_core::constants::SLOW_FACTOR;
use neonfall_core::enums::{Mode, RogueDifficulty};
use neonfall_core::types::Position;

use crate::world_setup;

struct PendingAction {
    origin: Position,
    source: hecs::Entity,
    action: BehaviorAction,
}

pub fn run(
    world: &mut World,
    player_pos: Position,
    mode: Mode,
    difficulty: RogueDifficulty,
    rng: &mut ChaCha8Rng,
    delta: f32,
) {
    let mut pending: Vec<PendingAction> = Vec::new();

    for (entity, (pos, enemy, agitation, state)) in
        world.query_mut::<(&mut Position, &Enemy, &Agitation, &mut BehaviorState)>()
    {
        if !enemy.is_alive() {
            continue;
        }
        let slow = if agitation.slow > 0.0 { SLOW_FACTOR } else { 1.0 };
        let ctx = BehaviorContext {
            behavior: enemy.behavior,
            boss: enemy.boss,
            pos: *pos,
            player: player_pos,
            eff_speed: enemy.base_speed * slow,
            delta,
        };
        let update = evaluate(&ctx, state, rng);
        *pos = pos.translated(update.displacement);
        for action in update.actions {
            pending.push(PendingAction {
                origin: *pos,
                source: entity,
                action,
            });
        }
    }

    for item in pending {
        apply(world, player_pos, mode, difficulty, rng, item);
    }
}

fn apply(
    world: &mut World,
    player_pos: Position,
    mode: Mode,
    difficulty: RogueDifficulty,
    rng: &mut ChaCha8Rng,
    item: PendingAction,
) {
    match item.action {
        BehaviorAction::FireAtPlayer => {
            world_setup::spawn_enemy_shot(world, item.origin, player_pos);
        }
        BehaviorAction::DropPoison => {
            world_setup::spawn_poison(world, item.origin);
        }
        BehaviorAction::OpenRift => {
            world_setup::spawn_rift(world, item.origin);
        }
        BehaviorAction::Teleport { to } => {
            if let Ok(mut pos) = world.get::<&mut Position>(item.source) {
                *pos = to;
            }
        }
        BehaviorAction::GrantAlliedShields { amount, range } => {
            for (entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
                if entity == item.source || !enemy.is_alive() {
                    continue;
                }
                if pos.distance_to(item.origin) <= range {
                    enemy.shield_hp = enemy.shield_hp.max(amount);
                }
            }
        }
        BehaviorAction::SummonMinions { count } => {
            for _ in 0..count {
                world_setup::spawn_rift_minion(world, rng, item.origin, mode, difficulty);
            }
        }
        BehaviorAction::Volley(kind) => {
            let aim = item.origin.offset_to(player_pos).normalized();
            for (dir, speed) in volley_shots(kind, aim) {
                world_setup::spawn_enemy_shot_along(world, item.origin, dir, speed);
            }
        }
    }
}
