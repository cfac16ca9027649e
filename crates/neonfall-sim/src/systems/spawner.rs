//! Timed introduction of enemies, pickups, and bosses.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::templates::{
    self, EnemyTemplate, ResourceTemplate,
};
use neonfall_core::components::{Collectible, Enemy, Payload};
use neonfall_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, COLLECTIBLE_CAP};
use neonfall_core::enums::{BossKind, ItemKind, Mode, RogueDifficulty};
use neonfall_core::events::GameEvent;
use neonfall_core::table::WeightedTable;
use neonfall_core::types::{Position, SimTime};

use crate::effects::Effects;
use crate::player::RunState;
use crate::world_setup;

/// Spawn cadence timers, all advanced by delta.
#[derive(Debug, Clone, Default)]
pub struct SpawnState {
    pub enemy_timer: f32,
    pub collectible_timer: f32,
    pub item_timer: f32,
    /// Accumulates only while no boss is on the field.
    pub boss_timer: f32,
    pub boss_defeated: u32,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn: &mut SpawnState,
    enemy_table: &WeightedTable<EnemyTemplate>,
    resource_table: &WeightedTable<ResourceTemplate>,
    item_table: &WeightedTable<ItemKind>,
    mode: Mode,
    difficulty: RogueDifficulty,
    run: &RunState,
    time: &SimTime,
    fx: &mut Effects,
    events: &mut Vec<GameEvent>,
    delta: f32,
) {
    let boss_active = world
        .query_mut::<&Enemy>()
        .into_iter()
        .any(|(_, e)| e.boss.is_some() && e.hp > 0.0);

    if !boss_active {
        spawn.boss_timer += delta;
        maybe_spawn_boss(world, rng, spawn, mode, difficulty, run, time, fx, events);
    }

    match mode {
        Mode::Endless => {
            spawn.collectible_timer += delta;
            if spawn.collectible_timer >= 60.0 {
                spawn.collectible_timer = 0.0;
                spawn_resource(world, rng, resource_table, false);
            }
        }
        Mode::Rogue => {
            spawn.item_timer += delta;
            if spawn.item_timer >= difficulty.item_interval() {
                spawn.item_timer = 0.0;
                spawn_item(world, rng, item_table);
            }
        }
    }

    // A live boss owns the arena; the wave timer holds at zero.
    if boss_active {
        spawn.enemy_timer = 0.0;
        return;
    }
    spawn.enemy_timer += delta;
    let (interval, cap, hp_scale) = match mode {
        Mode::Endless => (
            templates::endless_spawn_interval(run.level),
            templates::endless_enemy_cap(run.level, run.enemy_cap_bonus),
            templates::endless_hp_scale(time.elapsed, run.level),
        ),
        Mode::Rogue => (
            templates::rogue_spawn_interval(time.elapsed),
            templates::rogue_enemy_cap(time.elapsed),
            templates::rogue_hp_scale(time.elapsed, difficulty),
        ),
    };
    if spawn.enemy_timer >= interval {
        spawn.enemy_timer = 0.0;
        let count = world.query_mut::<&Enemy>().into_iter().count();
        if count < cap {
            let template = *enemy_table.sample(rng);
            world_setup::spawn_enemy(world, rng, &template, hp_scale, mode);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn maybe_spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn: &mut SpawnState,
    mode: Mode,
    difficulty: RogueDifficulty,
    run: &RunState,
    time: &SimTime,
    fx: &mut Effects,
    events: &mut Vec<GameEvent>,
) {
    let (ready, cooldown) = match mode {
        Mode::Endless => (
            run.level >= 3,
            templates::endless_boss_cooldown(spawn.boss_defeated),
        ),
        Mode::Rogue => (
            time.elapsed >= 900.0,
            templates::rogue_boss_cooldown(spawn.boss_defeated),
        ),
    };
    if !ready || spawn.boss_timer < cooldown {
        return;
    }
    spawn.boss_timer = 0.0;
    let (kind, hp) = match mode {
        Mode::Endless => (
            if rng.gen_bool(0.5) {
                BossKind::Matriarch
            } else {
                BossKind::Warden
            },
            templates::endless_boss_hp(run.level, time.elapsed),
        ),
        Mode::Rogue => (
            BossKind::Matriarch,
            templates::rogue_boss_hp(difficulty, time.elapsed),
        ),
    };
    world_setup::spawn_boss(world, rng, kind, hp, mode);
    fx.banner("Boss Incoming", 240.0);
    fx.shake(14.0, 6.0);
    events.push(GameEvent::BossIncoming { kind });
}

fn field_position(rng: &mut ChaCha8Rng, padding: f32) -> Position {
    Position::new(
        rng.gen_range(padding..ARENA_WIDTH - padding),
        rng.gen_range(padding..ARENA_HEIGHT - padding),
    )
}

/// Spawns one endless-mode resource drop. Cap-exempt when `initial`
/// (the run starts with a few already on the field).
pub fn spawn_resource(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    table: &WeightedTable<ResourceTemplate>,
    initial: bool,
) {
    if !initial && collectible_count(world) >= COLLECTIBLE_CAP {
        return;
    }
    let template = *table.sample(rng);
    let pos = field_position(rng, 50.0);
    world_setup::spawn_collectible(
        world,
        pos,
        template.radius,
        Payload::Resource {
            score: template.score,
            energy: template.energy,
            shield: template.shield,
            multiplier: template.multiplier,
            duration: template.duration,
        },
    );
}

fn spawn_item(world: &mut World, rng: &mut ChaCha8Rng, table: &WeightedTable<ItemKind>) {
    if collectible_count(world) >= COLLECTIBLE_CAP {
        return;
    }
    let kind = *table.sample(rng);
    let pos = field_position(rng, 45.0);
    world_setup::spawn_collectible(world, pos, 14.0, Payload::Power(kind));
}

fn collectible_count(world: &mut World) -> usize {
    world.query_mut::<&Collectible>().into_iter().count()
}
