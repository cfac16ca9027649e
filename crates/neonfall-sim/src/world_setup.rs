//! Entity construction helpers.
//!
//! All spawn logic that places components into the hecs world lives
//! here so systems stay focused on per-tick rules.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::templates::EnemyTemplate;
use neonfall_core::components::{
    Agitation, BehaviorState, Collectible, Enemy, EnemyShot, Hazard, HazardKind, Payload,
    Projectile,
};
use neonfall_core::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, EDGE_SPAWN_OFFSET, ENEMY_SHOT_RADIUS, ENEMY_SHOT_SPEED,
    POISON_LIFE, POISON_RADIUS, RIFT_LIFE,
};
use neonfall_core::enums::{Behavior, BossKind, Mode, RogueDifficulty, Side};
use neonfall_core::types::{Position, Vec2, Velocity};

/// Picks an entry edge with equal weight and a point just outside it.
pub fn edge_spawn_position(rng: &mut ChaCha8Rng) -> Position {
    let side = match rng.gen_range(0..4) {
        0 => Side::Top,
        1 => Side::Bottom,
        2 => Side::Left,
        _ => Side::Right,
    };
    match side {
        Side::Top => Position::new(rng.gen_range(0.0..ARENA_WIDTH), -EDGE_SPAWN_OFFSET),
        Side::Bottom => Position::new(
            rng.gen_range(0.0..ARENA_WIDTH),
            ARENA_HEIGHT + EDGE_SPAWN_OFFSET,
        ),
        Side::Left => Position::new(-EDGE_SPAWN_OFFSET, rng.gen_range(0.0..ARENA_HEIGHT)),
        Side::Right => Position::new(
            ARENA_WIDTH + EDGE_SPAWN_OFFSET,
            rng.gen_range(0.0..ARENA_HEIGHT),
        ),
    }
}

fn behavior_state(rng: &mut ChaCha8Rng, behavior: Behavior) -> BehaviorState {
    BehaviorState {
        zigzag_dir: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
        shoot_cooldown: rng.gen_range(90.0..140.0),
        dash_cooldown: rng.gen_range(120.0..160.0),
        aura_cooldown: 200.0,
        phase_cooldown: if behavior == Behavior::Assassin {
            220.0
        } else {
            0.0
        },
        rift_cooldown: if behavior == Behavior::Rift {
            rng.gen_range(140.0..200.0)
        } else {
            0.0
        },
        ..Default::default()
    }
}

/// Spawns one wave enemy from its template at an arena edge.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    template: &EnemyTemplate,
    hp_scale: f32,
    mode: Mode,
) -> Entity {
    let pos = edge_spawn_position(rng);
    let hp = template.base_hp * hp_scale;
    let shield_hp = if template.behavior == Behavior::Commander {
        match mode {
            Mode::Endless => 3.0,
            Mode::Rogue => 4.0,
        }
    } else {
        0.0
    };
    let state = behavior_state(rng, template.behavior);
    world.spawn((
        pos,
        Enemy {
            behavior: template.behavior,
            boss: None,
            radius: template.radius,
            base_speed: template.speed,
            base_hp: template.base_hp,
            hp,
            max_hp: hp,
            shield_hp,
            split_child: false,
            pending_death: false,
            boss_processed: false,
        },
        Agitation::default(),
        state,
    ))
}

/// Spawns the two children of a dying splitter next to it.
pub fn spawn_split_children(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    parent: &Enemy,
    at: Position,
    mode: Mode,
    difficulty: RogueDifficulty,
) {
    let (min_radius, hp) = match mode {
        Mode::Endless => (12.0, 0.8 * parent.base_hp),
        Mode::Rogue => (
            10.0,
            (0.8 * parent.base_hp * difficulty.hp_factor()).max(1.0),
        ),
    };
    for _ in 0..2 {
        let pos = at.translated(Vec2::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        ));
        let mut state = behavior_state(rng, Behavior::Splitter);
        state.shoot_cooldown = rng.gen_range(120.0..160.0);
        state.dash_cooldown = rng.gen_range(140.0..180.0);
        world.spawn((
            pos,
            Enemy {
                behavior: Behavior::Splitter,
                boss: None,
                radius: (parent.radius * 0.65).max(min_radius),
                base_speed: parent.base_speed * 1.2,
                base_hp: parent.base_hp,
                hp,
                max_hp: hp,
                shield_hp: 0.0,
                split_child: true,
                pending_death: false,
                boss_processed: false,
            },
            Agitation::default(),
            state,
        ));
    }
}

/// Spawns one riftling near `at`; also used for boss minion summons.
pub fn spawn_rift_minion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Position,
    mode: Mode,
    difficulty: RogueDifficulty,
) -> Entity {
    let (radius, hp) = match mode {
        Mode::Endless => (14.0, 1.2),
        Mode::Rogue => (12.0, 2.0 * difficulty.hp_factor()),
    };
    let pos = at.translated(Vec2::new(
        rng.gen_range(-8.0..8.0),
        rng.gen_range(-8.0..8.0),
    ));
    let mut state = behavior_state(rng, Behavior::Zigzag);
    state.shoot_cooldown = rng.gen_range(130.0..180.0);
    state.dash_cooldown = rng.gen_range(130.0..170.0);
    world.spawn((
        pos,
        Enemy {
            behavior: Behavior::Zigzag,
            boss: None,
            radius,
            base_speed: 2.0,
            base_hp: hp,
            hp,
            max_hp: hp,
            shield_hp: 0.0,
            split_child: true,
            pending_death: false,
            boss_processed: false,
        },
        Agitation::default(),
        state,
    ))
}

/// Spawns a boss with its profile's initial cooldowns.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: BossKind,
    hp: f32,
    mode: Mode,
) -> Entity {
    let profile = match kind {
        BossKind::Matriarch => neonfall_behavior::boss::MATRIARCH,
        BossKind::Warden => neonfall_behavior::boss::WARDEN,
    };
    let pos = match mode {
        Mode::Endless => Position::new(
            rng.gen_range(180.0..ARENA_WIDTH - 180.0),
            rng.gen_range(120.0..220.0),
        ),
        // Descends from above the top edge.
        Mode::Rogue => Position::new(
            ARENA_WIDTH / 2.0 + rng.gen_range(-90.0..90.0),
            -50.0,
        ),
    };
    let state = BehaviorState {
        shoot_cooldown: profile.shoot_cooldown,
        wave_cooldown: profile.wave_cooldown,
        summon_cooldown: profile.summon_cooldown,
        orbit_angle: rng.gen_range(0.0..std::f32::consts::TAU),
        ..Default::default()
    };
    world.spawn((
        pos,
        Enemy {
            behavior: Behavior::Boss,
            boss: Some(kind),
            radius: profile.radius,
            base_speed: profile.speed,
            base_hp: hp,
            hp,
            max_hp: hp,
            shield_hp: 0.0,
            split_child: false,
            pending_death: false,
            boss_processed: false,
        },
        Agitation::default(),
        state,
    ))
}

/// Spawns an aimed enemy bullet at the stock shot speed.
pub fn spawn_enemy_shot(world: &mut World, from: Position, toward: Position) -> Entity {
    let dir = from.offset_to(toward).normalized();
    spawn_enemy_shot_along(world, from, dir, ENEMY_SHOT_SPEED)
}

/// Spawns an enemy bullet with an explicit direction and speed (volleys).
pub fn spawn_enemy_shot_along(
    world: &mut World,
    from: Position,
    dir: Vec2,
    speed: f32,
) -> Entity {
    world.spawn((
        from,
        Velocity::along(dir, speed),
        EnemyShot {
            radius: ENEMY_SHOT_RADIUS,
        },
    ))
}

/// Spawns a player bullet.
pub fn spawn_bullet(
    world: &mut World,
    from: Position,
    dir: Vec2,
    speed: f32,
    projectile: Projectile,
) -> Entity {
    world.spawn((from, Velocity::along(dir, speed), projectile))
}

/// Spawns a collectible or power item.
pub fn spawn_collectible(
    world: &mut World,
    at: Position,
    radius: f32,
    payload: Payload,
) -> Entity {
    world.spawn((at, Collectible { radius, payload }))
}

/// Drops a poison cloud.
pub fn spawn_poison(world: &mut World, at: Position) -> Entity {
    world.spawn((
        at,
        Hazard {
            life: POISON_LIFE,
            kind: HazardKind::Poison {
                radius: POISON_RADIUS,
            },
        },
    ))
}

/// Opens a rift portal.
pub fn spawn_rift(world: &mut World, at: Position) -> Entity {
    world.spawn((
        at,
        Hazard {
            life: RIFT_LIFE,
            kind: HazardKind::Rift { minion_timer: 0.0 },
        },
    ))
}
