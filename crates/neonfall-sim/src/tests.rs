use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use neonfall_core::commands::PlayerCommand;
use neonfall_core::components::{Agitation, BehaviorState, Enemy, Projectile};
use neonfall_core::enums::{Behavior, BossKind, GamePhase, Mode, RogueDifficulty};
use neonfall_core::events::GameEvent;
use neonfall_core::types::{Position, Vec2, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::world_setup;

fn engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig { seed })
}

fn start(eng: &mut SimulationEngine, mode: Mode, difficulty: RogueDifficulty) {
    eng.queue_command(PlayerCommand::StartGame { mode, difficulty });
    eng.tick(0.0);
}

/// Spawns a stationary enemy for collision tests.
fn spawn_dummy(
    eng: &mut SimulationEngine,
    x: f32,
    y: f32,
    radius: f32,
    hp: f32,
    behavior: Behavior,
) -> Entity {
    spawn_dummy_shielded(eng, x, y, radius, hp, 0.0, behavior)
}

fn spawn_dummy_shielded(
    eng: &mut SimulationEngine,
    x: f32,
    y: f32,
    radius: f32,
    hp: f32,
    shield_hp: f32,
    behavior: Behavior,
) -> Entity {
    eng.world_mut().spawn((
        Position::new(x, y),
        Enemy {
            behavior,
            boss: None,
            radius,
            base_speed: 0.0,
            base_hp: hp,
            hp,
            max_hp: hp,
            shield_hp,
            split_child: false,
            pending_death: false,
            boss_processed: false,
        },
        Agitation::default(),
        BehaviorState::default(),
    ))
}

fn spawn_still_bullet(eng: &mut SimulationEngine, x: f32, y: f32, projectile: Projectile) {
    world_setup::spawn_bullet(
        eng.world_mut(),
        Position::new(x, y),
        Vec2::new(0.0, -1.0),
        0.0,
        projectile,
    );
}

fn bullet(damage: Option<f32>, pierce: u32) -> Projectile {
    Projectile {
        radius: 5.0,
        pierce,
        damage,
        ricochet: false,
        bounced: false,
    }
}

fn enemy_count(eng: &mut SimulationEngine) -> usize {
    eng.world_mut().query_mut::<&Enemy>().into_iter().count()
}

fn bullet_count(eng: &mut SimulationEngine) -> usize {
    eng.world_mut()
        .query_mut::<&Projectile>()
        .into_iter()
        .count()
}

#[test]
fn delta_is_capped_and_bad_deltas_do_nothing() {
    let mut eng = engine(1);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);

    let snap = eng.tick(10.0);
    assert_eq!(snap.time.tick, 1);
    assert!((snap.time.elapsed - 2.0).abs() < f32::EPSILON);

    let snap = eng.tick(f32::NAN);
    assert_eq!(snap.time.tick, 1);
    assert!((snap.time.elapsed - 2.0).abs() < f32::EPSILON);

    let snap = eng.tick(-5.0);
    assert_eq!(snap.time.tick, 1);
}

#[test]
fn pause_halts_the_clock() {
    let mut eng = engine(1);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.tick(1.0);

    eng.queue_command(PlayerCommand::Pause);
    let snap = eng.tick(1.0);
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(snap.time.tick, 1);

    eng.queue_command(PlayerCommand::Resume);
    let snap = eng.tick(1.0);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.time.tick, 2);
}

#[test]
fn endless_fire_costs_energy_and_emits_event() {
    let mut eng = engine(5);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.tick(1.0);

    eng.queue_command(PlayerCommand::SetFireHeld { held: true });
    let snap = eng.tick(1.0);
    assert!(snap.events.contains(&GameEvent::ShotFired));
    // Stage 1 costs 12 energy; regen returns 0.35 the same tick.
    assert!((snap.player.energy - 88.35).abs() < 1e-3);
    assert_eq!(bullet_count(&mut eng), 1);

    // Cooldown suppresses the next pull.
    let snap = eng.tick(1.0);
    assert!(!snap.events.contains(&GameEvent::ShotFired));
}

#[test]
fn rogue_fan_is_symmetric_within_its_spread() {
    let mut eng = engine(5);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().shots = 3;
    eng.queue_command(PlayerCommand::SetAimTarget { x: 450.0, y: 0.0 });
    eng.queue_command(PlayerCommand::SetFireHeld { held: true });
    eng.tick(1.0);

    let mut angles: Vec<f32> = eng
        .world_mut()
        .query_mut::<(&Velocity, &Projectile)>()
        .into_iter()
        .map(|(_, (vel, _))| vel.x.atan2(-vel.y).to_degrees())
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(angles.len(), 3);
    // 3-shot fan spans 12 + 5 * 3 = 27 degrees around the aim.
    assert!((angles[0] + 13.5).abs() < 1e-2);
    assert!(angles[1].abs() < 1e-2);
    assert!((angles[2] - 13.5).abs() < 1e-2);
}

#[test]
fn pierce_passes_through_one_extra_enemy_per_point() {
    let mut eng = engine(2);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    spawn_dummy(&mut eng, 450.0, 200.0, 12.0, 5.0, Behavior::Slow);
    spawn_dummy(&mut eng, 452.0, 200.0, 12.0, 5.0, Behavior::Slow);
    spawn_dummy(&mut eng, 448.0, 200.0, 12.0, 5.0, Behavior::Slow);
    spawn_still_bullet(&mut eng, 450.0, 205.0, bullet(Some(1.0), 2));

    eng.tick(1.0);

    let hps: Vec<f32> = eng
        .world_mut()
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(_, e)| e.hp)
        .collect();
    assert_eq!(hps.len(), 3);
    for hp in hps {
        assert!((hp - 4.0).abs() < 1e-5);
    }
    assert_eq!(bullet_count(&mut eng), 0);
}

#[test]
fn ricochet_reverses_once_then_dies_on_second_bounce() {
    let mut eng = engine(2);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    let shot = world_setup::spawn_bullet(
        eng.world_mut(),
        Position::new(5.0, 300.0),
        Vec2::new(-1.0, 0.0),
        8.5,
        Projectile {
            radius: 4.0,
            pierce: 0,
            damage: Some(1.0),
            ricochet: true,
            bounced: false,
        },
    );
    eng.tick(1.0);
    {
        let world = eng.world_mut();
        let vel = *world.get::<&Velocity>(shot).unwrap();
        assert!(vel.x > 0.0);
        assert!(world.get::<&Projectile>(shot).unwrap().bounced);
    }

    // Park the bullet at the right wall; the second bounce removes it.
    eng.world_mut().get::<&mut Position>(shot).unwrap().x = 898.0;
    eng.tick(1.0);
    assert!(eng.world_mut().get::<&Projectile>(shot).is_err());
}

#[test]
fn time_stop_defers_kills_until_the_thaw() {
    let mut eng = engine(3);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().time_stop = 10.0;

    spawn_dummy(&mut eng, 450.0, 150.0, 12.0, 1.0, Behavior::Slow);
    spawn_still_bullet(&mut eng, 450.0, 150.0, bullet(Some(5.0), 0));

    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 1);
    assert!(snap.enemies[0].pending_death);
    assert!((snap.enemies[0].pos.x - 450.0).abs() < 1e-5);
    assert!((snap.enemies[0].pos.y - 150.0).abs() < 1e-5);
    assert_eq!(snap.score, 0);

    // Expire the stop; the corpse flushes with its score, exactly once.
    eng.player_mut().time_stop = 0.5;
    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 0);
    assert_eq!(snap.score, 12);
    assert_eq!(enemy_count(&mut eng), 0);

    let snap = eng.tick(1.0);
    assert_eq!(snap.score, 12);
}

#[test]
fn splitter_spawns_two_children_that_never_split_again() {
    let mut eng = engine(4);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.tick(1.0);

    spawn_dummy(&mut eng, 450.0, 150.0, 16.0, 1.0, Behavior::Splitter);
    eng.world_mut()
        .query_mut::<&mut Enemy>()
        .into_iter()
        .for_each(|(_, e)| e.base_hp = 2.0);
    spawn_still_bullet(&mut eng, 450.0, 150.0, bullet(None, 0));
    eng.tick(1.0);

    let children: Vec<(f32, bool)> = eng
        .world_mut()
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(_, e)| (e.hp, e.split_child))
        .collect();
    assert_eq!(children.len(), 2);
    for (hp, split_child) in children {
        assert!((hp - 1.6).abs() < 1e-5);
        assert!(split_child);
    }

    // Killing a child yields no grandchildren.
    let child_pos = eng
        .world_mut()
        .query_mut::<(&Position, &Enemy)>()
        .into_iter()
        .map(|(_, (pos, _))| *pos)
        .next()
        .unwrap();
    spawn_still_bullet(&mut eng, child_pos.x, child_pos.y, bullet(Some(5.0), 0));
    eng.tick(1.0);
    assert_eq!(enemy_count(&mut eng), 1);
}

#[test]
fn enemy_shield_soaks_damage_before_hp() {
    let mut eng = engine(6);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    let guarded = spawn_dummy_shielded(&mut eng, 300.0, 150.0, 12.0, 3.0, 2.0, Behavior::Slow);
    spawn_dummy_shielded(&mut eng, 600.0, 150.0, 12.0, 3.0, 2.0, Behavior::Slow);
    spawn_still_bullet(&mut eng, 300.0, 150.0, bullet(Some(1.0), 0));
    spawn_still_bullet(&mut eng, 600.0, 150.0, bullet(Some(5.0), 0));
    eng.tick(1.0);

    let world = eng.world_mut();
    let enemy = world.get::<&Enemy>(guarded).unwrap();
    assert!((enemy.shield_hp - 1.0).abs() < 1e-5);
    assert!((enemy.hp - 3.0).abs() < 1e-5);
    drop(enemy);
    // The 5-damage hit burned the shield and the remainder killed.
    assert_eq!(enemy_count(&mut eng), 1);
}

#[test]
fn player_shield_absorbs_a_contact_hit() {
    let mut eng = engine(7);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.tick(1.0);
    eng.player_mut().shield = 240.0;

    spawn_dummy(&mut eng, 450.0, 300.0, 20.0, 50.0, Behavior::Slow);
    let snap = eng.tick(1.0);

    assert_eq!(snap.lives, 4);
    assert!(snap.player.shield > 118.0 && snap.player.shield < 120.5);
    assert!(snap.player.invincible > 28.0 && snap.player.invincible < 30.5);
}

#[test]
fn losing_the_last_life_emits_game_over_once() {
    let mut eng = engine(8);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().lives = 1;

    world_setup::spawn_enemy_shot_along(
        eng.world_mut(),
        Position::new(450.0, 300.0),
        Vec2::ZERO,
        0.0,
    );
    let snap = eng.tick(1.0);
    assert_eq!(snap.phase, GamePhase::GameOver);
    let overs: Vec<&GameEvent> = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(overs.len(), 1);
    assert!(matches!(
        overs[0],
        GameEvent::GameOver {
            mode: Mode::Rogue,
            ..
        }
    ));

    let snap = eng.tick(1.0);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.events.is_empty());
}

#[test]
fn boss_kill_pays_out_rewards() {
    let mut eng = engine(9);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    let baseline = eng.tick(1.0);
    eng.player_mut().multiplier = 1.0;
    eng.player_mut().multiplier_timer = 0.0;
    let collectibles_before = baseline.collectibles.len();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let boss = world_setup::spawn_boss(eng.world_mut(), &mut rng, BossKind::Warden, 10.0, Mode::Endless);
    let boss_pos = *eng.world_mut().get::<&Position>(boss).unwrap();
    spawn_still_bullet(&mut eng, boss_pos.x, boss_pos.y, bullet(Some(100.0), 0));

    let snap = eng.tick(1.0);
    assert_eq!(snap.lives, 5);
    assert_eq!(snap.score, baseline.score + 18 + 420);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::BossDefeated { kind: BossKind::Warden })));
    assert_eq!(snap.collectibles.len(), collectibles_before + 3);
    assert_eq!(eng.spawn_state().boss_defeated, 1);
    assert!((eng.spawn_state().boss_timer - 0.0).abs() < f32::EPSILON);
}

#[test]
fn endless_stage_two_adds_an_implied_center_shot() {
    let mut eng = engine(16);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.tick(1.0);
    eng.run_mut().level = 3;

    eng.queue_command(PlayerCommand::SetFireHeld { held: true });
    eng.tick(1.0);

    let mut angles: Vec<f32> = eng
        .world_mut()
        .query_mut::<(&Velocity, &Projectile)>()
        .into_iter()
        .map(|(_, (vel, _))| vel.x.atan2(-vel.y).to_degrees())
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    // Stage 2 lists only the +-10 degree pair; the straight shot is implied.
    assert_eq!(angles.len(), 3);
    assert!((angles[0] + 10.0).abs() < 1e-2);
    assert!(angles[1].abs() < 1e-2);
    assert!((angles[2] - 10.0).abs() < 1e-2);
}

#[test]
fn frozen_boss_death_pays_rewards_exactly_once() {
    let mut eng = engine(17);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().time_stop = 10.0;

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let boss =
        world_setup::spawn_boss(eng.world_mut(), &mut rng, BossKind::Matriarch, 10.0, Mode::Rogue);
    *eng.world_mut().get::<&mut Position>(boss).unwrap() = Position::new(450.0, 150.0);
    spawn_still_bullet(&mut eng, 450.0, 150.0, bullet(Some(100.0), 0));

    // Rewards land when HP reaches zero, not on the thaw.
    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 1);
    assert!(snap.enemies[0].pending_death);
    assert_eq!(snap.score, 380);
    assert_eq!(snap.lives, 4);
    assert_eq!(eng.player().blink_charges, 2);
    assert_eq!(eng.spawn_state().boss_defeated, 1);

    eng.player_mut().time_stop = 0.5;
    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 0);
    // The thaw grants no second payout.
    assert_eq!(snap.score, 380);
    assert_eq!(snap.lives, 4);
    assert_eq!(eng.spawn_state().boss_defeated, 1);
}

#[test]
fn rampage_obliterates_contact_enemies_but_not_bosses() {
    let mut eng = engine(10);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().rampage = 100.0;

    spawn_dummy(&mut eng, 450.0, 300.0, 20.0, 5.0, Behavior::Brute);
    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 0);
    assert_eq!(snap.lives, 3);
    // Rampage kills pay the standard kill score.
    assert_eq!(snap.score, 12);

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let boss =
        world_setup::spawn_boss(eng.world_mut(), &mut rng, BossKind::Matriarch, 50.0, Mode::Rogue);
    *eng.world_mut().get::<&mut Position>(boss).unwrap() = Position::new(450.0, 300.0);
    let snap = eng.tick(1.0);
    assert_eq!(snap.enemies.len(), 1);
    assert!((eng.world_mut().get::<&Enemy>(boss).unwrap().hp - 50.0).abs() < 1e-5);
    assert!(snap.enemies[0].hit_flash > 0.0);
    assert_eq!(snap.lives, 3);
}

#[test]
fn rampage_kills_score_the_same_frozen_or_not() {
    let mut eng = engine(18);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);
    eng.player_mut().rampage = 100.0;

    spawn_dummy(&mut eng, 450.0, 300.0, 20.0, 5.0, Behavior::Brute);
    let snap = eng.tick(1.0);
    assert_eq!(snap.score, 12);

    // The same kill while time is stopped pays out at the thaw instead.
    eng.player_mut().time_stop = 10.0;
    spawn_dummy(&mut eng, 450.0, 300.0, 20.0, 5.0, Behavior::Brute);
    let snap = eng.tick(1.0);
    assert_eq!(snap.score, 12);
    eng.player_mut().time_stop = 0.5;
    let snap = eng.tick(1.0);
    assert_eq!(snap.score, 24);
    assert_eq!(enemy_count(&mut eng), 0);
}

#[test]
fn blink_teleports_to_the_clamped_aim_point() {
    let mut eng = engine(11);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    eng.queue_command(PlayerCommand::SetAimTarget { x: 100.0, y: 100.0 });
    eng.queue_command(PlayerCommand::Blink);
    eng.tick(0.0);
    assert!((eng.player().pos.x - 100.0).abs() < 1e-5);
    assert!((eng.player().pos.y - 100.0).abs() < 1e-5);
    assert_eq!(eng.player().blink_charges, 0);

    // No charge, no blink.
    eng.queue_command(PlayerCommand::SetAimTarget { x: 800.0, y: 500.0 });
    eng.queue_command(PlayerCommand::Blink);
    eng.tick(0.0);
    assert!((eng.player().pos.x - 100.0).abs() < 1e-5);

    // Out-of-bounds targets clamp to the arena edge.
    eng.player_mut().blink_charges = 1;
    eng.queue_command(PlayerCommand::SetAimTarget { x: -50.0, y: 9999.0 });
    eng.queue_command(PlayerCommand::Blink);
    eng.tick(0.0);
    let radius = eng.player().radius();
    assert!((eng.player().pos.x - radius).abs() < 1e-5);
    assert!((eng.player().pos.y - (600.0 - radius)).abs() < 1e-5);
}

#[test]
fn power_item_pickup_applies_immediately() {
    let mut eng = engine(12);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    world_setup::spawn_collectible(
        eng.world_mut(),
        Position::new(450.0, 300.0),
        14.0,
        neonfall_core::components::Payload::Power(neonfall_core::enums::ItemKind::Spread),
    );
    let snap = eng.tick(1.0);
    assert_eq!(eng.player().shots, 2);
    assert_eq!(snap.collectibles.len(), 0);
    assert!(snap.banner.is_some());
}

#[test]
fn poison_cloud_drains_energy_on_overlap() {
    let mut eng = engine(13);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    world_setup::spawn_poison(eng.world_mut(), Position::new(450.0, 300.0));
    let snap = eng.tick(1.0);
    // 0.5 drained, 0.35 regenerated.
    assert!((snap.player.energy - 99.85).abs() < 1e-3);
    assert_eq!(snap.hazards.len(), 1);
}

#[test]
fn rift_births_a_minion_when_its_timer_fills() {
    let mut eng = engine(19);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    world_setup::spawn_rift(eng.world_mut(), Position::new(700.0, 500.0));
    for _ in 0..89 {
        eng.tick(1.0);
    }
    assert_eq!(enemy_count(&mut eng), 0);

    eng.tick(1.0);
    let minions: Vec<_> = eng
        .world_mut()
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(_, e)| (e.behavior, e.split_child))
        .collect();
    assert_eq!(minions, vec![(Behavior::Zigzag, true)]);
}

#[test]
fn commander_aura_shields_nearby_allies() {
    let mut eng = engine(20);
    start(&mut eng, Mode::Rogue, RogueDifficulty::Normal);

    spawn_dummy(&mut eng, 700.0, 100.0, 16.0, 5.0, Behavior::Commander);
    let near = spawn_dummy(&mut eng, 760.0, 100.0, 12.0, 3.0, Behavior::Slow);
    let far = spawn_dummy(&mut eng, 100.0, 500.0, 12.0, 3.0, Behavior::Slow);
    eng.tick(1.0);

    let world = eng.world_mut();
    let shielded = world.get::<&Enemy>(near).unwrap().shield_hp;
    assert!((3.0..=4.0).contains(&shielded));
    // Outside the aura radius nothing changes, the commander included.
    assert!(world.get::<&Enemy>(far).unwrap().shield_hp.abs() < f32::EPSILON);
}

#[test]
fn status_timers_stay_bounded_over_a_long_run() {
    let mut eng = engine(14);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    eng.queue_command(PlayerCommand::SetFireHeld { held: true });
    eng.queue_command(PlayerCommand::SetMoveIntent { x: 1.0, y: 0.3 });

    let mut last_score = 0;
    for _ in 0..400 {
        let snap = eng.tick(1.0);
        assert!(snap.player.energy >= -1e-3);
        assert!(snap.player.energy <= snap.player.energy_max + 1e-3);
        assert!(snap.player.shield >= 0.0);
        assert!(snap.player.invincible >= 0.0);
        assert!(snap.player.rampage >= 0.0);
        assert!(snap.player.ricochet >= 0.0);
        assert!(snap.player.time_stop >= 0.0);
        assert!(snap.score >= last_score);
        last_score = snap.score;
        if snap.phase == GamePhase::GameOver {
            break;
        }
    }
}

#[test]
fn identical_seeds_and_commands_replay_identically() {
    let commands = |eng: &mut SimulationEngine| {
        eng.queue_command(PlayerCommand::StartGame {
            mode: Mode::Rogue,
            difficulty: RogueDifficulty::Hard,
        });
        eng.queue_command(PlayerCommand::SetFireHeld { held: true });
        eng.queue_command(PlayerCommand::SetMoveIntent { x: 0.6, y: -1.0 });
        eng.queue_command(PlayerCommand::SetAimTarget { x: 800.0, y: 100.0 });
    };
    let mut a = engine(99);
    let mut b = engine(99);
    commands(&mut a);
    commands(&mut b);

    let mut last = (String::new(), String::new());
    for _ in 0..240 {
        let sa = a.tick(1.0);
        let sb = b.tick(1.0);
        last = (
            serde_json::to_string(&sa).unwrap(),
            serde_json::to_string(&sb).unwrap(),
        );
    }
    assert_eq!(last.0, last.1);
}

#[test]
fn bullet_kill_scores_and_consumes_the_bullet() {
    let mut eng = engine(15);
    start(&mut eng, Mode::Endless, RogueDifficulty::Normal);
    let baseline = eng.tick(1.0).score;
    eng.player_mut().multiplier = 1.0;
    eng.player_mut().multiplier_timer = 0.0;

    spawn_dummy(&mut eng, 450.0, 200.0, 20.0, 3.0, Behavior::Slow);
    spawn_still_bullet(&mut eng, 450.0, 205.0, bullet(Some(3.0), 0));
    let snap = eng.tick(1.0);

    assert_eq!(snap.score, baseline + 18);
    assert_eq!(snap.enemies.len(), 0);
    assert_eq!(bullet_count(&mut eng), 0);
}
