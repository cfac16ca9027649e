use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use neonfall_core::components::BehaviorState;
use neonfall_core::enums::{Behavior, BossKind, ChargePhase, Mode};
use neonfall_core::types::{Position, Vec2};

use crate::boss::{volley_shots, VolleyKind};
use crate::steer::{evaluate, BehaviorAction, BehaviorContext};
use crate::templates;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn ctx(behavior: Behavior, pos: Position, player: Position) -> BehaviorContext {
    BehaviorContext {
        behavior,
        boss: None,
        pos,
        player,
        eff_speed: 2.0,
        delta: 1.0,
    }
}

#[test]
fn slow_pursues_player() {
    let c = ctx(
        Behavior::Slow,
        Position::new(100.0, 100.0),
        Position::new(200.0, 100.0),
    );
    let update = evaluate(&c, &mut BehaviorState::default(), &mut rng());
    assert!(update.displacement.x > 0.0);
    assert!(update.displacement.y.abs() < 1e-6);
    assert!(update.actions.is_empty());
}

#[test]
fn zigzag_flips_after_interval() {
    let c = ctx(
        Behavior::Zigzag,
        Position::new(100.0, 100.0),
        Position::new(100.0, 300.0),
    );
    let mut state = BehaviorState {
        zigzag_dir: 1.0,
        ..Default::default()
    };
    let mut r = rng();
    let before = evaluate(&c, &mut state, &mut r).displacement;
    for _ in 0..45 {
        evaluate(&c, &mut state, &mut r);
    }
    assert_eq!(state.zigzag_dir, -1.0);
    let after = evaluate(&c, &mut state, &mut r).displacement;
    // Lateral component flips sign; forward component keeps it.
    assert!(before.x * after.x < 0.0);
}

#[test]
fn shooter_holds_its_band() {
    let far = ctx(
        Behavior::Shooter,
        Position::new(100.0, 100.0),
        Position::new(500.0, 100.0),
    );
    let mut state = BehaviorState {
        shoot_cooldown: 999.0,
        ..Default::default()
    };
    let mut r = rng();
    assert!(evaluate(&far, &mut state, &mut r).displacement.x > 0.0);

    let close = ctx(
        Behavior::Shooter,
        Position::new(100.0, 100.0),
        Position::new(200.0, 100.0),
    );
    assert!(evaluate(&close, &mut state, &mut r).displacement.x < 0.0);

    let banded = ctx(
        Behavior::Shooter,
        Position::new(100.0, 100.0),
        Position::new(310.0, 100.0),
    );
    assert_eq!(evaluate(&banded, &mut state, &mut r).displacement, Vec2::ZERO);
}

#[test]
fn shooter_fires_when_cooldown_expires() {
    let c = ctx(
        Behavior::Shooter,
        Position::new(100.0, 100.0),
        Position::new(310.0, 100.0),
    );
    let mut state = BehaviorState {
        shoot_cooldown: 1.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    assert!(update.actions.contains(&BehaviorAction::FireAtPlayer));
    assert!((110.0..150.0).contains(&state.shoot_cooldown));
}

#[test]
fn charger_runs_full_dash_cycle() {
    let c = ctx(
        Behavior::Charger,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut state = BehaviorState {
        dash_cooldown: 1.0,
        ..Default::default()
    };
    let mut r = rng();

    evaluate(&c, &mut state, &mut r);
    assert_eq!(state.charge, ChargePhase::Windup);

    for _ in 0..30 {
        evaluate(&c, &mut state, &mut r);
    }
    assert_eq!(state.charge, ChargePhase::Dash);
    assert!(state.dash_dir.x > 0.0);

    let dash = evaluate(&c, &mut state, &mut r).displacement;
    assert!(dash.x > c.eff_speed);

    for _ in 0..20 {
        evaluate(&c, &mut state, &mut r);
    }
    assert_eq!(state.charge, ChargePhase::Chase);
    assert!(state.dash_cooldown > 100.0);
}

#[test]
fn commander_grants_shields_on_cooldown() {
    let c = ctx(
        Behavior::Commander,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut state = BehaviorState {
        aura_cooldown: 1.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    match update.actions.first() {
        Some(BehaviorAction::GrantAlliedShields { amount, range }) => {
            assert!((3.0..=4.0).contains(amount));
            assert_eq!(*range, 150.0);
        }
        other => panic!("expected shield aura, got {other:?}"),
    }
    assert_eq!(state.aura_cooldown, 200.0);
}

#[test]
fn toxic_drops_poison_periodically() {
    let c = ctx(
        Behavior::Toxic,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut state = BehaviorState::default();
    let mut r = rng();
    let mut drops = 0;
    for _ in 0..120 {
        let update = evaluate(&c, &mut state, &mut r);
        drops += update
            .actions
            .iter()
            .filter(|a| **a == BehaviorAction::DropPoison)
            .count();
    }
    assert_eq!(drops, 3);
}

#[test]
fn assassin_teleports_to_ring_and_vanishes() {
    let player = Position::new(450.0, 300.0);
    let c = ctx(Behavior::Assassin, Position::new(100.0, 100.0), player);
    let mut state = BehaviorState {
        phase_cooldown: 1.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    match update.actions.first() {
        Some(BehaviorAction::Teleport { to }) => {
            let d = to.distance_to(player);
            assert!((120.0..=180.0).contains(&d), "ring distance {d}");
        }
        other => panic!("expected teleport, got {other:?}"),
    }
    assert_eq!(state.invisible_timer, 60.0);
    assert!((180.0..220.0).contains(&state.phase_cooldown));
}

#[test]
fn invisible_assassin_crawls() {
    let c = ctx(
        Behavior::Assassin,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut hidden = BehaviorState {
        phase_cooldown: 999.0,
        invisible_timer: 30.0,
        ..Default::default()
    };
    let mut visible = BehaviorState {
        phase_cooldown: 999.0,
        ..Default::default()
    };
    let mut r = rng();
    let slow = evaluate(&c, &mut hidden, &mut r).displacement.length();
    let fast = evaluate(&c, &mut visible, &mut r).displacement.length();
    assert!(fast > slow * 3.0);
}

#[test]
fn assassin_flashes_on_reappear() {
    let c = ctx(
        Behavior::Assassin,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut state = BehaviorState {
        phase_cooldown: 999.0,
        invisible_timer: 0.5,
        ..Default::default()
    };
    evaluate(&c, &mut state, &mut rng());
    assert_eq!(state.reappear_flash, 12.0);
}

#[test]
fn rift_opens_portals_on_cooldown() {
    let c = ctx(
        Behavior::Rift,
        Position::new(100.0, 100.0),
        Position::new(400.0, 100.0),
    );
    let mut state = BehaviorState {
        rift_cooldown: 1.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    assert!(update.actions.contains(&BehaviorAction::OpenRift));
    assert!((180.0..240.0).contains(&state.rift_cooldown));
}

#[test]
fn volley_patterns_have_expected_shapes() {
    let aim = Vec2::new(0.0, 1.0);
    assert_eq!(volley_shots(VolleyKind::MatriarchSpread, aim).len(), 5);
    assert_eq!(volley_shots(VolleyKind::MatriarchRing, aim).len(), 16);
    assert_eq!(volley_shots(VolleyKind::WardenFan, aim).len(), 3);
    assert_eq!(
        volley_shots(VolleyKind::WardenCross { phase: 0.0 }, aim).len(),
        4
    );
    let spiral = volley_shots(VolleyKind::WardenSpiral, aim);
    assert_eq!(spiral.len(), 12);
    assert!(spiral.last().unwrap().1 > spiral[0].1);
}

#[test]
fn ring_ignores_aim_direction() {
    let a = volley_shots(VolleyKind::MatriarchRing, Vec2::new(1.0, 0.0));
    let b = volley_shots(VolleyKind::MatriarchRing, Vec2::new(0.0, 1.0));
    assert_eq!(a[3].0.x, b[3].0.x);
}

#[test]
fn matriarch_summons_when_cooldown_expires() {
    let mut c = ctx(
        Behavior::Boss,
        Position::new(300.0, 200.0),
        Position::new(450.0, 300.0),
    );
    c.boss = Some(BossKind::Matriarch);
    let mut state = BehaviorState {
        shoot_cooldown: 999.0,
        wave_cooldown: 999.0,
        summon_cooldown: 1.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    assert!(update
        .actions
        .contains(&BehaviorAction::SummonMinions { count: 2 }));
}

#[test]
fn warden_cross_phase_advances() {
    let mut c = ctx(
        Behavior::Boss,
        Position::new(300.0, 200.0),
        Position::new(450.0, 300.0),
    );
    c.boss = Some(BossKind::Warden);
    let mut state = BehaviorState {
        shoot_cooldown: 999.0,
        wave_cooldown: 1.0,
        summon_cooldown: 999.0,
        ..Default::default()
    };
    let update = evaluate(&c, &mut state, &mut rng());
    assert!(update
        .actions
        .contains(&BehaviorAction::Volley(VolleyKind::WardenCross { phase: 0.0 })));
    assert_eq!(state.cross_phase, 0.5);
}

#[test]
fn boss_orbits_rather_than_rams() {
    let mut c = ctx(
        Behavior::Boss,
        Position::new(300.0, 200.0),
        Position::new(450.0, 300.0),
    );
    c.boss = Some(BossKind::Matriarch);
    let mut state = BehaviorState {
        shoot_cooldown: 999.0,
        wave_cooldown: 999.0,
        summon_cooldown: 999.0,
        ..Default::default()
    };
    let mut pos = c.pos;
    let mut r = rng();
    for _ in 0..600 {
        c.pos = pos;
        let update = evaluate(&c, &mut state, &mut r);
        pos = pos.translated(update.displacement);
    }
    let dist = pos.distance_to(c.player);
    assert!(
        (150.0..330.0).contains(&dist),
        "boss settled at distance {dist}"
    );
}

#[test]
fn tables_cover_all_archetypes() {
    for mode in [Mode::Endless, Mode::Rogue] {
        let table = templates::enemy_table(mode);
        assert_eq!(table.len(), 11);
        assert!(table
            .iter()
            .any(|(t, _)| t.behavior == Behavior::Assassin));
    }
}

#[test]
fn weapon_stage_track() {
    assert_eq!(templates::weapon_stage_for_level(1), 0);
    assert_eq!(templates::weapon_stage_for_level(3), 1);
    assert_eq!(templates::weapon_stage_for_level(6), 2);
    assert_eq!(templates::weapon_stage_for_level(9), 3);
    assert_eq!(templates::weapon_stage_for_level(30), 3);
}

#[test]
fn scaling_formulas_clamp() {
    assert_eq!(templates::endless_spawn_interval(0), 230.0);
    assert_eq!(templates::endless_spawn_interval(50), 120.0);
    assert_eq!(templates::endless_enemy_cap(0, 0), 5);
    assert_eq!(templates::endless_enemy_cap(40, 2), 16);
    assert_eq!(templates::rogue_spawn_interval(0.0), 170.0);
    assert_eq!(templates::rogue_spawn_interval(10_000.0), 90.0);
    assert_eq!(templates::rogue_enemy_cap(0.0), 8);
    assert_eq!(templates::rogue_enemy_cap(100_000.0), 14);
}
