use rand::rngs::mock::StepRng;
use rand::SeedableRng;

use crate::commands::PlayerCommand;
use crate::components::{Enemy, Payload};
use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::enums::{Behavior, BossKind, Mode, RogueDifficulty};
use crate::events::GameEvent;
use crate::table::WeightedTable;
use crate::types::{Position, SimTime, Vec2};

#[test]
fn vec2_normalized_handles_zero() {
    assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    let v = Vec2::new(3.0, 4.0).normalized();
    assert!((v.length() - 1.0).abs() < 1e-6);
}

#[test]
fn vec2_rotation_is_degrees() {
    let v = Vec2::new(1.0, 0.0).rotated_deg(90.0);
    assert!(v.x.abs() < 1e-6);
    assert!((v.y - 1.0).abs() < 1e-6);
}

#[test]
fn position_clamps_to_arena() {
    let p = Position::new(-50.0, ARENA_HEIGHT + 80.0).clamped(16.0);
    assert_eq!(p.x, 16.0);
    assert_eq!(p.y, ARENA_HEIGHT - 16.0);
    let inside = Position::new(ARENA_WIDTH / 2.0, 100.0).clamped(16.0);
    assert_eq!(inside.x, ARENA_WIDTH / 2.0);
}

#[test]
fn sim_time_advances_by_delta() {
    let mut t = SimTime::default();
    t.advance(1.0);
    t.advance(0.5);
    assert_eq!(t.tick, 2);
    assert!((t.elapsed - 1.5).abs() < 1e-6);
}

#[test]
fn weighted_table_respects_bands() {
    // StepRng yields a constant 0, so the first band always wins.
    let table = WeightedTable::new(vec![("a", 1.0), ("b", 99.0)]);
    let mut rng = StepRng::new(0, 0);
    for _ in 0..16 {
        assert_eq!(*table.sample(&mut rng), "a");
    }
}

#[test]
fn weighted_table_covers_all_entries() {
    let table = WeightedTable::new(vec![(1u32, 1.0), (2, 1.0), (3, 1.0)]);
    let mut rng = seeded_rng();
    let mut seen = [false; 3];
    for _ in 0..200 {
        seen[(*table.sample(&mut rng) - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

fn seeded_rng() -> impl rand::Rng {
    rand::rngs::StdRng::seed_from_u64(7)
}

#[test]
#[should_panic]
fn weighted_table_rejects_empty() {
    let _ = WeightedTable::<u32>::new(vec![]);
}

#[test]
fn difficulty_presets() {
    assert_eq!(RogueDifficulty::default(), RogueDifficulty::Normal);
    assert_eq!(RogueDifficulty::Hard.hp_factor(), 2.0);
    assert_eq!(RogueDifficulty::Easy.item_interval(), 200.0);
}

#[test]
fn enemy_alive_excludes_pending_death() {
    let mut e = Enemy {
        behavior: Behavior::Slow,
        boss: None,
        radius: 20.0,
        base_speed: 1.6,
        base_hp: 1.0,
        hp: 1.0,
        max_hp: 1.0,
        shield_hp: 0.0,
        split_child: false,
        pending_death: false,
        boss_processed: false,
    };
    assert!(e.is_alive());
    e.pending_death = true;
    assert!(!e.is_alive());
}

#[test]
fn command_serde_round_trip() {
    let cmd = PlayerCommand::StartGame {
        mode: Mode::Rogue,
        difficulty: RogueDifficulty::Hard,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmd);
}

#[test]
fn events_serialize_tagged() {
    let json = serde_json::to_string(&GameEvent::BossIncoming {
        kind: BossKind::Warden,
    })
    .unwrap();
    assert!(json.contains("\"type\":\"BossIncoming\""));
}

#[test]
fn payload_variants_round_trip() {
    let payload = Payload::Resource {
        score: 12,
        energy: 0.0,
        shield: 0.0,
        multiplier: 1.0,
        duration: 0.0,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(serde_json::from_str::<Payload>(&json).is_ok());
}
