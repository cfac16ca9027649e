//! Content tables: enemy archetypes, weapon stages, drops and scaling.

use neonfall_core::constants::LEVEL_SCORE_STEP;
use neonfall_core::enums::{Behavior, ItemKind, Mode, RogueDifficulty};
use neonfall_core::table::WeightedTable;

/// Spawn-time parameters for one enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub behavior: Behavior,
    pub speed: f32,
    pub radius: f32,
    pub base_hp: f32,
    pub weight: f32,
}

const fn template(
    behavior: Behavior,
    speed: f32,
    radius: f32,
    base_hp: f32,
    weight: f32,
) -> EnemyTemplate {
    EnemyTemplate {
        behavior,
        speed,
        radius,
        base_hp,
        weight,
    }
}

const ENDLESS_TEMPLATES: [EnemyTemplate; 11] = [
    template(Behavior::Slow, 1.6, 22.0, 1.0, 4.0),
    template(Behavior::Sneak, 2.5, 16.0, 1.0, 3.0),
    template(Behavior::Zigzag, 2.2, 18.0, 1.0, 2.0),
    template(Behavior::Shooter, 1.8, 20.0, 1.0, 2.0),
    template(Behavior::Charger, 2.0, 18.0, 1.0, 2.0),
    template(Behavior::Splitter, 1.7, 20.0, 1.2, 3.0),
    template(Behavior::Brute, 1.3, 24.0, 3.0, 2.0),
    template(Behavior::Commander, 1.2, 24.0, 2.2, 2.0),
    template(Behavior::Toxic, 1.8, 18.0, 1.4, 3.0),
    template(Behavior::Assassin, 2.4, 16.0, 1.5, 2.2),
    template(Behavior::Rift, 1.2, 22.0, 2.5, 2.0),
];

const ROGUE_TEMPLATES: [EnemyTemplate; 11] = [
    template(Behavior::Slow, 1.8, 18.0, 2.0, 3.5),
    template(Behavior::Sneak, 2.6, 15.0, 2.0, 3.0),
    template(Behavior::Zigzag, 2.3, 16.0, 2.0, 2.2),
    template(Behavior::Shooter, 1.9, 18.0, 2.0, 2.0),
    template(Behavior::Charger, 2.1, 16.0, 2.0, 2.0),
    template(Behavior::Splitter, 1.8, 18.0, 2.4, 2.4),
    template(Behavior::Brute, 1.4, 20.0, 6.0, 1.6),
    template(Behavior::Commander, 1.3, 20.0, 4.4, 1.8),
    template(Behavior::Toxic, 1.9, 16.0, 2.8, 2.6),
    template(Behavior::Assassin, 2.5, 15.0, 3.0, 2.2),
    template(Behavior::Rift, 1.3, 19.0, 5.0, 1.8),
];

/// Builds the enemy spawn table for a mode.
pub fn enemy_table(mode: Mode) -> WeightedTable<EnemyTemplate> {
    let templates: &[EnemyTemplate] = match mode {
        Mode::Endless => &ENDLESS_TEMPLATES,
        Mode::Rogue => &ROGUE_TEMPLATES,
    };
    WeightedTable::new(templates.iter().map(|t| (*t, t.weight)).collect())
}

/// One stage of the endless-mode weapon upgrade track.
#[derive(Debug, Clone, Copy)]
pub struct WeaponStage {
    /// Shot angles in degrees relative to the aim direction. A straight
    /// shot is always fired even when absent from this list.
    pub angles: &'static [f32],
    pub bullet_radius: f32,
    pub pierce: u32,
    /// Energy cost per trigger pull.
    pub cost: f32,
    pub cooldown: f32,
    pub speed_bonus: f32,
}

pub const WEAPON_STAGES: [WeaponStage; 4] = [
    WeaponStage {
        angles: &[0.0],
        bullet_radius: 4.0,
        pierce: 0,
        cost: 12.0,
        cooldown: 10.0,
        speed_bonus: 0.0,
    },
    WeaponStage {
        angles: &[-10.0, 10.0],
        bullet_radius: 4.0,
        pierce: 0,
        cost: 16.0,
        cooldown: 11.0,
        speed_bonus: 0.5,
    },
    WeaponStage {
        angles: &[-18.0, 0.0, 18.0],
        bullet_radius: 5.0,
        pierce: 1,
        cost: 20.0,
        cooldown: 13.0,
        speed_bonus: 0.8,
    },
    WeaponStage {
        angles: &[-25.0, -8.0, 8.0, 25.0],
        bullet_radius: 5.0,
        pierce: 1,
        cost: 24.0,
        cooldown: 15.0,
        speed_bonus: 1.1,
    },
];

/// Weapon stage unlocked at a given level. One-based.
pub fn weapon_stage_for_level(level: u32) -> usize {
    ((1 + level / 3).min(4) as usize) - 1
}

/// An endless-mode resource drop template.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTemplate {
    pub radius: f32,
    pub score: u32,
    pub energy: f32,
    pub shield: f32,
    pub multiplier: f32,
    pub duration: f32,
}

/// Builds the endless-mode collectible table: coin, energy, shield, multiplier.
pub fn resource_table() -> WeightedTable<ResourceTemplate> {
    WeightedTable::new(vec![
        (
            ResourceTemplate {
                radius: 13.0,
                score: 12,
                energy: 0.0,
                shield: 0.0,
                multiplier: 1.0,
                duration: 0.0,
            },
            4.0,
        ),
        (
            ResourceTemplate {
                radius: 13.0,
                score: 0,
                energy: 40.0,
                shield: 0.0,
                multiplier: 1.0,
                duration: 0.0,
            },
            3.0,
        ),
        (
            ResourceTemplate {
                radius: 14.0,
                score: 0,
                energy: 0.0,
                shield: 240.0,
                multiplier: 1.0,
                duration: 0.0,
            },
            2.0,
        ),
        (
            ResourceTemplate {
                radius: 14.0,
                score: 0,
                energy: 0.0,
                shield: 0.0,
                multiplier: 2.0,
                duration: 420.0,
            },
            1.0,
        ),
    ])
}

/// Builds the rogue-mode power item table.
pub fn item_table() -> WeightedTable<ItemKind> {
    WeightedTable::new(vec![
        (ItemKind::Rampage, 2.0),
        (ItemKind::Spread, 2.0),
        (ItemKind::Life, 2.0),
        (ItemKind::Orbital, 2.0),
        (ItemKind::Ricochet, 2.0),
        (ItemKind::Blink, 1.5),
        (ItemKind::TimeStop, 1.5),
        (ItemKind::Power, 2.0),
    ])
}

/// Duration granted by a timed item, in ticks.
pub fn item_duration(kind: ItemKind) -> f32 {
    match kind {
        ItemKind::Rampage => 300.0,
        ItemKind::Ricochet => 600.0,
        ItemKind::TimeStop => 360.0,
        _ => 0.0,
    }
}

// --- Wave scaling ---

/// Ticks between endless enemy spawns at a given level.
pub fn endless_spawn_interval(level: u32) -> f32 {
    (230.0 - 6.0 * level as f32).max(120.0)
}

/// Endless on-field enemy cap before level-up bonuses.
pub fn endless_enemy_cap(level: u32, cap_bonus: u32) -> usize {
    ((5 + level / 2).min(14) + cap_bonus) as usize
}

/// Endless enemy HP multiplier from run time and level.
pub fn endless_hp_scale(elapsed: f32, level: u32) -> f32 {
    1.0 + (elapsed / 900.0).floor() * 0.3 + (level / 3) as f32 * 0.25
}

/// Ticks between rogue enemy spawns.
pub fn rogue_spawn_interval(elapsed: f32) -> f32 {
    (170.0 - 10.0 * (elapsed / 600.0).floor()).max(90.0)
}

/// Rogue on-field enemy cap.
pub fn rogue_enemy_cap(elapsed: f32) -> usize {
    (8 + (elapsed / 900.0).floor() as usize).min(14)
}

/// Rogue enemy HP multiplier from run time and difficulty.
pub fn rogue_hp_scale(elapsed: f32, difficulty: RogueDifficulty) -> f32 {
    (1.0 + (elapsed / 900.0).floor()).max(1.0) * difficulty.hp_factor()
}

// --- Bosses ---

/// Ticks of boss-free play before the next endless boss.
pub fn endless_boss_cooldown(defeated: u32) -> f32 {
    900.0 + defeated as f32 * 240.0
}

/// Endless boss HP for the current run state.
pub fn endless_boss_hp(level: u32, elapsed: f32) -> f32 {
    80.0 + 10.0 * level as f32 + 15.0 * (elapsed / 600.0).floor()
}

/// Ticks of boss-free play before the next rogue boss.
pub fn rogue_boss_cooldown(defeated: u32) -> f32 {
    1000.0 + defeated as f32 * 320.0
}

/// Rogue boss HP for the current run state.
pub fn rogue_boss_hp(difficulty: RogueDifficulty, elapsed: f32) -> f32 {
    110.0 * difficulty.hp_factor() + 20.0 * (elapsed / 600.0).floor()
}

/// Cyclic level-up rewards (endless mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBonus {
    /// +0.4 movement speed.
    Speed,
    /// +1 on-field enemy cap.
    EnemyCap,
    /// +15 maximum energy.
    EnergyMax,
    /// +1 bullet speed.
    BulletSpeed,
    /// +1 life.
    Life,
}

pub const LEVEL_BONUSES: [LevelBonus; 5] = [
    LevelBonus::Speed,
    LevelBonus::EnemyCap,
    LevelBonus::EnergyMax,
    LevelBonus::BulletSpeed,
    LevelBonus::Life,
];

/// Additional score required to reach the level after `level`.
pub fn next_level_step(level: u32) -> u32 {
    LEVEL_SCORE_STEP + 25 * level
}
