//! Endless-mode level progression.

use neonfall_behavior::templates::{self, LevelBonus, LEVEL_BONUSES};

use crate::effects::Effects;
use crate::player::{PlayerState, RunState};

/// Grants every level the current score has earned. The bonus table is
/// cyclic, so long runs keep stacking the same five upgrades.
pub fn run(player: &mut PlayerState, run: &mut RunState, fx: &mut Effects) {
    while run.score >= run.next_level_score {
        match LEVEL_BONUSES[run.bonus_index % LEVEL_BONUSES.len()] {
            LevelBonus::Speed => player.speed += 0.4,
            LevelBonus::EnemyCap => run.enemy_cap_bonus += 1,
            LevelBonus::EnergyMax => {
                player.energy_max += 15.0;
                player.energy = (player.energy + 15.0).min(player.energy_max);
            }
            LevelBonus::BulletSpeed => player.bullet_speed += 1.0,
            LevelBonus::Life => player.lives += 1,
        }
        run.bonus_index += 1;
        run.level += 1;
        run.next_level_score += templates::next_level_step(run.level);
        fx.banner(format!("Level {}", run.level), 240.0);
    }
}
