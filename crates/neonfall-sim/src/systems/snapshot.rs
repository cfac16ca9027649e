//! Builds the per-tick snapshot handed back to the host.

use hecs::World;

use neonfall_core::components::{
    Agitation, BehaviorState, Collectible, Enemy, EnemyShot, Hazard, Projectile,
};
use neonfall_core::enums::{GamePhase, Mode, RogueDifficulty};
use neonfall_core::events::GameEvent;
use neonfall_core::state::{
    BossStatusView, CollectibleView, EnemyView, GameSnapshot, HazardView, OrbitalView,
    PlayerView, ShotView,
};
use neonfall_core::types::{Position, SimTime, Vec2, Velocity};

use crate::effects::Effects;
use crate::particles::ParticlePool;
use crate::player::{PlayerState, RunState};

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &mut World,
    time: SimTime,
    phase: GamePhase,
    mode: Option<Mode>,
    difficulty: RogueDifficulty,
    player: &PlayerState,
    run: &RunState,
    particles: &ParticlePool,
    fx: &Effects,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let mut enemies = Vec::new();
    let mut boss = None;
    for (_, (pos, enemy, agitation, state)) in
        world.query_mut::<(&Position, &Enemy, &Agitation, &BehaviorState)>()
    {
        if let Some(kind) = enemy.boss {
            if boss.is_none() && enemy.hp > 0.0 {
                boss = Some(BossStatusView {
                    kind,
                    hp: enemy.hp,
                    max_hp: enemy.max_hp,
                });
            }
        }
        enemies.push(EnemyView {
            pos: *pos,
            behavior: enemy.behavior,
            boss: enemy.boss,
            radius: enemy.radius,
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            shield_hp: enemy.shield_hp,
            hit_flash: agitation.hit_flash,
            invisible: state.invisible_timer,
            reappear_flash: state.reappear_flash,
            charge: state.charge,
            pending_death: enemy.pending_death,
        });
    }

    let bullets = world
        .query_mut::<(&Position, &Velocity, &Projectile)>()
        .into_iter()
        .map(|(_, (pos, vel, projectile))| ShotView {
            pos: *pos,
            vel: Vec2::new(vel.x, vel.y),
            radius: projectile.radius,
        })
        .collect();
    let enemy_shots = world
        .query_mut::<(&Position, &Velocity, &EnemyShot)>()
        .into_iter()
        .map(|(_, (pos, vel, shot))| ShotView {
            pos: *pos,
            vel: Vec2::new(vel.x, vel.y),
            radius: shot.radius,
        })
        .collect();
    let collectibles = world
        .query_mut::<(&Position, &Collectible)>()
        .into_iter()
        .map(|(_, (pos, c))| CollectibleView {
            pos: *pos,
            radius: c.radius,
            payload: c.payload,
        })
        .collect();
    let hazards = world
        .query_mut::<(&Position, &Hazard)>()
        .into_iter()
        .map(|(_, (pos, h))| HazardView {
            pos: *pos,
            life: h.life,
            kind: h.kind,
        })
        .collect();
    let orbitals = player
        .orbitals
        .iter()
        .map(|o| OrbitalView {
            pos: o.pos,
            angle: o.angle,
        })
        .collect();

    GameSnapshot {
        time,
        phase,
        mode,
        difficulty,
        player: PlayerView {
            pos: player.pos,
            size: player.size,
            energy: player.energy,
            energy_max: player.energy_max,
            shield: player.shield,
            invincible: player.invincible,
            rampage: player.rampage,
            ricochet: player.ricochet,
            time_stop: player.time_stop,
            blink_charges: player.blink_charges,
            multiplier: player.multiplier,
        },
        enemies,
        bullets,
        enemy_shots,
        collectibles,
        hazards,
        particles: particles.views(),
        orbitals,
        score: run.score,
        level: run.level,
        lives: player.lives,
        banner: fx.banner_view(),
        shake: fx.shake_magnitude(),
        boss,
        events,
    }
}
