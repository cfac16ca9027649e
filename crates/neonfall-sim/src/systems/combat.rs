//! Collision and damage resolution.
//!
//! Order per tick: orbital-vs-enemy, bullet-vs-enemy, player-vs-enemy
//! contact, enemy-shot-vs-player. Kills are processed inline so a
//! frozen (pending-death) enemy is flagged before later projectiles
//! test it.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neonfall_core::components::{Agitation, Enemy, EnemyShot, Payload, Projectile};
use neonfall_core::constants::{
    ENDLESS_HIT_SCORE, HIT_FLASH_TICKS, HIT_SLOW_TICKS, LIFE_LOST_GRACE, MAX_BLINK_CHARGES,
    ORBITAL_RADIUS, ROGUE_KILL_SCORE, SHIELD_HIT_COST, SHIELD_HIT_GRACE,
};
use neonfall_core::enums::{Behavior, BossKind, Mode, RogueDifficulty};
use neonfall_core::events::GameEvent;
use neonfall_core::types::{Position, Vec2};

use crate::effects::Effects;
use crate::particles::{hue, BurstSpec, ParticlePool};
use crate::player::{PlayerState, RunState};
use crate::systems::spawner::SpawnState;
use crate::world_setup;

/// Everything kill processing needs besides the world.
struct KillCtx<'a> {
    player: &'a mut PlayerState,
    run: &'a mut RunState,
    spawn: &'a mut SpawnState,
    mode: Mode,
    difficulty: RogueDifficulty,
    rng: &'a mut ChaCha8Rng,
    particles: &'a mut ParticlePool,
    fx: &'a mut Effects,
    events: &'a mut Vec<GameEvent>,
    despawn_buffer: &'a mut Vec<Entity>,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    run: &mut RunState,
    spawn: &mut SpawnState,
    mode: Mode,
    difficulty: RogueDifficulty,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticlePool,
    fx: &mut Effects,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut ctx = KillCtx {
        player,
        run,
        spawn,
        mode,
        difficulty,
        rng,
        particles,
        fx,
        events,
        despawn_buffer,
    };
    if mode == Mode::Rogue {
        orbital_hits(world, &mut ctx);
    }
    bullet_hits(world, &mut ctx);
    player_contact(world, &mut ctx);
    enemy_shot_hits(world, &mut ctx);
}

/// Shield HP soaks damage first; the negative remainder carries to HP.
fn damage_enemy(enemy: &mut Enemy, agitation: &mut Agitation, mut dmg: f32) {
    if enemy.shield_hp > 0.0 {
        enemy.shield_hp -= dmg;
        dmg = if enemy.shield_hp < 0.0 {
            -enemy.shield_hp
        } else {
            0.0
        };
        enemy.shield_hp = enemy.shield_hp.max(0.0);
    }
    if dmg > 0.0 {
        enemy.hp -= dmg;
    }
    agitation.hit_flash = HIT_FLASH_TICKS;
    agitation.slow = HIT_SLOW_TICKS;
}

/// True while the entity still blocks projectiles: alive, or a frozen
/// corpse awaiting the thaw.
fn collidable(enemy: &Enemy) -> bool {
    enemy.pending_death || enemy.hp > 0.0
}

fn enemy_entities(world: &mut World) -> Vec<Entity> {
    world
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(e, _)| e)
        .collect()
}

fn orbital_hits(world: &mut World, ctx: &mut KillCtx) {
    if ctx.player.orbitals.is_empty() {
        return;
    }
    let orb_positions: Vec<Position> = ctx.player.orbitals.iter().map(|o| o.pos).collect();
    let damage = ctx.player.damage;

    for entity in enemy_entities(world) {
        for orb in &orb_positions {
            let killed = match world
                .query_one_mut::<(&Position, &mut Enemy, &mut Agitation)>(entity)
            {
                Ok((pos, enemy, agitation)) => {
                    if !collidable(enemy) {
                        break;
                    }
                    if !enemy.is_alive()
                        || pos.distance_to(*orb) >= enemy.radius + ORBITAL_RADIUS
                    {
                        continue;
                    }
                    damage_enemy(enemy, agitation, damage);
                    enemy.hp <= 0.0
                }
                Err(_) => break,
            };
            if killed {
                process_kill(world, entity, ctx, true, true);
                break;
            }
        }
    }
}

struct BulletSlot {
    entity: Entity,
    pos: Position,
    radius: f32,
    pierce: u32,
    damage: Option<f32>,
    consumed: bool,
    dirty: bool,
}

/// Piercing bullets spend a charge per hit; the rest die on contact.
fn consume_hit(bullet: &mut BulletSlot) {
    if bullet.pierce > 0 {
        bullet.pierce -= 1;
        bullet.dirty = true;
    } else {
        bullet.consumed = true;
    }
}

fn bullet_hits(world: &mut World, ctx: &mut KillCtx) {
    let mut bullets: Vec<BulletSlot> = world
        .query_mut::<(&Position, &Projectile)>()
        .into_iter()
        .map(|(entity, (pos, projectile))| BulletSlot {
            entity,
            pos: *pos,
            radius: projectile.radius,
            pierce: projectile.pierce,
            damage: projectile.damage,
            consumed: false,
            dirty: false,
        })
        .collect();
    let enemies = enemy_entities(world);

    match ctx.mode {
        // Each enemy takes at most one bullet per tick; every hit scores.
        Mode::Endless => {
            for &entity in &enemies {
                for bullet in bullets.iter_mut() {
                    if bullet.consumed {
                        continue;
                    }
                    let hit = match world
                        .query_one_mut::<(&Position, &mut Enemy, &mut Agitation)>(entity)
                    {
                        Ok((pos, enemy, agitation)) => {
                            if !collidable(enemy)
                                || pos.distance_to(bullet.pos) >= enemy.radius
                            {
                                None
                            } else {
                                let at = *pos;
                                damage_enemy(enemy, agitation, bullet.damage.unwrap_or(1.0));
                                Some((at, enemy.hp <= 0.0))
                            }
                        }
                        Err(_) => break,
                    };
                    let Some((at, killed)) = hit else { continue };
                    consume_hit(bullet);
                    ctx.run.score +=
                        (ENDLESS_HIT_SCORE as f32 * ctx.player.multiplier).round() as u32;
                    ctx.particles
                        .burst(ctx.rng, at, &BurstSpec::enemy_hit(hue::PURPLE));
                    if killed {
                        process_kill(world, entity, ctx, true, true);
                    }
                    break;
                }
            }
        }
        // A piercing bullet sweeps through several enemies; frozen
        // corpses soak bullets without taking damage.
        Mode::Rogue => {
            for bullet in bullets.iter_mut() {
                for &entity in &enemies {
                    if bullet.consumed {
                        break;
                    }
                    let outcome = match world
                        .query_one_mut::<(&Position, &mut Enemy, &mut Agitation)>(entity)
                    {
                        Ok((pos, enemy, agitation)) => {
                            if !collidable(enemy)
                                || pos.distance_to(bullet.pos)
                                    >= enemy.radius + bullet.radius
                            {
                                None
                            } else {
                                let was_alive = enemy.is_alive();
                                if was_alive {
                                    damage_enemy(
                                        enemy,
                                        agitation,
                                        bullet.damage.unwrap_or(ctx.player.damage),
                                    );
                                }
                                Some(was_alive && enemy.hp <= 0.0)
                            }
                        }
                        Err(_) => continue,
                    };
                    let Some(killed) = outcome else { continue };
                    consume_hit(bullet);
                    if killed {
                        process_kill(world, entity, ctx, true, true);
                        break;
                    }
                }
            }
        }
    }

    for bullet in bullets {
        if bullet.consumed {
            ctx.despawn_buffer.push(bullet.entity);
        } else if bullet.dirty {
            if let Ok(mut projectile) = world.get::<&mut Projectile>(bullet.entity) {
                projectile.pierce = bullet.pierce;
            }
        }
    }
}

fn player_contact(world: &mut World, ctx: &mut KillCtx) {
    let mut contact: Option<(Entity, bool)> = None;
    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if !collidable(enemy) {
            continue;
        }
        if pos.distance_to(ctx.player.pos) < ctx.player.radius() + enemy.radius {
            contact = Some((entity, enemy.boss.is_some()));
            break;
        }
    }
    let Some((entity, is_boss)) = contact else {
        return;
    };

    if ctx.mode == Mode::Rogue && ctx.player.rampage > 0.0 {
        if is_boss {
            // Bosses shrug rampage off with a flash and a stagger.
            if let Ok(mut agitation) = world.get::<&mut Agitation>(entity) {
                agitation.hit_flash = HIT_FLASH_TICKS;
                agitation.slow = HIT_SLOW_TICKS;
            }
            return;
        }
        let killed = match world.query_one_mut::<&mut Enemy>(entity) {
            Ok(enemy) if enemy.is_alive() => {
                enemy.hp = 0.0;
                true
            }
            _ => false,
        };
        if killed {
            // Rampage kills score like bullet kills but never split.
            process_kill(world, entity, ctx, true, false);
        }
        return;
    }

    let frozen = ctx.mode == Mode::Rogue && ctx.player.time_stop > 0.0;
    if !frozen {
        damage_player(ctx);
    }
}

fn enemy_shot_hits(world: &mut World, ctx: &mut KillCtx) {
    if ctx.mode == Mode::Rogue && ctx.player.time_stop > 0.0 {
        return;
    }
    let half = ctx.player.radius();
    let px = ctx.player.pos.x;
    let py = ctx.player.pos.y;

    let mut hits: Vec<Entity> = Vec::new();
    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &EnemyShot)>() {
        if pos.x >= px - half && pos.x <= px + half && pos.y >= py - half && pos.y <= py + half
        {
            hits.push(entity);
        }
    }
    for entity in hits {
        ctx.despawn_buffer.push(entity);
        damage_player(ctx);
    }
}

/// Shield absorbs first, then invincibility gates, then a life is lost.
fn damage_player(ctx: &mut KillCtx) {
    if ctx.player.shield > 0.0 {
        ctx.player.shield = (ctx.player.shield - SHIELD_HIT_COST).max(0.0);
        ctx.player.invincible = SHIELD_HIT_GRACE;
        ctx.particles
            .burst(ctx.rng, ctx.player.pos, &BurstSpec::shield_block());
        return;
    }
    if ctx.player.invincible > 0.0 {
        return;
    }
    ctx.player.lives -= 1;
    ctx.player.invincible = LIFE_LOST_GRACE;
    ctx.particles
        .burst(ctx.rng, ctx.player.pos, &BurstSpec::player_hit());
}

/// Handles an enemy reaching 0 HP: boss rewards, splits, drops, and
/// either immediate removal or deferral while time is stopped.
fn process_kill(
    world: &mut World,
    entity: Entity,
    ctx: &mut KillCtx,
    score_allowed: bool,
    split_allowed: bool,
) {
    let (enemy, pos) = match world.query_one_mut::<(&Enemy, &Position)>(entity) {
        Ok((enemy, pos)) => (enemy.clone(), *pos),
        Err(_) => return,
    };

    if let Some(kind) = enemy.boss {
        if !enemy.boss_processed {
            if let Ok(mut e) = world.get::<&mut Enemy>(entity) {
                e.boss_processed = true;
            }
            boss_rewards(world, pos, kind, ctx);
        }
    }

    if split_allowed && enemy.behavior == Behavior::Splitter && !enemy.split_child {
        world_setup::spawn_split_children(world, ctx.rng, &enemy, pos, ctx.mode, ctx.difficulty);
    }

    let frozen = ctx.mode == Mode::Rogue && ctx.player.time_stop > 0.0;
    if frozen {
        if let Ok(mut e) = world.get::<&mut Enemy>(entity) {
            e.pending_death = true;
        }
        return;
    }

    ctx.particles
        .burst(ctx.rng, pos, &BurstSpec::enemy_death(hue::PURPLE));
    if ctx.mode == Mode::Rogue && score_allowed && enemy.boss.is_none() {
        ctx.run.score += ROGUE_KILL_SCORE;
    }
    if ctx.mode == Mode::Endless && enemy.behavior == Behavior::Shooter {
        world_setup::spawn_collectible(
            world,
            pos,
            12.0,
            Payload::Resource {
                score: 0,
                energy: 30.0,
                shield: 0.0,
                multiplier: 1.0,
                duration: 0.0,
            },
        );
    }
    ctx.despawn_buffer.push(entity);
}

fn boss_rewards(world: &mut World, pos: Position, kind: BossKind, ctx: &mut KillCtx) {
    ctx.spawn.boss_defeated += 1;
    ctx.spawn.boss_timer = 0.0;
    ctx.player.lives += 1;
    ctx.fx.banner("Boss Defeated!", 260.0);
    ctx.fx.shake(18.0, 7.0);
    ctx.events.push(GameEvent::BossDefeated { kind });

    let energy = |amount: f32| Payload::Resource {
        score: 0,
        energy: amount,
        shield: 0.0,
        multiplier: 1.0,
        duration: 0.0,
    };
    let shield = |amount: f32| Payload::Resource {
        score: 0,
        energy: 0.0,
        shield: amount,
        multiplier: 1.0,
        duration: 0.0,
    };
    match ctx.mode {
        Mode::Endless => {
            ctx.run.score += 420;
            world_setup::spawn_collectible(
                world,
                pos.translated(Vec2::new(-12.0, -6.0)),
                14.0,
                energy(40.0),
            );
            world_setup::spawn_collectible(
                world,
                pos.translated(Vec2::new(12.0, 4.0)),
                14.0,
                shield(320.0),
            );
            world_setup::spawn_collectible(
                world,
                pos.translated(Vec2::new(
                    ctx.rng.gen_range(-12.0..12.0),
                    ctx.rng.gen_range(-8.0..8.0),
                )),
                13.0,
                Payload::Resource {
                    score: 45,
                    energy: 0.0,
                    shield: 0.0,
                    multiplier: 1.0,
                    duration: 0.0,
                },
            );
        }
        Mode::Rogue => {
            ctx.run.score += 380;
            ctx.player.blink_charges = (ctx.player.blink_charges + 1).min(MAX_BLINK_CHARGES);
            world_setup::spawn_collectible(
                world,
                pos.translated(Vec2::new(-14.0, 0.0)),
                14.0,
                energy(50.0),
            );
            world_setup::spawn_collectible(
                world,
                pos.translated(Vec2::new(14.0, 0.0)),
                14.0,
                shield(360.0),
            );
        }
    }
}
