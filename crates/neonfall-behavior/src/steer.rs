//! Per-archetype steering and action evaluation.

use rand::Rng;

use neonfall_core::components::BehaviorState;
use neonfall_core::constants::COMMANDER_AURA_RANGE;
use neonfall_core::enums::{Behavior, BossKind, ChargePhase};
use neonfall_core::types::{Position, Vec2};

use crate::boss::{self, VolleyKind};

/// Everything an archetype may look at for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext {
    pub behavior: Behavior,
    pub boss: Option<BossKind>,
    pub pos: Position,
    pub player: Position,
    /// Base speed with the slow factor already applied.
    pub eff_speed: f32,
    pub delta: f32,
}

impl BehaviorContext {
    fn to_player(&self) -> Vec2 {
        self.pos.offset_to(self.player)
    }

    fn player_distance(&self) -> f32 {
        self.pos.distance_to(self.player)
    }
}

/// Side effects an evaluation requests from the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorAction {
    /// Fire one aimed shot at the player's current position.
    FireAtPlayer,
    /// Drop a poison cloud at the enemy's position.
    DropPoison,
    /// Shield every ally within `range`.
    GrantAlliedShields { amount: f32, range: f32 },
    /// Relocate instantly.
    Teleport { to: Position },
    /// Open a rift hazard at the enemy's position.
    OpenRift,
    /// Spawn minions next to the enemy.
    SummonMinions { count: u32 },
    /// Fire a boss volley pattern.
    Volley(VolleyKind),
}

/// Result of one evaluation: where to move and what to do.
#[derive(Debug, Clone, Default)]
pub struct BehaviorUpdate {
    pub displacement: Vec2,
    pub actions: Vec<BehaviorAction>,
}

impl BehaviorUpdate {
    fn moving(displacement: Vec2) -> Self {
        Self {
            displacement,
            actions: Vec::new(),
        }
    }
}

/// Runs one archetype's state machine for one tick.
pub fn evaluate<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    match ctx.behavior {
        Behavior::Slow | Behavior::Splitter => BehaviorUpdate::moving(pursue(ctx, 1.0)),
        Behavior::Brute => BehaviorUpdate::moving(pursue(ctx, 0.9)),
        Behavior::Sneak => sneak(ctx),
        Behavior::Zigzag => zigzag(ctx, state),
        Behavior::Shooter => shooter(ctx, state, rng),
        Behavior::Charger => charger(ctx, state, rng),
        Behavior::Commander => commander(ctx, state, rng),
        Behavior::Toxic => toxic(ctx, state),
        Behavior::Assassin => assassin(ctx, state, rng),
        Behavior::Rift => rift(ctx, state, rng),
        Behavior::Boss => boss_update(ctx, state, rng),
    }
}

/// Straight pursuit scaled by the archetype's speed factor.
fn pursue(ctx: &BehaviorContext, factor: f32) -> Vec2 {
    ctx.to_player()
        .normalized()
        .scaled(ctx.eff_speed * factor * ctx.delta)
}

/// Mostly-direct pursuit with a constant sideways drift.
fn sneak(ctx: &BehaviorContext) -> BehaviorUpdate {
    let dir = ctx.to_player().normalized();
    let drift = dir.perp().scaled(0.35);
    let step = Vec2::new(dir.x * 0.7 + drift.x, dir.y * 0.7 + drift.y)
        .scaled(ctx.eff_speed * ctx.delta);
    BehaviorUpdate::moving(step)
}

fn zigzag(ctx: &BehaviorContext, state: &mut BehaviorState) -> BehaviorUpdate {
    state.zigzag_timer += ctx.delta;
    if state.zigzag_timer >= 45.0 {
        state.zigzag_timer -= 45.0;
        state.zigzag_dir = -state.zigzag_dir;
    }
    let dir = ctx.to_player().normalized();
    let side = dir.perp().scaled(0.6 * state.zigzag_dir);
    let step =
        Vec2::new(dir.x + side.x, dir.y + side.y).scaled(ctx.eff_speed * ctx.delta);
    BehaviorUpdate::moving(step)
}

/// Keeps a firing band around the player and shoots on a jittered cooldown.
fn shooter<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let dist = ctx.player_distance();
    let dir = ctx.to_player().normalized();
    let displacement = if dist > 240.0 {
        dir.scaled(ctx.eff_speed * ctx.delta)
    } else if dist < 190.0 {
        dir.scaled(-ctx.eff_speed * ctx.delta)
    } else {
        Vec2::ZERO
    };

    let mut update = BehaviorUpdate::moving(displacement);
    state.shoot_cooldown -= ctx.delta;
    if state.shoot_cooldown <= 0.0 {
        state.shoot_cooldown = rng.gen_range(110.0..150.0);
        update.actions.push(BehaviorAction::FireAtPlayer);
    }
    update
}

/// Chase, telegraphed windup, then a straight dash along the locked direction.
fn charger<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    state.dash_cooldown -= ctx.delta;
    match state.charge {
        ChargePhase::Chase => {
            if state.dash_cooldown <= 0.0 {
                state.charge = ChargePhase::Windup;
                state.charge_timer = 30.0;
                return BehaviorUpdate::default();
            }
            BehaviorUpdate::moving(pursue(ctx, 1.0))
        }
        ChargePhase::Windup => {
            state.charge_timer -= ctx.delta;
            if state.charge_timer <= 0.0 {
                // Lock the dash heading at the end of the telegraph.
                state.charge = ChargePhase::Dash;
                state.charge_timer = 20.0;
                state.dash_dir = ctx.to_player().normalized();
            }
            // Quiver in place while telegraphing.
            let jitter = Vec2::new(
                rng.gen_range(-1.0..1.0) * ctx.delta,
                rng.gen_range(-1.0..1.0) * ctx.delta,
            );
            BehaviorUpdate::moving(jitter)
        }
        ChargePhase::Dash => {
            state.charge_timer -= ctx.delta;
            if state.charge_timer <= 0.0 {
                state.charge = ChargePhase::Chase;
                state.dash_cooldown = rng.gen_range(120.0..170.0);
                return BehaviorUpdate::default();
            }
            BehaviorUpdate::moving(
                state.dash_dir.scaled(4.5 * ctx.eff_speed * ctx.delta),
            )
        }
    }
}

/// Slow pursuit; periodically shields every ally in range.
fn commander<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut update = BehaviorUpdate::moving(pursue(ctx, 0.85));
    state.aura_cooldown -= ctx.delta;
    if state.aura_cooldown <= 0.0 {
        state.aura_cooldown = 200.0;
        update.actions.push(BehaviorAction::GrantAlliedShields {
            amount: rng.gen_range(3..=4) as f32,
            range: COMMANDER_AURA_RANGE,
        });
    }
    update
}

fn toxic(ctx: &BehaviorContext, state: &mut BehaviorState) -> BehaviorUpdate {
    let mut update = BehaviorUpdate::moving(pursue(ctx, 1.0));
    state.toxin_timer += ctx.delta;
    if state.toxin_timer >= 40.0 {
        state.toxin_timer = 0.0;
        update.actions.push(BehaviorAction::DropPoison);
    }
    update
}

/// Fast pursuit that periodically blinks to a ring around the player and
/// goes invisible, crawling until it reappears.
fn assassin<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut update = BehaviorUpdate::default();

    if state.invisible_timer > 0.0 {
        state.invisible_timer -= ctx.delta;
        if state.invisible_timer <= 0.0 {
            state.reappear_flash = 12.0;
        }
        update.displacement = pursue(ctx, 0.4);
    } else {
        if state.reappear_flash > 0.0 {
            state.reappear_flash -= ctx.delta;
        }
        update.displacement = pursue(ctx, 1.4);
    }

    state.phase_cooldown -= ctx.delta;
    if state.phase_cooldown <= 0.0 {
        state.phase_cooldown = rng.gen_range(180.0..220.0);
        state.invisible_timer = 60.0;
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let ring = rng.gen_range(120.0..180.0);
        let to = ctx
            .player
            .translated(Vec2::from_angle(angle).scaled(ring));
        update.actions.push(BehaviorAction::Teleport { to });
    }
    update
}

fn rift<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut update = BehaviorUpdate::moving(pursue(ctx, 0.75));
    state.rift_cooldown -= ctx.delta;
    if state.rift_cooldown <= 0.0 {
        state.rift_cooldown = rng.gen_range(180.0..240.0);
        update.actions.push(BehaviorAction::OpenRift);
    }
    update
}

fn boss_update<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    match ctx.boss {
        Some(BossKind::Matriarch) => boss::matriarch(ctx, state, rng),
        Some(BossKind::Warden) => boss::warden(ctx, state, rng),
        // Boss behavior without a kind is a spawn bug; stand still.
        None => BehaviorUpdate::default(),
    }
}
