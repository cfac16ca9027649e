//! Boss steering and volley patterns.

use rand::Rng;

use neonfall_core::components::BehaviorState;
use neonfall_core::types::Vec2;

use crate::steer::{BehaviorAction, BehaviorContext, BehaviorUpdate};

/// Static tuning for one boss archetype.
#[derive(Debug, Clone, Copy)]
pub struct BossProfile {
    pub speed: f32,
    pub radius: f32,
    /// Orbit distance the boss tries to keep from the player.
    pub prefer_dist: f32,
    pub shoot_cooldown: f32,
    pub wave_cooldown: f32,
    pub summon_cooldown: f32,
}

/// The matriarch: spread and ring volleys plus minion summons.
pub const MATRIARCH: BossProfile = BossProfile {
    speed: 1.0,
    radius: 46.0,
    prefer_dist: 240.0,
    shoot_cooldown: 70.0,
    wave_cooldown: 160.0,
    summon_cooldown: 210.0,
};

/// The warden: fan, rotating cross, and spiral volleys.
pub const WARDEN: BossProfile = BossProfile {
    speed: 1.1,
    radius: 48.0,
    prefer_dist: 260.0,
    shoot_cooldown: 60.0,
    wave_cooldown: 160.0,
    summon_cooldown: 200.0,
};

/// A boss bullet pattern; expanded into shot directions by [`volley_shots`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolleyKind {
    /// 5 aimed shots fanned over ±30°.
    MatriarchSpread,
    /// 16 shots evenly around the circle.
    MatriarchRing,
    /// 3 aimed shots at ±8°.
    WardenFan,
    /// 4 shots at 90° intervals, rotated by `phase` degrees.
    WardenCross { phase: f32 },
    /// 12 shots at 30° intervals with ramping speed.
    WardenSpiral,
}

/// Expands one volley into `(direction, speed)` pairs.
///
/// `aim` is the normalized direction from the boss to the player; ring and
/// cross patterns ignore it.
pub fn volley_shots(kind: VolleyKind, aim: Vec2) -> Vec<(Vec2, f32)> {
    match kind {
        VolleyKind::MatriarchSpread => (0..5)
            .map(|k| (aim.rotated_deg(-30.0 + 15.0 * k as f32), 4.2))
            .collect(),
        VolleyKind::MatriarchRing => (0..16)
            .map(|k| (Vec2::new(1.0, 0.0).rotated_deg(22.5 * k as f32), 3.2))
            .collect(),
        VolleyKind::WardenFan => [-8.0, 0.0, 8.0]
            .iter()
            .map(|deg| (aim.rotated_deg(*deg), 4.6))
            .collect(),
        VolleyKind::WardenCross { phase } => (0..4)
            .map(|k| (Vec2::new(1.0, 0.0).rotated_deg(phase + 90.0 * k as f32), 3.6))
            .collect(),
        VolleyKind::WardenSpiral => (0..12)
            .map(|k| (aim.rotated_deg(30.0 * k as f32), 2.6 + 0.15 * k as f32))
            .collect(),
    }
}

/// Drifts the boss toward a slowly rotating orbit point around the player.
fn orbit(ctx: &BehaviorContext, state: &mut BehaviorState, profile: &BossProfile) -> Vec2 {
    state.orbit_angle += 0.01 * ctx.delta;
    let target = ctx
        .player
        .translated(Vec2::from_angle(state.orbit_angle).scaled(profile.prefer_dist));
    let offset = ctx.pos.offset_to(target);
    // Exponential approach keeps the drift frame-rate independent.
    offset.scaled((1.0 - 0.97f32.powf(ctx.delta)) * profile.speed)
}

pub(crate) fn matriarch<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut update = BehaviorUpdate {
        displacement: orbit(ctx, state, &MATRIARCH),
        actions: Vec::new(),
    };

    state.shoot_cooldown -= ctx.delta;
    if state.shoot_cooldown <= 0.0 {
        state.shoot_cooldown = rng.gen_range(80.0..100.0);
        update
            .actions
            .push(BehaviorAction::Volley(VolleyKind::MatriarchSpread));
    }
    state.wave_cooldown -= ctx.delta;
    if state.wave_cooldown <= 0.0 {
        state.wave_cooldown = rng.gen_range(160.0..260.0);
        update
            .actions
            .push(BehaviorAction::Volley(VolleyKind::MatriarchRing));
    }
    state.summon_cooldown -= ctx.delta;
    if state.summon_cooldown <= 0.0 {
        state.summon_cooldown = rng.gen_range(210.0..320.0);
        update.actions.push(BehaviorAction::SummonMinions { count: 2 });
    }
    update
}

pub(crate) fn warden<R: Rng>(
    ctx: &BehaviorContext,
    state: &mut BehaviorState,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut update = BehaviorUpdate {
        displacement: orbit(ctx, state, &WARDEN),
        actions: Vec::new(),
    };

    state.shoot_cooldown -= ctx.delta;
    if state.shoot_cooldown <= 0.0 {
        state.shoot_cooldown = rng.gen_range(85.0..110.0);
        update
            .actions
            .push(BehaviorAction::Volley(VolleyKind::WardenFan));
    }
    state.wave_cooldown -= ctx.delta;
    if state.wave_cooldown <= 0.0 {
        state.wave_cooldown = rng.gen_range(190.0..240.0);
        update.actions.push(BehaviorAction::Volley(VolleyKind::WardenCross {
            phase: state.cross_phase,
        }));
        state.cross_phase += 0.5;
    }
    state.summon_cooldown -= ctx.delta;
    if state.summon_cooldown <= 0.0 {
        state.summon_cooldown = rng.gen_range(220.0..260.0);
        update
            .actions
            .push(BehaviorAction::Volley(VolleyKind::WardenSpiral));
    }
    update
}
