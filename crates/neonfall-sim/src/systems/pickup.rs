//! Player-vs-collectible resolution and payload application.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::templates::item_duration;
use neonfall_core::components::{Collectible, Payload};
use neonfall_core::constants::MAX_BLINK_CHARGES;
use neonfall_core::enums::ItemKind;
use neonfall_core::types::Position;

use crate::effects::Effects;
use crate::particles::{hue, BurstSpec, ParticlePool};
use crate::player::{PlayerState, RunState};

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticlePool,
    fx: &mut Effects,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut collected: Vec<(Entity, Position, Payload)> = Vec::new();
    for (entity, (pos, collectible)) in world.query_mut::<(&Position, &Collectible)>() {
        if pos.distance_to(player.pos) < collectible.radius + player.radius() {
            collected.push((entity, *pos, collectible.payload));
        }
    }

    for (entity, pos, payload) in collected {
        particles.burst(rng, pos, &BurstSpec::pickup(hue::GOLD));
        match payload {
            Payload::Resource {
                score,
                energy,
                shield,
                multiplier,
                duration,
            } => {
                if score > 0 {
                    run.score += (score as f32 * player.multiplier).round() as u32;
                }
                if energy > 0.0 {
                    player.energy = (player.energy + energy).min(player.energy_max);
                }
                if shield > 0.0 {
                    player.shield = player.shield.max(shield);
                }
                if multiplier > 1.0 {
                    player.multiplier = multiplier;
                    player.multiplier_timer = duration;
                }
            }
            Payload::Power(kind) => apply_item(player, fx, rng, kind),
        }
        despawn_buffer.push(entity);
    }
}

fn apply_item(player: &mut PlayerState, fx: &mut Effects, rng: &mut ChaCha8Rng, kind: ItemKind) {
    let duration = item_duration(kind);
    match kind {
        ItemKind::Rampage => {
            player.rampage = player.rampage.max(duration);
            player.invincible = player.invincible.max(duration);
            fx.banner("Rampage!", 140.0);
        }
        ItemKind::Spread => {
            player.shots = (player.shots + 1).min(neonfall_core::constants::MAX_ROGUE_SHOTS);
            fx.banner("Spread +1", 120.0);
        }
        ItemKind::Life => {
            player.lives += 1;
            fx.banner("Life +1", 120.0);
        }
        ItemKind::Orbital => {
            player.add_orbital(rng);
            fx.banner("Orbitals empowered", 120.0);
        }
        ItemKind::Ricochet => {
            player.ricochet = player.ricochet.max(duration);
            fx.banner("Ricochet 10s", 140.0);
        }
        ItemKind::Blink => {
            player.blink_charges = (player.blink_charges + 1).min(MAX_BLINK_CHARGES);
            fx.banner("Blink charge +1", 120.0);
        }
        ItemKind::TimeStop => {
            player.time_stop = player.time_stop.max(duration);
            fx.banner("Time stop 6s", 160.0);
        }
        ItemKind::Power => {
            player.damage += 1.0;
            fx.banner("Power +1", 120.0);
        }
    }
}
