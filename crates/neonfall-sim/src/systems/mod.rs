//! Per-tick systems, run in a fixed order by the engine.

pub mod behavior;
pub mod combat;
pub mod hazards;
pub mod movement;
pub mod pickup;
pub mod progression;
pub mod snapshot;
pub mod spawner;
pub mod status;
pub mod weapons;
