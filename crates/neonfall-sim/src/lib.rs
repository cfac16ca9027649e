//! Simulation engine for NEONFALL.
//!
//! Owns the hecs ECS world, advances the arena one variable-delta tick at
//! a time, and produces `GameSnapshot`s for the frontend. Completely
//! headless (no rendering dependency), enabling deterministic testing.

pub mod effects;
pub mod engine;
pub mod particles;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use neonfall_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
