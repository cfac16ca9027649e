//! Enemy steering and action state machines.
//!
//! This crate is ECS-free: the simulation collects a [`BehaviorContext`]
//! per enemy, calls [`evaluate`], and applies the returned displacement
//! and actions itself. Keeping the machines pure makes every archetype
//! testable with a context struct and a seeded RNG.

pub mod boss;
pub mod steer;
pub mod templates;

pub use steer::{evaluate, BehaviorAction, BehaviorContext, BehaviorUpdate};

#[cfg(test)]
mod tests;
