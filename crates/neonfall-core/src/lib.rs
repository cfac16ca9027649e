//! Core types and definitions for the NEONFALL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and constants.
//! It has no dependency on any rendering or input framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;
