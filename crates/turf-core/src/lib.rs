//! Core types and definitions for the Turf live systems.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, economy records,
//! the injected clock, and tuning constants.
//! It has no dependency on any runtime or rendering framework.

pub mod clock;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod records;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
