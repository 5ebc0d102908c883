//! Combat AI for Turf Defense.
//!
//! Implements the enemy catalog, the per-enemy target/attack state machine,
//! and structure target selection.

pub mod fsm;
pub mod profiles;
pub mod targeting;

pub use turf_core as core;

#[cfg(test)]
mod tests;
