//! Simulation engine for Turf.
//!
//! Owns the defense-session ECS world, the player's economy records and the
//! Visitor, runs systems once per frame, and produces `GameStateSnapshot`s.

pub mod engine;
pub mod persistence;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use turf_core as core;
