//! Headless Turf host.
//!
//! Wires the simulation to the outside world: configuration, logging, the
//! fixed-rate game loop thread and a line-delimited JSON command bridge.

pub mod bridge;
pub mod config;
pub mod game_loop;
pub mod state;

pub use turf_core as core;
