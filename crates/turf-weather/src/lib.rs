//! Shared real-time weather cycle.
//!
//! Every client derives the same weather from the wall clock alone, with no
//! coordination: the cycle is anchored at a fixed epoch and advances every
//! two hours through a fixed sequence.

pub mod cycle;

pub use cycle::{current_weather, cycle_index, ms_until_next, next_weather, WeatherEntry, WeatherModifiers, CYCLE};
