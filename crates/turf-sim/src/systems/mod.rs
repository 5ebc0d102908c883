//! Systems that operate on a defense session each frame.
//!
//! Systems are plain functions over explicit state. They do not own state;
//! enemies live in the hecs world, everything else in `DefenseSession`.

pub mod abilities;
pub mod cleanup;
pub mod combat_ai;
pub mod damage;
pub mod defenses;
pub mod player;
pub mod shop;
pub mod snapshot;
pub mod wave_spawner;
