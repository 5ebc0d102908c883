//! Fundamental geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Wall-clock timestamp or duration in milliseconds.
pub type Millis = u64;

/// Map-space position of an entity (x right, y down, in map units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in map units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn distance_to(&self, other: Vec2) -> f32 {
        self.0.distance(other)
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity(Vec2::ZERO);

    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Axis-aligned rectangle. Used for the map bounds and barricade fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grow the rectangle by `padding` on every side.
    pub fn padded(&self, padding: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(padding),
            max: self.max + Vec2::splat(padding),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// Simulation time tracking. Unlike a fixed-step sim, time here is read from
/// the injected clock each tick; `tick` only counts frames.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    pub tick: u64,
    pub now_ms: Millis,
    /// Clamped frame delta used for continuous motion.
    pub dt_ms: Millis,
}

impl SimTime {
    pub fn dt_secs(&self) -> f32 {
        self.dt_ms as f32 / 1000.0
    }
}

/// Timestamp cooldown gate: ready when never used, or when at least
/// `cooldown` ms have passed since `last`.
pub fn cooldown_ready(last: Option<Millis>, now: Millis, cooldown: Millis) -> bool {
    match last {
        None => true,
        Some(last) => now.saturating_sub(last) >= cooldown,
    }
}
