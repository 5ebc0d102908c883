//! ECS components and plain state records for the defense session.
//!
//! Components are plain data structs. Game logic lives in systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Millis;

/// A live enemy. Paired with `Position` and `Velocity` on the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub hp: u32,
    pub max_hp: u32,
    pub state: EnemyState,
    /// Pursuing the player rather than a structure.
    pub aggroed: bool,
    pub target_structure: Option<u32>,
    pub last_attack_ms: Option<Millis>,
    /// Effective move speed, fixed at spawn (type speed x weather).
    pub speed: f32,
}

impl Enemy {
    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }
}

/// A defended map structure. Exactly one per map is `critical` (the main base).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub id: u32,
    pub position: Vec2,
    pub hp: u32,
    pub max_hp: u32,
    pub critical: bool,
    /// Sits by the map border; deprioritized when enemies re-acquire targets.
    #[serde(default)]
    pub near_edge: bool,
}

impl Structure {
    pub fn is_standing(&self) -> bool {
        self.hp > 0
    }
}

/// Auto-targeting gun emplacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    pub range: f32,
    pub damage: f32,
    pub fire_rate_ms: Millis,
    pub last_fire_ms: Option<Millis>,
}

/// Slow field. Degrades while enemies stand inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barricade {
    pub width: f32,
    pub height: f32,
    pub slow_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DefenseSpec {
    Turret(Turret),
    Barricade(Barricade),
}

/// A player-purchased, map-positioned defense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedDefense {
    pub id: u32,
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub spec: DefenseSpec,
}

impl PlacedDefense {
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0.0
    }
}

/// Transient explosion record for the renderer. Gates nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec2,
    pub radius: f32,
    pub started_at_ms: Millis,
    pub duration_ms: Millis,
}

impl Explosion {
    pub fn is_expired(&self, now: Millis) -> bool {
        now.saturating_sub(self.started_at_ms) >= self.duration_ms
    }
}

/// The player avatar inside a defense session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub position: Vec2,
    pub last_attack_ms: Option<Millis>,
}

/// A cooldown-gated ability slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub kind: AbilityKind,
    pub cooldown_ms: Millis,
    pub last_used_ms: Option<Millis>,
}

/// Wave and economy state for one defense session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveState {
    /// Monotonic; 0 until the first wave starts.
    pub wave: u32,
    pub phase: WavePhase,
    /// 0..=100.
    pub player_hp: u32,
    pub enemies_killed: u32,
    pub total_score: u32,
    /// Shop currency earned from kills and wave clears.
    pub defense_cash: u32,
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
    pub fail_reason: Option<FailReason>,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 0,
            phase: WavePhase::Preparing,
            player_hp: crate::constants::PLAYER_MAX_HP,
            enemies_killed: 0,
            total_score: 0,
            defense_cash: 0,
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
            fail_reason: None,
        }
    }
}
