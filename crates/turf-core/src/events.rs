//! Events emitted by the simulation for the renderer and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::records::Offer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveStarted { wave: u32, enemies: u32 },
    WaveCleared { wave: u32, bonus: u32 },
    SessionFailed { wave: u32, reason: FailReason },
    EnemyKilled { enemy_id: u32, kind: EnemyKind, score: u32, cash: u32 },
    PlayerDamaged { amount: u32, remaining: u32 },
    StructureDamaged { structure_id: u32, amount: u32, remaining: u32 },
    TurretFired { defense_id: u32, enemy_id: u32, damage: u32 },
    DefenseDestroyed { defense_id: u32 },
    GrenadeDetonated { x: f32, y: f32, hits: u32 },
    AbilityUsed { ability: AbilityKind },
    Purchased { item: ShopItem, cost: u32 },
    WeatherChanged { weather: WeatherKind },
    VisitorStaged { reason: InterventionReason, offers: Vec<Offer> },
    VisitorResolved { accepted: bool },
    /// Transient user-visible message. Never blocking.
    Notification { level: NotificationLevel, message: String },
}

impl GameEvent {
    pub fn info(message: impl Into<String>) -> Self {
        GameEvent::Notification {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        GameEvent::Notification {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}
