//! Game state snapshot: the complete visible state handed to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Explosion, PlacedDefense, Structure};
use crate::enums::*;
use crate::events::GameEvent;
use crate::records::Offer;
use crate::types::{Millis, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub weather: WeatherView,
    pub player: PlayerView,
    pub session: Option<SessionView>,
    pub visitor: VisitorView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherView {
    pub kind: WeatherKind,
    pub intensity: f32,
    /// Milliseconds until the cycle advances.
    pub changes_in_ms: Millis,
}

/// The global player record as shown in the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub cash: u64,
    pub global_heat: f64,
    pub weapon_count: u32,
    pub property_count: u32,
    pub lockdown: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub wave: u32,
    pub phase: WavePhase,
    pub player_hp: u32,
    pub player_position: Vec2,
    pub enemies_killed: u32,
    pub total_score: u32,
    pub defense_cash: u32,
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
    pub adrenaline_active: bool,
    pub enemies: Vec<EnemyView>,
    pub structures: Vec<Structure>,
    pub defenses: Vec<PlacedDefense>,
    pub explosions: Vec<Explosion>,
    pub abilities: Vec<AbilityView>,
    pub shop: Vec<ShopItemView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub hp: u32,
    pub max_hp: u32,
    pub state: EnemyState,
    pub aggroed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityView {
    pub kind: AbilityKind,
    /// 0 when the ability can be used now.
    pub ready_in_ms: Millis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopItemView {
    pub item: ShopItem,
    pub cost: u32,
    pub max_purchases: Option<u32>,
    pub purchased: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorView {
    pub active: bool,
    pub pending_choice: bool,
    pub reason: Option<InterventionReason>,
    pub offers: Vec<Offer>,
    pub cooldown_until: Millis,
}
