//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Tag into the enemy catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Baseline melee gangster, the bulk of early waves.
    Thug,
    /// Fast, fragile melee.
    Runner,
    /// Ranged attacker with a long attack range.
    Shooter,
    /// Slow, heavily armored bruiser.
    Tank,
    /// Structure wrecker. Ignores the player unless at point-blank range.
    Demolisher,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Thug,
        EnemyKind::Runner,
        EnemyKind::Shooter,
        EnemyKind::Tank,
        EnemyKind::Demolisher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thug => "thug",
            Self::Runner => "runner",
            Self::Shooter => "shooter",
            Self::Tank => "tank",
            Self::Demolisher => "demolisher",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "thug" => Some(Self::Thug),
            "runner" => Some(Self::Runner),
            "shooter" => Some(Self::Shooter),
            "tank" => Some(Self::Tank),
            "demolisher" => Some(Self::Demolisher),
            _ => None,
        }
    }
}

/// Per-enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyState {
    #[default]
    Moving,
    AttackingPlayer,
    AttackingBuilding,
    /// Terminal. Dead enemies are skipped by every system until removed.
    Dead,
}

/// Defense session state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WavePhase {
    /// Session created, first wave not started.
    #[default]
    Preparing,
    /// Enemies are on the map.
    Active,
    /// Between waves; the shop is open.
    Shopping,
    /// Terminal for the session.
    Failed,
}

/// Why a defense session failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    BaseDestroyed,
    PlayerDown,
}

/// Active player abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Grenade,
    Adrenaline,
    Medkit,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 3] = [AbilityKind::Grenade, AbilityKind::Adrenaline, AbilityKind::Medkit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grenade => "grenade",
            Self::Adrenaline => "adrenaline",
            Self::Medkit => "medkit",
        }
    }
}

/// Items sold by the between-wave shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopItem {
    Health,
    DamageBoost,
    SpeedBoost,
    Turret,
    Barricade,
    RepairBase,
}

impl ShopItem {
    pub const ALL: [ShopItem; 6] = [
        ShopItem::Health,
        ShopItem::DamageBoost,
        ShopItem::SpeedBoost,
        ShopItem::Turret,
        ShopItem::Barricade,
        ShopItem::RepairBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::DamageBoost => "damage_boost",
            Self::SpeedBoost => "speed_boost",
            Self::Turret => "turret",
            Self::Barricade => "barricade",
            Self::RepairBase => "repair_base",
        }
    }
}

/// Weather modes of the shared real-time cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    #[default]
    Clear,
    Fog,
    Rain,
    Storm,
    Snow,
    Heat,
}

impl WeatherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Storm => "storm",
            Self::Snow => "snow",
            Self::Heat => "heat",
        }
    }
}

/// What triggered a Visitor intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionReason {
    /// Global heat crossed the threshold.
    Heat,
    /// A city lockdown episode started.
    Lockdown,
}

/// Severity of a transient user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Warning,
}
