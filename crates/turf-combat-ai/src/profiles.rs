//! Enemy catalog.
//!
//! Static per-type parameters. Never mutated at runtime.

use turf_core::enums::EnemyKind;
use turf_core::types::Millis;

/// Behavioral profile for an enemy type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub hp: u32,
    /// Base move speed (units/s), before weather.
    pub speed: f32,
    pub damage: f32,
    pub attack_cooldown_ms: Millis,
    /// Distance to the player that triggers pursuit.
    pub aggro_radius: f32,
    pub attack_range: f32,
    pub score_value: u32,
    /// Scales the shop cash paid out on a kill.
    pub loot_multiplier: f32,
    pub is_ranged: bool,
    /// Damage factor against structures. 1.0 for most types.
    pub building_damage_multiplier: f32,
}

/// Get the profile for an enemy type.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Thug => EnemyProfile {
            hp: 60,
            speed: 60.0,
            damage: 8.0,
            attack_cooldown_ms: 1000,
            aggro_radius: 150.0,
            attack_range: 30.0,
            score_value: 10,
            loot_multiplier: 1.0,
            is_ranged: false,
            building_damage_multiplier: 1.0,
        },
        EnemyKind::Runner => EnemyProfile {
            hp: 40,
            speed: 110.0,
            damage: 5.0,
            attack_cooldown_ms: 700,
            aggro_radius: 180.0,
            attack_range: 25.0,
            score_value: 15,
            loot_multiplier: 1.0,
            is_ranged: false,
            building_damage_multiplier: 1.0,
        },
        EnemyKind::Shooter => EnemyProfile {
            hp: 70,
            speed: 50.0,
            damage: 10.0,
            attack_cooldown_ms: 1500,
            aggro_radius: 250.0,
            attack_range: 180.0,
            score_value: 20,
            loot_multiplier: 1.2,
            is_ranged: true,
            building_damage_multiplier: 1.0,
        },
        EnemyKind::Tank => EnemyProfile {
            hp: 300,
            speed: 30.0,
            damage: 20.0,
            attack_cooldown_ms: 2000,
            aggro_radius: 120.0,
            attack_range: 35.0,
            score_value: 50,
            loot_multiplier: 2.0,
            is_ranged: false,
            building_damage_multiplier: 1.0,
        },
        // Short aggro radius: it walks past the player to reach buildings.
        EnemyKind::Demolisher => EnemyProfile {
            hp: 120,
            speed: 45.0,
            damage: 15.0,
            attack_cooldown_ms: 1200,
            aggro_radius: 40.0,
            attack_range: 30.0,
            score_value: 40,
            loot_multiplier: 1.5,
            is_ranged: false,
            building_damage_multiplier: 3.0,
        },
    }
}
