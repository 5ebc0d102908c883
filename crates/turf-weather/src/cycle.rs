use serde::{Deserialize, Serialize};

use turf_core::constants::{WEATHER_DURATION_MS, WEATHER_EPOCH_MS};
use turf_core::enums::WeatherKind;
use turf_core::types::Millis;

/// Multipliers the combat layer reads from the current weather.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherModifiers {
    /// Applied to enemy move speed at spawn.
    pub enemy_speed: f32,
    /// Applied to enemy attack damage.
    pub enemy_damage: f32,
    /// Applied to the player's basic attack.
    pub player_damage: f32,
}

impl WeatherModifiers {
    pub const NEUTRAL: WeatherModifiers = WeatherModifiers {
        enemy_speed: 1.0,
        enemy_damage: 1.0,
        player_damage: 1.0,
    };
}

impl Default for WeatherModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub kind: WeatherKind,
    /// Particle intensity for the renderer, 0..=1.
    pub intensity: f32,
    pub modifiers: WeatherModifiers,
}

const fn entry(kind: WeatherKind, intensity: f32, enemy_speed: f32, enemy_damage: f32, player_damage: f32) -> WeatherEntry {
    WeatherEntry {
        kind,
        intensity,
        modifiers: WeatherModifiers {
            enemy_speed,
            enemy_damage,
            player_damage,
        },
    }
}

/// The fixed cycle, in order.
pub const CYCLE: [WeatherEntry; 6] = [
    entry(WeatherKind::Clear, 0.0, 1.00, 1.00, 1.00),
    entry(WeatherKind::Fog, 0.6, 0.90, 1.00, 0.90),
    entry(WeatherKind::Rain, 0.7, 0.85, 1.00, 1.00),
    entry(WeatherKind::Storm, 1.0, 0.80, 1.15, 0.90),
    entry(WeatherKind::Snow, 0.8, 0.70, 1.00, 1.00),
    entry(WeatherKind::Heat, 0.9, 1.10, 1.20, 1.00),
];

/// Signed offset of `now` from the epoch. Timestamps before the epoch are negative.
fn since_epoch(now: Millis) -> i128 {
    now as i128 - WEATHER_EPOCH_MS as i128
}

/// Position in the cycle at `now`: `floor((now - EPOCH) / DURATION) mod 6`.
pub fn cycle_index(now: Millis) -> usize {
    let slot = since_epoch(now).div_euclid(WEATHER_DURATION_MS as i128);
    slot.rem_euclid(CYCLE.len() as i128) as usize
}

pub fn current_weather(now: Millis) -> WeatherEntry {
    CYCLE[cycle_index(now)]
}

/// Milliseconds until the cycle advances. Always in `1..=DURATION`.
pub fn ms_until_next(now: Millis) -> Millis {
    let elapsed = since_epoch(now).rem_euclid(WEATHER_DURATION_MS as i128) as Millis;
    WEATHER_DURATION_MS - elapsed
}

/// The entry that takes over after the current one.
pub fn next_weather(now: Millis) -> WeatherEntry {
    CYCLE[(cycle_index(now) + 1) % CYCLE.len()]
}
