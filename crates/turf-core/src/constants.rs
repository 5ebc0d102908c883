//! Simulation constants and tuning parameters.

use crate::types::Millis;

/// Host frame rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Upper bound on the per-frame motion delta, so a stalled tab does not
/// teleport entities.
pub const MAX_DT_MS: Millis = 50;

// --- Map ---

pub const MAP_WIDTH: f32 = 1200.0;
pub const MAP_HEIGHT: f32 = 800.0;

/// Inset of the spawn ring from the map edge.
pub const SPAWN_MARGIN: f32 = 60.0;

// --- Player ---

pub const PLAYER_MAX_HP: u32 = 100;
pub const PLAYER_MOVE_SPEED: f32 = 180.0;
pub const PLAYER_ATTACK_DAMAGE: f32 = 20.0;
pub const PLAYER_ATTACK_RANGE: f32 = 120.0;
pub const PLAYER_ATTACK_COOLDOWN_MS: Millis = 400;

// --- Combat AI ---

/// Demolishers drop aggro beyond this distance from the player.
pub const DEMOLISHER_DEAGGRO_RANGE: f32 = 60.0;

/// Every Nth spawn defaults to the critical structure.
pub const CRITICAL_TARGET_EVERY: usize = 3;

// --- Economy ---

/// Fraction of an enemy's score value paid out as shop cash on a kill.
pub const KILL_CASH_FRACTION: f32 = 0.5;

/// Cash bonus per wave number for clearing a wave.
pub const WAVE_CLEAR_BONUS_PER_WAVE: u32 = 25;

pub const HEALTH_ITEM_HEAL: u32 = 30;
pub const DAMAGE_BOOST_STEP: f32 = 0.25;
pub const SPEED_BOOST_STEP: f32 = 0.10;
pub const REPAIR_BASE_AMOUNT: u32 = 50;

// --- Placed defenses ---

pub const TURRET_RANGE: f32 = 200.0;
pub const TURRET_DAMAGE: f32 = 25.0;
pub const TURRET_FIRE_RATE_MS: Millis = 600;
pub const TURRET_HP: f32 = 100.0;

pub const BARRICADE_WIDTH: f32 = 80.0;
pub const BARRICADE_HEIGHT: f32 = 20.0;
pub const BARRICADE_SLOW_FACTOR: f32 = 0.3;
pub const BARRICADE_HP: f32 = 150.0;
/// Padding around the barricade box that still counts as inside the field.
pub const BARRICADE_FIELD_PADDING: f32 = 10.0;
/// Hp lost per tick per enemy standing in the field.
pub const BARRICADE_ATTRITION_PER_TICK: f32 = 0.5;

// --- Abilities ---

pub const GRENADE_COOLDOWN_MS: Millis = 8_000;
pub const GRENADE_DAMAGE: f32 = 80.0;
pub const GRENADE_RADIUS: f32 = 100.0;
pub const GRENADE_THROW_RANGE: f32 = 300.0;

pub const ADRENALINE_COOLDOWN_MS: Millis = 20_000;
pub const ADRENALINE_DURATION_MS: Millis = 6_000;
pub const ADRENALINE_DAMAGE_FACTOR: f32 = 1.5;
pub const ADRENALINE_SPEED_FACTOR: f32 = 1.3;

pub const MEDKIT_COOLDOWN_MS: Millis = 30_000;
pub const MEDKIT_HEAL: u32 = 40;

/// How long explosion records stay visible.
pub const EXPLOSION_DURATION_MS: Millis = 500;

// --- Heat / Visitor ---

pub const HEAT_MIN: f64 = 0.0;
pub const HEAT_MAX: f64 = 100.0;

/// Heat at which the Visitor turns up outside a lockdown.
pub const VISITOR_HEAT_THRESHOLD: f64 = 85.0;

/// Minimum spacing between a resolution and the next staging (2 minutes).
pub const VISITOR_COOLDOWN_MS: Millis = 120_000;

/// Cash at which the cash offer's fraction has grown by one step.
pub const VISITOR_CASH_SCALE: f64 = 250_000.0;
pub const VISITOR_CASH_PCT_MIN: f64 = 0.10;
/// Growth of the cash fraction per `VISITOR_CASH_SCALE` of cash.
pub const VISITOR_CASH_PCT_STEP: f64 = 0.10;
pub const VISITOR_CASH_PCT_MAX: f64 = 0.35;
pub const VISITOR_CASH_HEAT_MIN: u32 = 10;
pub const VISITOR_CASH_HEAT_MAX: u32 = 70;

pub const VISITOR_HEAT_PER_WEAPON: u32 = 8;
pub const VISITOR_WEAPONS_HEAT_MIN: u32 = 10;
pub const VISITOR_WEAPONS_HEAT_MAX: u32 = 60;

pub const VISITOR_PROPERTY_INCOME_DIVISOR: u64 = 10;
pub const VISITOR_PROPERTY_HEAT_MIN: u32 = 5;
pub const VISITOR_PROPERTY_HEAT_MAX: u32 = 40;

// --- Weather ---

/// Shared anchor for the weather cycle (2023-11-14T22:13:20Z).
pub const WEATHER_EPOCH_MS: Millis = 1_700_000_000_000;

/// Each weather entry lasts two hours.
pub const WEATHER_DURATION_MS: Millis = 2 * 60 * 60 * 1000;
