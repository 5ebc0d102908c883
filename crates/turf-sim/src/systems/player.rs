//! Player avatar actions: movement and the basic attack.

use glam::Vec2;
use tracing::debug;

use turf_core::components::Enemy;
use turf_core::constants::*;
use turf_core::enums::WavePhase;
use turf_core::events::GameEvent;
use turf_core::types::{cooldown_ready, Millis};

use crate::session::DefenseSession;
use crate::systems::damage::damage_enemy;
use crate::systems::defenses::nearest_enemy_in_range;

/// Adrenaline factor `(damage, speed)` at `now`.
fn adrenaline_factors(session: &DefenseSession, now: Millis) -> (f32, f32) {
    if session.adrenaline_active(now) {
        (ADRENALINE_DAMAGE_FACTOR, ADRENALINE_SPEED_FACTOR)
    } else {
        (1.0, 1.0)
    }
}

/// Record the movement intent for this frame. The input is normalized; a zero
/// or non-finite direction is ignored. Later inputs in the same frame replace
/// earlier ones.
pub fn queue_move(session: &mut DefenseSession, dx: f32, dy: f32) -> bool {
    if session.wave.phase == WavePhase::Failed {
        return false;
    }
    let direction = Vec2::new(dx, dy).normalize_or_zero();
    if direction == Vec2::ZERO {
        return false;
    }
    session.pending_move = Some(direction);
    true
}

/// Move the avatar one clamped step along the frame's movement intent.
pub fn apply_move(session: &mut DefenseSession, dt_secs: f32, now: Millis) {
    let Some(direction) = session.pending_move.take() else {
        return;
    };
    if session.wave.phase == WavePhase::Failed {
        return;
    }
    let (_, adrenaline) = adrenaline_factors(session, now);
    let speed = PLAYER_MOVE_SPEED * session.wave.speed_multiplier * adrenaline;
    let next = session.avatar.position + direction * speed * dt_secs;
    session.avatar.position = session.bounds.clamp(next);
}

/// Player attack damage with all multipliers applied.
pub fn attack_damage(damage_multiplier: f32, weather_player_damage: f32, adrenaline: f32) -> u32 {
    (PLAYER_ATTACK_DAMAGE * damage_multiplier * weather_player_damage * adrenaline)
        .round()
        .max(0.0) as u32
}

/// Hit the nearest live enemy in reach. The hit draws the enemy's aggro.
pub fn attack(session: &mut DefenseSession, now: Millis, weather_player_damage: f32, events: &mut Vec<GameEvent>) -> bool {
    if session.wave.phase != WavePhase::Active {
        return false;
    }
    if !cooldown_ready(session.avatar.last_attack_ms, now, PLAYER_ATTACK_COOLDOWN_MS) {
        return false;
    }
    let Some(target) = nearest_enemy_in_range(&session.world, session.avatar.position, PLAYER_ATTACK_RANGE) else {
        return false;
    };
    let (adrenaline, _) = adrenaline_factors(session, now);
    let amount = attack_damage(session.wave.damage_multiplier, weather_player_damage, adrenaline);

    let Ok(mut enemy) = session.world.get::<&mut Enemy>(target) else {
        return false;
    };
    enemy.aggroed = true;
    debug!(enemy_id = enemy.id, amount, "player attack");
    damage_enemy(
        target,
        &mut enemy,
        amount,
        &mut session.wave,
        &mut session.pending_removal,
        events,
    );
    session.avatar.last_attack_ms = Some(now);
    true
}
