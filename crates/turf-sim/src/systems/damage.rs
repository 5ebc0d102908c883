//! Shared damage and kill bookkeeping.

use hecs::Entity;
use tracing::debug;

use turf_campaign::economy::kill_reward;
use turf_combat_ai::profiles::get_profile;
use turf_core::components::{Enemy, WaveState};
use turf_core::enums::EnemyState;
use turf_core::events::GameEvent;

/// Apply `amount` to a live enemy. On a kill the enemy turns `Dead`, score
/// and shop cash are awarded, and the entity is queued for removal.
/// Returns true if this hit killed it. Dead enemies are left untouched.
pub fn damage_enemy(
    entity: Entity,
    enemy: &mut Enemy,
    amount: u32,
    wave: &mut WaveState,
    pending_removal: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> bool {
    if enemy.is_dead() {
        return false;
    }
    enemy.hp = enemy.hp.saturating_sub(amount);
    if enemy.hp > 0 {
        return false;
    }

    enemy.state = EnemyState::Dead;
    let profile = get_profile(enemy.kind);
    let cash = kill_reward(profile.score_value, profile.loot_multiplier);
    wave.enemies_killed += 1;
    wave.total_score += profile.score_value;
    wave.defense_cash += cash;
    pending_removal.push(entity);

    debug!(enemy_id = enemy.id, kind = enemy.kind.as_str(), cash, "enemy killed");
    events.push(GameEvent::EnemyKilled {
        enemy_id: enemy.id,
        kind: enemy.kind,
        score: profile.score_value,
        cash,
    });
    true
}
