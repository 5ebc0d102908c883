//! Snapshot system: builds the complete `GameStateSnapshot` for the renderer.
//!
//! Read-only; never modifies the session.

use turf_campaign::economy::item_spec;
use turf_campaign::visitor::VisitorState;
use turf_core::components::Enemy;
use turf_core::enums::ShopItem;
use turf_core::events::GameEvent;
use turf_core::records::{CityState, PlayerRecord};
use turf_core::state::*;
use turf_core::types::{Millis, Position, SimTime, Velocity};
use turf_weather::{ms_until_next, WeatherEntry};

use crate::session::DefenseSession;

pub fn build_snapshot(
    time: &SimTime,
    weather: &WeatherEntry,
    player: &PlayerRecord,
    city: &CityState,
    visitor: &VisitorState,
    session: Option<&DefenseSession>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        weather: WeatherView {
            kind: weather.kind,
            intensity: weather.intensity,
            changes_in_ms: ms_until_next(time.now_ms),
        },
        player: PlayerView {
            cash: player.cash,
            global_heat: player.global_heat,
            weapon_count: player.weapons.len() as u32,
            property_count: player.properties.len() as u32,
            lockdown: city.lockdown_id(time.now_ms).is_some(),
        },
        session: session.map(|s| build_session(s, time.now_ms)),
        visitor: VisitorView {
            active: visitor.active,
            pending_choice: visitor.pending_choice,
            reason: visitor.reason,
            offers: visitor.offers.clone(),
            cooldown_until: visitor.cooldown_until,
        },
        events,
    }
}

fn build_session(session: &DefenseSession, now: Millis) -> SessionView {
    let wave = &session.wave;
    SessionView {
        wave: wave.wave,
        phase: wave.phase,
        player_hp: wave.player_hp,
        player_position: session.avatar.position,
        enemies_killed: wave.enemies_killed,
        total_score: wave.total_score,
        defense_cash: wave.defense_cash,
        damage_multiplier: wave.damage_multiplier,
        speed_multiplier: wave.speed_multiplier,
        adrenaline_active: session.adrenaline_active(now),
        enemies: build_enemies(session),
        structures: session.structures.clone(),
        defenses: session.defenses.clone(),
        explosions: session.explosions.clone(),
        abilities: session
            .abilities
            .iter()
            .map(|slot| AbilityView {
                kind: slot.kind,
                ready_in_ms: slot
                    .last_used_ms
                    .map_or(0, |last| (last + slot.cooldown_ms).saturating_sub(now)),
            })
            .collect(),
        shop: ShopItem::ALL
            .iter()
            .map(|&item| {
                let spec = item_spec(item);
                ShopItemView {
                    item,
                    cost: spec.cost,
                    max_purchases: spec.max_purchases,
                    purchased: session.ledger.count(item),
                }
            })
            .collect(),
    }
}

/// Live enemies, ordered by id so output is stable across runs.
fn build_enemies(session: &DefenseSession) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = session
        .world
        .query::<(&Enemy, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (enemy, _, _))| !enemy.is_dead())
        .map(|(_, (enemy, pos, vel))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: pos.0,
            velocity: vel.0,
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            state: enemy.state,
            aggroed: enemy.aggroed,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}
