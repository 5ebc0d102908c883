//! Shop interpreter: one dispatch over every `ShopItem`.

use glam::Vec2;
use tracing::{info, warn};

use turf_campaign::economy::try_purchase;
use turf_core::components::{PlacedDefense, Structure, WaveState};
use turf_core::constants::*;
use turf_core::enums::{ShopItem, WavePhase};
use turf_core::events::GameEvent;
use turf_core::types::Bounds;

use crate::session::DefenseSession;
use crate::systems::abilities::heal_player;
use crate::world_setup::build_defense;

/// Buy `item`. Placeables land at `at` or at the avatar; a spot off the map
/// is rejected without charge.
/// Only open while shopping. Cash is deducted exactly once, and only when the
/// item had an effect.
pub fn purchase(session: &mut DefenseSession, item: ShopItem, at: Option<Vec2>, events: &mut Vec<GameEvent>) -> bool {
    if session.wave.phase != WavePhase::Shopping {
        events.push(GameEvent::warning("The shop is closed during a wave"));
        return false;
    }

    let placement = at.unwrap_or(session.avatar.position);
    let DefenseSession {
        wave,
        ledger,
        defenses,
        structures,
        bounds,
        next_defense_id,
        ..
    } = session;

    let mut cash = wave.defense_cash;
    let result = try_purchase(ledger, &mut cash, item, || {
        apply_item(item, placement, wave, defenses, structures, bounds, next_defense_id)
    });
    wave.defense_cash = cash;

    match result {
        Ok(cost) => {
            info!(item = item.as_str(), cost, cash = wave.defense_cash, "purchased");
            events.push(GameEvent::Purchased { item, cost });
            true
        }
        Err(rejection) => {
            warn!(item = item.as_str(), ?rejection, "purchase rejected");
            events.push(GameEvent::warning(rejection.message(item)));
            false
        }
    }
}

/// Apply an item's effect. Returns false when there is nothing to do.
fn apply_item(
    item: ShopItem,
    placement: Vec2,
    wave: &mut WaveState,
    defenses: &mut Vec<PlacedDefense>,
    structures: &mut [Structure],
    bounds: &Bounds,
    next_defense_id: &mut u32,
) -> bool {
    match item {
        ShopItem::Health => heal_player(&mut wave.player_hp, HEALTH_ITEM_HEAL),
        ShopItem::DamageBoost => {
            wave.damage_multiplier += DAMAGE_BOOST_STEP;
            true
        }
        ShopItem::SpeedBoost => {
            wave.speed_multiplier += SPEED_BOOST_STEP;
            true
        }
        ShopItem::Turret | ShopItem::Barricade => {
            if !bounds.contains(placement) {
                return false;
            }
            let Some(defense) = build_defense(item, *next_defense_id, placement) else {
                return false;
            };
            *next_defense_id += 1;
            defenses.push(defense);
            true
        }
        ShopItem::RepairBase => {
            let Some(base) = structures.iter_mut().find(|s| s.critical) else {
                return false;
            };
            if base.hp >= base.max_hp {
                return false;
            }
            base.hp = (base.hp + REPAIR_BASE_AMOUNT).min(base.max_hp);
            true
        }
    }
}
