//! Cleanup system: applies deferred removals after iteration.

use hecs::{Entity, World};
use tracing::debug;

use turf_core::components::{Explosion, PlacedDefense};
use turf_core::events::GameEvent;
use turf_core::types::Millis;

/// Despawn killed enemies, drop wrecked defenses and prune expired explosions.
pub fn run(
    world: &mut World,
    pending_removal: &mut Vec<Entity>,
    defenses: &mut Vec<PlacedDefense>,
    explosions: &mut Vec<Explosion>,
    now: Millis,
    events: &mut Vec<GameEvent>,
) {
    for entity in pending_removal.drain(..) {
        let _ = world.despawn(entity);
    }

    defenses.retain(|defense| {
        if defense.is_destroyed() {
            debug!(defense_id = defense.id, "defense destroyed");
            events.push(GameEvent::DefenseDestroyed {
                defense_id: defense.id,
            });
            return false;
        }
        true
    });

    explosions.retain(|explosion| !explosion.is_expired(now));
}
