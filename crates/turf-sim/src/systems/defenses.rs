//! Placed-defense AI: barricade slow fields and turret auto-fire.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use turf_core::components::{Barricade, DefenseSpec, Enemy, PlacedDefense, WaveState};
use turf_core::constants::{BARRICADE_ATTRITION_PER_TICK, BARRICADE_FIELD_PADDING};
use turf_core::events::GameEvent;
use turf_core::types::{cooldown_ready, Bounds, Millis, Position};

use crate::systems::damage::damage_enemy;

/// Area in which a barricade slows enemies.
pub fn barricade_field(position: Vec2, barricade: &Barricade) -> Bounds {
    Bounds::centered(position, Vec2::new(barricade.width, barricade.height)).padded(BARRICADE_FIELD_PADDING)
}

/// Movement factor at `point`: the strongest slow of any standing barricade
/// covering it, 1.0 when none does.
pub fn slow_factor_at(defenses: &[PlacedDefense], point: Vec2) -> f32 {
    defenses
        .iter()
        .filter(|d| !d.is_destroyed())
        .filter_map(|d| match &d.spec {
            DefenseSpec::Barricade(b) if barricade_field(d.position, b).contains(point) => Some(b.slow_factor),
            _ => None,
        })
        .fold(1.0, f32::min)
}

/// Each live enemy standing in a barricade's field wears it down.
pub fn barricade_attrition(world: &World, defenses: &mut [PlacedDefense]) {
    let positions: Vec<Vec2> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.is_dead())
        .map(|(_, (_, pos))| pos.0)
        .collect();

    for defense in defenses.iter_mut().filter(|d| !d.is_destroyed()) {
        let DefenseSpec::Barricade(barricade) = &defense.spec else {
            continue;
        };
        let field = barricade_field(defense.position, barricade);
        let inside = positions.iter().filter(|p| field.contains(**p)).count();
        defense.hp -= BARRICADE_ATTRITION_PER_TICK * inside as f32;
    }
}

/// Nearest live enemy strictly within `range` of `origin`.
pub fn nearest_enemy_in_range(world: &World, origin: Vec2, range: f32) -> Option<Entity> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.is_dead())
        .map(|(entity, (_, pos))| (entity, pos.distance_to(origin)))
        .filter(|(_, dist)| *dist < range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Fire every ready turret at the nearest enemy in range.
pub fn turrets(
    world: &World,
    defenses: &mut [PlacedDefense],
    now: Millis,
    wave: &mut WaveState,
    pending_removal: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    for defense in defenses.iter_mut().filter(|d| !d.is_destroyed()) {
        let defense_id = defense.id;
        let position = defense.position;
        let DefenseSpec::Turret(turret) = &mut defense.spec else {
            continue;
        };
        if !cooldown_ready(turret.last_fire_ms, now, turret.fire_rate_ms) {
            continue;
        }
        let Some(target) = nearest_enemy_in_range(world, position, turret.range) else {
            continue;
        };
        let Ok(mut enemy) = world.get::<&mut Enemy>(target) else {
            continue;
        };

        let amount = (turret.damage * wave.damage_multiplier).round() as u32;
        turret.last_fire_ms = Some(now);
        enemy.aggroed = true;
        debug!(defense_id, enemy_id = enemy.id, amount, "turret fired");
        events.push(GameEvent::TurretFired {
            defense_id,
            enemy_id: enemy.id,
            damage: amount,
        });
        damage_enemy(target, &mut enemy, amount, wave, pending_removal, events);
    }
}
