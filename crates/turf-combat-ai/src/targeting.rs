//! Structure target selection.

use glam::Vec2;
use turf_core::components::Structure;
use turf_core::constants::CRITICAL_TARGET_EVERY;
use turf_core::enums::EnemyKind;

fn standing_non_critical(structures: &[Structure]) -> Vec<&Structure> {
    structures
        .iter()
        .filter(|s| !s.critical && s.is_standing())
        .collect()
}

fn critical_id(structures: &[Structure]) -> Option<u32> {
    structures.iter().find(|s| s.critical).map(|s| s.id)
}

/// Structure assigned to an enemy at spawn.
///
/// Demolishers go for outlying buildings. Every third spawn (and every spawn
/// on a single-structure map) heads for the base. Everyone else spreads over
/// the standing non-critical structures by spawn index.
pub fn initial_target(kind: EnemyKind, spawn_index: usize, structures: &[Structure]) -> Option<u32> {
    let outlying = standing_non_critical(structures);

    if kind == EnemyKind::Demolisher {
        if outlying.is_empty() {
            return critical_id(structures);
        }
        return Some(outlying[spawn_index % outlying.len()].id);
    }

    if spawn_index % CRITICAL_TARGET_EVERY == 0 || structures.len() == 1 {
        if let Some(id) = critical_id(structures) {
            return Some(id);
        }
    }

    if !outlying.is_empty() {
        return Some(outlying[spawn_index % outlying.len()].id);
    }

    structures.iter().find(|s| s.is_standing()).map(|s| s.id)
}

/// Nearest standing structure, preferring ones away from the map edge.
pub fn reacquire(position: Vec2, structures: &[Structure]) -> Option<u32> {
    let nearest = |allow_edge: bool| {
        structures
            .iter()
            .filter(|s| s.is_standing() && (allow_edge || !s.near_edge))
            .min_by(|a, b| {
                position
                    .distance_squared(a.position)
                    .total_cmp(&position.distance_squared(b.position))
            })
            .map(|s| s.id)
    };
    nearest(false).or_else(|| nearest(true))
}
