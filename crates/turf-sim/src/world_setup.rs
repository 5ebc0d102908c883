//! Map layout and entity spawn factories.

use glam::Vec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use turf_combat_ai::profiles::get_profile;
use turf_core::components::{AbilitySlot, Barricade, DefenseSpec, Enemy, PlacedDefense, Structure, Turret};
use turf_core::constants::*;
use turf_core::enums::{AbilityKind, EnemyKind, EnemyState, ShopItem};
use turf_core::types::{Bounds, Position, Velocity};

/// Static description of a defense map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub bounds: Bounds,
    pub structures: Vec<Structure>,
    pub player_start: Vec2,
}

impl Default for MapLayout {
    fn default() -> Self {
        default_map()
    }
}

fn structure(id: u32, x: f32, y: f32, hp: u32, critical: bool, near_edge: bool) -> Structure {
    Structure {
        id,
        position: Vec2::new(x, y),
        hp,
        max_hp: hp,
        critical,
        near_edge,
    }
}

/// The block: the main base in the middle, two inner buildings and two
/// lots by the map edge.
pub fn default_map() -> MapLayout {
    MapLayout {
        bounds: Bounds::new(Vec2::ZERO, Vec2::new(MAP_WIDTH, MAP_HEIGHT)),
        structures: vec![
            structure(1, 600.0, 400.0, 500, true, false),
            structure(2, 350.0, 250.0, 200, false, false),
            structure(3, 850.0, 550.0, 200, false, false),
            structure(4, 80.0, 150.0, 150, false, true),
            structure(5, 1120.0, 650.0, 150, false, true),
        ],
        player_start: Vec2::new(600.0, 470.0),
    }
}

/// Spawn one enemy. `speed` is the already weather-adjusted move speed.
pub fn spawn_enemy(
    world: &mut World,
    id: u32,
    kind: EnemyKind,
    position: Vec2,
    speed: f32,
    target_structure: Option<u32>,
) -> Entity {
    let profile = get_profile(kind);
    world.spawn((
        Enemy {
            id,
            kind,
            hp: profile.hp,
            max_hp: profile.hp,
            state: EnemyState::Moving,
            aggroed: false,
            target_structure,
            last_attack_ms: None,
            speed,
        },
        Position(position),
        Velocity::ZERO,
    ))
}

/// Build the placed defense bought with `item`. `None` for non-placeable items.
pub fn build_defense(item: ShopItem, id: u32, position: Vec2) -> Option<PlacedDefense> {
    let (hp, spec) = match item {
        ShopItem::Turret => (
            TURRET_HP,
            DefenseSpec::Turret(Turret {
                range: TURRET_RANGE,
                damage: TURRET_DAMAGE,
                fire_rate_ms: TURRET_FIRE_RATE_MS,
                last_fire_ms: None,
            }),
        ),
        ShopItem::Barricade => (
            BARRICADE_HP,
            DefenseSpec::Barricade(Barricade {
                width: BARRICADE_WIDTH,
                height: BARRICADE_HEIGHT,
                slow_factor: BARRICADE_SLOW_FACTOR,
            }),
        ),
        _ => return None,
    };
    Some(PlacedDefense {
        id,
        position,
        hp,
        max_hp: hp,
        spec,
    })
}

/// Fresh ability slots, all ready.
pub fn default_abilities() -> Vec<AbilitySlot> {
    AbilityKind::ALL
        .iter()
        .map(|&kind| AbilitySlot {
            kind,
            cooldown_ms: match kind {
                AbilityKind::Grenade => GRENADE_COOLDOWN_MS,
                AbilityKind::Adrenaline => ADRENALINE_COOLDOWN_MS,
                AbilityKind::Medkit => MEDKIT_COOLDOWN_MS,
            },
            last_used_ms: None,
        })
        .collect()
}
