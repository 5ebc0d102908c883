//! Wave spawner: turns a wave composition into enemies on the spawn ring.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turf_campaign::wave_composer::compose_wave;
use turf_combat_ai::profiles::get_profile;
use turf_combat_ai::targeting::initial_target;
use turf_core::components::Structure;
use turf_core::constants::SPAWN_MARGIN;
use turf_core::types::Bounds;

use crate::world_setup::spawn_enemy;

/// Radius of the spawn ring: the circle inscribed in the map, inset by the margin.
pub fn spawn_radius(bounds: &Bounds) -> f32 {
    (bounds.width().min(bounds.height()) * 0.5 - SPAWN_MARGIN).max(0.0)
}

/// Evenly spaced points on the spawn ring, starting at `phase` radians.
pub fn ring_positions(bounds: &Bounds, count: usize, phase: f32) -> Vec<Vec2> {
    let center = bounds.center();
    let radius = spawn_radius(bounds);
    (0..count)
        .map(|i| {
            let angle = phase + TAU * i as f32 / count as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Spawn every enemy of `wave`. Returns the number spawned.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    structures: &[Structure],
    bounds: &Bounds,
    weather_speed: f32,
    next_enemy_id: &mut u32,
) -> u32 {
    let kinds: Vec<_> = compose_wave(wave)
        .into_iter()
        .flat_map(|entry| std::iter::repeat(entry.kind).take(entry.count as usize))
        .collect();

    let phase: f32 = rng.gen_range(0.0..TAU);
    let positions = ring_positions(bounds, kinds.len(), phase);

    for (index, (kind, position)) in kinds.iter().zip(positions).enumerate() {
        let speed = get_profile(*kind).speed * weather_speed;
        let target = initial_target(*kind, index, structures);
        spawn_enemy(world, *next_enemy_id, *kind, position, speed, target);
        *next_enemy_id += 1;
    }

    kinds.len() as u32
}
