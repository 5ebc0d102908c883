//! Combat AI system: runs the enemy FSM for every live enemy, integrates
//! motion, and resolves attacks against the player and structures.

use glam::Vec2;
use hecs::World;
use tracing::debug;

use turf_combat_ai::fsm::{attack_damage, attack_ready, evaluate, EnemyContext, TargetRef};
use turf_core::components::{Enemy, PlacedDefense, Structure, WaveState};
use turf_core::enums::FailReason;
use turf_core::events::GameEvent;
use turf_core::types::{Bounds, Position, Velocity};

use crate::session::Frame;
use crate::systems::defenses::slow_factor_at;

/// Update all enemies. Returns the failure reason as soon as the base falls
/// or the player goes down; remaining enemies are not processed that frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    frame: &Frame,
    player_position: Vec2,
    bounds: &Bounds,
    structures: &mut [Structure],
    defenses: &[PlacedDefense],
    wave: &mut WaveState,
    events: &mut Vec<GameEvent>,
) -> Option<FailReason> {
    for (_entity, (enemy, pos, vel)) in world.query_mut::<(&mut Enemy, &mut Position, &mut Velocity)>() {
        if enemy.is_dead() {
            continue;
        }

        let update = evaluate(&EnemyContext {
            kind: enemy.kind,
            state: enemy.state,
            aggroed: enemy.aggroed,
            target_structure: enemy.target_structure,
            position: pos.0,
            speed: enemy.speed,
            slow_factor: slow_factor_at(defenses, pos.0),
            player_position,
            structures: &*structures,
            bounds: *bounds,
            dt_secs: frame.dt_secs,
        });

        enemy.aggroed = update.aggroed;
        enemy.target_structure = update.target_structure;
        enemy.state = update.state;
        pos.0 = update.position;
        vel.0 = update.velocity;

        let Some(target) = update.target else {
            continue;
        };
        if !update.in_range || !attack_ready(enemy.kind, enemy.last_attack_ms, frame.now) {
            continue;
        }
        enemy.last_attack_ms = Some(frame.now);

        let weather_damage = frame.weather.modifiers.enemy_damage;
        match target {
            TargetRef::Player => {
                let amount = attack_damage(enemy.kind, false, weather_damage);
                wave.player_hp = wave.player_hp.saturating_sub(amount);
                events.push(GameEvent::PlayerDamaged {
                    amount,
                    remaining: wave.player_hp,
                });
                if wave.player_hp == 0 {
                    return Some(FailReason::PlayerDown);
                }
            }
            TargetRef::Structure(id) => {
                let Some(structure) = structures.iter_mut().find(|s| s.id == id) else {
                    continue;
                };
                let amount = attack_damage(enemy.kind, true, weather_damage);
                structure.hp = structure.hp.saturating_sub(amount);
                debug!(enemy_id = enemy.id, structure_id = id, amount, remaining = structure.hp, "structure hit");
                events.push(GameEvent::StructureDamaged {
                    structure_id: id,
                    amount,
                    remaining: structure.hp,
                });
                if structure.critical && structure.hp == 0 {
                    return Some(FailReason::BaseDestroyed);
                }
            }
        }
    }
    None
}
