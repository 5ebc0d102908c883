//! Enemy behavior state machine.
//!
//! Pure functions that compute aggro, target choice, attack state and motion
//! for one enemy. No ECS dependency, operates on plain data. Attack timing
//! and damage application are left to the caller, which owns the clock.

use glam::Vec2;
use turf_core::components::Structure;
use turf_core::constants::DEMOLISHER_DEAGGRO_RANGE;
use turf_core::enums::{EnemyKind, EnemyState};
use turf_core::types::{cooldown_ready, Bounds, Millis};

use crate::profiles::{get_profile, EnemyProfile};
use crate::targeting::reacquire;

/// What an enemy is going after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
    Player,
    Structure(u32),
}

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext<'a> {
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub aggroed: bool,
    pub target_structure: Option<u32>,
    pub position: Vec2,
    /// Spawn-time effective speed.
    pub speed: f32,
    /// Barricade slow factor at `position`, 1.0 outside any field.
    pub slow_factor: f32,
    pub player_position: Vec2,
    pub structures: &'a [Structure],
    pub bounds: Bounds,
    pub dt_secs: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUpdate {
    pub aggroed: bool,
    pub target_structure: Option<u32>,
    pub state: EnemyState,
    pub position: Vec2,
    pub velocity: Vec2,
    /// `None` only for dead enemies.
    pub target: Option<TargetRef>,
    /// Within attack range of the target; the caller resolves the attack.
    pub in_range: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    if ctx.state == EnemyState::Dead {
        return EnemyUpdate {
            aggroed: ctx.aggroed,
            target_structure: ctx.target_structure,
            state: EnemyState::Dead,
            position: ctx.position,
            velocity: Vec2::ZERO,
            target: None,
            in_range: false,
        };
    }

    let profile = get_profile(ctx.kind);
    let to_player = ctx.position.distance(ctx.player_position);
    let aggroed = update_aggro(ctx.kind, ctx.aggroed, to_player, &profile);

    let mut target_structure = ctx.target_structure;
    let (target, target_position) = if aggroed {
        (TargetRef::Player, ctx.player_position)
    } else {
        let current = target_structure
            .and_then(|id| ctx.structures.iter().find(|s| s.id == id))
            .filter(|s| s.is_standing());
        let chosen = match current {
            Some(s) => Some(s),
            None => {
                target_structure = reacquire(ctx.position, ctx.structures);
                target_structure.and_then(|id| ctx.structures.iter().find(|s| s.id == id))
            }
        };
        match chosen {
            Some(s) => (TargetRef::Structure(s.id), s.position),
            // Nothing left standing: go for the player.
            None => (TargetRef::Player, ctx.player_position),
        }
    };

    let distance = ctx.position.distance(target_position);
    if distance < profile.attack_range {
        let state = match target {
            TargetRef::Player => EnemyState::AttackingPlayer,
            TargetRef::Structure(_) => EnemyState::AttackingBuilding,
        };
        return EnemyUpdate {
            aggroed,
            target_structure,
            state,
            position: ctx.position,
            velocity: Vec2::ZERO,
            target: Some(target),
            in_range: true,
        };
    }

    let direction = (target_position - ctx.position).normalize_or_zero();
    let velocity = direction * ctx.speed * ctx.slow_factor;
    let position = ctx.bounds.clamp(ctx.position + velocity * ctx.dt_secs);

    EnemyUpdate {
        aggroed,
        target_structure,
        state: EnemyState::Moving,
        position,
        velocity,
        target: Some(target),
        in_range: false,
    }
}

fn update_aggro(kind: EnemyKind, aggroed: bool, to_player: f32, profile: &EnemyProfile) -> bool {
    let mut aggroed = aggroed || to_player < profile.aggro_radius;
    if kind == EnemyKind::Demolisher && aggroed && to_player > DEMOLISHER_DEAGGRO_RANGE {
        aggroed = false;
    }
    aggroed
}

/// Whether the enemy's attack cooldown has elapsed.
pub fn attack_ready(kind: EnemyKind, last_attack_ms: Option<Millis>, now: Millis) -> bool {
    cooldown_ready(last_attack_ms, now, get_profile(kind).attack_cooldown_ms)
}

/// Damage of one attack, rounded to whole hit points.
pub fn attack_damage(kind: EnemyKind, vs_structure: bool, weather_damage: f32) -> u32 {
    let profile = get_profile(kind);
    let building = if vs_structure {
        profile.building_damage_multiplier
    } else {
        1.0
    };
    (profile.damage * building * weather_damage).round().max(0.0) as u32
}
