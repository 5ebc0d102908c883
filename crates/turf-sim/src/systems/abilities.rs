//! Ability interpreter: grenade, adrenaline and medkit behind per-slot
//! wall-clock cooldowns.

use glam::Vec2;
use hecs::World;
use tracing::{debug, info};

use turf_core::components::{Enemy, Explosion};
use turf_core::constants::*;
use turf_core::enums::{AbilityKind, WavePhase};
use turf_core::events::GameEvent;
use turf_core::types::{cooldown_ready, Millis, Position};

use crate::session::DefenseSession;
use crate::systems::damage::damage_enemy;

/// Use an ability. Rejected (nothing mutated, cooldown not consumed) outside
/// an active wave, while cooling down, or when the effect has nothing to do.
pub fn use_ability(session: &mut DefenseSession, kind: AbilityKind, now: Millis, events: &mut Vec<GameEvent>) -> bool {
    if session.wave.phase != WavePhase::Active {
        return false;
    }
    let Some(slot) = session.abilities.iter().find(|s| s.kind == kind) else {
        return false;
    };
    if !cooldown_ready(slot.last_used_ms, now, slot.cooldown_ms) {
        debug!(ability = kind.as_str(), "ability on cooldown");
        return false;
    }

    let used = match kind {
        AbilityKind::Grenade => throw_grenade(session, now, events),
        AbilityKind::Adrenaline => {
            session.adrenaline_until = Some(now + ADRENALINE_DURATION_MS);
            true
        }
        AbilityKind::Medkit => heal_player(&mut session.wave.player_hp, MEDKIT_HEAL),
    };
    if !used {
        return false;
    }

    if let Some(slot) = session.abilities.iter_mut().find(|s| s.kind == kind) {
        slot.last_used_ms = Some(now);
    }
    info!(ability = kind.as_str(), "ability used");
    events.push(GameEvent::AbilityUsed { ability: kind });
    true
}

/// Heal up to max hp. Rejected at full hp.
pub fn heal_player(player_hp: &mut u32, amount: u32) -> bool {
    if *player_hp >= PLAYER_MAX_HP {
        return false;
    }
    *player_hp = (*player_hp + amount).min(PLAYER_MAX_HP);
    true
}

/// Drop the adrenaline buff once it has run out.
pub fn expire_adrenaline(session: &mut DefenseSession, now: Millis) {
    if session.adrenaline_until.is_some_and(|until| now >= until) {
        session.adrenaline_until = None;
    }
}

/// Grenade damage at `distance` from the blast: full at the center, half at the edge.
pub fn grenade_falloff(distance: f32) -> u32 {
    (GRENADE_DAMAGE * (1.0 - (distance / GRENADE_RADIUS) * 0.5)).round().max(0.0) as u32
}

/// Pick the blast center: the live enemy within throw range whose
/// neighborhood holds the most other live enemies. First best wins.
pub fn grenade_target(world: &World, thrower: Vec2) -> Option<Vec2> {
    let live: Vec<Vec2> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.is_dead())
        .map(|(_, (_, pos))| pos.0)
        .collect();

    let mut best: Option<(Vec2, usize)> = None;
    for (i, candidate) in live.iter().enumerate() {
        if candidate.distance(thrower) > GRENADE_THROW_RANGE {
            continue;
        }
        let neighbors = live
            .iter()
            .enumerate()
            .filter(|(j, other)| *j != i && other.distance(*candidate) <= GRENADE_RADIUS)
            .count();
        if best.map_or(true, |(_, count)| neighbors > count) {
            best = Some((*candidate, neighbors));
        }
    }
    best.map(|(center, _)| center)
}

fn throw_grenade(session: &mut DefenseSession, now: Millis, events: &mut Vec<GameEvent>) -> bool {
    let Some(center) = grenade_target(&session.world, session.avatar.position) else {
        return false;
    };

    let mut hits = 0;
    for (entity, (enemy, pos)) in session.world.query_mut::<(&mut Enemy, &Position)>() {
        if enemy.is_dead() {
            continue;
        }
        let distance = pos.distance_to(center);
        if distance > GRENADE_RADIUS {
            continue;
        }
        hits += 1;
        let amount = grenade_falloff(distance);
        damage_enemy(
            entity,
            enemy,
            amount,
            &mut session.wave,
            &mut session.pending_removal,
            events,
        );
    }

    session.explosions.push(Explosion {
        position: center,
        radius: GRENADE_RADIUS,
        started_at_ms: now,
        duration_ms: EXPLOSION_DURATION_MS,
    });
    events.push(GameEvent::GrenadeDetonated {
        x: center.x,
        y: center.y,
        hits,
    });
    true
}
