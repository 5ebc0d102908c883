//! A single Turf Defense session: the enemy world plus wave, shop and
//! ability state, advanced one frame at a time.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use turf_campaign::economy::{wave_clear_bonus, ShopLedger};
use turf_core::components::*;
use turf_core::enums::{FailReason, WavePhase};
use turf_core::events::GameEvent;
use turf_core::types::{Bounds, Millis};
use turf_weather::WeatherEntry;

use crate::systems;
use crate::world_setup::{default_abilities, MapLayout};

/// Per-frame inputs shared by the session systems.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub now: Millis,
    /// Clamped motion delta.
    pub dt_secs: f32,
    pub weather: WeatherEntry,
}

pub struct DefenseSession {
    pub(crate) world: World,
    pub(crate) wave: WaveState,
    pub(crate) avatar: Avatar,
    pub(crate) structures: Vec<Structure>,
    pub(crate) defenses: Vec<PlacedDefense>,
    pub(crate) explosions: Vec<Explosion>,
    pub(crate) abilities: Vec<AbilitySlot>,
    /// End of the running adrenaline buff.
    pub(crate) adrenaline_until: Option<Millis>,
    /// Latest normalized movement input, consumed once per frame.
    pub(crate) pending_move: Option<Vec2>,
    pub(crate) ledger: ShopLedger,
    pub(crate) bounds: Bounds,
    /// Enemies killed this frame, despawned after iteration.
    pub(crate) pending_removal: Vec<Entity>,
    pub(crate) next_enemy_id: u32,
    pub(crate) next_defense_id: u32,
}

impl DefenseSession {
    pub fn new(map: &MapLayout) -> Self {
        Self {
            world: World::new(),
            wave: WaveState::default(),
            avatar: Avatar {
                position: map.player_start,
                last_attack_ms: None,
            },
            structures: map.structures.clone(),
            defenses: Vec::new(),
            explosions: Vec::new(),
            abilities: default_abilities(),
            adrenaline_until: None,
            pending_move: None,
            ledger: ShopLedger::default(),
            bounds: map.bounds,
            pending_removal: Vec::new(),
            next_enemy_id: 1,
            next_defense_id: 1,
        }
    }

    pub fn phase(&self) -> WavePhase {
        self.wave.phase
    }

    pub fn wave_state(&self) -> &WaveState {
        &self.wave
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn defenses(&self) -> &[PlacedDefense] {
        &self.defenses
    }

    pub fn ledger(&self) -> &ShopLedger {
        &self.ledger
    }

    pub fn avatar_position(&self) -> Vec2 {
        self.avatar.position
    }

    pub fn adrenaline_active(&self, now: Millis) -> bool {
        self.adrenaline_until.is_some_and(|until| now < until)
    }

    /// Live (not dead) enemies on the map.
    pub fn live_enemy_count(&self) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_, e)| !e.is_dead())
            .count()
    }

    /// Launch wave 1 from `Preparing`.
    pub fn start_first_wave(&mut self, rng: &mut ChaCha8Rng, frame: &Frame, events: &mut Vec<GameEvent>) -> bool {
        if self.wave.phase != WavePhase::Preparing {
            return false;
        }
        self.launch_wave(1, rng, frame, events);
        true
    }

    /// Close the shop and launch the next wave. The only place the wave
    /// number advances past the first.
    pub fn advance_wave(&mut self, rng: &mut ChaCha8Rng, frame: &Frame, events: &mut Vec<GameEvent>) -> bool {
        if self.wave.phase != WavePhase::Shopping {
            return false;
        }
        self.launch_wave(self.wave.wave + 1, rng, frame, events);
        true
    }

    /// Respawn the current wave's enemies after a reload. The wave number
    /// does not change.
    pub(crate) fn resume_wave(&mut self, rng: &mut ChaCha8Rng, frame: &Frame, events: &mut Vec<GameEvent>) -> bool {
        if self.wave.phase != WavePhase::Active || self.live_enemy_count() > 0 {
            return false;
        }
        self.launch_wave(self.wave.wave.max(1), rng, frame, events);
        true
    }

    fn launch_wave(&mut self, wave: u32, rng: &mut ChaCha8Rng, frame: &Frame, events: &mut Vec<GameEvent>) {
        self.wave.wave = wave;
        self.wave.phase = WavePhase::Active;
        let spawned = systems::wave_spawner::spawn_wave(
            &mut self.world,
            rng,
            wave,
            &self.structures,
            &self.bounds,
            frame.weather.modifiers.enemy_speed,
            &mut self.next_enemy_id,
        );
        info!(wave, enemies = spawned, weather = frame.weather.kind.as_str(), "wave started");
        events.push(GameEvent::WaveStarted { wave, enemies: spawned });
    }

    /// Advance one frame.
    pub fn tick(&mut self, frame: &Frame, events: &mut Vec<GameEvent>) {
        // 1. Buff expiry, avatar movement
        systems::abilities::expire_adrenaline(self, frame.now);
        systems::player::apply_move(self, frame.dt_secs, frame.now);

        if self.wave.phase == WavePhase::Active {
            // 2. Enemy AI, movement and attacks
            let failed = systems::combat_ai::run(
                &mut self.world,
                frame,
                self.avatar.position,
                &self.bounds,
                &mut self.structures,
                &self.defenses,
                &mut self.wave,
                events,
            );
            if let Some(reason) = failed {
                self.fail(reason, events);
                return;
            }
            // 3. Barricade wear
            systems::defenses::barricade_attrition(&self.world, &mut self.defenses);
            // 4. Turret fire
            systems::defenses::turrets(
                &self.world,
                &mut self.defenses,
                frame.now,
                &mut self.wave,
                &mut self.pending_removal,
                events,
            );
        }

        // 5. Deferred removal, wrecked defenses, stale explosions
        systems::cleanup::run(
            &mut self.world,
            &mut self.pending_removal,
            &mut self.defenses,
            &mut self.explosions,
            frame.now,
            events,
        );

        // 6. Wave clear
        if self.wave.phase == WavePhase::Active && self.live_enemy_count() == 0 {
            let bonus = wave_clear_bonus(self.wave.wave);
            self.wave.defense_cash += bonus;
            self.wave.phase = WavePhase::Shopping;
            info!(wave = self.wave.wave, bonus, cash = self.wave.defense_cash, "wave cleared");
            events.push(GameEvent::WaveCleared {
                wave: self.wave.wave,
                bonus,
            });
        }
    }

    fn fail(&mut self, reason: FailReason, events: &mut Vec<GameEvent>) {
        self.wave.phase = WavePhase::Failed;
        self.wave.fail_reason = Some(reason);
        info!(wave = self.wave.wave, ?reason, score = self.wave.total_score, "session failed");
        events.push(GameEvent::SessionFailed {
            wave: self.wave.wave,
            reason,
        });
    }
}
