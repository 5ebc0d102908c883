//! Simulation engine.
//!
//! `SimulationEngine` owns the player's economy records, the Visitor and the
//! optional defense session, processes commands, runs all systems once per
//! frame and produces `GameStateSnapshot`s. Completely headless; time comes
//! from an injected `Clock`, so tests drive it deterministically.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use turf_campaign::visitor::VisitorState;
use turf_core::clock::{Clock, SystemClock};
use turf_core::commands::PlayerCommand;
use turf_core::constants::MAX_DT_MS;
use turf_core::enums::{WavePhase, WeatherKind};
use turf_core::events::GameEvent;
use turf_core::records::{clamp_heat, CityState, OfferChoice, PlayerRecord};
use turf_core::state::GameStateSnapshot;
use turf_core::types::{Millis, SimTime};
use turf_weather::{current_weather, WeatherEntry};

use crate::persistence::{SaveData, SessionSave, SAVE_VERSION};
use crate::session::{DefenseSession, Frame};
use crate::systems;
use crate::world_setup::MapLayout;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and clock = same simulation.
    pub seed: u64,
    pub map: MapLayout,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map: MapLayout::default(),
        }
    }
}

pub struct SimulationEngine {
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
    map: MapLayout,
    time: SimTime,
    /// Wall time of the previous frame, for the motion delta.
    last_frame_ms: Option<Millis>,
    weather: WeatherKind,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,

    player: PlayerRecord,
    city: CityState,
    visitor: VisitorState,
    session: Option<DefenseSession>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig, clock: Box<dyn Clock>) -> Self {
        let weather = current_weather(clock.now_ms()).kind;
        Self {
            clock,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            map: config.map,
            time: SimTime::default(),
            last_frame_ms: None,
            weather,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            player: PlayerRecord::default(),
            city: CityState::default(),
            visitor: VisitorState::default(),
            session: None,
        }
    }

    /// Engine on the real wall clock.
    pub fn with_system_clock(config: SimConfig) -> Self {
        Self::new(config, Box::new(SystemClock))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        let now = self.clock.now_ms();
        let dt_ms = self
            .last_frame_ms
            .map_or(0, |last| now.saturating_sub(last).min(MAX_DT_MS));
        self.last_frame_ms = Some(now);
        self.time = SimTime {
            tick: self.time.tick + 1,
            now_ms: now,
            dt_ms,
        };

        let frame = Frame {
            now,
            dt_secs: self.time.dt_secs(),
            weather: current_weather(now),
        };
        if frame.weather.kind != self.weather {
            self.weather = frame.weather.kind;
            info!(weather = self.weather.as_str(), "weather changed");
            self.events.push(GameEvent::WeatherChanged { weather: self.weather });
        }

        self.process_commands(&frame);

        if let Some(session) = self.session.as_mut() {
            session.tick(&frame, &mut self.events);
        }

        if self.visitor.maybe_auto_stage(&self.player, &self.city, now) {
            if let Some(reason) = self.visitor.reason {
                self.events.push(GameEvent::VisitorStaged {
                    reason,
                    offers: self.visitor.offers.clone(),
                });
            }
        }

        self.snapshot(&frame.weather)
    }

    fn snapshot(&mut self, weather: &WeatherEntry) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            weather,
            &self.player,
            &self.city,
            &self.visitor,
            self.session.as_ref(),
            events,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    /// Mutable access for the heat/economy collaborator.
    pub fn player_mut(&mut self) -> &mut PlayerRecord {
        &mut self.player
    }

    pub fn city(&self) -> &CityState {
        &self.city
    }

    pub fn visitor(&self) -> &VisitorState {
        &self.visitor
    }

    pub fn session(&self) -> Option<&DefenseSession> {
        self.session.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> Option<&mut DefenseSession> {
        self.session.as_mut()
    }

    fn process_commands(&mut self, frame: &Frame) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, frame);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand, frame: &Frame) {
        let now = frame.now;
        match command {
            PlayerCommand::StartSession => {
                let running = self
                    .session
                    .as_ref()
                    .is_some_and(|s| s.phase() != WavePhase::Failed);
                if running {
                    self.events.push(GameEvent::warning("A defense is already underway"));
                    return;
                }
                info!("defense session started");
                self.session = Some(DefenseSession::new(&self.map));
            }
            PlayerCommand::EndSession => {
                if let Some(session) = self.session.take() {
                    info!(
                        wave = session.wave_state().wave,
                        score = session.wave_state().total_score,
                        "defense session ended"
                    );
                }
            }
            PlayerCommand::StartWave => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                if !session.start_first_wave(&mut self.rng, frame, &mut self.events) {
                    self.events.push(GameEvent::warning("The first wave has already started"));
                }
            }
            PlayerCommand::NextWave => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                if !session.advance_wave(&mut self.rng, frame, &mut self.events) {
                    self.events.push(GameEvent::warning("Finish the current wave first"));
                }
            }
            PlayerCommand::MovePlayer { dx, dy } => {
                if let Some(session) = self.session.as_mut() {
                    systems::player::queue_move(session, dx, dy);
                }
            }
            PlayerCommand::Attack => {
                if let Some(session) = self.session.as_mut() {
                    systems::player::attack(session, now, frame.weather.modifiers.player_damage, &mut self.events);
                }
            }
            PlayerCommand::UseAbility { ability } => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                if !systems::abilities::use_ability(session, ability, now, &mut self.events) {
                    self.events
                        .push(GameEvent::warning(format!("{} is not ready", ability.as_str())));
                }
            }
            PlayerCommand::Purchase { item, at } => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                systems::shop::purchase(session, item, at, &mut self.events);
            }
            PlayerCommand::AcceptOffer { choice } => self.accept_offer(choice, now),
            PlayerCommand::RefuseVisitor => {
                if self.visitor.end(now) {
                    self.events.push(GameEvent::VisitorResolved { accepted: false });
                }
            }
            PlayerCommand::SetGlobalHeat { heat } => {
                if !heat.is_finite() {
                    warn!(heat, "rejected non-finite heat");
                    return;
                }
                self.player.set_heat(heat);
            }
            PlayerCommand::SetLockdown { until } => {
                // An end time already past means no lockdown.
                let until = until.filter(|&end| end > now);
                if until.is_none() && self.city.lockdown {
                    info!("lockdown lifted");
                }
                self.city.lockdown = until.is_some();
                self.city.lockdown_until = until;
            }
        }
    }

    fn accept_offer(&mut self, choice: OfferChoice, now: Millis) {
        if self.visitor.apply(choice, &mut self.player, now) {
            self.events.push(GameEvent::VisitorResolved { accepted: true });
        } else {
            self.events.push(GameEvent::warning("That offer is not on the table"));
        }
    }

    // --- Persistence ---

    /// Capture everything that survives a reload.
    pub fn to_save_data(&self) -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            player: self.player.clone(),
            city: self.city.clone(),
            visitor: self.visitor.clone(),
            session: self.session.as_ref().map(|s| SessionSave {
                wave: s.wave.clone(),
                ledger: s.ledger.clone(),
                structures: s.structures.clone(),
                defenses: s.defenses.clone(),
                avatar_position: Some(s.avatar.position),
                abilities: s.abilities.clone(),
                adrenaline_until: s.adrenaline_until,
            }),
            saved_at: self.clock.now_ms(),
        }
    }

    /// Replace the live state with a saved one. Enemies are not persisted,
    /// so a session saved mid-wave respawns that same wave.
    pub fn restore(&mut self, data: SaveData) {
        if data.version != SAVE_VERSION {
            warn!(found = data.version, expected = SAVE_VERSION, "loading save from another version");
        }
        self.player = data.player;
        self.player.global_heat = clamp_heat(self.player.global_heat);
        self.city = data.city;
        self.visitor = data.visitor;
        self.visitor.normalize();
        self.session = data.session.map(|saved| self.rebuild_session(saved));
        info!(has_session = self.session.is_some(), "state restored");
    }

    fn rebuild_session(&mut self, saved: SessionSave) -> DefenseSession {
        let mut session = DefenseSession::new(&self.map);
        session.wave = saved.wave;
        session.ledger = saved.ledger;
        if !saved.structures.is_empty() {
            session.structures = saved.structures;
        }
        session.next_defense_id = saved.defenses.iter().map(|d| d.id + 1).max().unwrap_or(1);
        session.defenses = saved.defenses;
        if let Some(position) = saved.avatar_position {
            session.avatar.position = session.bounds.clamp(position);
        }
        if !saved.abilities.is_empty() {
            session.abilities = saved.abilities;
        }
        session.adrenaline_until = saved.adrenaline_until;

        if session.phase() == WavePhase::Active {
            let now = self.clock.now_ms();
            let frame = Frame {
                now,
                dt_secs: 0.0,
                weather: current_weather(now),
            };
            session.resume_wave(&mut self.rng, &frame, &mut self.events);
        }
        session
    }
}
