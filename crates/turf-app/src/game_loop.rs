//! Game loop thread: runs the simulation engine at the configured rate,
//! publishes snapshots and saves through a `SnapshotStore`.
//!
//! The engine lives entirely inside the thread. Commands arrive over an
//! `mpsc` channel; the thread hands its store back when it exits.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use turf_core::state::GameStateSnapshot;
use turf_sim::persistence::SnapshotStore;
use turf_sim::{SimConfig, SimulationEngine};

use crate::config::AppConfig;
use crate::state::GameLoopCommand;

/// Duration of one tick at `tick_rate` frames per second.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate.max(1) as u64)
}

/// Spawn the loop thread. `emit` receives every `snapshot_every_ticks`-th
/// snapshot; `latest` always holds the newest one.
pub fn spawn_game_loop<S, F>(
    config: AppConfig,
    store: S,
    emit: F,
    latest: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<S>)
where
    S: SnapshotStore + Send + 'static,
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("turf-game-loop".into())
        .spawn(move || run_game_loop(&config, store, emit, cmd_rx, &latest))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

fn save<S: SnapshotStore>(engine: &SimulationEngine, store: &mut S) {
    match store.save(&engine.to_save_data()) {
        Ok(()) => debug!("state saved"),
        Err(err) => error!(error = %err, "save failed"),
    }
}

/// Runs until Shutdown or channel disconnect. Either way the state is saved.
fn run_game_loop<S, F>(
    config: &AppConfig,
    mut store: S,
    mut emit: F,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest: &Mutex<Option<GameStateSnapshot>>,
) -> S
where
    S: SnapshotStore,
    F: FnMut(&GameStateSnapshot),
{
    let mut engine = SimulationEngine::with_system_clock(SimConfig {
        seed: config.seed,
        ..Default::default()
    });
    match store.load() {
        Ok(Some(data)) => engine.restore(data),
        Ok(None) => info!("no saved state, starting fresh"),
        Err(err) => error!(error = %err, "could not load saved state, starting fresh"),
    }

    let tick = tick_duration(config.tick_rate);
    let emit_every = config.snapshot_every_ticks.max(1) as u64;
    let autosave_every = config.autosave_every_ticks();
    let mut ticks: u64 = 0;
    let mut next_tick_time = Instant::now();
    info!(tick_rate = config.tick_rate, seed = config.seed, "game loop started");

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Save) => save(&engine, &mut store),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    save(&engine, &mut store);
                    info!(ticks, "game loop stopped");
                    return store;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick();
        ticks += 1;

        if ticks % emit_every == 0 {
            emit(&snapshot);
        }
        if autosave_every.is_some_and(|n| ticks % n == 0) {
            save(&engine, &mut store);
        }
        if let Ok(mut lock) = latest.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind; skip ahead instead of bursting.
            next_tick_time = now;
        }
    }
}
