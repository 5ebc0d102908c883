//! Headless Turf host: JSON commands on stdin, JSON snapshots on stdout,
//! logs on stderr.

use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use turf_app::bridge::parse_line;
use turf_app::config::AppConfig;
use turf_app::game_loop::spawn_game_loop;
use turf_app::state::{AppState, GameLoopCommand};
use turf_sim::persistence::JsonFileStore;

fn main() {
    let (config, config_err) = AppConfig::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(err) = config_err {
        warn!(error = %err, "using default configuration");
    }
    info!(save_path = %config.save_path.display(), "turf host starting");

    let state = AppState::new();
    let store = JsonFileStore::new(config.save_path.clone());
    let (tx, handle) = spawn_game_loop(
        config,
        store,
        |snapshot| match serde_json::to_string(snapshot) {
            Ok(json) => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{json}");
            }
            Err(err) => error!(error = %err, "snapshot serialization failed"),
        },
        state.latest_snapshot.clone(),
    );
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(error = %err, "stdin read failed");
                break;
            }
        };
        let Some(command) = parse_line(&line) else {
            continue;
        };
        let quit = matches!(command, GameLoopCommand::Shutdown);
        if !state.send(command) || quit {
            break;
        }
    }

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        error!("game loop thread panicked");
    }
    info!("turf host stopped");
}
