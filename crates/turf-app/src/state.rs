//! State shared between the command bridge and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use turf_core::commands::PlayerCommand;
use turf_core::state::GameStateSnapshot;

/// Messages accepted by the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the simulation engine.
    Player(PlayerCommand),
    /// Write the current state to the snapshot store now.
    Save,
    /// Save and stop the loop.
    Shutdown,
}

/// Handles held by the host while the loop runs.
pub struct AppState {
    /// `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Written by the loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send to the loop. Returns false when the loop is gone or not started.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_starts_empty() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
        assert!(!state.send(GameLoopCommand::Save));
    }

    #[test]
    fn send_reaches_receiver() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Player(PlayerCommand::StartWave)));
        assert!(matches!(rx.try_recv(), Ok(GameLoopCommand::Player(PlayerCommand::StartWave))));

        drop(rx);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
