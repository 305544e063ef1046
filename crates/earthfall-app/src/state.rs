//! Application state shared between the presentation side and the frame
//! loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use earthfall_core::state::GameStateSnapshot;
use earthfall_core::types::ImposterId;

/// Commands sent from the presentation side to the frame loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopCommand {
    /// The player tagged an imposter.
    Tag(ImposterId),
    /// Discard the session and reload the application.
    Restart,
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The frame loop thread owns the controller exclusively; everything the
/// presentation side needs is here:
/// - the command sender (wrapped in `Mutex` — `Sender` is Send but not Sync),
/// - the latest snapshot slot, updated after every frame for synchronous
///   polling.
pub struct AppState {
    /// Channel sender to forward commands to the frame loop thread.
    /// `None` before the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the frame loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the frame loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Tag(2)).unwrap();
        tx.send(GameLoopCommand::Restart).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Tag(2),
                GameLoopCommand::Restart,
                GameLoopCommand::Shutdown,
            ]
        );
    }
}
