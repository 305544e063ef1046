//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level session status.
///
/// `Lost` and `Won` are terminal: once entered, no further position
/// updates, tag actions, or proximity transitions are processed. The only
/// way out is a full restart, which discards the session wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Session in progress; imposters drift and tags are accepted.
    #[default]
    Running,
    /// An imposter reached the capture zone before all were tagged.
    Lost,
    /// Every imposter was tagged while the session was still running.
    Won,
}

impl GameStatus {
    /// Whether the session has ended (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}
