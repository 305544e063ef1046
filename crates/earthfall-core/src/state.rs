//! Game state snapshot — the complete visible state handed to the
//! presentation layer each frame.

use serde::{Deserialize, Serialize};

use crate::entity::VisualAttributes;
use crate::enums::GameStatus;
use crate::types::{HeadPose, ImposterId, Position};

/// Complete session state published to presentation after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub status: GameStatus,
    pub imposters: Vec<ImposterView>,
    /// Number of imposters tagged so far.
    pub killed_count: usize,
    /// Total imposters in the session.
    pub imposter_count: usize,
    /// Head orientation captured at the Lost/Won transition.
    /// `None` while the session is running.
    pub head_pose: Option<HeadPose>,
    /// End-of-game banner contents. `None` while the session is running.
    pub outcome: Option<OutcomeView>,
}

/// A visible imposter, with its kill flag for presentation to hide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImposterView {
    pub id: ImposterId,
    pub position: Position,
    pub visual: VisualAttributes,
    pub killed: bool,
}

/// Contents of the end-of-game box shown when the session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeView {
    pub title: String,
    pub message: String,
    pub color: String,
}
