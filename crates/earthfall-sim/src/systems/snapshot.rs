//! Snapshot system: builds a complete GameStateSnapshot from session
//! state.
//!
//! This system is read-only — it never modifies the session.

use earthfall_core::constants::GAME_NAME;
use earthfall_core::entity::{Imposter, KillRegistry};
use earthfall_core::enums::GameStatus;
use earthfall_core::state::{GameStateSnapshot, ImposterView, OutcomeView};
use earthfall_core::types::HeadPose;

/// Build a complete snapshot for presentation.
pub fn build_snapshot(
    imposters: &[Imposter],
    kills: &KillRegistry,
    status: GameStatus,
    head_pose: Option<HeadPose>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        status,
        imposters: build_imposters(imposters, kills),
        killed_count: kills.killed_count(),
        imposter_count: imposters.len(),
        head_pose,
        outcome: build_outcome(status),
    }
}

/// Build ImposterView list, joining positions with kill flags.
fn build_imposters(imposters: &[Imposter], kills: &KillRegistry) -> Vec<ImposterView> {
    imposters
        .iter()
        .map(|imposter| ImposterView {
            id: imposter.id,
            position: imposter.position,
            visual: imposter.visual.clone(),
            killed: kills.is_killed(imposter.id),
        })
        .collect()
}

/// Build the end-of-game banner for terminal statuses.
fn build_outcome(status: GameStatus) -> Option<OutcomeView> {
    match status {
        GameStatus::Running => None,
        GameStatus::Won => Some(OutcomeView {
            title: "Victory!".to_string(),
            message: format!("You won {GAME_NAME}."),
            color: "green".to_string(),
        }),
        GameStatus::Lost => Some(OutcomeView {
            title: "Game over".to_string(),
            message: format!("You lost {GAME_NAME}."),
            color: "red".to_string(),
        }),
    }
}
