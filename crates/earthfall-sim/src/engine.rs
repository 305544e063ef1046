//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the imposter array, the kill registry, and the
//! game status, advances the simulation once per frame, and produces
//! `GameStateSnapshot`s. Audio and head-pose collaborators are injected
//! at construction; everything else is plain data.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use earthfall_core::collab::{AudioPlayer, HeadPoseProvider};
use earthfall_core::constants::{
    IMPOSTER_COUNT, NEAREST_DISTANCE, RUN_SPEED, SPAWN_HEIGHT, SPAWN_MIN_DISTANCE, SPAWN_RANGE,
};
use earthfall_core::entity::{Imposter, KillRegistry};
use earthfall_core::enums::GameStatus;
use earthfall_core::events::AudioCue;
use earthfall_core::state::GameStateSnapshot;
use earthfall_core::types::{HeadPose, ImposterId};

use crate::systems;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same spawn layout.
    pub seed: u64,
    /// Number of imposters to spawn.
    pub imposter_count: usize,
    /// Milliseconds of elapsed time per unit of z-axis travel.
    pub run_speed: f64,
    /// Capture-zone half-width.
    pub nearest_distance: f64,
    /// Width of the spawn magnitude band.
    pub spawn_range: f64,
    /// Minimum spawn magnitude on each axis.
    pub spawn_min_distance: f64,
    /// Fixed y offset for every imposter.
    pub spawn_height: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            imposter_count: IMPOSTER_COUNT,
            run_speed: RUN_SPEED,
            nearest_distance: NEAREST_DISTANCE,
            spawn_range: SPAWN_RANGE,
            spawn_min_distance: SPAWN_MIN_DISTANCE,
            spawn_height: SPAWN_HEIGHT,
        }
    }
}

/// Errors surfaced by the session engine.
///
/// Most misuse is a defined no-op (tagging after the game ends, anomalous
/// clock deltas); only a caller contract violation is an error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A tag named an id outside the fixed imposter set. Ids are
    /// controlled internally, so this is a caller bug.
    #[error("unknown imposter id {id} (session has {count} imposters)")]
    UnknownImposter { id: ImposterId, count: usize },
}

/// The session engine. Owns all mutable game state for one session.
///
/// A session is created whole (positions randomized, status Running,
/// registry all-false) and is never partially reset — restart discards
/// the engine and builds a new one.
pub struct SessionEngine {
    config: SessionConfig,
    imposters: Vec<Imposter>,
    kills: KillRegistry,
    status: GameStatus,
    head_pose: Option<HeadPose>,
    audio: Box<dyn AudioPlayer>,
    head: Box<dyn HeadPoseProvider>,
}

impl SessionEngine {
    /// Create a new session with the given config and collaborators.
    pub fn new(
        config: SessionConfig,
        audio: Box<dyn AudioPlayer>,
        head: Box<dyn HeadPoseProvider>,
    ) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let imposters = systems::spawn::spawn_imposters(&mut rng, &config);
        let kills = KillRegistry::new(imposters.len());

        info!(
            "session started: {} imposters, seed {}",
            imposters.len(),
            config.seed
        );

        Self {
            config,
            imposters,
            kills,
            status: GameStatus::Running,
            head_pose: None,
            audio,
            head,
        }
    }

    /// Advance the session by one frame and return the resulting snapshot.
    ///
    /// `dt_ms` is the elapsed time since the previous frame in
    /// milliseconds; negative, NaN, or non-finite values are treated as
    /// zero elapsed time. Once the session is terminal the frame is a
    /// no-op apart from snapshot building, so presentation keeps
    /// receiving state.
    pub fn tick(&mut self, dt_ms: f64) -> GameStateSnapshot {
        let dt_ms = sanitize_dt(dt_ms);

        if self.status == GameStatus::Running {
            systems::movement::run(
                &mut self.imposters,
                dt_ms,
                self.config.run_speed,
                self.config.nearest_distance,
            );

            if let Some(id) =
                systems::proximity::breach(&self.imposters, self.config.nearest_distance)
            {
                debug!("imposter {id} reached the capture zone");
                self.transition(GameStatus::Lost, AudioCue::GameLost);
            }
        }

        self.snapshot()
    }

    /// Tag an imposter. The player entry point.
    ///
    /// After the session ends this is a defined no-op. Re-tagging an
    /// already-killed imposter leaves the registry unchanged and plays no
    /// cue. Tagging the last living imposter wins the session.
    pub fn tag(&mut self, id: ImposterId) -> Result<(), SessionError> {
        if id >= self.imposters.len() {
            return Err(SessionError::UnknownImposter {
                id,
                count: self.imposters.len(),
            });
        }

        if self.status != GameStatus::Running {
            debug!("tag({id}) ignored: session is {:?}", self.status);
            return Ok(());
        }

        if !self.kills.mark_killed(id) {
            // Already killed — idempotent, repeat cue suppressed.
            return Ok(());
        }

        self.audio.play_one_shot(AudioCue::ImposterTagged);
        debug!(
            "imposter {id} tagged ({}/{})",
            self.kills.killed_count(),
            self.imposters.len()
        );

        if self.kills.all_killed() {
            self.transition(GameStatus::Won, AudioCue::GameWon);
        }

        Ok(())
    }

    /// Build a snapshot of the current state without advancing it.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.imposters, &self.kills, self.status, self.head_pose)
    }

    /// Current session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The fixed imposter array.
    pub fn imposters(&self) -> &[Imposter] {
        &self.imposters
    }

    /// The kill registry.
    pub fn kills(&self) -> &KillRegistry {
        &self.kills
    }

    /// Head pose captured at the terminal transition, if the session has
    /// ended.
    pub fn head_pose(&self) -> Option<HeadPose> {
        self.head_pose
    }

    /// Overwrite an imposter's position (for tests that need exact
    /// geometry).
    #[cfg(test)]
    pub fn place_imposter(&mut self, id: ImposterId, position: earthfall_core::types::Position) {
        self.imposters[id].position = position;
    }

    /// Enter a terminal status: capture the head pose once, play the cue
    /// once. No-op unless the session is still running, which makes
    /// repeated trigger attempts (second breach in a frame, tag racing a
    /// loss) harmless.
    fn transition(&mut self, to: GameStatus, cue: AudioCue) {
        if self.status != GameStatus::Running {
            return;
        }

        self.status = to;
        self.head_pose = Some(self.head.head_matrix());
        self.audio.play_one_shot(cue);
        info!("session ended: {to:?}");
    }
}

/// Clamp anomalous clock deltas to zero elapsed time.
fn sanitize_dt(dt_ms: f64) -> f64 {
    if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms
    } else {
        if dt_ms != 0.0 {
            warn!("anomalous frame delta {dt_ms}; treating as zero");
        }
        0.0
    }
}
