//! Reference collaborator implementations.
//!
//! The real platform services — VR audio, head tracking, page navigation —
//! are outside this repository. These implementations are enough to run
//! the game headless: a monotonic system clock, and logging stand-ins for
//! the effectful collaborators.

use std::time::Instant;

use log::info;

use earthfall_core::collab::{AudioPlayer, Clock, HeadPoseProvider, Navigator};
use earthfall_core::events::AudioCue;
use earthfall_core::types::HeadPose;

/// Monotonic clock backed by `std::time::Instant`, reporting milliseconds
/// since construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Logs each cue instead of playing it.
pub struct LogAudioPlayer;

impl AudioPlayer for LogAudioPlayer {
    fn play_one_shot(&self, cue: AudioCue) {
        info!("audio cue: {cue:?}");
    }
}

/// Always reports the identity head pose (no head tracking attached).
pub struct StaticHeadPose;

impl HeadPoseProvider for StaticHeadPose {
    fn head_matrix(&self) -> HeadPose {
        HeadPose::identity()
    }
}

/// Logs the reload request instead of navigating.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn reload(&self, target: &str) {
        info!("navigation: reload {target}");
    }
}
