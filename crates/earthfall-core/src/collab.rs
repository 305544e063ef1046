//! Collaborator interfaces for platform services outside the core.
//!
//! Rendering, audio playback, head tracking, wall-clock time, and page
//! navigation all live behind these narrow traits. Implementations are
//! injected at construction, so tests substitute recording fakes and the
//! simulation stays fully headless.
//!
//! Frame scheduling is deliberately not a trait: the application shell
//! owns an explicit loop thread with a shutdown command instead of a
//! re-entrant callback chain.

use crate::events::AudioCue;
use crate::types::HeadPose;

/// Monotonic time source. `now_ms` readings from one clock instance never
/// decrease; consecutive readings drive per-frame `dt` computation.
pub trait Clock: Send {
    /// Current time in milliseconds from an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Fire-and-forget sound playback. The core observes no result.
pub trait AudioPlayer: Send {
    fn play_one_shot(&self, cue: AudioCue);
}

/// Supplies the current head orientation. Called only at the moment the
/// session transitions into a terminal status.
pub trait HeadPoseProvider: Send {
    fn head_matrix(&self) -> HeadPose;
}

/// Application-level navigation, used by restart. The core never resumes
/// after asking for a reload.
pub trait Navigator: Send {
    fn reload(&self, target: &str);
}
