//! Audio cues emitted by the session for the platform sound system.

use serde::{Deserialize, Serialize};

/// Fire-and-forget sound cue ids, played through the [`AudioPlayer`]
/// collaborator. The core observes no return value.
///
/// [`AudioPlayer`]: crate::collab::AudioPlayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// An imposter was tagged for the first time.
    ImposterTagged,
    /// An imposter converged on the player — session lost.
    GameLost,
    /// The last imposter was tagged — session won.
    GameWon,
}
