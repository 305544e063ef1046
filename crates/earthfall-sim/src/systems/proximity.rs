//! Proximity detection system — reports imposters that reached the
//! capture zone.
//!
//! Read-only: the engine decides what a breach means (it ignores the
//! report once the session has ended). Kill state is deliberately not
//! consulted — a tagged imposter entering the zone still ends the game,
//! matching the capture rule rather than the tag rule.

use earthfall_core::entity::Imposter;
use earthfall_core::types::ImposterId;

/// Return the first imposter inside the capture zone, if any.
///
/// At most one breach is reported per frame; with the engine's terminal
/// guard this makes the loss transition fire exactly once even when
/// several imposters converge on the same frame.
pub fn breach(imposters: &[Imposter], nearest_distance: f64) -> Option<ImposterId> {
    imposters
        .iter()
        .find(|imposter| imposter.position.within_capture_zone(nearest_distance))
        .map(|imposter| imposter.id)
}
