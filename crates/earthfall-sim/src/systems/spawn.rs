//! Imposter spawn factory.
//!
//! Builds the fixed imposter array for a new session: random signed x/z
//! offsets around the player, fixed height, default visuals. Runs under a
//! seeded RNG so a seed fully determines the spawn layout.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use earthfall_core::entity::{Imposter, VisualAttributes};
use earthfall_core::types::Position;

use crate::engine::SessionConfig;

/// Spawn the session's imposters. Ids are assigned 0..count in order.
pub fn spawn_imposters(rng: &mut ChaCha8Rng, config: &SessionConfig) -> Vec<Imposter> {
    (0..config.imposter_count)
        .map(|id| Imposter {
            id,
            position: Position::new(
                random_offset(rng, config.spawn_range, config.spawn_min_distance),
                config.spawn_height,
                random_offset(rng, config.spawn_range, config.spawn_min_distance),
            ),
            visual: VisualAttributes::default(),
        })
        .collect()
}

/// A signed spawn distance: magnitude uniform over
/// `[min_distance, min_distance + range)`, floored to whole units, with a
/// fair-coin sign.
pub fn random_offset(rng: &mut ChaCha8Rng, range: f64, min_distance: f64) -> f64 {
    let magnitude = rng.gen_range(0.0..range).floor() + min_distance;
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
