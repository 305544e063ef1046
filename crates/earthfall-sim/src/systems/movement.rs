//! Movement integration system.
//!
//! Each frame, every imposter drifts toward the player on x and z,
//! normalized by elapsed time so the approach rate is independent of
//! frame rate. An axis stops once it enters the capture band — further
//! convergence is the proximity detector's concern, not the integrator's.
//! y is never modified after spawn.

use earthfall_core::entity::Imposter;
use earthfall_core::types::Position;

/// Advance every imposter by one frame. `dt_ms` must already be sanitized
/// (non-negative and finite).
pub fn run(imposters: &mut [Imposter], dt_ms: f64, run_speed: f64, nearest_distance: f64) {
    for imposter in imposters {
        imposter.position = integrate(imposter.position, dt_ms, run_speed, nearest_distance);
    }
}

/// Compute one imposter's next position.
///
/// The z axis converges at the fixed axial rate `dt / run_speed`. The x
/// axis is scaled by `r = |z| / |x|` so a diagonal approach stays visually
/// proportional: far-off-axis imposters close x faster, near-axis ones
/// slower. When `r` is zero or non-finite (either axis magnitude is zero)
/// the x axis falls back to the plain axial rate.
pub fn integrate(pos: Position, dt_ms: f64, run_speed: f64, nearest_distance: f64) -> Position {
    let ratio = pos.z.abs() / pos.x.abs();
    let x_step = if ratio.is_finite() && ratio > 0.0 {
        dt_ms / (run_speed * ratio)
    } else {
        dt_ms / run_speed
    };
    let z_step = dt_ms / run_speed;

    let mut next = pos;

    if pos.x > nearest_distance {
        next.x = pos.x - x_step;
    } else if pos.x < -nearest_distance {
        next.x = pos.x + x_step;
    }

    if pos.z > nearest_distance {
        next.z = pos.z - z_step;
    } else if pos.z < -nearest_distance {
        next.z = pos.z + z_step;
    }

    next
}
