//! Game constants and tuning parameters.

/// Display name used in end-of-game messages.
pub const GAME_NAME: &str = "Earthfall";

// --- Session ---

/// Number of imposters per session.
pub const IMPOSTER_COUNT: usize = 4;

/// Milliseconds of elapsed time per unit of travel along the z axis.
/// Larger values mean slower imposters.
pub const RUN_SPEED: f64 = 100.0;

/// Capture-zone half-width: an imposter with both |x| and |z| inside this
/// band has converged on the player.
pub const NEAREST_DISTANCE: f64 = 10.0;

// --- Spawn ---

/// Width of the uniform band spawn magnitudes are drawn from.
pub const SPAWN_RANGE: f64 = 200.0;

/// Minimum spawn magnitude on each of x and z. Keeps imposters from
/// spawning already inside the capture zone.
pub const SPAWN_MIN_DISTANCE: f64 = 50.0;

/// Fixed spawn height. The integrator never touches y.
pub const SPAWN_HEIGHT: f64 = -5.0;

// --- Frame loop ---

/// Frame loop rate (Hz), matching a typical display refresh.
pub const FRAME_RATE: u32 = 60;

// --- Visuals (opaque passthrough to presentation) ---

/// Mesh asset name for an imposter.
pub const IMPOSTER_OBJ_ASSET: &str = "earth.obj";

/// Material asset name for an imposter.
pub const IMPOSTER_MTL_ASSET: &str = "earth.mtl";

/// Uniform scale applied to the imposter mesh.
pub const IMPOSTER_SCALE: f64 = 0.05;

/// Tint color for the imposter mesh.
pub const IMPOSTER_COLOR: &str = "red";

// --- Navigation ---

/// Target handed to the navigator collaborator on restart.
pub const RELOAD_TARGET: &str = "/index.html";
