//! Systems that operate on the session's imposters each frame.
//!
//! Systems are pure functions over the imposter slice (or read-only views
//! of it). They do not own state — all state lives in the engine.

pub mod movement;
pub mod proximity;
pub mod snapshot;
pub mod spawn;
