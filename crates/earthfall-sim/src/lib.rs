//! Session engine for EARTHFALL.
//!
//! Owns the imposter array and kill registry, runs the movement and
//! proximity systems once per frame, and produces GameStateSnapshots for
//! presentation. Completely headless — platform services arrive through
//! the collaborator traits — enabling deterministic testing.

pub mod engine;
pub mod systems;

pub use earthfall_core as core;
pub use engine::{SessionConfig, SessionEngine, SessionError};
