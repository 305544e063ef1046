//! EARTHFALL application shell.
//!
//! Wires the session engine to the platform: a frame loop thread driving
//! ticks, a controller orchestrating clock/engine/navigator, shared state
//! for presentation polling, and reference collaborator implementations.

pub mod controller;
pub mod game_loop;
pub mod platform;
pub mod state;

pub use earthfall_core as core;
