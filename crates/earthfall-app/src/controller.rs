//! Game controller — orchestrates the session engine against the clock
//! and navigator collaborators.
//!
//! The controller is the single owner of the session: every mutation goes
//! through `on_frame` or `tag`, both synchronous, so the engine needs no
//! locking. Restart is not an in-place reset — the navigator reloads the
//! application and the core never resumes.

use log::{info, warn};

use earthfall_core::collab::{Clock, Navigator};
use earthfall_core::constants::RELOAD_TARGET;
use earthfall_core::state::GameStateSnapshot;
use earthfall_core::types::ImposterId;
use earthfall_sim::{SessionEngine, SessionError};

/// Owns one session engine plus the clock and navigator it runs against.
pub struct GameController {
    engine: SessionEngine,
    clock: Box<dyn Clock>,
    navigator: Box<dyn Navigator>,
    last_update_ms: f64,
}

impl GameController {
    /// Wrap an engine with its clock and navigator. The first frame's dt
    /// is measured from construction time.
    pub fn new(engine: SessionEngine, clock: Box<dyn Clock>, navigator: Box<dyn Navigator>) -> Self {
        let last_update_ms = clock.now_ms();
        Self {
            engine,
            clock,
            navigator,
            last_update_ms,
        }
    }

    /// Run one frame: read the clock, advance the engine by the elapsed
    /// time, and return the snapshot for publication.
    ///
    /// The delta is clamped at zero here against backwards clock readings;
    /// the engine sanitizes NaN/non-finite values again on its side.
    pub fn on_frame(&mut self) -> GameStateSnapshot {
        let now_ms = self.clock.now_ms();
        let dt_ms = (now_ms - self.last_update_ms).max(0.0);
        self.last_update_ms = now_ms;
        self.engine.tick(dt_ms)
    }

    /// Forward a player tag to the engine.
    pub fn tag(&mut self, id: ImposterId) -> Result<(), SessionError> {
        self.engine.tag(id)
    }

    /// Handle a tag arriving over the command channel: a bad id there is
    /// logged rather than propagated, since the sender is gone.
    pub fn tag_from_channel(&mut self, id: ImposterId) {
        if let Err(err) = self.engine.tag(id) {
            warn!("rejected tag command: {err}");
        }
    }

    /// Discard the session and ask the navigator to reload the
    /// application. The caller must stop frame processing afterwards.
    pub fn restart(&mut self) {
        info!("restarting: reloading {RELOAD_TARGET}");
        self.navigator.reload(RELOAD_TARGET);
    }

    /// Read-only access to the engine, for polling status.
    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }
}
