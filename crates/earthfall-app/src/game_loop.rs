//! Frame loop thread — drives the controller at a fixed frame rate.
//!
//! The original platform rescheduled itself implicitly from inside every
//! frame callback; here the loop is an explicit thread with an owned
//! shutdown path, so teardown is deterministic and nothing keeps firing
//! after the session is torn down. Commands arrive via `mpsc`; the latest
//! snapshot is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::info;

use earthfall_core::constants::FRAME_RATE;
use earthfall_core::state::GameStateSnapshot;

use crate::controller::GameController;
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the frame loop in a new thread, taking ownership of the
/// controller.
///
/// Returns the command sender. Dropping every sender, or sending
/// `Shutdown`, terminates the loop; `Restart` hands off to the navigator
/// and terminates it as well.
pub fn spawn_game_loop(
    controller: GameController,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("earthfall-frame-loop".into())
        .spawn(move || {
            run_game_loop(controller, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    cmd_tx
}

/// The frame loop. Runs until Shutdown, Restart, or channel disconnect.
///
/// Note the loop keeps scheduling frames after the session reaches a
/// terminal status: presentation still needs snapshots to render the
/// end-of-game box, and the engine makes terminal frames no-ops.
fn run_game_loop(
    mut controller: GameController,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Tag(id)) => controller.tag_from_channel(id),
                Ok(GameLoopCommand::Restart) => {
                    controller.restart();
                    return;
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("frame loop shutdown requested");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame (the controller reads the clock itself)
        let snapshot = controller.on_frame();

        // 3. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
