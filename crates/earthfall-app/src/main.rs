//! Headless EARTHFALL runner.
//!
//! Starts a session with the reference collaborators and polls the shared
//! snapshot until the game ends. With nobody tagging, the imposters
//! converge and the session is lost — useful for exercising the whole
//! stack without a VR frontend.

use std::time::Duration;

use earthfall_app::controller::GameController;
use earthfall_app::game_loop;
use earthfall_app::platform::{LogAudioPlayer, LogNavigator, StaticHeadPose, SystemClock};
use earthfall_app::state::{AppState, GameLoopCommand};
use earthfall_sim::{SessionConfig, SessionEngine};

fn main() {
    env_logger::init();

    let engine = SessionEngine::new(
        SessionConfig::default(),
        Box::new(LogAudioPlayer),
        Box::new(StaticHeadPose),
    );
    let controller = GameController::new(
        engine,
        Box::new(SystemClock::new()),
        Box::new(LogNavigator),
    );

    let app_state = AppState::new();
    let cmd_tx = game_loop::spawn_game_loop(controller, app_state.latest_snapshot.clone());
    *app_state.command_tx.lock().unwrap() = Some(cmd_tx.clone());
    *app_state.running.lock().unwrap() = true;

    // Poll until the session reaches a terminal status.
    let outcome = loop {
        std::thread::sleep(Duration::from_millis(100));
        let snapshot = app_state.latest_snapshot.lock().unwrap().clone();
        if let Some(snapshot) = snapshot {
            if let Some(outcome) = snapshot.outcome {
                break outcome;
            }
        }
    };

    println!("{}: {}", outcome.title, outcome.message);

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
