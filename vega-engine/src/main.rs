//! VEGA Headless Demo
//!
//! Runs a scripted session through the real loop driver, then replays the
//! recorded intents and checks that the simulation ends in the same state.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vega::{
    game::tick::replay, GameLoop, Key, LoopConfig, Script, ScriptedBackend, VegaError,
    FPS_CAP, VERSION, WINDOW_TITLE,
};

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

/// Walk, jump and double-jump onto a leaf, cross to the far tree, drop to the
/// ground, walk back into its trunk, restart, quit.
fn demo_script() -> Script {
    Script::new()
        .hold(Key::A, 3)
        .tap(Key::W)
        .tap(Key::Up)
        .idle(120)
        .hold(Key::D, 80)
        .idle(60)
        .hold(Key::Left, 30)
        .idle(10)
        .tap(Key::Enter)
        .idle(10)
        .tap(Key::Escape)
}

fn run() -> Result<()> {
    info!("{} v{}", WINDOW_TITLE, VERSION);
    info!("FPS cap: {} Hz", FPS_CAP);

    let backend = ScriptedBackend::acquire(demo_script()).map_err(VegaError::Init)?;
    let config = LoopConfig {
        pace: false,
        ..LoopConfig::default()
    };

    let mut game = GameLoop::new(backend, config);
    let summary = game.run()?;

    info!("=== Session Complete ===");
    info!("Ticks: {}", summary.ticks);
    info!("Deaths: {}", summary.deaths);
    info!("Frames presented: {}", game.backend().frames_presented());
    info!(
        "Recording: {} active ticks, hash {}",
        summary.recording.entry_count(),
        hex::encode(&summary.recording.compute_hash()[..8])
    );
    info!("Final state hash: {}", hex::encode(summary.final_hash));

    info!("=== Verifying Replay ===");
    let (replayed, events) = replay(&summary.recording);
    let replay_hash = replayed.compute_hash();
    info!("Replayed {} ticks, {} events", replayed.tick, events.len());
    info!("Replay hash: {}", hex::encode(replay_hash));

    if replay_hash != summary.final_hash {
        bail!(
            "replay diverged: {} != {}",
            hex::encode(replay_hash),
            hex::encode(summary.final_hash)
        );
    }

    info!("Replay verification: PASSED");
    Ok(())
}
