//! Patrol simulation driving a behavior tree from a fixed tick loop.

mod config;
mod guard;

use anyhow::Result;
use behavior_tree::Behavior;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::PatrolConfig;
use crate::guard::{Guard, build_tree};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging()?;

    let config = PatrolConfig::from_env();
    tracing::info!(?config, "starting patrol");

    let guard = Guard::shared(&config);
    let mut root = build_tree(&guard);

    for _ in 0..config.ticks {
        let status = root.tick();
        let guard = guard.borrow();
        tracing::info!(
            tick = guard.tick,
            waypoint = guard.waypoint,
            alarm = guard.alarm_raised,
            ?status,
            "tick complete"
        );
    }

    let guard = guard.borrow();
    tracing::info!(
        legs = guard.legs_walked,
        intruder_caught = guard.intruder_caught,
        "patrol finished"
    );
    Ok(())
}

/// Setup logging to stderr, filtered by `RUST_LOG` (default: info).
fn setup_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
