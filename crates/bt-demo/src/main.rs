//! Behavior tree demo binary.
//!
//! Builds two small trees and ticks them, logging every status:
//! 1. The reference selector, whose guarded branch succeeds once a flag is raised
//! 2. A worker sequence whose middle leaf stays `Running` for a few ticks
//!
//! Configuration is read from the environment (and a `.env` file, if any),
//! see [`config::DemoConfig::from_env`]. Set `RUST_LOG=debug` to see the
//! per-node events emitted by traced nodes.
//!
//! ```bash
//! RUST_LOG=debug BT_DEMO_TICKS=6 cargo run -p bt-demo
//! ```
mod config;
mod scenarios;

use anyhow::Result;
use config::DemoConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting behavior tree demo");

    let reference = scenarios::run_reference(&config);
    let worker = scenarios::run_worker(&config);

    let flag_raised = config.flag_after < config.ticks;
    let ended_in_success = reference.last().is_some_and(|status| status.is_success());
    anyhow::ensure!(
        ended_in_success == flag_raised,
        "reference tree ended in {:?}",
        reference.last()
    );
    tracing::info!(
        reference_ticks = reference.len(),
        worker_ticks = worker.len(),
        "demo complete"
    );

    Ok(())
}
