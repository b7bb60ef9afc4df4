// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::engine::SimulationEngine;
use crate::application::log_cue::{LogCue, SilentCue};
use crate::application::schedule::Schedule;
use crate::application::terminal::Terminal;
use crate::infrastructure::config::load_terminal_config;
use crate::infrastructure::system_clock::LocalClock;
use crate::infrastructure::terminal_bell::TerminalBell;
use crate::presentation::app_state::AppState;
use crate::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_terminal_config()?;

    let rng = match config.simulation.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed simulation seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let cue: Arc<dyn LogCue> = if config.console.cue {
        Arc::new(TerminalBell::stderr())
    } else {
        Arc::new(SilentCue)
    };

    // Create the engine (application layer)
    let terminal = Terminal::new(rng, Arc::new(LocalClock));
    let schedule = Schedule::from_settings(&config.schedule)?;
    let engine = SimulationEngine::new(terminal, schedule, cue);
    engine.start().await?;

    let state = Arc::new(AppState {
        engine: engine.clone(),
    });

    // Start server
    let addr = config.bind_addr()?;
    tracing::info!(%addr, "Starting ido-terminal service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state))
        .with_graceful_shutdown(shutdown_signal(engine))
        .await?;

    Ok(())
}

/// Stops the ticks before connections drain; that also ends every open
/// event stream, which graceful shutdown would otherwise wait on.
async fn shutdown_signal(engine: SimulationEngine) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");

    // Ticks may already have been stopped over HTTP
    if let Err(e) = engine.stop().await {
        tracing::debug!(error = %e, "engine already stopped");
    }
}
