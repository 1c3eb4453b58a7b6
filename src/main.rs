//! Leaderless Team Disband - breaks up teams when their leader dies
//!
//! The binary:
//! - Loads (and migrates) the disband settings document
//! - Seeds a team registry from a JSON snapshot
//! - Reads death notifications as JSON lines from stdin
//! - Disbands teams per the settings and prints each TeamDisbanded event to stdout
//! - Re-reads the settings document on SIGHUP

mod application;
mod domain;
mod infrastructure;

use std::io::Write;

use tokio::io::BufReader;
use tokio::signal::unix::{signal, SignalKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::events::DomainEvent;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::event_source::DeathEventSource;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize logging (stdout carries events, so logs go to stderr)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Leaderless Team Disband");

    let state = AppState::new(config).await?;
    tracing::info!("Application state initialized");

    let mut events = DeathEventSource::new(BufReader::new(tokio::io::stdin()));
    let mut stdout = std::io::stdout();
    let mut hangup = signal(SignalKind::hangup())?;

    loop {
        let notification = tokio::select! {
            next = events.next() => match next? {
                Some(notification) => notification,
                None => {
                    tracing::info!("Event stream closed");
                    break;
                }
            },
            _ = hangup.recv() => {
                tracing::info!("Reload requested, re-reading settings");
                let settings = state.settings_service.load().await;
                tracing::info!(version = %settings.version, "Settings reloaded");
                continue;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        };

        if let Some(event) = state.death_handler.on_player_death(notification).await {
            tracing::debug!(at = %event.metadata().timestamp, "Emitting {}", event.event_type());
            if let Err(e) = emit(&mut stdout, &event) {
                tracing::warn!("Failed to write {} to stdout: {}", event.event_type(), e);
            }
        }
    }

    drop(state);
    tracing::info!("Stopped");
    Ok(())
}

/// Write one event as a JSON line
fn emit(out: &mut impl Write, event: &DomainEvent) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    out.flush()
}
