//! Application configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Process configuration, assembled from defaults and `LTD_*` environment variables
///
/// This is distinct from the disband settings document, which server operators
/// edit and which is migrated and persisted by the settings service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON settings document
    pub settings_path: PathBuf,
    /// Path of the JSON team snapshot used to seed the registry
    pub teams_path: PathBuf,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "LTD";

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(Self::ENV_PREFIX))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("settings_path", "config/LeaderlessTeamDisband.json")?
            .set_default("teams_path", "data/teams.json")?
            .set_default("log_filter", "leaderless_team_disband=info")?
            .add_source(source)
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
