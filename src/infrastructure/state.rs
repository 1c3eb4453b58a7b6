//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{DeathHandlerService, SettingsService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{InMemoryTeamRegistry, JsonFileSettingsRepository};

/// Everything the process needs, built once at startup and dropped at shutdown
pub struct AppState {
    pub settings_service: Arc<SettingsService>,
    pub team_registry: Arc<InMemoryTeamRegistry>,
    pub death_handler: DeathHandlerService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Settings: load, migrate and write back before any death is handled
        let settings_repository = JsonFileSettingsRepository::new(&config.settings_path);
        tracing::info!("  Settings: {}", settings_repository.path().display());
        let settings_service = Arc::new(SettingsService::new(Arc::new(settings_repository)));
        settings_service.load().await;

        let team_registry = Arc::new(InMemoryTeamRegistry::from_snapshot(&config.teams_path).await?);
        tracing::info!("  Teams: {} loaded", team_registry.team_count());

        let death_handler =
            DeathHandlerService::new(settings_service.clone(), team_registry.clone());

        Ok(Self {
            settings_service,
            team_registry,
            death_handler,
        })
    }
}
