use std::sync::Arc;
use tokio::sync::RwLock;
use crate::application::ports::outbound::SettingsRepositoryPort;
use crate::domain::value_objects::{DisbandSettings, PluginVersion, CURRENT_VERSION};

/// Result of bringing a stored document up to the running version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    /// Stored document is current (or newer) and is used as-is
    UpToDate(DisbandSettings),
    /// Stored document was older; replaced wholesale with defaults
    Replaced {
        from_version: String,
        settings: DisbandSettings,
    },
}

/// Bring a stored document forward to `current`.
///
/// A missing or unparseable version counts as older than anything. Newer
/// documents are never downgraded.
pub fn migrate(stored: DisbandSettings, current: PluginVersion) -> Migration {
    let is_older = stored
        .parsed_version()
        .map_or(true, |version| version < current);

    if !is_older {
        return Migration::UpToDate(stored);
    }

    let settings = DisbandSettings {
        version: current.to_string(),
        ..DisbandSettings::default()
    };
    Migration::Replaced {
        from_version: stored.version,
        settings,
    }
}

/// Owns the active settings snapshot
///
/// Settings are swapped wholesale on load/reload; readers always see a
/// complete document.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryPort>,
    current: RwLock<DisbandSettings>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryPort>) -> Self {
        Self {
            repository,
            current: RwLock::new(DisbandSettings::default()),
        }
    }

    /// Current settings snapshot
    pub async fn current(&self) -> DisbandSettings {
        self.current.read().await.clone()
    }

    /// Load from storage, migrate if stale, persist the result, and make it
    /// the active snapshot. Runs at startup and again on every reload request.
    /// Never fails: unreadable documents fall back to defaults.
    pub async fn load(&self) -> DisbandSettings {
        let stored = match self.repository.load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::info!("No settings document found, creating defaults");
                DisbandSettings::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings, falling back to defaults: {}", e);
                DisbandSettings::default()
            }
        };

        let settings = match migrate(stored, PluginVersion::current()) {
            Migration::UpToDate(settings) => settings,
            Migration::Replaced {
                from_version,
                settings,
            } => {
                tracing::warn!("Config changes detected! Updating...");
                let from = if from_version.is_empty() { "none" } else { from_version.as_str() };
                tracing::warn!(
                    "Config update complete! Updated from version {} to {}",
                    from,
                    CURRENT_VERSION
                );
                settings
            }
        };

        if let Err(e) = self.repository.save(&settings).await {
            tracing::error!("Failed to persist settings: {}", e);
        }

        tracing::debug!(?settings, "Settings loaded");
        *self.current.write().await = settings.clone();
        settings
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::outbound::SettingsError;

    #[derive(Default)]
    struct MemorySettingsRepository {
        stored: Mutex<Option<DisbandSettings>>,
        saves: Mutex<u32>,
        fail_load: bool,
        fail_save: bool,
    }

    impl MemorySettingsRepository {
        fn with(settings: DisbandSettings) -> Self {
            Self {
                stored: Mutex::new(Some(settings)),
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<DisbandSettings> {
            self.stored.lock().unwrap().clone()
        }

        fn save_count(&self) -> u32 {
            *self.saves.lock().unwrap()
        }
    }

    #[async_trait]
    impl SettingsRepositoryPort for MemorySettingsRepository {
        async fn load(&self) -> Result<Option<DisbandSettings>, SettingsError> {
            if self.fail_load {
                return Err(SettingsError::Serialization("expected value".to_string()));
            }
            Ok(self.stored())
        }

        async fn save(&self, settings: &DisbandSettings) -> Result<(), SettingsError> {
            if self.fail_save {
                return Err(SettingsError::Storage("read-only".to_string()));
            }
            *self.stored.lock().unwrap() = Some(settings.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn custom(version: &str) -> DisbandSettings {
        DisbandSettings {
            version: version.to_string(),
            disband_on_player_kill: false,
            disband_on_npc_kill: true,
            disband_on_animal_kill: true,
        }
    }

    #[test]
    fn test_migrate_current_is_untouched() {
        let migration = migrate(custom("1.0.0"), PluginVersion::new(1, 0, 0));
        assert_eq!(migration, Migration::UpToDate(custom("1.0.0")));
    }

    #[test]
    fn test_migrate_newer_is_not_downgraded() {
        let migration = migrate(custom("1.10.0"), PluginVersion::new(1, 9, 0));
        assert_eq!(migration, Migration::UpToDate(custom("1.10.0")));
    }

    #[test]
    fn test_migrate_older_replaced_with_defaults() {
        let migration = migrate(custom("0.9.5"), PluginVersion::new(1, 0, 0));

        match migration {
            Migration::Replaced {
                from_version,
                settings,
            } => {
                assert_eq!(from_version, "0.9.5");
                assert_eq!(settings, DisbandSettings::default());
            }
            other => panic!("expected replacement, got {:?}", other),
        }
    }

    #[test]
    fn test_migrate_stamps_target_version() {
        let settings = match migrate(custom(""), PluginVersion::new(2, 3, 1)) {
            Migration::Replaced { settings, .. } => settings,
            other => panic!("expected replacement, got {:?}", other),
        };
        assert_eq!(settings.version, "2.3.1");
        assert!(settings.disband_on_player_kill);
        assert!(!settings.disband_on_npc_kill);
    }

    #[test]
    fn test_migrate_garbage_version_counts_as_older() {
        let migration = migrate(custom("latest"), PluginVersion::new(1, 0, 0));
        assert!(matches!(migration, Migration::Replaced { .. }));
    }

    #[tokio::test]
    async fn test_load_current_document_keeps_values() {
        let repository = Arc::new(MemorySettingsRepository::with(custom(CURRENT_VERSION)));
        let service = SettingsService::new(repository.clone());

        let settings = service.load().await;

        assert_eq!(settings, custom(CURRENT_VERSION));
        assert_eq!(service.current().await, custom(CURRENT_VERSION));
        // Always written back after load
        assert_eq!(repository.save_count(), 1);
    }

    #[tokio::test]
    async fn test_load_older_document_migrates_and_persists() {
        let repository = Arc::new(MemorySettingsRepository::with(custom("0.1.0")));
        let service = SettingsService::new(repository.clone());

        let settings = service.load().await;

        assert_eq!(settings, DisbandSettings::default());
        assert_eq!(repository.stored(), Some(DisbandSettings::default()));
    }

    #[tokio::test]
    async fn test_load_missing_document_creates_defaults() {
        let repository = Arc::new(MemorySettingsRepository::default());
        let service = SettingsService::new(repository.clone());

        let settings = service.load().await;

        assert_eq!(settings, DisbandSettings::default());
        assert_eq!(repository.stored(), Some(DisbandSettings::default()));
    }

    #[tokio::test]
    async fn test_load_unreadable_document_falls_back() {
        let repository = Arc::new(MemorySettingsRepository {
            fail_load: true,
            ..MemorySettingsRepository::default()
        });
        let service = SettingsService::new(repository.clone());

        let settings = service.load().await;

        assert_eq!(settings, DisbandSettings::default());
        assert_eq!(repository.stored(), Some(DisbandSettings::default()));
    }

    #[tokio::test]
    async fn test_load_survives_save_failure() {
        let repository = Arc::new(MemorySettingsRepository {
            stored: Mutex::new(Some(custom(CURRENT_VERSION))),
            fail_save: true,
            ..MemorySettingsRepository::default()
        });
        let service = SettingsService::new(repository);

        let settings = service.load().await;

        assert_eq!(settings, custom(CURRENT_VERSION));
        assert_eq!(service.current().await, custom(CURRENT_VERSION));
    }

    #[tokio::test]
    async fn test_reload_replaces_snapshot_wholesale() {
        let repository = Arc::new(MemorySettingsRepository::with(DisbandSettings::default()));
        let service = SettingsService::new(repository.clone());
        service.load().await;

        *repository.stored.lock().unwrap() = Some(custom(CURRENT_VERSION));
        assert_eq!(service.current().await, DisbandSettings::default());

        let settings = service.load().await;

        assert_eq!(settings, custom(CURRENT_VERSION));
        assert_eq!(service.current().await, custom(CURRENT_VERSION));
    }
}
