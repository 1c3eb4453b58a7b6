use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use crate::application::ports::outbound::{SettingsRepositoryPort, SettingsError};
use crate::domain::value_objects::DisbandSettings;

/// Settings document stored as pretty-printed JSON on disk
pub struct JsonFileSettingsRepository {
    path: PathBuf,
}

impl JsonFileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsRepositoryPort for JsonFileSettingsRepository {
    async fn load(&self) -> Result<Option<DisbandSettings>, SettingsError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SettingsError::Storage(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    async fn save(&self, settings: &DisbandSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Storage(e.to_string()))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))
    }
}
