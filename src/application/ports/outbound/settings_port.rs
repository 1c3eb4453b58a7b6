use async_trait::async_trait;
use crate::domain::value_objects::DisbandSettings;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait SettingsRepositoryPort: Send + Sync {
    /// Read the stored document, `None` if nothing has been stored yet
    async fn load(&self) -> Result<Option<DisbandSettings>, SettingsError>;
    async fn save(&self, settings: &DisbandSettings) -> Result<(), SettingsError>;
}
