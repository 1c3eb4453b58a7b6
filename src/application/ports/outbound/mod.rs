//! Outbound ports - Interfaces that the application requires from external systems

mod settings_port;
mod team_registry_port;

pub use settings_port::{SettingsError, SettingsRepositoryPort};
pub use team_registry_port::{TeamRegistryError, TeamRegistryPort};
