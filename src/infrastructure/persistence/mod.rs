//! Persistence adapters
//!
//! File-backed settings storage and the in-memory team registry.

mod settings_repository;
mod team_registry;

pub use settings_repository::JsonFileSettingsRepository;
pub use team_registry::InMemoryTeamRegistry;
