//! Application services - Use case implementations
//!
//! Each service accepts its port dependencies explicitly at construction time;
//! nothing is reached through global state.

pub mod death_handler_service;
pub mod settings_service;

pub use death_handler_service::DeathHandlerService;
pub use settings_service::SettingsService;
