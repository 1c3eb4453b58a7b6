//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: JSON settings document and in-memory team registry
//! - Event source: Death notifications streamed as JSON lines
//! - Config: Process configuration
//! - State: Wired application services

pub mod config;
pub mod event_source;
pub mod persistence;
pub mod state;
