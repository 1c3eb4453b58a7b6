//! Data Transfer Objects - For host boundaries
//!
//! DTOs live in the application layer so infrastructure (event streams, files)
//! can deserialize loosely-shaped host payloads before they reach the domain.

pub mod death_notification;

pub use death_notification::DeathNotification;
