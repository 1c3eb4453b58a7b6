//! Domain layer - Core business logic with no host dependencies
//!
//! This layer contains:
//! - Entities: Team, DeathEvent
//! - Value Objects: identifiers, killer metadata, disband settings
//! - Domain Events: TeamDisbanded
//! - Domain Services: the disband policy

pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;
