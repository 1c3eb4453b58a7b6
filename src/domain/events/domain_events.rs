//! Domain events - Notifications of significant state changes
//!
//! Emitted after the host has carried out a decision, so downstream consumers
//! (audit log, chat broadcast, the stdout stream of the binary) see only what
//! actually happened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{KillerCategory, PlayerId, TeamId};

/// Base data for all events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Optional correlation ID for tracing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }
}

impl EventMetadata {
    pub fn with_correlation_id(correlation_id: Option<String>) -> Self {
        Self {
            correlation_id,
            ..Self::default()
        }
    }
}

/// All domain events in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A team was disbanded because its leader died
    TeamDisbanded {
        metadata: EventMetadata,
        team_id: TeamId,
        leader_id: PlayerId,
        killer_id: Option<PlayerId>,
        cause: KillerCategory,
    },
}

impl DomainEvent {
    /// Get the metadata for this event
    pub fn metadata(&self) -> &EventMetadata {
        match self {
            DomainEvent::TeamDisbanded { metadata, .. } => metadata,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::TeamDisbanded { .. } => "TeamDisbanded",
        }
    }
}
