//! Death handler service - reacts to player deaths reported by the host
//!
//! Validates the incoming notification, runs the disband policy against the
//! active settings snapshot, and asks the team registry to disband when the
//! policy says so. Every failure path degrades to "do nothing".

use std::sync::Arc;

use crate::application::dto::DeathNotification;
use crate::application::ports::outbound::TeamRegistryPort;
use crate::application::services::SettingsService;
use crate::domain::events::{DomainEvent, EventMetadata};
use crate::domain::services::disband_policy::{self, DisbandDecision};

pub struct DeathHandlerService {
    settings: Arc<SettingsService>,
    teams: Arc<dyn TeamRegistryPort>,
}

impl DeathHandlerService {
    pub fn new(settings: Arc<SettingsService>, teams: Arc<dyn TeamRegistryPort>) -> Self {
        Self { settings, teams }
    }

    /// Handle one death. Returns the emitted event if a team was disbanded.
    pub async fn on_player_death(&self, notification: DeathNotification) -> Option<DomainEvent> {
        let correlation_id = notification.id.clone();
        let event = match notification.into_event() {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!("Ignoring death notification: {}", e);
                return None;
            }
        };

        let settings = self.settings.current().await;
        let decision = disband_policy::evaluate(&event, &settings, self.teams.as_ref());

        let (team_id, leader_id, cause) = match decision {
            DisbandDecision::Disband {
                team_id,
                leader,
                cause,
            } => (team_id, leader, cause),
            DisbandDecision::Skip(reason) => {
                tracing::trace!(victim = %event.victim, ?reason, "No disband");
                return None;
            }
        };

        if let Err(e) = self.teams.disband(team_id) {
            tracing::warn!("Failed to disband team {}: {}", team_id, e);
            return None;
        }

        let killer_id = event.killer.and_then(|killer| killer.id);
        tracing::info!(
            team = %team_id,
            leader = %leader_id,
            "Disbanded team after its leader was killed by {}",
            cause
        );

        Some(DomainEvent::TeamDisbanded {
            metadata: EventMetadata::with_correlation_id(correlation_id),
            team_id,
            leader_id,
            killer_id,
            cause,
        })
    }
}
