//! Death notification DTO - The death payload as delivered by the host
//!
//! Everything is optional on the wire; [`DeathNotification::into_event`]
//! validates it into a domain [`DeathEvent`] at the boundary.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeathEvent;
use crate::domain::value_objects::{KillerCategory, KillerInfo, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathNotification {
    /// Host correlation id, echoed into emitted events
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub victim_id: Option<u64>,
    #[serde(default)]
    pub killer: Option<KillerDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillerDto {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub category: KillerCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeathEventError {
    #[error("Death notification has no victim")]
    MissingVictim,
    #[error("Malformed death notification: {0}")]
    Malformed(String),
}

impl DeathNotification {
    pub fn into_event(self) -> Result<DeathEvent, DeathEventError> {
        let victim = self
            .victim_id
            .map(PlayerId::new)
            .ok_or(DeathEventError::MissingVictim)?;

        let killer = self.killer.map(|killer| KillerInfo {
            id: killer.id.map(PlayerId::new),
            category: killer.category,
        });

        Ok(DeathEvent::new(victim, killer))
    }
}

impl std::str::FromStr for DeathNotification {
    type Err = DeathEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(line).map_err(|e| DeathEventError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_kill() {
        let notification: DeathNotification =
            r#"{"id":"d-1","victim_id":10,"killer":{"id":20,"category":"player"}}"#
                .parse()
                .unwrap();

        assert_eq!(notification.id.as_deref(), Some("d-1"));
        let event = notification.into_event().unwrap();
        assert_eq!(event.victim, PlayerId::new(10));
        assert_eq!(event.killer, Some(KillerInfo::player(PlayerId::new(20))));
    }

    #[test]
    fn test_killer_without_category_is_environmental() {
        let notification: DeathNotification =
            r#"{"victim_id":10,"killer":{"id":20}}"#.parse().unwrap();

        let event = notification.into_event().unwrap();
        assert!(event.killer.is_some());
        assert!(event.effective_killer().is_none());
    }

    #[test]
    fn test_missing_victim_rejected() {
        let notification: DeathNotification =
            r#"{"killer":{"category":"animal"}}"#.parse().unwrap();

        assert_eq!(
            notification.into_event(),
            Err(DeathEventError::MissingVictim)
        );
    }

    #[test]
    fn test_malformed_line_rejected() {
        let result = "{not json".parse::<DeathNotification>();
        assert!(matches!(result, Err(DeathEventError::Malformed(_))));

        let result = r#"{"victim_id":1,"killer":{"category":"dragon"}}"#.parse::<DeathNotification>();
        assert!(matches!(result, Err(DeathEventError::Malformed(_))));
    }
}
