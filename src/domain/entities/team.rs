//! Team entity - A snapshot of a host-owned player team
//!
//! The host server owns the real team; this crate only reads who leads it and
//! who belongs to it, then asks the host to disband it.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub leader: PlayerId,
    /// All members, leader included
    #[serde(default)]
    pub members: Vec<PlayerId>,
}

impl Team {
    pub fn is_leader(&self, player: PlayerId) -> bool {
        self.leader == player
    }
}

#[cfg(test)]
impl Team {
    pub fn has_member(&self, player: PlayerId) -> bool {
        self.leader == player || self.members.contains(&player)
    }

    pub fn new(id: TeamId, leader: PlayerId) -> Self {
        Self {
            id,
            leader,
            members: vec![leader],
        }
    }

    pub fn with_member(mut self, player: PlayerId) -> Self {
        if !self.has_member(player) {
            self.members.push(player);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_is_member() {
        let team = Team::new(TeamId::new(1), PlayerId::new(10));
        assert!(team.is_leader(PlayerId::new(10)));
        assert!(team.has_member(PlayerId::new(10)));
        assert_eq!(team.members, vec![PlayerId::new(10)]);
    }

    #[test]
    fn test_with_member_ignores_duplicates() {
        let team = Team::new(TeamId::new(1), PlayerId::new(10))
            .with_member(PlayerId::new(11))
            .with_member(PlayerId::new(11));

        assert_eq!(team.members.len(), 2);
        assert!(team.has_member(PlayerId::new(11)));
        assert!(!team.is_leader(PlayerId::new(11)));
    }

    #[test]
    fn test_snapshot_without_members_key() {
        let team: Team = serde_json::from_str(r#"{ "id": 7, "leader": 70 }"#).unwrap();
        assert!(team.members.is_empty());
        assert!(team.has_member(PlayerId::new(70)));
    }
}
