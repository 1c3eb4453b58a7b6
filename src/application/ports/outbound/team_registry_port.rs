//! Team registry port - Interface to the host's team registry
//!
//! The host owns teams, membership and the disband operation itself. The
//! application layer only finds teams and asks for a disband.

use crate::domain::entities::Team;
use crate::domain::services::TeamLookup;
use crate::domain::value_objects::{PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamRegistryError {
    #[error("Team {0} not found")]
    TeamNotFound(TeamId),
    #[error("Registry unavailable: {0}")]
    Unavailable(String),
}

/// Port for the host's team registry
///
/// Lookups are local in-memory queries on the host side and are expected to
/// be fast, so the port is synchronous.
pub trait TeamRegistryPort: Send + Sync {
    /// Find the team a player currently belongs to
    fn find_players_team(&self, player: PlayerId) -> Option<Team>;

    /// Dissolve a team, releasing all its members
    fn disband(&self, team_id: TeamId) -> Result<(), TeamRegistryError>;
}

impl<T: TeamRegistryPort + ?Sized> TeamLookup for T {
    fn find_players_team(&self, player: PlayerId) -> Option<Team> {
        TeamRegistryPort::find_players_team(self, player)
    }
}
