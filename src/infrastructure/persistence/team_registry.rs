//! In-memory team registry
//!
//! Stands in for the host's relationship manager: teams live in memory, are
//! seeded from a JSON snapshot, and disbanding removes the team outright.
//! A player belongs to at most one team; snapshots that say otherwise are
//! rejected.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::RwLock;

use anyhow::{bail, Context, Result};

use crate::application::ports::outbound::{TeamRegistryError, TeamRegistryPort};
use crate::domain::entities::Team;
use crate::domain::value_objects::{PlayerId, TeamId};

#[derive(Debug, Default)]
struct Teams {
    by_id: HashMap<TeamId, Team>,
    /// Every member (leader included) to the one team they belong to
    by_player: HashMap<PlayerId, TeamId>,
}

#[derive(Debug, Default)]
pub struct InMemoryTeamRegistry {
    teams: RwLock<Teams>,
}

impl InMemoryTeamRegistry {
    /// Build from a list of teams, rejecting duplicate team ids and players
    /// listed in more than one team
    pub fn new(teams: impl IntoIterator<Item = Team>) -> Result<Self> {
        let mut index = Teams::default();

        for team in teams {
            if index.by_id.contains_key(&team.id) {
                bail!("Team {} is listed more than once", team.id);
            }

            let members = std::iter::once(team.leader).chain(team.members.iter().copied());
            for player in members {
                match index.by_player.get(&player) {
                    Some(existing) if *existing != team.id => bail!(
                        "Player {} is a member of both team {} and team {}",
                        player,
                        existing,
                        team.id
                    ),
                    _ => {
                        index.by_player.insert(player, team.id);
                    }
                }
            }

            index.by_id.insert(team.id, team);
        }

        Ok(Self {
            teams: RwLock::new(index),
        })
    }

    /// Seed from a JSON array of teams; a missing file yields an empty registry
    pub async fn from_snapshot(path: &Path) -> Result<Self> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Team snapshot {} not found, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        let teams: Vec<Team> = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid team snapshot {}", path.display()))?;
        Self::new(teams).with_context(|| format!("Inconsistent team snapshot {}", path.display()))
    }

    pub fn team_count(&self) -> usize {
        self.teams.read().map(|teams| teams.by_id.len()).unwrap_or_default()
    }
}

impl TeamRegistryPort for InMemoryTeamRegistry {
    fn find_players_team(&self, player: PlayerId) -> Option<Team> {
        let teams = self.teams.read().ok()?;
        let team_id = teams.by_player.get(&player)?;
        teams.by_id.get(team_id).cloned()
    }

    fn disband(&self, team_id: TeamId) -> Result<(), TeamRegistryError> {
        let mut teams = self
            .teams
            .write()
            .map_err(|_| TeamRegistryError::Unavailable("team registry lock poisoned".to_string()))?;

        match teams.by_id.remove(&team_id) {
            Some(team) => {
                teams.by_player.retain(|_, member_of| *member_of != team_id);
                tracing::debug!(
                    team = %team_id,
                    members = team.members.len(),
                    "Team removed from registry"
                );
                Ok(())
            }
            None => Err(TeamRegistryError::TeamNotFound(team_id)),
        }
    }
}
