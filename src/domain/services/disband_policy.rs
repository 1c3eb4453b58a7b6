//! Disband policy - Decides whether a death breaks up the victim's team
//!
//! Pure business logic: given a death, the active settings and a way to look
//! up teams, produce a decision. Carrying out the decision (actually
//! disbanding) is the caller's job.
//!
//! Checks run in a fixed order and short-circuit:
//! 1. The victim must currently lead a team.
//! 2. Self-inflicted deaths never disband.
//! 3. Player killers disband only when they are enemies of the victim.
//! 4. Animal and NPC killers disband when their flag is set.

use crate::domain::entities::{DeathEvent, Team};
use crate::domain::value_objects::{DisbandSettings, KillerCategory, PlayerId, TeamId};

/// Read access to the host's team registry
pub trait TeamLookup {
    fn find_players_team(&self, player: PlayerId) -> Option<Team>;

    /// Two players are enemies unless both resolve to the same team.
    /// A player without a team is everyone's enemy.
    fn are_enemies(&self, first: PlayerId, second: PlayerId) -> bool {
        match (self.find_players_team(first), self.find_players_team(second)) {
            (Some(a), Some(b)) => a.id != b.id,
            _ => true,
        }
    }
}

/// Why a death did not disband anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The victim is not on a team
    NoTeam,
    /// The victim is on a team but does not lead it
    NotLeader,
    /// Environmental death
    NoKiller,
    /// The victim killed themselves
    SelfInflicted,
    /// Killed by a player on the same team
    Teammate,
    /// The setting for this killer category is off
    Disabled(KillerCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisbandDecision {
    Disband {
        team_id: TeamId,
        leader: PlayerId,
        cause: KillerCategory,
    },
    Skip(SkipReason),
}

/// Evaluate a single death against the current settings
pub fn evaluate<L>(event: &DeathEvent, settings: &DisbandSettings, teams: &L) -> DisbandDecision
where
    L: TeamLookup + ?Sized,
{
    let victim = event.victim;

    let team = match teams.find_players_team(victim) {
        Some(team) => team,
        None => return DisbandDecision::Skip(SkipReason::NoTeam),
    };
    if !team.is_leader(victim) {
        return DisbandDecision::Skip(SkipReason::NotLeader);
    }

    if event.killer.is_some_and(|killer| killer.is_same_player(victim)) {
        return DisbandDecision::Skip(SkipReason::SelfInflicted);
    }

    let killer = match event.effective_killer() {
        Some(killer) => killer,
        None => return DisbandDecision::Skip(SkipReason::NoKiller),
    };

    let triggered = match killer.category {
        KillerCategory::Player => {
            if !settings.disband_on_player_kill {
                return DisbandDecision::Skip(SkipReason::Disabled(KillerCategory::Player));
            }
            // No identity means no resolvable team, which counts as an enemy
            let enemies = killer
                .id
                .map_or(true, |killer_id| teams.are_enemies(killer_id, victim));
            if !enemies {
                return DisbandDecision::Skip(SkipReason::Teammate);
            }
            true
        }
        KillerCategory::Animal => settings.disband_on_animal_kill,
        KillerCategory::Npc => settings.disband_on_npc_kill,
        KillerCategory::None => false,
    };

    if triggered {
        DisbandDecision::Disband {
            team_id: team.id,
            leader: victim,
            cause: killer.category,
        }
    } else {
        DisbandDecision::Skip(SkipReason::Disabled(killer.category))
    }
}
