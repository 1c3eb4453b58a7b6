//! Who (or what) landed the killing blow

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Broad category of the entity that initiated a death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KillerCategory {
    /// Environmental or unknown cause (fall, drowning, radiation...)
    #[default]
    None,
    Player,
    Npc,
    Animal,
}

impl KillerCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "environment",
            Self::Player => "player",
            Self::Npc => "NPC",
            Self::Animal => "animal",
        }
    }
}

impl std::fmt::Display for KillerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Killer metadata attached to a death
///
/// Animals and some NPCs have no player identity, so `id` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillerInfo {
    pub id: Option<PlayerId>,
    pub category: KillerCategory,
}

impl KillerInfo {
    /// Whether this killer is the victim themselves
    pub fn is_same_player(&self, victim: PlayerId) -> bool {
        self.id == Some(victim)
    }
}

#[cfg(test)]
impl KillerInfo {
    pub fn player(id: PlayerId) -> Self {
        Self {
            id: Some(id),
            category: KillerCategory::Player,
        }
    }

    pub fn npc(id: Option<PlayerId>) -> Self {
        Self {
            id,
            category: KillerCategory::Npc,
        }
    }

    pub fn animal() -> Self {
        Self {
            id: None,
            category: KillerCategory::Animal,
        }
    }
}
