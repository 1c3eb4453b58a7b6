//! Death entity - One player death as reported by the host

use crate::domain::value_objects::{KillerCategory, KillerInfo, PlayerId};

/// A validated death; exists only while the death is being handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathEvent {
    pub victim: PlayerId,
    pub killer: Option<KillerInfo>,
}

impl DeathEvent {
    pub fn new(victim: PlayerId, killer: Option<KillerInfo>) -> Self {
        Self { victim, killer }
    }

    /// The killer, unless it is absent or carries no category
    pub fn effective_killer(&self) -> Option<&KillerInfo> {
        self.killer
            .as_ref()
            .filter(|killer| killer.category != KillerCategory::None)
    }
}
