//! Domain entities - Core business objects with identity

mod death;
mod team;

pub use death::DeathEvent;
pub use team::Team;
