//! Value objects - Immutable objects defined by their attributes

mod ids;
mod killer;
mod settings;

pub use ids::*;
pub use killer::{KillerCategory, KillerInfo};
pub use settings::{DisbandSettings, PluginVersion, CURRENT_VERSION};
