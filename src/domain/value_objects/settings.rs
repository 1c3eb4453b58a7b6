//! Disband settings value object
//!
//! # Architectural Note (Settings Serialization)
//!
//! DisbandSettings carries serde derives because the settings document on disk
//! IS the contract with server operators: the key names below are what they
//! edit by hand, so they are spelled out rather than derived from field names.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Version of the running build, stamped into every persisted settings document
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// All configurable disband conditions
///
/// Missing boolean keys read as `false`; a missing version reads as empty and is
/// treated as older than any real version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisbandSettings {
    #[serde(rename = "Version", default)]
    pub version: String,

    #[serde(rename = "Disband If Killed By Player", default)]
    pub disband_on_player_kill: bool,

    #[serde(rename = "Disband If Killed By NPC", default)]
    pub disband_on_npc_kill: bool,

    #[serde(rename = "Disband If Killed By Animal", default)]
    pub disband_on_animal_kill: bool,
}

impl Default for DisbandSettings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            disband_on_player_kill: true,
            disband_on_npc_kill: false,
            disband_on_animal_kill: false,
        }
    }
}

impl DisbandSettings {
    /// Parsed version tag, `None` when missing or not a dotted number
    pub fn parsed_version(&self) -> Option<PluginVersion> {
        self.version.parse().ok()
    }
}

/// Dotted `major.minor.patch` version, compared numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PluginVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Version of the running build
    pub fn current() -> Self {
        // CARGO_PKG_VERSION is always major.minor.patch
        CURRENT_VERSION.parse().unwrap_or(Self::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version tag: {0:?}")]
pub struct InvalidVersion(pub String);

impl FromStr for PluginVersion {
    type Err = InvalidVersion;

    /// Accepts one to three numeric components; missing ones are zero.
    /// Pre-release or build suffixes (`1.2.3-beta`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s.trim().split(['-', '+']).next().unwrap_or_default();
        if core.is_empty() {
            return Err(InvalidVersion(s.to_string()));
        }

        let mut parts = [0u32; 3];
        let mut count = 0;
        for component in core.split('.') {
            if count == parts.len() {
                return Err(InvalidVersion(s.to_string()));
            }
            parts[count] = component
                .parse()
                .map_err(|_| InvalidVersion(s.to_string()))?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl Ord for PluginVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for PluginVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = DisbandSettings::default();
        assert_eq!(settings.version, "1.0.0");
        assert!(settings.disband_on_player_kill);
        assert!(!settings.disband_on_npc_kill);
        assert!(!settings.disband_on_animal_kill);
    }

    #[test]
    fn test_document_keys() {
        let json = serde_json::to_value(DisbandSettings::default()).unwrap();
        assert_eq!(json["Version"], "1.0.0");
        assert_eq!(json["Disband If Killed By Player"], true);
        assert_eq!(json["Disband If Killed By NPC"], false);
        assert_eq!(json["Disband If Killed By Animal"], false);
    }

    #[test]
    fn test_missing_keys_read_as_false() {
        let settings: DisbandSettings =
            serde_json::from_str(r#"{ "Disband If Killed By NPC": true }"#).unwrap();
        assert_eq!(settings.version, "");
        assert!(!settings.disband_on_player_kill);
        assert!(settings.disband_on_npc_kill);
        assert!(settings.parsed_version().is_none());
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!("1.0.0".parse::<PluginVersion>(), Ok(PluginVersion::new(1, 0, 0)));
        assert_eq!("2.1".parse::<PluginVersion>(), Ok(PluginVersion::new(2, 1, 0)));
        assert_eq!(" 3 ".parse::<PluginVersion>(), Ok(PluginVersion::new(3, 0, 0)));
        assert_eq!("1.2.3-beta".parse::<PluginVersion>(), Ok(PluginVersion::new(1, 2, 3)));
        assert!("".parse::<PluginVersion>().is_err());
        assert!("one.two".parse::<PluginVersion>().is_err());
        assert!("1.2.3.4".parse::<PluginVersion>().is_err());
    }

    #[test]
    fn test_version_ordering_is_numeric() {
        let v1_9: PluginVersion = "1.9.0".parse().unwrap();
        let v1_10: PluginVersion = "1.10.0".parse().unwrap();
        assert!(v1_10 > v1_9);
        assert!(PluginVersion::new(0, 9, 9) < PluginVersion::current());
    }
}
