//! Strongly-typed identifiers for host game entities
//!
//! The host hands out numeric identities (player user ids, team ids); these
//! wrappers keep the two from being mixed up at call sites.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            // Not every id is built by hand; some only arrive via serde
            #[allow(dead_code)]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(PlayerId);
define_id!(TeamId);
