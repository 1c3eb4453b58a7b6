//! Domain services - Pure business logic operations

pub mod disband_policy;

pub use disband_policy::TeamLookup;
