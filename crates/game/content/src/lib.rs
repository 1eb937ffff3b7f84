//! Data-driven combat content and its loaders.
//!
//! This crate houses the static data a battle is assembled from:
//! - the leveled ability catalog (RON)
//! - unit templates (RON)
//! - command rosters pairing unit templates into two sides (RON)
//! - combat configuration (TOML)
//!
//! A default data set is embedded in the binary; [`ContentFactory`] loads the
//! same files from a directory instead.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::AbilityCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, CommandRoster, ConfigLoader, ContentFactory, LoadResult, Roster, RosterLoader,
    UnitLoader, embedded,
};
