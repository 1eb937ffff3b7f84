//! Content loaders for reading combat data from files.
//!
//! Every loader has a `load(path)` entry point that reads a file and a
//! `parse(text)` entry point used for the embedded data set and tests.

pub mod abilities;
pub mod config;
pub mod embedded;
pub mod factory;
pub mod units;

pub use abilities::AbilityLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use units::{CommandRoster, Roster, RosterLoader, UnitLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
