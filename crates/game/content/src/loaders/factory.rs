//! Content factory for loading a full data set from a directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use skirmish_core::{CombatConfig, UnitTemplate};

use crate::catalog::AbilityCatalog;
use crate::loaders::{
    AbilityLoader, ConfigLoader, LoadResult, Roster, RosterLoader, UnitLoader, embedded,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// ├── units.ron
/// └── rosters.ron
/// ```
///
/// A missing `config.toml` falls back to the embedded configuration; every
/// other file is required.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            embedded::config()
        }
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load unit templates from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitTemplate>> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load every roster from `rosters.ron`, resolved against `units.ron`.
    pub fn load_rosters(&self) -> LoadResult<BTreeMap<String, Roster>> {
        let units = self.load_units()?;
        RosterLoader::load(&self.data_dir.join("rosters.ron"), &units)
    }

    /// Load a single roster by name.
    pub fn load_roster(&self, name: &str) -> LoadResult<Roster> {
        let mut rosters = self.load_rosters()?;
        rosters.remove(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Roster '{}' not found in {} (available: {})",
                name,
                self.data_dir.join("rosters.ron").display(),
                rosters.keys().cloned().collect::<Vec<_>>().join(", ")
            )
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_embedded(dir: &Path) {
        fs::write(dir.join("abilities.ron"), embedded::ABILITIES).unwrap();
        fs::write(dir.join("units.ron"), embedded::UNITS).unwrap();
        fs::write(dir.join("rosters.ron"), embedded::ROSTERS).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_embedded(dir.path());
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), embedded::config().unwrap());
        assert!(!factory.load_abilities().unwrap().is_empty());
        let roster = factory.load_roster(embedded::DEFAULT_ROSTER).unwrap();
        assert_eq!(roster.commands.len(), 2);

        let err = factory.load_roster("nope").unwrap_err();
        assert!(err.to_string().contains(embedded::DEFAULT_ROSTER));
    }

    #[test]
    fn config_file_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        write_embedded(dir.path());
        fs::write(dir.path().join("config.toml"), "max_rounds = 12\n").unwrap();

        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config.max_rounds, 12);
    }

    #[test]
    fn malformed_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write_embedded(dir.path());
        fs::write(dir.path().join("abilities.ron"), "[(name: \"Broken\",)]").unwrap();

        let err = ContentFactory::new(dir.path()).load_abilities().unwrap_err();
        assert!(format!("{err:#}").contains("abilities.ron"));
    }
}
