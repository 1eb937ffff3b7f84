//! Default data set compiled into the binary.

use std::collections::BTreeMap;

use skirmish_core::{CombatConfig, UnitTemplate};

use crate::catalog::AbilityCatalog;
use crate::loaders::{AbilityLoader, ConfigLoader, LoadResult, Roster, RosterLoader, UnitLoader};

pub const ABILITIES: &str = include_str!("../../data/abilities.ron");
pub const UNITS: &str = include_str!("../../data/units.ron");
pub const ROSTERS: &str = include_str!("../../data/rosters.ron");
pub const CONFIG: &str = include_str!("../../data/config.toml");

/// Name of the roster used when none is requested.
pub const DEFAULT_ROSTER: &str = "skirmish";

pub fn abilities() -> LoadResult<AbilityCatalog> {
    AbilityLoader::parse(ABILITIES)
}

pub fn units() -> LoadResult<Vec<UnitTemplate>> {
    UnitLoader::parse(UNITS)
}

pub fn rosters() -> LoadResult<BTreeMap<String, Roster>> {
    RosterLoader::parse(ROSTERS, &units()?)
}

pub fn config() -> LoadResult<CombatConfig> {
    ConfigLoader::parse(CONFIG)
}
