//! Combat configuration loader.

use std::path::Path;

use anyhow::Context;
use skirmish_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
///
/// Every table and key is optional; missing values keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let hit = &config.hit_chance;
        if !(0..=100).contains(&hit.min) || !(0..=100).contains(&hit.max) || hit.min > hit.max {
            anyhow::bail!(
                "hit_chance bounds must satisfy 0 <= min <= max <= 100 (min = {}, max = {})",
                hit.min,
                hit.max
            );
        }
        if config.max_rounds == 0 {
            anyhow::bail!("max_rounds must be positive");
        }

        Ok(config)
    }
}
