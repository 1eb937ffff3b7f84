//! Ability catalog loader.

use std::path::Path;

use anyhow::Context;
use skirmish_core::{Ability, AbilityDefinition};

use crate::catalog::AbilityCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the leveled ability catalog.
///
/// RON format: `Vec<AbilityDefinition>`, one entry per `(name, level)`.
/// Files enable `implicit_some` and `unwrap_newtypes`, so flags are written
/// as a bare string: `flags: "DISPOSABLE | REFRESH_EFFECTS"`.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load and validate an ability catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate an ability catalog.
    ///
    /// Every definition is built once so malformed templates (unknown kinds,
    /// policies, modifiers, unbalanced effects) fail here rather than when a
    /// unit is spawned. Duplicate `(name, level)` pairs are rejected.
    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let definitions: Vec<AbilityDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let mut catalog = AbilityCatalog::new();
        for definition in definitions {
            let (name, level) = (definition.name.clone(), definition.level);
            Ability::new(definition.clone())
                .map_err(|e| anyhow::anyhow!("Invalid ability '{}' level {}: {}", name, level, e))?;
            if catalog.insert(definition).is_some() {
                anyhow::bail!("Duplicate ability '{}' level {}", name, level);
            }
        }

        Ok(catalog)
    }
}
