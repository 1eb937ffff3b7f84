//! Leveled ability catalog.

use std::collections::{BTreeMap, HashMap};

use skirmish_core::{AbilityDefinition, AbilityProvider};

/// Ability templates keyed by `(name, level)`.
///
/// Consumed by [`skirmish_core::Unit::from_template`] through the
/// [`AbilityProvider`] trait; never part of battle state.
#[derive(Debug, Clone, Default)]
pub struct AbilityCatalog {
    abilities: HashMap<String, BTreeMap<u8, AbilityDefinition>>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition. Returns the definition it replaced, if any.
    pub fn insert(&mut self, definition: AbilityDefinition) -> Option<AbilityDefinition> {
        self.abilities
            .entry(definition.name.clone())
            .or_default()
            .insert(definition.level, definition)
    }

    /// Levels defined for `name`, ascending.
    pub fn levels(&self, name: &str) -> Vec<u8> {
        self.abilities
            .get(name)
            .map(|levels| levels.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Highest level defined for `name`.
    pub fn max_level(&self, name: &str) -> Option<u8> {
        self.abilities.get(name)?.keys().next_back().copied()
    }

    /// Ability names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.abilities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of `(name, level)` entries.
    pub fn len(&self) -> usize {
        self.abilities.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDefinition> {
        self.abilities.values().flat_map(BTreeMap::values)
    }
}

impl AbilityProvider for AbilityCatalog {
    fn ability(&self, name: &str, level: u8) -> Option<&AbilityDefinition> {
        self.abilities.get(name)?.get(&level)
    }
}

impl FromIterator<AbilityDefinition> for AbilityCatalog {
    fn from_iter<I: IntoIterator<Item = AbilityDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::Trigger;

    #[test]
    fn lookup_is_by_name_and_level() {
        let catalog: AbilityCatalog = [
            AbilityDefinition::new("Rage", 1, Trigger::default()),
            AbilityDefinition::new("Rage", 3, Trigger::default()),
            AbilityDefinition::new("Heal", 1, Trigger::default()),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.ability("Rage", 3).is_some());
        assert!(catalog.ability("Rage", 2).is_none());
        assert!(catalog.ability("Fireball", 1).is_none());
        assert_eq!(catalog.levels("Rage"), vec![1, 3]);
        assert_eq!(catalog.max_level("Rage"), Some(3));
        assert_eq!(catalog.names(), vec!["Heal", "Rage"]);
    }

    #[test]
    fn insert_replaces_same_level() {
        let mut catalog = AbilityCatalog::new();
        assert!(catalog
            .insert(AbilityDefinition::new("Rage", 1, Trigger::default()))
            .is_none());
        let replaced = catalog.insert(
            AbilityDefinition::new("Rage", 1, Trigger::default()).with_flags(
                skirmish_core::AbilityFlags::DISPOSABLE,
            ),
        );
        assert!(replaced.is_some());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.ability("Rage", 1).unwrap().is_disposable());
    }
}
