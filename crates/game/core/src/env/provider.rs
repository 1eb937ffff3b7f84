//! Leveled ability template oracle.

use crate::ability::AbilityDefinition;

/// Provides ability templates keyed by `(ability name, level)`.
///
/// The engine treats returned definitions as already-parsed input; semantic
/// validation happens when an [`crate::Ability`] is constructed from them.
pub trait AbilityProvider {
    fn ability(&self, name: &str, level: u8) -> Option<&AbilityDefinition>;
}

/// In-memory provider backed by a plain list, for hard-coded abilities and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticAbilityProvider {
    definitions: Vec<AbilityDefinition>,
}

impl StaticAbilityProvider {
    pub fn new(definitions: Vec<AbilityDefinition>) -> Self {
        Self { definitions }
    }

    pub fn insert(&mut self, definition: AbilityDefinition) {
        self.definitions
            .retain(|d| !(d.name == definition.name && d.level == definition.level));
        self.definitions.push(definition);
    }
}

impl AbilityProvider for StaticAbilityProvider {
    fn ability(&self, name: &str, level: u8) -> Option<&AbilityDefinition> {
        self.definitions
            .iter()
            .find(|d| d.name == name && d.level == level)
    }
}
