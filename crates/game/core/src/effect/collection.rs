use arrayvec::ArrayVec;

use crate::config::CombatConfig;

use super::{Effect, EffectError};

/// Effects carried by one unit, keyed by name, in attach order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectCollection {
    effects: ArrayVec<Effect, { CombatConfig::MAX_EFFECTS }>,
}

impl EffectCollection {
    pub fn new() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Append an effect.
    ///
    /// # Errors
    ///
    /// [`EffectError::AlreadyActive`] if the name is taken,
    /// [`EffectError::CollectionFull`] at capacity.
    pub fn insert(&mut self, effect: Effect) -> Result<(), EffectError> {
        if self.contains(effect.name()) {
            return Err(EffectError::AlreadyActive {
                name: effect.name().to_owned(),
            });
        }
        self.effects
            .try_push(effect)
            .map_err(|_| EffectError::CollectionFull {
                max: CombatConfig::MAX_EFFECTS,
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Effect> {
        self.effects.iter_mut().find(|e| e.name() == name)
    }

    /// Remove by name, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Effect> {
        let index = self.effects.iter().position(|e| e.name() == name)?;
        Some(self.effects.remove(index))
    }

    /// Names in attach order.
    pub fn names(&self) -> Vec<String> {
        self.effects.iter().map(|e| e.name().to_owned()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.effects.is_full()
    }
}
