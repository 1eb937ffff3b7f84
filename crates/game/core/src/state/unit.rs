//! Combat units.

use crate::ability::{Ability, AbilityError};
use crate::config::CombatConfig;
use crate::effect::EffectCollection;
use crate::env::AbilityProvider;
use crate::stats::{Resources, StatPipeline};

use super::{StateError, UnitId, UnitTemplate};

/// The values ability triggers are evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitVitals {
    pub life: i32,
    pub total_life: i32,
    pub resources: Resources,
}

/// A unit taking part in battle.
///
/// Units are never removed mid-battle; a dead unit keeps its slot with life 0
/// and is ignored by targeting.
#[derive(Clone, Debug)]
pub struct Unit {
    id: UnitId,
    name: String,
    life: i32,
    total_life: i32,
    paralyzed: bool,
    pub resources: Resources,
    pub stats: StatPipeline,
    pub effects: EffectCollection,
    abilities: Vec<Ability>,
}

impl Unit {
    /// Create a unit with no abilities.
    pub fn new(id: UnitId, name: impl Into<String>, total_life: i32, stats: StatPipeline) -> Self {
        Self {
            id,
            name: name.into(),
            life: total_life,
            total_life,
            paralyzed: false,
            resources: Resources::default(),
            stats,
            effects: EffectCollection::new(),
            abilities: Vec::new(),
        }
    }

    /// Spawn a unit from a template, resolving its abilities through `provider`.
    ///
    /// # Errors
    ///
    /// Fails when life values are not positive, when a referenced ability is not
    /// in the catalog, or when an ability template is malformed.
    pub fn from_template(
        id: UnitId,
        template: &UnitTemplate,
        provider: &(impl AbilityProvider + ?Sized),
    ) -> Result<Self, StateError> {
        let life = template.life.unwrap_or(template.total_life);
        if template.total_life <= 0 || life <= 0 || life > template.total_life {
            return Err(StateError::InvalidLife {
                name: template.name.clone(),
                life,
            });
        }
        if template.abilities.len() > CombatConfig::MAX_ABILITIES {
            return Err(StateError::TooManyAbilities {
                name: template.name.clone(),
                max: CombatConfig::MAX_ABILITIES,
            });
        }

        let mut abilities = Vec::with_capacity(template.abilities.len());
        for reference in &template.abilities {
            let definition = provider
                .ability(&reference.name, reference.level)
                .ok_or_else(|| AbilityError::NotFound {
                    name: reference.name.clone(),
                    level: reference.level,
                })?;
            abilities.push(Ability::new(definition.clone())?);
        }

        let mut unit = Self::new(
            id,
            template.name.clone(),
            template.total_life,
            StatPipeline::new(template.offense.clone(), template.defense.clone()),
        );
        unit.life = life;
        unit.resources = template.resources;
        unit.abilities = abilities;
        Ok(unit)
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn total_life(&self) -> i32 {
        self.total_life
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Alive and below total life.
    pub fn is_wounded(&self) -> bool {
        self.is_alive() && self.life < self.total_life
    }

    pub fn is_paralyzed(&self) -> bool {
        self.paralyzed
    }

    pub fn set_paralyzed(&mut self, paralyzed: bool) {
        self.paralyzed = paralyzed;
    }

    pub fn vitals(&self) -> UnitVitals {
        UnitVitals {
            life: self.life,
            total_life: self.total_life,
            resources: self.resources,
        }
    }

    /// Reduce life, saturating at zero. Returns damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        crate::combat::apply_damage(&mut self.life, amount)
    }

    /// Restore life, capped at total life. Returns life actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.max(0).min(self.total_life - self.life);
        self.life += restored;
        restored
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    /// Re-evaluate every ability trigger against current vitals.
    pub fn update_abilities(&mut self) {
        let vitals = self.vitals();
        for ability in &mut self.abilities {
            ability.update(&vitals);
        }
    }

    /// Mark an ability used and reset the resource that armed it.
    ///
    /// # Errors
    ///
    /// Returns [`AbilityError::NotReady`] if the ability is not ready and
    /// [`AbilityError::IndexOutOfRange`] for a bad index.
    pub fn consume_ability(&mut self, index: usize) -> Result<(), AbilityError> {
        let ability = self
            .abilities
            .get_mut(index)
            .ok_or(AbilityError::IndexOutOfRange { index })?;
        ability.usage()?;
        if let Some(kind) = ability.definition().trigger.resource {
            self.resources.get_mut(kind).reset();
        }
        Ok(())
    }
}
