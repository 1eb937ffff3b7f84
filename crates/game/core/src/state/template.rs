//! Unit templates.
//!
//! Templates are the data-driven description of a unit as it enters battle.
//! Abilities are referenced by `(name, level)` and resolved through an
//! [`AbilityProvider`](crate::env::AbilityProvider) when the unit is spawned.

use crate::stats::{DamageSchool, Defense, Offense, ResourceKind, Resources, SchoolValues};

/// Reference to a leveled ability in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityRef {
    pub name: String,
    pub level: u8,
}

impl AbilityRef {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Everything needed to spawn a unit except its id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub name: String,
    /// Total life. Units enter battle at full life unless `life` is set.
    pub total_life: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub life: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offense: Offense,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: Defense,
    /// Starting trigger resources.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Resources,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityRef>,
}

impl UnitTemplate {
    /// Create a builder for constructing unit templates
    pub fn builder(name: impl Into<String>) -> UnitTemplateBuilder {
        UnitTemplateBuilder::new(name)
    }
}

/// Builder for constructing unit templates.
#[derive(Clone, Debug)]
pub struct UnitTemplateBuilder {
    template: UnitTemplate,
}

impl UnitTemplateBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            template: UnitTemplate {
                name: name.into(),
                total_life: 100,
                life: None,
                offense: Offense::default(),
                defense: Defense::default(),
                resources: Resources::default(),
                abilities: Vec::new(),
            },
        }
    }

    pub fn total_life(mut self, total_life: i32) -> Self {
        self.template.total_life = total_life;
        self
    }

    /// Start below full life.
    pub fn life(mut self, life: i32) -> Self {
        self.template.life = Some(life);
        self
    }

    pub fn offense(mut self, offense: Offense) -> Self {
        self.template.offense = offense;
        self
    }

    pub fn defense(mut self, defense: Defense) -> Self {
        self.template.defense = defense;
        self
    }

    /// Set base damage of one school.
    pub fn damage(mut self, school: DamageSchool, amount: i32) -> Self {
        self.template.offense.damage.set(school, amount);
        self
    }

    pub fn resistances(mut self, resistances: SchoolValues<i32>) -> Self {
        self.template.defense.resistances = resistances;
        self
    }

    /// Set a starting resource level.
    pub fn resource(mut self, kind: ResourceKind, amount: u32) -> Self {
        *self.template.resources.get_mut(kind) = crate::stats::ResourceMeter::new(amount);
        self
    }

    pub fn ability(mut self, name: impl Into<String>, level: u8) -> Self {
        self.template.abilities.push(AbilityRef::new(name, level));
        self
    }

    pub fn build(self) -> UnitTemplate {
        self.template
    }
}
