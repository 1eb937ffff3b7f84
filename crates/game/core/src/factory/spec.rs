//! Declarative action templates.
//!
//! Kinds, target policies, schools, resources and modifier methods are plain
//! strings here; the factory resolves them once and rejects anything unknown.

/// One action in an ability or effect template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ActionSpec {
    /// `damage`, `heal`, `buff`, `paralysis`, `mana_restore`, `effect_apply`.
    pub kind: String,
    /// Target policy, e.g. `SELF`, `RANDOM_ENEMY`, `EFFECT_ENEMY`.
    pub target: String,
    /// Damage multiplier, life healed or resource restored.
    pub power: Option<f64>,
    /// Fixed damage amount.
    pub amount: Option<i32>,
    /// School of fixed damage.
    pub school: Option<String>,
    /// Modifier of a buff.
    pub modifier: Option<ModifierSpec>,
    /// Offense deltas for a single offense-based attack.
    pub offense: Vec<ModifierSpec>,
    /// Resource of a mana restore.
    pub resource: Option<String>,
    /// Undo instead of apply (buff, paralysis).
    pub revert: bool,
    pub can_miss: bool,
    pub can_block: bool,
    pub can_crit: bool,
    pub magic: bool,
    pub effect: Option<EffectSpec>,
}

impl Default for ActionSpec {
    fn default() -> Self {
        Self {
            kind: String::new(),
            target: "SELF".to_owned(),
            power: None,
            amount: None,
            school: None,
            modifier: None,
            offense: Vec::new(),
            resource: None,
            revert: false,
            can_miss: false,
            can_block: false,
            can_crit: false,
            magic: false,
            effect: None,
        }
    }
}

impl ActionSpec {
    pub fn new(kind: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Offense-based attack scaled by `power`, with every roll enabled.
    pub fn damage(target: impl Into<String>, power: f64) -> Self {
        Self {
            power: Some(power),
            can_miss: true,
            can_block: true,
            can_crit: true,
            ..Self::new("damage", target)
        }
    }

    /// Fixed damage of one school, no rolls.
    pub fn fixed_damage(target: impl Into<String>, amount: i32, school: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            school: Some(school.into()),
            ..Self::new("damage", target)
        }
    }

    pub fn heal(target: impl Into<String>, power: f64) -> Self {
        Self {
            power: Some(power),
            ..Self::new("heal", target)
        }
    }

    pub fn buff(target: impl Into<String>, modifier: ModifierSpec) -> Self {
        Self {
            modifier: Some(modifier),
            ..Self::new("buff", target)
        }
    }

    pub fn paralysis(target: impl Into<String>) -> Self {
        Self::new("paralysis", target)
    }

    pub fn mana_restore(target: impl Into<String>, resource: impl Into<String>, power: f64) -> Self {
        Self {
            resource: Some(resource.into()),
            power: Some(power),
            ..Self::new("mana_restore", target)
        }
    }

    pub fn effect_apply(target: impl Into<String>, effect: EffectSpec) -> Self {
        Self {
            effect: Some(effect),
            ..Self::new("effect_apply", target)
        }
    }

    /// Flip to the undoing variant.
    pub fn reverted(mut self) -> Self {
        self.revert = true;
        self
    }

    pub fn with_offense(mut self, modifier: ModifierSpec) -> Self {
        self.offense.push(modifier);
        self
    }

    pub fn magic(mut self) -> Self {
        self.magic = true;
        self
    }
}

/// Template of a timed effect.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EffectSpec {
    pub name: String,
    pub icon: String,
    /// Rounds the effect lasts. Must be positive.
    pub duration: u32,
    pub on_apply: Vec<ActionSpec>,
    pub on_next_round: Vec<ActionSpec>,
    /// When empty, derived as the inverse of `on_apply`.
    pub on_disable: Vec<ActionSpec>,
}

impl EffectSpec {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn on_apply(mut self, action: ActionSpec) -> Self {
        self.on_apply.push(action);
        self
    }

    pub fn on_next_round(mut self, action: ActionSpec) -> Self {
        self.on_next_round.push(action);
        self
    }

    pub fn on_disable(mut self, action: ActionSpec) -> Self {
        self.on_disable.push(action);
        self
    }
}

/// Template of a stat modifier.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ModifierSpec {
    /// e.g. `multiplierAttackSpeed`, `addBlock`, `multiplierDamage`.
    pub method: String,
    /// Factor for multipliers, whole points otherwise.
    pub power: f64,
    pub school: Option<String>,
    /// Destination school of `convertDamage`.
    pub to: Option<String>,
}

impl ModifierSpec {
    pub fn new(method: impl Into<String>, power: f64) -> Self {
        Self {
            method: method.into(),
            power,
            school: None,
            to: None,
        }
    }

    pub fn school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn to(mut self, school: impl Into<String>) -> Self {
        self.to = Some(school.into());
        self
    }
}
