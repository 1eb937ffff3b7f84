//! Stat pipeline: baseline offense/defense plus the active modifier stack.
//!
//! Effective values are never mutated in place. Every `apply`/`revert` recomputes
//! them from the baseline in the fixed order:
//!
//! ```text
//! Flat → Multiply → Convert → Clamp
//! ```
//!
//! Removing a modifier therefore restores the exact baseline, with no
//! floating-point drift across repeated apply/revert cycles.

use crate::combat::{self, mitigate, truncate};
use crate::config::HitChanceParams;

use super::error::StatError;
use super::modifier::{Modifier, ModifierStack, StatBounds};
use super::school::{DamageSchool, SchoolValues};

/// Baseline offensive stats of a unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Offense {
    pub damage: SchoolValues<i32>,
    pub attack_speed: f64,
    pub accuracy: i32,
    pub magic_accuracy: i32,
    /// Percent chance, 0-100.
    pub critical_chance: i32,
    /// Percent, 150 = ×1.5.
    pub critical_multiplier: i32,
}

impl Default for Offense {
    fn default() -> Self {
        Self {
            damage: SchoolValues::default(),
            attack_speed: 1.0,
            accuracy: 0,
            magic_accuracy: 0,
            critical_chance: 0,
            critical_multiplier: 150,
        }
    }
}

/// Baseline (and effective) defensive stats of a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Defense {
    /// Percent per school, -100..=100.
    pub resistances: SchoolValues<i32>,
    /// Percent chance to block, 0-100.
    pub block: i32,
    pub defense: i32,
    pub magic_defense: i32,
}

/// Offense after modifiers. Damage stays fractional until the final truncation.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveOffense {
    pub damage: SchoolValues<f64>,
    pub attack_speed: f64,
    pub accuracy: i32,
    pub magic_accuracy: i32,
    pub critical_chance: i32,
    pub critical_multiplier: i32,
}

impl EffectiveOffense {
    fn compute(base: &Offense, modifiers: &ModifierStack) -> Self {
        let mut out = Self {
            damage: base.damage.map(f64::from),
            attack_speed: base.attack_speed,
            accuracy: base.accuracy,
            magic_accuracy: base.magic_accuracy,
            critical_chance: base.critical_chance,
            critical_multiplier: base.critical_multiplier,
        };

        // Step 1: Flat
        for modifier in modifiers.iter() {
            match *modifier {
                Modifier::AddSchoolDamage(school, v) => *out.damage.get_mut(school) += f64::from(v),
                Modifier::AddAccuracy(v) => out.accuracy = out.accuracy.saturating_add(v),
                Modifier::AddMagicAccuracy(v) => {
                    out.magic_accuracy = out.magic_accuracy.saturating_add(v)
                }
                Modifier::AddCriticalChance(v) => {
                    out.critical_chance = out.critical_chance.saturating_add(v)
                }
                Modifier::AddCriticalMultiplier(v) => {
                    out.critical_multiplier = out.critical_multiplier.saturating_add(v)
                }
                _ => {}
            }
        }

        // Step 2: Multiply
        for modifier in modifiers.iter() {
            match *modifier {
                Modifier::MultiplyAttackSpeed(f) => out.attack_speed *= f,
                Modifier::MultiplyDamage(f) => out.damage = out.damage.map(|d| d * f),
                Modifier::MultiplySchoolDamage(school, f) => *out.damage.get_mut(school) *= f,
                _ => {}
            }
        }

        // Step 3: Convert, in stack order
        for modifier in modifiers.iter() {
            if let Modifier::ConvertDamage { from, to, percent } = *modifier {
                let share = f64::from(percent.clamp(0, 100)) / 100.0;
                let moved = out.damage.get(from) * share;
                *out.damage.get_mut(from) -= moved;
                *out.damage.get_mut(to) += moved;
            }
        }

        // Step 4: Clamp
        out.damage = out.damage.map(|d| d.max(0.0));
        out.attack_speed = out.attack_speed.max(0.0);
        out.accuracy = StatBounds::NON_NEGATIVE.clamp(out.accuracy);
        out.magic_accuracy = StatBounds::NON_NEGATIVE.clamp(out.magic_accuracy);
        out.critical_chance = StatBounds::CHANCE.clamp(out.critical_chance);
        out.critical_multiplier = StatBounds::NON_NEGATIVE.clamp(out.critical_multiplier);
        out
    }
}

fn compute_defense(base: &Defense, modifiers: &ModifierStack) -> Defense {
    let mut out = base.clone();
    for modifier in modifiers.iter() {
        match *modifier {
            Modifier::AddBlock(v) => out.block = out.block.saturating_add(v),
            Modifier::AddDefense(v) => out.defense = out.defense.saturating_add(v),
            Modifier::AddMagicDefense(v) => {
                out.magic_defense = out.magic_defense.saturating_add(v)
            }
            Modifier::AddResistance(school, v) => {
                let resistance = out.resistances.get_mut(school);
                *resistance = resistance.saturating_add(v);
            }
            _ => {}
        }
    }
    out.block = StatBounds::BLOCK.clamp(out.block);
    out.defense = StatBounds::NON_NEGATIVE.clamp(out.defense);
    out.magic_defense = StatBounds::NON_NEGATIVE.clamp(out.magic_defense);
    out.resistances = out.resistances.map(|r| StatBounds::RESISTANCE.clamp(r));
    out
}

/// Offense and defense of one unit with its active modifiers.
#[derive(Clone, Debug, PartialEq)]
pub struct StatPipeline {
    base_offense: Offense,
    base_defense: Defense,
    modifiers: ModifierStack,
    offense: EffectiveOffense,
    defense: Defense,
}

impl StatPipeline {
    pub fn new(offense: Offense, defense: Defense) -> Self {
        let modifiers = ModifierStack::new();
        Self {
            offense: EffectiveOffense::compute(&offense, &modifiers),
            defense: compute_defense(&defense, &modifiers),
            base_offense: offense,
            base_defense: defense,
            modifiers,
        }
    }

    /// Push a modifier onto the stack.
    pub fn apply(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
        self.recompute();
    }

    /// Remove one active modifier equal to `modifier`.
    ///
    /// # Errors
    ///
    /// Returns [`StatError::ModifierNotActive`] if no equal modifier is on the stack.
    pub fn revert(&mut self, modifier: &Modifier) -> Result<(), StatError> {
        if !self.modifiers.remove(modifier) {
            return Err(StatError::ModifierNotActive {
                modifier: *modifier,
            });
        }
        self.recompute();
        Ok(())
    }

    /// Copy of this pipeline with extra modifiers on top, used for one-shot
    /// offense deltas of a single attack.
    pub fn with_modifiers(&self, modifiers: &[Modifier]) -> Self {
        let mut temporary = self.clone();
        for modifier in modifiers {
            temporary.modifiers.push(*modifier);
        }
        temporary.recompute();
        temporary
    }

    fn recompute(&mut self) {
        self.offense = EffectiveOffense::compute(&self.base_offense, &self.modifiers);
        self.defense = compute_defense(&self.base_defense, &self.modifiers);
    }

    pub fn offense(&self) -> &EffectiveOffense {
        &self.offense
    }

    pub fn defense(&self) -> &Defense {
        &self.defense
    }

    pub fn base_offense(&self) -> &Offense {
        &self.base_offense
    }

    pub fn base_defense(&self) -> &Defense {
        &self.base_defense
    }

    pub fn modifiers(&self) -> &ModifierStack {
        &self.modifiers
    }

    /// Damage against `target` before truncation.
    ///
    /// ```text
    /// Σ_school dmg_s × (100 − res_s)/100 × attack_speed
    /// ```
    pub fn damage_value(&self, target: &StatPipeline) -> f64 {
        let raw: f64 = self
            .offense
            .damage
            .iter()
            .map(|(school, dmg)| mitigate(dmg, target.resistance(school)))
            .sum();
        (raw * self.offense.attack_speed).max(0.0)
    }

    /// Damage against `target`, floored once.
    pub fn get_damage(&self, target: &StatPipeline) -> i32 {
        truncate(self.damage_value(target))
    }

    /// Physical hit chance against `target`.
    pub fn get_accuracy(&self, target: &StatPipeline, params: &HitChanceParams) -> u32 {
        combat::calculate_hit_chance(self.offense.accuracy, target.defense.defense, params)
    }

    /// Magic hit chance against `target`.
    pub fn get_magic_accuracy(&self, target: &StatPipeline, params: &HitChanceParams) -> u32 {
        combat::calculate_hit_chance(
            self.offense.magic_accuracy,
            target.defense.magic_defense,
            params,
        )
    }

    pub fn get_critical_chance(&self) -> i32 {
        self.offense.critical_chance
    }

    pub fn get_critical_multiplier(&self) -> i32 {
        self.offense.critical_multiplier
    }

    pub fn block(&self) -> i32 {
        self.defense.block
    }

    pub fn resistance(&self, school: DamageSchool) -> i32 {
        self.defense.resistances.get(school)
    }

    /// Effective damage of one school before resistance.
    pub fn school_damage(&self, school: DamageSchool) -> f64 {
        self.offense.damage.get(school)
    }
}

impl Default for StatPipeline {
    fn default() -> Self {
        Self::new(Offense::default(), Defense::default())
    }
}
