//! Damage action.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::combat::{apply_critical, check_block, check_critical, check_hit, mitigate, truncate};
use crate::state::UnitId;
use crate::stats::{DamageSchool, Modifier};

/// Where the damage value comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum DamageSource {
    /// The source unit's offense against the target, scaled by `power`.
    /// `modifiers` are applied to the source for this attack only.
    Offense {
        power: f64,
        modifiers: Vec<Modifier>,
    },
    /// A flat amount of one school, reduced by the target's resistance.
    Fixed { amount: i32, school: DamageSchool },
}

/// Deal damage to each target.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageAction {
    pub source: DamageSource,
    pub can_miss: bool,
    pub can_block: bool,
    pub can_crit: bool,
    /// Magic attacks roll magic accuracy and cannot be blocked. Fixed damage
    /// of a magical school is always magic.
    pub magic: bool,
}

impl DamageAction {
    /// Offense-based attack with every roll enabled.
    pub fn offense(power: f64) -> Self {
        Self {
            source: DamageSource::Offense {
                power,
                modifiers: Vec::new(),
            },
            can_miss: true,
            can_block: true,
            can_crit: true,
            magic: false,
        }
    }

    /// Fixed damage with no rolls. Every school but physical is magic.
    pub fn fixed(amount: i32, school: DamageSchool) -> Self {
        Self {
            source: DamageSource::Fixed { amount, school },
            can_miss: false,
            can_block: false,
            can_crit: false,
            magic: school.is_magical(),
        }
    }

    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let source_id = ctx.scope.source;
        let (value, outcome) = {
            let source = ctx
                .field
                .unit(source_id)
                .ok_or(ActionError::UnitNotFound(source_id))?;
            let defender = ctx
                .field
                .unit(target)
                .ok_or(ActionError::UnitNotFound(target))?;
            let params = ctx.field.config().hit_chance;

            let attacker = match &self.source {
                DamageSource::Offense { modifiers, .. } if !modifiers.is_empty() => {
                    source.stats.with_modifiers(modifiers)
                }
                _ => source.stats.clone(),
            };

            // 1. Hit roll
            if self.can_miss {
                let chance = if self.magic {
                    attacker.get_magic_accuracy(&defender.stats, &params)
                } else {
                    attacker.get_accuracy(&defender.stats, &params)
                };
                if !check_hit(chance, ctx.dice.roll_d100()) {
                    return Ok(Hit::new(target, 0, HitOutcome::Dodged));
                }
            }

            // 2. Block roll
            if self.can_block
                && !self.magic
                && check_block(defender.stats.block(), ctx.dice.roll_d100())
            {
                return Ok(Hit::new(target, 0, HitOutcome::Blocked));
            }

            // 3. Raw value, still fractional
            let mut value = match &self.source {
                DamageSource::Offense { power, .. } => attacker.damage_value(&defender.stats) * power,
                DamageSource::Fixed { amount, school } => {
                    mitigate(f64::from(*amount), defender.stats.resistance(*school))
                }
            };

            // 4. Critical roll
            let mut outcome = HitOutcome::Hit;
            if self.can_crit && check_critical(attacker.get_critical_chance(), ctx.dice.roll_d100())
            {
                value = apply_critical(value, attacker.get_critical_multiplier());
                outcome = HitOutcome::Critical;
            }
            (value, outcome)
        };

        // 5. Truncate once and apply
        let dealt = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?
            .take_damage(truncate(value));
        Ok(Hit::new(target, dealt, outcome))
    }
}
