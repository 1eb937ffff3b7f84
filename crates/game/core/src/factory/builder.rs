//! Template → executable action translation.

use core::str::FromStr;

use crate::action::{
    Action, ActionCollection, ActionKind, ActionScope, ActionTag, BuffAction, DamageAction,
    DamageSource, EffectApplyAction, HealAction, ParalysisAction, Polarity, RestoreAction,
    TargetPolicy,
};
use crate::effect::{Effect, StackingPolicy};
use crate::stats::{DamageSchool, Modifier, ModifierMethod, ResourceKind};

use super::{ActionSpec, EffectSpec, FactoryError, ModifierSpec};

/// Builds action collections for one scope.
///
/// Building is pure: the same templates and scope always produce equal
/// collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionFactory {
    scope: ActionScope,
    stacking: StackingPolicy,
}

impl ActionFactory {
    pub fn new(scope: ActionScope) -> Self {
        Self {
            scope,
            stacking: StackingPolicy::Reject,
        }
    }

    /// Stacking policy given to every effect this factory builds.
    pub fn with_stacking(mut self, stacking: StackingPolicy) -> Self {
        self.stacking = stacking;
        self
    }

    pub fn build(&self, specs: &[ActionSpec]) -> Result<ActionCollection, FactoryError> {
        specs
            .iter()
            .map(|spec| self.build_action(spec, None))
            .collect::<Result<Vec<_>, _>>()
            .map(ActionCollection::new)
    }

    /// `within` names the effect being built, if any.
    fn build_action(
        &self,
        spec: &ActionSpec,
        within: Option<&str>,
    ) -> Result<Action, FactoryError> {
        let tag = ActionTag::from_str(&spec.kind)
            .map_err(|_| FactoryError::UnknownActionType(spec.kind.clone()))?;
        let target = TargetPolicy::from_str(&spec.target)
            .map_err(|_| FactoryError::UnknownTargetPolicy(spec.target.clone()))?;
        if target.is_effect_policy() && tag != ActionTag::EffectApply {
            return Err(FactoryError::TargetNotAllowed { kind: tag, target });
        }

        let polarity = if spec.revert {
            Polarity::Revert
        } else {
            Polarity::Apply
        };

        let kind = match tag {
            ActionTag::Damage => ActionKind::Damage(build_damage(spec)?),
            ActionTag::Heal => ActionKind::Heal(HealAction {
                power: whole_power(tag, required_power(tag, spec)?)?,
            }),
            ActionTag::Buff => {
                let modifier = spec.modifier.as_ref().ok_or_else(|| FactoryError::MissingField {
                    kind: tag.to_string(),
                    field: "modifier",
                })?;
                ActionKind::Buff(BuffAction {
                    modifier: build_modifier(modifier)?,
                    polarity,
                })
            }
            ActionTag::Paralysis => ActionKind::Paralysis(ParalysisAction { polarity }),
            ActionTag::ManaRestore => {
                let resource = spec.resource.as_deref().ok_or_else(|| FactoryError::MissingField {
                    kind: tag.to_string(),
                    field: "resource",
                })?;
                let resource = ResourceKind::from_str(resource)
                    .map_err(|_| FactoryError::UnknownResource(resource.to_owned()))?;
                let power = whole_power(tag, required_power(tag, spec)?)?;
                ActionKind::ManaRestore(RestoreAction {
                    resource,
                    power: power as u32,
                })
            }
            ActionTag::EffectApply => {
                if let Some(name) = within {
                    return Err(FactoryError::NestedEffect {
                        name: name.to_owned(),
                    });
                }
                let effect = spec.effect.as_ref().ok_or_else(|| FactoryError::MissingField {
                    kind: tag.to_string(),
                    field: "effect",
                })?;
                ActionKind::EffectApply(EffectApplyAction::new(
                    self.build_effect(effect)?,
                    self.stacking,
                ))
            }
        };

        Ok(Action::new(self.scope, target, kind))
    }

    fn build_effect(&self, spec: &EffectSpec) -> Result<Effect, FactoryError> {
        if spec.name.trim().is_empty() {
            return Err(FactoryError::EmptyEffectName);
        }
        if spec.duration == 0 {
            return Err(FactoryError::ZeroDuration {
                name: spec.name.clone(),
            });
        }

        let nested = |specs: &[ActionSpec]| -> Result<ActionCollection, FactoryError> {
            specs
                .iter()
                .map(|s| self.build_action(s, Some(spec.name.as_str())))
                .collect::<Result<Vec<_>, _>>()
                .map(ActionCollection::new)
        };

        let on_apply = nested(&spec.on_apply)?;
        let on_next_round = nested(&spec.on_next_round)?;
        let on_disable = if spec.on_disable.is_empty() {
            inverse_of(&on_apply)
        } else {
            let on_disable = nested(&spec.on_disable)?;
            if !is_balanced(&on_apply, &on_disable) {
                return Err(FactoryError::UnbalancedEffect {
                    name: spec.name.clone(),
                });
            }
            on_disable
        };

        Ok(Effect::new(
            spec.name.clone(),
            spec.icon.clone(),
            spec.duration,
            self.stacking,
            on_apply,
            on_next_round,
            on_disable,
        ))
    }
}

fn required_power(tag: ActionTag, spec: &ActionSpec) -> Result<f64, FactoryError> {
    spec.power.ok_or_else(|| FactoryError::MissingField {
        kind: tag.to_string(),
        field: "power",
    })
}

/// Positive whole number that fits in an `i32`.
fn whole_power(tag: ActionTag, power: f64) -> Result<i32, FactoryError> {
    if power.is_finite() && power > 0.0 && power.fract() == 0.0 && power <= f64::from(i32::MAX) {
        Ok(power as i32)
    } else {
        Err(FactoryError::InvalidPower {
            kind: tag.to_string(),
            power,
        })
    }
}

fn parse_school(name: &str) -> Result<DamageSchool, FactoryError> {
    DamageSchool::from_str(name).map_err(|_| FactoryError::UnknownSchool(name.to_owned()))
}

fn build_damage(spec: &ActionSpec) -> Result<DamageAction, FactoryError> {
    let tag = ActionTag::Damage;
    let mut magic = spec.magic;
    let source = match (spec.power, spec.amount) {
        (Some(power), _) => {
            if !(power.is_finite() && power > 0.0) {
                return Err(FactoryError::InvalidPower {
                    kind: tag.to_string(),
                    power,
                });
            }
            let modifiers = spec
                .offense
                .iter()
                .map(build_modifier)
                .collect::<Result<Vec<_>, _>>()?;
            DamageSource::Offense { power, modifiers }
        }
        (None, Some(amount)) => {
            if amount <= 0 {
                return Err(FactoryError::InvalidPower {
                    kind: tag.to_string(),
                    power: f64::from(amount),
                });
            }
            let school = spec.school.as_deref().ok_or_else(|| FactoryError::MissingField {
                kind: tag.to_string(),
                field: "school",
            })?;
            let school = parse_school(school)?;
            // Same rule as `DamageAction::fixed`.
            magic |= school.is_magical();
            DamageSource::Fixed { amount, school }
        }
        (None, None) => {
            return Err(FactoryError::MissingField {
                kind: tag.to_string(),
                field: "power",
            });
        }
    };

    Ok(DamageAction {
        source,
        can_miss: spec.can_miss,
        can_block: spec.can_block,
        can_crit: spec.can_crit,
        magic,
    })
}

/// Resolve a modifier template to the closed [`Modifier`] enum.
pub fn build_modifier(spec: &ModifierSpec) -> Result<Modifier, FactoryError> {
    let method = ModifierMethod::from_str(&spec.method)
        .map_err(|_| FactoryError::UnknownModifier(spec.method.clone()))?;
    let power = spec.power;
    let invalid = || FactoryError::InvalidPower {
        kind: method.to_string(),
        power,
    };

    let valid = if method.is_multiplier() {
        power.is_finite() && power > 0.0
    } else {
        power.is_finite() && power.fract() == 0.0 && power.abs() <= f64::from(i32::MAX)
    };
    if !valid {
        return Err(invalid());
    }
    let points = power as i32;

    let school = || -> Result<DamageSchool, FactoryError> {
        let name = spec.school.as_deref().ok_or_else(|| FactoryError::MissingField {
            kind: method.to_string(),
            field: "school",
        })?;
        parse_school(name)
    };

    let modifier = match method {
        ModifierMethod::MultiplierAttackSpeed => Modifier::MultiplyAttackSpeed(power),
        ModifierMethod::MultiplierDamage => Modifier::MultiplyDamage(power),
        ModifierMethod::MultiplierSchoolDamage => Modifier::MultiplySchoolDamage(school()?, power),
        ModifierMethod::AddSchoolDamage => Modifier::AddSchoolDamage(school()?, points),
        ModifierMethod::ConvertDamage => {
            let from = school()?;
            let to = spec.to.as_deref().ok_or_else(|| FactoryError::MissingField {
                kind: method.to_string(),
                field: "to",
            })?;
            if !(0..=100).contains(&points) {
                return Err(invalid());
            }
            Modifier::ConvertDamage {
                from,
                to: parse_school(to)?,
                percent: points,
            }
        }
        ModifierMethod::AddAccuracy => Modifier::AddAccuracy(points),
        ModifierMethod::AddMagicAccuracy => Modifier::AddMagicAccuracy(points),
        ModifierMethod::AddCriticalChance => Modifier::AddCriticalChance(points),
        ModifierMethod::AddCriticalMultiplier => Modifier::AddCriticalMultiplier(points),
        ModifierMethod::AddBlock => Modifier::AddBlock(points),
        ModifierMethod::AddDefense => Modifier::AddDefense(points),
        ModifierMethod::AddMagicDefense => Modifier::AddMagicDefense(points),
        ModifierMethod::AddResistance => Modifier::AddResistance(school()?, points),
    };
    Ok(modifier)
}

/// Undo actions for every buff and paralysis in `on_apply`, in reverse order.
fn inverse_of(on_apply: &ActionCollection) -> ActionCollection {
    on_apply
        .iter()
        .rev()
        .filter_map(|action| {
            let kind = match action.kind() {
                ActionKind::Buff(b) => ActionKind::Buff(BuffAction {
                    modifier: b.modifier,
                    polarity: b.polarity.inverse(),
                }),
                ActionKind::Paralysis(p) => ActionKind::Paralysis(ParalysisAction {
                    polarity: p.polarity.inverse(),
                }),
                _ => return None,
            };
            Some(Action::new(*action.scope(), action.target(), kind))
        })
        .collect()
}

/// Net state change of a collection: `(target, modifier, count)` for buffs and
/// `(target, count)` for paralysis. Applies count +1, reverts -1.
#[derive(Default)]
struct Ledger {
    buffs: Vec<(TargetPolicy, Modifier, i32)>,
    paralysis: Vec<(TargetPolicy, i32)>,
}

impl Ledger {
    fn record(&mut self, collection: &ActionCollection) {
        let step = |polarity: Polarity| match polarity {
            Polarity::Apply => 1,
            Polarity::Revert => -1,
        };
        for action in collection.iter() {
            let target = action.target();
            match action.kind() {
                ActionKind::Buff(b) => {
                    let delta = step(b.polarity);
                    match self
                        .buffs
                        .iter_mut()
                        .find(|(t, m, _)| *t == target && *m == b.modifier)
                    {
                        Some(entry) => entry.2 += delta,
                        None => self.buffs.push((target, b.modifier, delta)),
                    }
                }
                ActionKind::Paralysis(p) => {
                    let delta = step(p.polarity);
                    match self.paralysis.iter_mut().find(|(t, _)| *t == target) {
                        Some(entry) => entry.1 += delta,
                        None => self.paralysis.push((target, delta)),
                    }
                }
                _ => {}
            }
        }
    }

    fn is_zero(&self) -> bool {
        self.buffs.iter().all(|(_, _, n)| *n == 0) && self.paralysis.iter().all(|(_, n)| *n == 0)
    }
}

/// True if `on_disable` exactly undoes the buffs and paralysis of `on_apply`.
fn is_balanced(on_apply: &ActionCollection, on_disable: &ActionCollection) -> bool {
    let mut ledger = Ledger::default();
    ledger.record(on_apply);
    ledger.record(on_disable);
    ledger.is_zero()
}
