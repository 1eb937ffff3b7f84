//! Effect application.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::effect::{self, Effect, StackingPolicy};
use crate::state::{Unit, UnitId};

/// Attach a clone of the prototype effect to each target.
///
/// The prototype is moved out when the action is handled, so a handled action
/// can never attach again. Each target receives its own copy at full duration.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectApplyAction {
    pub effect: Option<Box<Effect>>,
    pub stacking: StackingPolicy,
}

impl EffectApplyAction {
    pub fn new(effect: Effect, stacking: StackingPolicy) -> Self {
        Self {
            effect: Some(Box::new(effect)),
            stacking,
        }
    }

    pub fn prototype(&self) -> Option<&Effect> {
        self.effect.as_deref()
    }

    /// A unit that does not carry the effect accepts it while it has room.
    /// A carrier is never selected by an exclusive (`EFFECT_*`) policy, and
    /// under plain policies only when stacking is refresh.
    pub fn admits(&self, unit: &Unit, exclusive: bool) -> bool {
        let Some(prototype) = self.prototype() else {
            return false;
        };
        if unit.effects.contains(prototype.name()) {
            !exclusive && self.stacking == StackingPolicy::Refresh
        } else {
            !unit.effects.is_full()
        }
    }

    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let Some(prototype) = self.prototype() else {
            return Err(ActionError::NotApplicable {
                tag: crate::action::ActionTag::EffectApply,
            });
        };

        let unit = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?;
        if let Some(existing) = unit.effects.get_mut(prototype.name()) {
            existing.refresh();
            return Ok(Hit::new(target, 0, HitOutcome::Refreshed));
        }

        let fresh = prototype.instantiate(ctx.scope.source, target);
        let records = effect::attach(ctx.field, target, fresh, ctx.dice)?;
        ctx.follow_ups.extend(records);
        Ok(Hit::new(target, 0, HitOutcome::Applied))
    }

    /// Drop the prototype after the action ran.
    pub fn consume(&mut self) {
        self.effect = None;
    }
}
