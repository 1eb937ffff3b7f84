//! Buff action: push or pop one stat modifier.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::state::{Unit, UnitId};
use crate::stats::Modifier;

use super::Polarity;

#[derive(Clone, Debug, PartialEq)]
pub struct BuffAction {
    pub modifier: Modifier,
    pub polarity: Polarity,
}

impl BuffAction {
    /// A revert only applies to units that carry the modifier.
    pub fn admits(&self, unit: &Unit) -> bool {
        match self.polarity {
            Polarity::Apply => true,
            Polarity::Revert => unit.stats.modifiers().contains(&self.modifier),
        }
    }

    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let unit = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?;
        match self.polarity {
            Polarity::Apply => {
                unit.stats.apply(self.modifier);
                Ok(Hit::new(target, 0, HitOutcome::Applied))
            }
            Polarity::Revert => {
                unit.stats.revert(&self.modifier)?;
                Ok(Hit::new(target, 0, HitOutcome::Reverted))
            }
        }
    }
}
