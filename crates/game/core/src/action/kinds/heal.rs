//! Heal action.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::state::UnitId;

/// Restore life, capped at total life.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealAction {
    pub power: i32,
}

impl HealAction {
    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let unit = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?;
        let restored = unit.heal(self.power);
        Ok(Hit::new(target, restored, HitOutcome::Applied))
    }
}
