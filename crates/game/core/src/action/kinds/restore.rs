//! Resource restoration.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::state::UnitId;
use crate::stats::ResourceKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoreAction {
    pub resource: ResourceKind,
    pub power: u32,
}

impl RestoreAction {
    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let unit = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?;
        let gained = unit.resources.get_mut(self.resource).increase(self.power);
        Ok(Hit::new(target, gained as i32, HitOutcome::Applied))
    }
}
