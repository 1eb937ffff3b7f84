//! Paralysis action.

use crate::action::{ActionContext, ActionError, Hit, HitOutcome};
use crate::state::{Unit, UnitId};

use super::Polarity;

/// Set or release the paralyzed flag. Paralyzed units skip their turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParalysisAction {
    pub polarity: Polarity,
}

impl ParalysisAction {
    pub fn admits(&self, unit: &Unit) -> bool {
        match self.polarity {
            Polarity::Apply => !unit.is_paralyzed(),
            Polarity::Revert => unit.is_paralyzed(),
        }
    }

    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        let unit = ctx
            .field
            .unit_mut(target)
            .ok_or(ActionError::UnitNotFound(target))?;
        let outcome = match self.polarity {
            Polarity::Apply => {
                unit.set_paralyzed(true);
                HitOutcome::Applied
            }
            Polarity::Revert => {
                unit.set_paralyzed(false);
                HitOutcome::Reverted
            }
        };
        Ok(Hit::new(target, 0, outcome))
    }
}
