//! Ordered action collections.

use crate::env::Dice;
use crate::state::Battlefield;

use super::{Action, ActionError, ActionScope, ExecutionRecord};

/// An ordered sequence of actions. Order is execution order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionCollection {
    actions: Vec<Action>,
}

impl ActionCollection {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Remove and return the first action matching `predicate`.
    pub fn take_first(&mut self, predicate: impl Fn(&Action) -> bool) -> Option<Action> {
        let index = self.actions.iter().position(predicate)?;
        Some(self.actions.remove(index))
    }

    /// True if the collection is non-empty and every action can be used now.
    pub fn can_be_used(&self, field: &Battlefield) -> bool {
        !self.actions.is_empty() && self.actions.iter().all(|a| a.can_be_used(field))
    }

    /// Handle every usable action in order. Actions whose preconditions no
    /// longer hold (e.g. all enemies died) are skipped.
    pub fn execute(
        &mut self,
        field: &mut Battlefield,
        dice: &mut Dice<'_>,
    ) -> Result<Vec<ExecutionRecord>, ActionError> {
        let mut records = Vec::with_capacity(self.actions.len());
        for action in &mut self.actions {
            if action.can_be_used(field) {
                records.push(action.handle(field, dice)?);
            }
        }
        Ok(records)
    }

    /// Like [`ActionCollection::execute`] but records carry no message.
    pub fn execute_silent(
        &mut self,
        field: &mut Battlefield,
        dice: &mut Dice<'_>,
    ) -> Result<Vec<ExecutionRecord>, ActionError> {
        let mut records = self.execute(field, dice)?;
        for record in &mut records {
            record.silence();
        }
        Ok(records)
    }

    /// Rebind every action to `scope`.
    pub fn rebind(&mut self, scope: ActionScope) {
        for action in &mut self.actions {
            action.rebind(scope);
        }
    }
}

impl FromIterator<Action> for ActionCollection {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
