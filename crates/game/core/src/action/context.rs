use crate::env::Dice;
use crate::state::Battlefield;

use super::{ActionScope, ExecutionRecord};

/// Everything an action variant needs while it applies to one target.
pub struct ActionContext<'a, 'r> {
    pub field: &'a mut Battlefield,
    pub dice: &'a mut Dice<'r>,
    pub scope: ActionScope,
    /// Records of nested executions (effect on-apply actions).
    pub follow_ups: Vec<ExecutionRecord>,
}

impl<'a, 'r> ActionContext<'a, 'r> {
    pub fn new(field: &'a mut Battlefield, dice: &'a mut Dice<'r>, scope: ActionScope) -> Self {
        Self {
            field,
            dice,
            scope,
            follow_ups: Vec::new(),
        }
    }
}
