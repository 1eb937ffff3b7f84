//! Executable combat actions.
//!
//! An [`Action`] is built by the [`crate::factory::ActionFactory`] from a
//! declarative template. It is asked whether it can be used (read-only, never
//! fails) and then handled exactly once, producing an [`ExecutionRecord`].
//!
//! # Lifecycle
//!
//! ```text
//! built → can_be_used? → handle → handled
//! ```
//!
//! Handling twice, or handling while `can_be_used` is false, is an
//! [`ActionError`] of internal severity.

mod collection;
mod context;
mod error;
pub mod kinds;
mod record;
mod scope;
mod targeting;

pub use collection::ActionCollection;
pub use context::ActionContext;
pub use error::ActionError;
pub use kinds::{
    ActionKind, BuffAction, DamageAction, DamageSource, EffectApplyAction, HealAction,
    ParalysisAction, Polarity, RestoreAction,
};
pub use record::{ActionTag, ExecutionRecord, Hit, HitOutcome, MessageKind};
pub use scope::ActionScope;
pub use targeting::TargetPolicy;

use crate::env::Dice;
use crate::state::{Battlefield, UnitId};

/// One executable action with its scope, target policy and execution state.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    scope: ActionScope,
    target: TargetPolicy,
    kind: ActionKind,
    factual_power: Option<i32>,
    handled: bool,
}

impl Action {
    pub fn new(scope: ActionScope, target: TargetPolicy, kind: ActionKind) -> Self {
        Self {
            scope,
            target,
            kind,
            factual_power: None,
            handled: false,
        }
    }

    /// Plain weapon attack on a random living enemy.
    pub fn basic_attack(scope: ActionScope) -> Self {
        Self::new(
            scope,
            TargetPolicy::RandomEnemy,
            ActionKind::Damage(DamageAction::offense(1.0)),
        )
    }

    pub fn scope(&self) -> &ActionScope {
        &self.scope
    }

    pub fn target(&self) -> TargetPolicy {
        self.target
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn tag(&self) -> ActionTag {
        self.kind.tag()
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Total power actually delivered, known once handled.
    pub fn factual_power(&self) -> Option<i32> {
        self.factual_power
    }

    /// True if `self` is the undo of `other`: same target policy, the same
    /// buff modifier or paralysis, opposite polarity.
    pub fn undoes(&self, other: &Action) -> bool {
        if self.target != other.target {
            return false;
        }
        match (&self.kind, &other.kind) {
            (ActionKind::Buff(a), ActionKind::Buff(b)) => {
                a.modifier == b.modifier && a.polarity == b.polarity.inverse()
            }
            (ActionKind::Paralysis(a), ActionKind::Paralysis(b)) => {
                a.polarity == b.polarity.inverse()
            }
            _ => false,
        }
    }

    /// Rebind to a new scope. Execution state is untouched.
    pub fn rebind(&mut self, scope: ActionScope) {
        self.scope = scope;
    }

    /// Units that pass both the policy and the variant preconditions.
    fn candidates(&self, field: &Battlefield) -> Vec<UnitId> {
        self.target
            .pool(&self.scope, field, self.kind.requires_live_target())
            .into_iter()
            .filter(|&id| field.unit(id).is_some_and(|u| self.kind.admits(u, self.target)))
            .collect()
    }

    /// Whether `handle` would succeed now. Read-only.
    pub fn can_be_used(&self, field: &Battlefield) -> bool {
        !self.handled && !self.candidates(field).is_empty()
    }

    /// Execute the action once.
    ///
    /// # Errors
    ///
    /// - [`ActionError::AlreadyHandled`] on a second call
    /// - [`ActionError::NotApplicable`] when [`Action::can_be_used`] is false
    /// - errors of the variant itself (missing units, inactive modifiers, full
    ///   effect collections)
    pub fn handle(
        &mut self,
        field: &mut Battlefield,
        dice: &mut Dice<'_>,
    ) -> Result<ExecutionRecord, ActionError> {
        let tag = self.tag();
        if self.handled {
            return Err(ActionError::AlreadyHandled { tag });
        }
        let candidates = self.candidates(field);
        if candidates.is_empty() {
            return Err(ActionError::NotApplicable { tag });
        }

        self.handled = true;
        let targets = self.target.select(candidates, dice);
        let mut record = ExecutionRecord::new(tag, self.scope.source, Some(self.kind.message()));

        let mut ctx = ActionContext::new(field, dice, self.scope);
        for target in targets {
            let hit = self.kind.apply(&mut ctx, target)?;
            record.hits.push(hit);
        }
        record.follow_ups = ctx.follow_ups;

        self.kind.finish();
        self.factual_power = Some(record.total_power());
        Ok(record)
    }
}
