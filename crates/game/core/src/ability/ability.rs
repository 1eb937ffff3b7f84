//! Ability readiness state machine.

use std::cell::OnceCell;

use crate::action::{ActionCollection, ActionScope};
use crate::effect::StackingPolicy;
use crate::factory::{ActionFactory, FactoryError};
use crate::state::{Battlefield, CommandId, UnitId, UnitVitals};

use super::{AbilityDefinition, AbilityError, AbilityFlags};

/// Observable state of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbilityState {
    NotReady,
    Ready,
    /// Used since the last update. Terminal for disposable abilities.
    Used,
}

/// A unit's ability: an immutable definition plus readiness state.
///
/// `materialize` always builds a fresh action collection, so effects it
/// carries start at full duration. `peek_feasible` builds once per scope and
/// keeps the result for read-only checks.
#[derive(Clone, Debug)]
pub struct Ability {
    definition: AbilityDefinition,
    ready: bool,
    used: bool,
    probe: OnceCell<(ActionScope, ActionCollection)>,
}

impl Ability {
    /// Validate the definition by building its actions once.
    ///
    /// # Errors
    ///
    /// [`AbilityError::Construction`] if any action template is malformed.
    pub fn new(definition: AbilityDefinition) -> Result<Self, AbilityError> {
        let placeholder =
            ActionScope::new(UnitId::new(CommandId(0), 0), CommandId(0), CommandId(1));
        build(&definition, placeholder).map_err(|source| AbilityError::Construction {
            name: definition.name.clone(),
            source,
        })?;
        Ok(Self {
            definition,
            ready: false,
            used: false,
            probe: OnceCell::new(),
        })
    }

    pub fn definition(&self) -> &AbilityDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn level(&self) -> u8 {
        self.definition.level
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Disposable and already used: never ready again.
    pub fn is_exhausted(&self) -> bool {
        self.used && self.definition.is_disposable()
    }

    pub fn state(&self) -> AbilityState {
        if self.ready {
            AbilityState::Ready
        } else if self.used {
            AbilityState::Used
        } else {
            AbilityState::NotReady
        }
    }

    /// Recompute readiness from the owner's vitals.
    pub fn update(&mut self, vitals: &UnitVitals) {
        self.ready = !self.is_exhausted() && self.definition.trigger.is_met(vitals);
    }

    /// Consume readiness.
    ///
    /// # Errors
    ///
    /// [`AbilityError::NotReady`] unless the ability is ready.
    pub fn usage(&mut self) -> Result<(), AbilityError> {
        if !self.ready {
            return Err(AbilityError::NotReady {
                name: self.definition.name.clone(),
            });
        }
        self.ready = false;
        self.used = true;
        Ok(())
    }

    /// Fresh executable actions for `scope`.
    pub fn materialize(&self, scope: ActionScope) -> Result<ActionCollection, AbilityError> {
        build(&self.definition, scope).map_err(|source| AbilityError::Construction {
            name: self.definition.name.clone(),
            source,
        })
    }

    /// Whether using the ability now would do something. Read-only.
    ///
    /// True iff the ability is ready, not exhausted, and every action it would
    /// run can be used on `field`.
    pub fn peek_feasible(&self, scope: ActionScope, field: &Battlefield) -> bool {
        if !self.ready || self.is_exhausted() {
            return false;
        }
        if let Some((cached_scope, collection)) = self.probe.get() {
            if *cached_scope == scope {
                return collection.can_be_used(field);
            }
            return build(&self.definition, scope).is_ok_and(|c| c.can_be_used(field));
        }
        match build(&self.definition, scope) {
            Ok(collection) => {
                let feasible = collection.can_be_used(field);
                let _ = self.probe.set((scope, collection));
                feasible
            }
            Err(_) => false,
        }
    }
}

fn build(
    definition: &AbilityDefinition,
    scope: ActionScope,
) -> Result<ActionCollection, FactoryError> {
    let stacking = if definition.flags.contains(AbilityFlags::REFRESH_EFFECTS) {
        StackingPolicy::Refresh
    } else {
        StackingPolicy::Reject
    };
    ActionFactory::new(scope)
        .with_stacking(stacking)
        .build(&definition.actions)
}
