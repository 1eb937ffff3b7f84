//! Action variants and the dispatcher enum.
//!
//! Each variant lives in its own module with an `apply(ctx, target)` that
//! handles a single resolved target. [`ActionKind`] dispatches to them and
//! answers the per-unit preconditions used by target filtering.

mod buff;
mod damage;
mod effect_apply;
mod heal;
mod paralysis;
mod restore;

pub use buff::BuffAction;
pub use damage::{DamageAction, DamageSource};
pub use effect_apply::EffectApplyAction;
pub use heal::HealAction;
pub use paralysis::ParalysisAction;
pub use restore::RestoreAction;

use crate::state::{Unit, UnitId};

use super::{ActionContext, ActionError, ActionTag, Hit, MessageKind, TargetPolicy};

/// Whether an action establishes or undoes a state change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    #[default]
    Apply,
    Revert,
}

impl Polarity {
    pub fn inverse(self) -> Self {
        match self {
            Polarity::Apply => Polarity::Revert,
            Polarity::Revert => Polarity::Apply,
        }
    }
}

/// Variant payload of an [`super::Action`].
#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind {
    Damage(DamageAction),
    Heal(HealAction),
    Buff(BuffAction),
    Paralysis(ParalysisAction),
    ManaRestore(RestoreAction),
    EffectApply(EffectApplyAction),
}

impl ActionKind {
    pub fn tag(&self) -> ActionTag {
        match self {
            ActionKind::Damage(_) => ActionTag::Damage,
            ActionKind::Heal(_) => ActionTag::Heal,
            ActionKind::Buff(_) => ActionTag::Buff,
            ActionKind::Paralysis(_) => ActionTag::Paralysis,
            ActionKind::ManaRestore(_) => ActionTag::ManaRestore,
            ActionKind::EffectApply(_) => ActionTag::EffectApply,
        }
    }

    pub fn message(&self) -> MessageKind {
        match self {
            ActionKind::Damage(_) => MessageKind::Attack,
            ActionKind::Heal(_) => MessageKind::Heal,
            ActionKind::Buff(b) => match b.polarity {
                Polarity::Apply => MessageKind::Buff,
                Polarity::Revert => MessageKind::BuffRemoved,
            },
            ActionKind::Paralysis(p) => match p.polarity {
                Polarity::Apply => MessageKind::Paralyzed,
                Polarity::Revert => MessageKind::Released,
            },
            ActionKind::ManaRestore(_) => MessageKind::ResourceRestored,
            ActionKind::EffectApply(_) => MessageKind::EffectApplied,
        }
    }

    /// Reverts must reach dead holders too, so their modifiers come off.
    pub fn requires_live_target(&self) -> bool {
        !matches!(
            self,
            ActionKind::Buff(BuffAction {
                polarity: Polarity::Revert,
                ..
            }) | ActionKind::Paralysis(ParalysisAction {
                polarity: Polarity::Revert
            })
        )
    }

    /// Per-unit precondition applied on top of the target policy.
    pub fn admits(&self, unit: &Unit, policy: TargetPolicy) -> bool {
        match self {
            ActionKind::Damage(_) | ActionKind::Heal(_) | ActionKind::ManaRestore(_) => true,
            ActionKind::Buff(b) => b.admits(unit),
            ActionKind::Paralysis(p) => p.admits(unit),
            ActionKind::EffectApply(e) => e.admits(unit, policy.is_effect_policy()),
        }
    }

    pub fn apply(&self, ctx: &mut ActionContext, target: UnitId) -> Result<Hit, ActionError> {
        match self {
            ActionKind::Damage(a) => a.apply(ctx, target),
            ActionKind::Heal(a) => a.apply(ctx, target),
            ActionKind::Buff(a) => a.apply(ctx, target),
            ActionKind::Paralysis(a) => a.apply(ctx, target),
            ActionKind::ManaRestore(a) => a.apply(ctx, target),
            ActionKind::EffectApply(a) => a.apply(ctx, target),
        }
    }

    /// Post-execution cleanup.
    pub fn finish(&mut self) {
        if let ActionKind::EffectApply(a) = self {
            a.consume();
        }
    }
}
