//! Timed effects.

use crate::action::{ActionCollection, ActionScope};
use crate::state::UnitId;

use super::EffectError;

/// Lifecycle state of an effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectState {
    /// Built but not attached.
    #[default]
    Pending,
    /// Attached and ticking.
    Active,
    /// Duration ran out.
    Expired,
}

/// What happens when an effect is applied to a unit that already carries one
/// with the same name.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StackingPolicy {
    /// The new application is refused.
    #[default]
    Reject,
    /// The existing effect's remaining duration is reset.
    Refresh,
}

/// A named, timed bundle of actions attached to a unit.
///
/// `on_apply` fires once on attach, `on_next_round` every round while
/// duration remains, `on_disable` once on expiry and undoes `on_apply`.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    name: String,
    icon: String,
    base_duration: u32,
    remaining: u32,
    state: EffectState,
    stacking: StackingPolicy,
    caster: Option<UnitId>,
    holder: Option<UnitId>,
    on_apply: ActionCollection,
    on_next_round: ActionCollection,
    on_disable: ActionCollection,
}

impl Effect {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        duration: u32,
        stacking: StackingPolicy,
        on_apply: ActionCollection,
        on_next_round: ActionCollection,
        on_disable: ActionCollection,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            base_duration: duration,
            remaining: duration,
            state: EffectState::Pending,
            stacking,
            caster: None,
            holder: None,
            on_apply,
            on_next_round,
            on_disable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn base_duration(&self) -> u32 {
        self.base_duration
    }

    /// Remaining rounds.
    pub fn get_duration(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> EffectState {
        self.state
    }

    pub fn stacking(&self) -> StackingPolicy {
        self.stacking
    }

    pub fn caster(&self) -> Option<UnitId> {
        self.caster
    }

    pub fn holder(&self) -> Option<UnitId> {
        self.holder
    }

    pub fn on_apply(&self) -> &ActionCollection {
        &self.on_apply
    }

    pub fn on_next_round(&self) -> &ActionCollection {
        &self.on_next_round
    }

    pub fn on_disable(&self) -> &ActionCollection {
        &self.on_disable
    }

    /// Fresh pending copy for one holder, at full duration.
    pub fn instantiate(&self, caster: UnitId, holder: UnitId) -> Self {
        let mut copy = self.clone();
        copy.remaining = copy.base_duration;
        copy.state = EffectState::Pending;
        copy.caster = Some(caster);
        copy.holder = Some(holder);
        copy
    }

    /// Rebind all three collections to `scope`.
    pub fn bind(&mut self, scope: ActionScope) {
        self.on_apply.rebind(scope);
        self.on_next_round.rebind(scope);
        self.on_disable.rebind(scope);
    }

    /// Drop the undo of every action in `ran` that was skipped, so that
    /// `on_disable` only reverts what `on_apply` actually changed.
    pub(crate) fn forget_skipped(&mut self, ran: &ActionCollection) {
        for skipped in ran.iter().filter(|a| !a.is_handled()) {
            self.on_disable.take_first(|undo| undo.undoes(skipped));
        }
    }

    pub(crate) fn activate(&mut self) {
        self.state = EffectState::Active;
    }

    /// Decrement remaining duration. Returns true when the effect just expired.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::DurationUnderflow`] if the duration is already zero.
    pub fn tick(&mut self) -> Result<bool, EffectError> {
        if self.remaining == 0 {
            return Err(EffectError::DurationUnderflow {
                name: self.name.clone(),
            });
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.state = EffectState::Expired;
        }
        Ok(self.remaining == 0)
    }

    /// Reset remaining duration to the base duration.
    pub fn refresh(&mut self) {
        self.remaining = self.base_duration;
        if self.state == EffectState::Expired {
            self.state = EffectState::Active;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.state == EffectState::Expired
    }
}
