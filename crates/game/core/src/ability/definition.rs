//! Ability templates as stored in the catalog.

use bitflags::bitflags;

use crate::factory::ActionSpec;
use crate::state::UnitVitals;
use crate::stats::ResourceKind;

bitflags! {
    /// Behaviour switches of an ability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AbilityFlags: u8 {
        /// Usable at most once per battle.
        const DISPOSABLE      = 1 << 0;
        /// Re-applying an active effect resets its duration instead of failing.
        const REFRESH_EFFECTS = 1 << 1;
    }
}

/// Readiness condition. Every condition that is set must hold.
///
/// A trigger with no condition is always ready.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Trigger {
    /// Resource that must be full.
    pub resource: Option<ResourceKind>,
    /// Life must be strictly below this fraction of total life.
    pub life_below: Option<f64>,
}

impl Trigger {
    pub fn resource(kind: ResourceKind) -> Self {
        Self {
            resource: Some(kind),
            life_below: None,
        }
    }

    pub fn and_life_below(mut self, fraction: f64) -> Self {
        self.life_below = Some(fraction);
        self
    }

    pub fn is_met(&self, vitals: &UnitVitals) -> bool {
        let resource_ok = self
            .resource
            .is_none_or(|kind| vitals.resources.get(kind).is_full());
        let life_ok = self
            .life_below
            .is_none_or(|fraction| f64::from(vitals.life) < fraction * f64::from(vitals.total_life));
        resource_ok && life_ok
    }
}

/// One level of an ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AbilityDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger: Trigger,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: AbilityFlags,
    pub actions: Vec<ActionSpec>,
}

impl AbilityDefinition {
    pub fn new(name: impl Into<String>, level: u8, trigger: Trigger) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            level,
            trigger,
            flags: AbilityFlags::empty(),
            actions: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: AbilityFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_action(mut self, action: ActionSpec) -> Self {
        self.actions.push(action);
        self
    }

    pub fn is_disposable(&self) -> bool {
        self.flags.contains(AbilityFlags::DISPOSABLE)
    }
}
