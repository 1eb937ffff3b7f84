//! Trigger resources: rage, concentration and cunning.
//!
//! Each resource is a counter bounded to `[0, MAX_RESOURCE]`. A full counter is
//! what arms resource-triggered abilities; using the ability resets it.

use crate::config::{CombatConfig, ResourceGain};

/// Trigger resource kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    Rage,
    Concentration,
    Cunning,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Rage,
        ResourceKind::Concentration,
        ResourceKind::Cunning,
    ];
}

/// A single bounded resource counter.
///
/// Serialized as a bare number; values above the maximum load as full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct ResourceMeter {
    current: u32,
}

impl ResourceMeter {
    pub const MAX: u32 = CombatConfig::MAX_RESOURCE;

    pub fn new(current: u32) -> Self {
        Self {
            current: current.min(Self::MAX),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Add `amount`, saturating at the maximum. Returns the amount actually gained.
    pub fn increase(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(Self::MAX);
        self.current - before
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn is_full(&self) -> bool {
        self.current >= Self::MAX
    }
}

impl From<u32> for ResourceMeter {
    fn from(current: u32) -> Self {
        Self::new(current)
    }
}

impl From<ResourceMeter> for u32 {
    fn from(meter: ResourceMeter) -> Self {
        meter.current
    }
}

/// The three trigger resources of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    pub rage: ResourceMeter,
    pub concentration: ResourceMeter,
    pub cunning: ResourceMeter,
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> &ResourceMeter {
        match kind {
            ResourceKind::Rage => &self.rage,
            ResourceKind::Concentration => &self.concentration,
            ResourceKind::Cunning => &self.cunning,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourceMeter {
        match kind {
            ResourceKind::Rage => &mut self.rage,
            ResourceKind::Concentration => &mut self.concentration,
            ResourceKind::Cunning => &mut self.cunning,
        }
    }

    /// Per-round refill.
    pub fn gain(&mut self, gain: &ResourceGain) {
        self.rage.increase(gain.rage);
        self.concentration.increase(gain.concentration);
        self.cunning.increase(gain.cunning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_is_bounded() {
        let mut meter = ResourceMeter::new(90);
        assert_eq!(meter.increase(25), 10);
        assert!(meter.is_full());
        assert_eq!(meter.increase(1), 0);
        meter.reset();
        assert_eq!(meter.current(), 0);
        assert_eq!(ResourceMeter::new(500).current(), ResourceMeter::MAX);
    }

    #[test]
    fn gain_refills_each_kind() {
        let mut resources = Resources::default();
        let gain = ResourceGain::default();
        for _ in 0..4 {
            resources.gain(&gain);
        }
        assert!(resources.get(ResourceKind::Rage).is_full());
        assert_eq!(resources.get(ResourceKind::Concentration).current(), 80);
        assert_eq!(resources.get(ResourceKind::Cunning).current(), 40);
    }
}
