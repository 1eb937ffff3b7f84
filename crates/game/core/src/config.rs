/// Combat configuration constants and tunable parameters.
///
/// Numeric balance values are opaque configuration: the engine only reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Hit chance parameters for accuracy vs defense rolls.
    pub hit_chance: HitChanceParams,

    /// Resource points every living unit gains at the start of its turn.
    pub resource_gain: ResourceGain,

    /// Rounds after which an undecided battle ends in a draw.
    pub max_rounds: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound of every trigger resource (rage, concentration, cunning).
    pub const MAX_RESOURCE: u32 = 100;
    /// Maximum number of effects a single unit can carry at once.
    pub const MAX_EFFECTS: usize = 16;
    /// Maximum number of abilities per unit.
    pub const MAX_ABILITIES: usize = 8;
    /// Maximum number of units per command.
    pub const MAX_UNITS_PER_COMMAND: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    pub fn new() -> Self {
        Self {
            hit_chance: HitChanceParams::default(),
            resource_gain: ResourceGain::default(),
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit chance formula parameters.
///
/// `chance = clamp(base + accuracy - defense, min, max)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitChanceParams {
    pub base: i32,
    pub min: i32,
    pub max: i32,
}

impl Default for HitChanceParams {
    fn default() -> Self {
        Self {
            base: 80,
            min: 5,
            max: 95,
        }
    }
}

/// Per-turn resource refill amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceGain {
    pub rage: u32,
    pub concentration: u32,
    pub cunning: u32,
}

impl Default for ResourceGain {
    fn default() -> Self {
        Self {
            rage: 25,
            concentration: 20,
            cunning: 10,
        }
    }
}
