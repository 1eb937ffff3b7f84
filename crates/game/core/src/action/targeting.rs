//! Target resolution policies.
//!
//! Resolution happens in two steps. [`TargetPolicy::pool`] lists the units a
//! policy looks at, read-only and without randomness; the action then filters
//! that pool by its own preconditions. [`TargetPolicy::select`] finally picks
//! one candidate with the dice for the random policies, or keeps all of them.

use crate::env::Dice;
use crate::state::{Battlefield, UnitId};

use super::ActionScope;

/// How an action selects its targets.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TargetPolicy {
    /// The scope subject.
    #[strum(serialize = "SELF")]
    Subject,
    RandomEnemy,
    AllEnemies,
    AllAllies,
    /// Allies below total life.
    WoundedAllies,
    /// A random enemy not yet carrying the effect.
    EffectEnemy,
    /// All allies not yet carrying the effect.
    EffectAllies,
}

impl TargetPolicy {
    /// Policies that only make sense for effect application.
    pub fn is_effect_policy(self) -> bool {
        matches!(self, TargetPolicy::EffectEnemy | TargetPolicy::EffectAllies)
    }

    /// Policies that resolve to a single randomly chosen unit.
    pub fn is_random(self) -> bool {
        matches!(self, TargetPolicy::RandomEnemy | TargetPolicy::EffectEnemy)
    }

    /// Units this policy looks at, in slot order.
    ///
    /// With `live_only` set, dead units are excluded.
    pub fn pool(self, scope: &ActionScope, field: &Battlefield, live_only: bool) -> Vec<UnitId> {
        let side = match self {
            TargetPolicy::Subject => {
                return field
                    .unit(scope.subject)
                    .filter(|u| !live_only || u.is_alive())
                    .map(|u| vec![u.id()])
                    .unwrap_or_default();
            }
            TargetPolicy::RandomEnemy | TargetPolicy::AllEnemies | TargetPolicy::EffectEnemy => {
                scope.enemies
            }
            TargetPolicy::AllAllies | TargetPolicy::WoundedAllies | TargetPolicy::EffectAllies => {
                scope.allies
            }
        };

        let Some(command) = field.command(side) else {
            return Vec::new();
        };
        command
            .units()
            .iter()
            .filter(|u| !live_only || u.is_alive())
            .filter(|u| self != TargetPolicy::WoundedAllies || u.is_wounded())
            .map(|u| u.id())
            .collect()
    }

    /// Pick the final targets from filtered candidates.
    pub fn select(self, mut candidates: Vec<UnitId>, dice: &mut Dice<'_>) -> Vec<UnitId> {
        if self.is_random() && candidates.len() > 1 {
            let index = dice.pick(candidates.len());
            vec![candidates.swap_remove(index)]
        } else if self.is_random() {
            candidates.truncate(1);
            candidates
        } else {
            candidates
        }
    }
}
