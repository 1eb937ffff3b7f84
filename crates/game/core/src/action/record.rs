//! Structured results of action execution.
//!
//! The engine never renders text. Callers turn records into log lines or UI.

use crate::state::UnitId;

/// Action variant tag. Also the template name of the action type.
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
pub enum ActionTag {
    Damage,
    Heal,
    Buff,
    Paralysis,
    ManaRestore,
    EffectApply,
}

/// What the renderer should say about a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    Attack,
    Heal,
    Buff,
    BuffRemoved,
    Paralyzed,
    Released,
    ResourceRestored,
    EffectApplied,
}

/// Per-target outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HitOutcome {
    Hit,
    Critical,
    Dodged,
    Blocked,
    Applied,
    Refreshed,
    Reverted,
}

/// Effect of one action on one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub target: UnitId,
    /// Damage dealt, life restored or resource gained. Zero for state changes.
    pub power: i32,
    pub outcome: HitOutcome,
}

impl Hit {
    pub fn new(target: UnitId, power: i32, outcome: HitOutcome) -> Self {
        Self {
            target,
            power,
            outcome,
        }
    }
}

/// Result of handling one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionRecord {
    pub tag: ActionTag,
    pub source: UnitId,
    /// `None` for silent execution (effect expiry).
    pub message: Option<MessageKind>,
    pub hits: Vec<Hit>,
    /// Records of actions triggered by this one, e.g. an effect's on-apply actions.
    pub follow_ups: Vec<ExecutionRecord>,
}

impl ExecutionRecord {
    pub fn new(tag: ActionTag, source: UnitId, message: Option<MessageKind>) -> Self {
        Self {
            tag,
            source,
            message,
            hits: Vec::new(),
            follow_ups: Vec::new(),
        }
    }

    /// Sum of hit powers.
    pub fn total_power(&self) -> i32 {
        self.hits.iter().map(|h| h.power).sum()
    }

    /// Strip messages from this record and every follow-up.
    pub fn silence(&mut self) {
        self.message = None;
        for follow_up in &mut self.follow_ups {
            follow_up.silence();
        }
    }

    /// This record and all follow-ups, depth first.
    pub fn flatten(&self) -> Vec<&ExecutionRecord> {
        let mut out = vec![self];
        for follow_up in &self.follow_ups {
            out.extend(follow_up.flatten());
        }
        out
    }
}
