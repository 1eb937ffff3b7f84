//! Events a battle reports to its observers.
//!
//! Events carry ids and structured execution records only; turning them into
//! text is up to the client.
use serde::{Deserialize, Serialize};

use skirmish_core::{CommandId, ExecutionRecord, UnitId};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory(CommandId),
    Draw,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },

    /// The unit was paralyzed when its turn came.
    TurnSkipped {
        unit: UnitId,
    },

    AbilityUsed {
        unit: UnitId,
        ability: String,
        level: u8,
        records: Vec<ExecutionRecord>,
    },

    Attacked {
        unit: UnitId,
        record: ExecutionRecord,
    },

    /// End-of-round effect processing on one unit produced records.
    EffectsAdvanced {
        unit: UnitId,
        records: Vec<ExecutionRecord>,
    },

    UnitDefeated {
        unit: UnitId,
    },

    BattleEnded {
        outcome: Outcome,
        rounds: u32,
    },
}

impl BattleEvent {
    /// Execution records carried by this event, if any.
    pub fn records(&self) -> &[ExecutionRecord] {
        match self {
            Self::AbilityUsed { records, .. } | Self::EffectsAdvanced { records, .. } => records,
            Self::Attacked { record, .. } => std::slice::from_ref(record),
            _ => &[],
        }
    }
}
