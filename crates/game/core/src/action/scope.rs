use crate::state::{CommandId, UnitId};

/// Who an action acts for and against.
///
/// `source` is the unit whose stats drive the action, `subject` is what the
/// `SELF` policy resolves to. They differ for effect actions, where the
/// caster is the source and the effect holder is the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionScope {
    pub source: UnitId,
    pub subject: UnitId,
    pub allies: CommandId,
    pub enemies: CommandId,
}

impl ActionScope {
    /// Scope of a unit acting on its own behalf.
    pub fn new(source: UnitId, allies: CommandId, enemies: CommandId) -> Self {
        Self {
            source,
            subject: source,
            allies,
            enemies,
        }
    }

    pub fn with_subject(mut self, subject: UnitId) -> Self {
        self.subject = subject;
        self
    }
}
