/// Identifier of one side of the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandId(pub u8);

impl core::fmt::Display for CommandId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "command#{}", self.0)
    }
}

/// Identifier of a unit: its command and its slot within that command.
///
/// Ids are plain values; units never hold references to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId {
    pub command: CommandId,
    pub slot: u8,
}

impl UnitId {
    pub const fn new(command: CommandId, slot: u8) -> Self {
        Self { command, slot }
    }
}

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unit#{}.{}", self.command.0, self.slot)
    }
}
