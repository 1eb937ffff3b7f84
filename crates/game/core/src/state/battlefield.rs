//! Commands and the battlefield that owns them.

use crate::action::ActionScope;
use crate::config::CombatConfig;

use super::{CommandId, StateError, Unit, UnitId};

/// One side of the battle: an ordered list of units.
#[derive(Clone, Debug)]
pub struct Command {
    id: CommandId,
    name: String,
    units: Vec<Unit>,
}

impl Command {
    pub fn new(id: CommandId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            units: Vec::new(),
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id the next pushed unit must carry.
    pub fn next_unit_id(&self) -> UnitId {
        UnitId::new(self.id, self.units.len() as u8)
    }

    /// Append a unit. Its id must be [`Command::next_unit_id`].
    pub fn push(&mut self, unit: Unit) -> Result<UnitId, StateError> {
        if self.units.len() >= CombatConfig::MAX_UNITS_PER_COMMAND {
            return Err(StateError::CommandFull {
                command: self.id,
                max: CombatConfig::MAX_UNITS_PER_COMMAND,
            });
        }
        let expected = self.next_unit_id();
        if unit.id() != expected {
            return Err(StateError::UnexpectedUnitId {
                expected,
                got: unit.id(),
            });
        }
        self.units.push(unit);
        Ok(expected)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    /// A command with no living unit is defeated.
    pub fn is_defeated(&self) -> bool {
        !self.units.iter().any(Unit::is_alive)
    }
}

/// All commands in a battle plus the rules it is fought under.
#[derive(Clone, Debug)]
pub struct Battlefield {
    commands: Vec<Command>,
    config: CombatConfig,
}

impl Battlefield {
    /// # Errors
    ///
    /// Returns [`StateError::InvalidCommandCount`] unless there are at least two
    /// commands with distinct ids.
    pub fn new(commands: Vec<Command>, config: CombatConfig) -> Result<Self, StateError> {
        let distinct = commands
            .iter()
            .enumerate()
            .all(|(i, c)| commands[..i].iter().all(|o| o.id != c.id));
        if commands.len() < 2 || !distinct {
            return Err(StateError::InvalidCommandCount {
                count: commands.len(),
            });
        }
        Ok(Self { commands, config })
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command(&self, id: CommandId) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn command_mut(&mut self, id: CommandId) -> Option<&mut Command> {
        self.commands.iter_mut().find(|c| c.id == id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.command(id.command)?.units.get(id.slot as usize)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.command_mut(id.command)?
            .units
            .get_mut(id.slot as usize)
    }

    /// Like [`Battlefield::unit_mut`] but with a typed error.
    pub fn try_unit_mut(&mut self, id: UnitId) -> Result<&mut Unit, StateError> {
        self.unit_mut(id).ok_or(StateError::UnitNotFound(id))
    }

    /// The first other command. Two-sided battles have exactly one.
    pub fn opponent_of(&self, id: CommandId) -> Option<CommandId> {
        self.commands.iter().map(|c| c.id).find(|&c| c != id)
    }

    pub fn is_defeated(&self, id: CommandId) -> bool {
        self.command(id).is_none_or(Command::is_defeated)
    }

    /// The only command still standing, if exactly one is.
    pub fn winner(&self) -> Option<CommandId> {
        let mut standing = self.commands.iter().filter(|c| !c.is_defeated());
        match (standing.next(), standing.next()) {
            (Some(c), None) => Some(c.id),
            _ => None,
        }
    }

    /// Every unit id in command order, then slot order.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.commands
            .iter()
            .flat_map(|c| c.units.iter().map(Unit::id))
            .collect()
    }

    /// The action scope a unit acts under: itself as source and subject, its
    /// own command as allies and the opposing command as enemies.
    pub fn scope_for(&self, id: UnitId) -> Option<ActionScope> {
        self.unit(id)?;
        let enemies = self.opponent_of(id.command)?;
        Some(ActionScope::new(id, id.command, enemies))
    }
}
