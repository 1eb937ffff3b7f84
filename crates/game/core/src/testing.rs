//! Shared fixtures for unit tests.

use crate::action::ActionScope;
use crate::config::CombatConfig;
use crate::env::StaticAbilityProvider;
use crate::state::{Battlefield, Command, CommandId, Unit, UnitId, UnitTemplate};

pub(crate) const ALLIES: CommandId = CommandId(0);
pub(crate) const ENEMIES: CommandId = CommandId(1);

pub(crate) fn ally(slot: u8) -> UnitId {
    UnitId::new(ALLIES, slot)
}

pub(crate) fn enemy(slot: u8) -> UnitId {
    UnitId::new(ENEMIES, slot)
}

fn command(id: CommandId, templates: &[UnitTemplate]) -> Command {
    let provider = StaticAbilityProvider::default();
    let mut command = Command::new(id, format!("command {}", id.0));
    for template in templates {
        let unit = Unit::from_template(command.next_unit_id(), template, &provider)
            .expect("fixture template is valid");
        command.push(unit).expect("fixture command has room");
    }
    command
}

/// Battlefield with ability-less units built from templates.
pub(crate) fn field_with_config(
    allies: &[UnitTemplate],
    enemies: &[UnitTemplate],
    config: CombatConfig,
) -> Battlefield {
    Battlefield::new(vec![command(ALLIES, allies), command(ENEMIES, enemies)], config)
        .expect("fixture battlefield is valid")
}

pub(crate) fn field(allies: &[UnitTemplate], enemies: &[UnitTemplate]) -> Battlefield {
    field_with_config(allies, enemies, CombatConfig::default())
}

pub(crate) fn scope(id: UnitId) -> ActionScope {
    let enemies = if id.command == ALLIES { ENEMIES } else { ALLIES };
    ActionScope::new(id, id.command, enemies)
}

pub(crate) fn grunt(name: &str) -> UnitTemplate {
    UnitTemplate::builder(name).total_life(100).build()
}
