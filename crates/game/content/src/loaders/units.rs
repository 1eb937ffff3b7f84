//! Unit template and roster loaders.
//!
//! Units are described once in `units.ron`; rosters in `rosters.ron` refer to
//! them by name and line them up into the two opposing commands.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use skirmish_core::UnitTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for unit templates.
///
/// RON format: `Vec<UnitTemplate>` with unique names.
pub struct UnitLoader;

impl UnitLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitTemplate>> {
        let templates: Vec<UnitTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit templates RON: {}", e))?;

        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.name == template.name) {
                anyhow::bail!("Duplicate unit template '{}'", template.name);
            }
        }
        Ok(templates)
    }
}

/// Roster entry as written in RON: unit names per command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterRon {
    commands: Vec<CommandRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandRon {
    name: String,
    units: Vec<String>,
}

/// One side of a roster with its templates resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRoster {
    pub name: String,
    pub units: Vec<UnitTemplate>,
}

/// A named battle setup: the commands in turn order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub name: String,
    pub commands: Vec<CommandRoster>,
}

/// Loader for command rosters.
///
/// RON format: `{ "roster name": (commands: [(name: "...", units: ["..."])]) }`
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path, templates: &[UnitTemplate]) -> LoadResult<BTreeMap<String, Roster>> {
        let content = read_file(path)?;
        Self::parse(&content, templates).with_context(|| format!("in {}", path.display()))
    }

    /// Parse rosters and resolve every unit name against `templates`.
    pub fn parse(content: &str, templates: &[UnitTemplate]) -> LoadResult<BTreeMap<String, Roster>> {
        let raw: BTreeMap<String, RosterRon> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        raw.into_iter()
            .map(|(name, roster)| {
                let resolved = resolve(&name, roster, templates)?;
                Ok((name, resolved))
            })
            .collect()
    }
}

fn resolve(name: &str, roster: RosterRon, templates: &[UnitTemplate]) -> LoadResult<Roster> {
    if roster.commands.len() != 2 {
        anyhow::bail!(
            "Roster '{}' must have exactly 2 commands, found {}",
            name,
            roster.commands.len()
        );
    }

    let mut commands = Vec::with_capacity(roster.commands.len());
    for command in roster.commands {
        if command.units.is_empty() {
            anyhow::bail!("Roster '{}': command '{}' has no units", name, command.name);
        }
        let units = command
            .units
            .iter()
            .map(|unit| {
                templates
                    .iter()
                    .find(|t| &t.name == unit)
                    .cloned()
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Roster '{}': command '{}' references unknown unit '{}'",
                            name,
                            command.name,
                            unit
                        )
                    })
            })
            .collect::<LoadResult<Vec<_>>>()?;
        commands.push(CommandRoster {
            name: command.name,
            units,
        });
    }

    Ok(Roster {
        name: name.to_owned(),
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::{DamageSchool, ResourceKind};

    const UNITS: &str = r#"#![enable(implicit_some)]
        [
            (
                name: "Berserker",
                total_life: 120,
                life: 30,
                offense: (damage: (physical: 35), critical_chance: 10),
                defense: (block: 5, resistances: (fire: -10)),
                resources: (rage: 60),
                abilities: [(name: "Rage", level: 1)],
            ),
            (name: "Goblin", total_life: 40),
        ]
    "#;

    #[test]
    fn parses_templates_with_defaults() {
        let units = UnitLoader::parse(UNITS).unwrap();
        assert_eq!(units.len(), 2);

        let berserker = &units[0];
        assert_eq!(berserker.life, Some(30));
        assert_eq!(berserker.offense.damage.get(DamageSchool::Physical), 35);
        assert_eq!(berserker.offense.critical_multiplier, 150);
        assert_eq!(berserker.defense.resistances.get(DamageSchool::Fire), -10);
        assert_eq!(berserker.resources.get(ResourceKind::Rage).current(), 60);
        assert_eq!(berserker.abilities[0].level, 1);

        let goblin = &units[1];
        assert_eq!(goblin.life, None);
        assert!(goblin.abilities.is_empty());
    }

    #[test]
    fn duplicate_unit_names_are_rejected() {
        let err = UnitLoader::parse(r#"[(name: "A", total_life: 1), (name: "A", total_life: 2)]"#)
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate unit template 'A'"));
    }

    #[test]
    fn rosters_resolve_unit_names() {
        let units = UnitLoader::parse(UNITS).unwrap();
        let rosters = RosterLoader::parse(
            r#"{
                "ambush": (commands: [
                    (name: "Heroes", units: ["Berserker"]),
                    (name: "Raiders", units: ["Goblin", "Goblin"]),
                ]),
            }"#,
            &units,
        )
        .unwrap();

        let ambush = &rosters["ambush"];
        assert_eq!(ambush.commands[0].name, "Heroes");
        assert_eq!(ambush.commands[1].units.len(), 2);
        assert_eq!(ambush.commands[1].units[0].name, "Goblin");
    }

    #[test]
    fn roster_errors_name_the_culprit() {
        let units = UnitLoader::parse(UNITS).unwrap();
        let unknown = RosterLoader::parse(
            r#"{"x": (commands: [(name: "A", units: ["Dragon"]), (name: "B", units: ["Goblin"])])}"#,
            &units,
        )
        .unwrap_err();
        assert!(unknown.to_string().contains("unknown unit 'Dragon'"));

        let lonely = RosterLoader::parse(r#"{"y": (commands: [(name: "A", units: ["Goblin"])])}"#, &units)
            .unwrap_err();
        assert!(lonely.to_string().contains("exactly 2 commands"));
    }
}
