use tracing::{debug, info};

use skirmish_content::{AbilityCatalog, ContentFactory, Roster, embedded};
use skirmish_core::{Battlefield, CombatConfig, Command, CommandId, Unit};

use super::Battle;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};

/// Builder for [`Battle`].
///
/// Content can be provided piece by piece, or loaded with
/// [`BattleBuilder::load_content`] according to the [`RuntimeConfig`].
pub struct BattleBuilder {
    config: RuntimeConfig,
    combat: Option<CombatConfig>,
    roster: Option<Roster>,
    catalog: Option<AbilityCatalog>,
}

impl BattleBuilder {
    pub(super) fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            combat: None,
            roster: None,
            catalog: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Combat balance. Defaults to [`CombatConfig::default`].
    pub fn combat(mut self, combat: CombatConfig) -> Self {
        self.combat = Some(combat);
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn abilities(mut self, catalog: AbilityCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Fill every piece not set explicitly from the configured data directory,
    /// or from the embedded data set when no directory is configured.
    pub fn load_content(mut self) -> Result<Self> {
        if let Some(dir) = self.config.data_dir.clone() {
            let factory = ContentFactory::new(dir);
            info!(data_dir = %factory.data_dir().display(), "loading content");
            if self.combat.is_none() {
                self.combat = Some(factory.load_config()?);
            }
            if self.catalog.is_none() {
                self.catalog = Some(factory.load_abilities()?);
            }
            if self.roster.is_none() {
                self.roster = Some(factory.load_roster(&self.config.roster)?);
            }
            return Ok(self);
        }

        debug!("loading embedded content");
        if self.combat.is_none() {
            self.combat = Some(embedded::config()?);
        }
        if self.catalog.is_none() {
            self.catalog = Some(embedded::abilities()?);
        }
        if self.roster.is_none() {
            let mut rosters = embedded::rosters()?;
            let name = self.config.roster.clone();
            let roster = rosters.remove(&name).ok_or_else(|| RuntimeError::UnknownRoster {
                name,
                available: rosters.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;
            self.roster = Some(roster);
        }
        Ok(self)
    }

    /// Spawn every unit of the roster and create the battle.
    ///
    /// # Errors
    ///
    /// Fails when the roster or catalog is missing, or when a unit cannot be
    /// spawned from its template.
    pub fn build(self) -> Result<Battle> {
        let roster = self.roster.ok_or(RuntimeError::MissingContent("a roster"))?;
        let catalog = self
            .catalog
            .ok_or(RuntimeError::MissingContent("an ability catalog"))?;
        let mut combat = self.combat.unwrap_or_default();
        if let Some(max_rounds) = self.config.max_rounds {
            combat = combat.with_max_rounds(max_rounds);
        }
        let seed = self.config.seed.unwrap_or_else(rand::random);

        let field = spawn(&roster, &catalog, combat)?;
        info!(
            roster = %roster.name,
            seed,
            max_rounds = field.config().max_rounds,
            units = field.unit_ids().len(),
            "battle created"
        );
        Ok(Battle::new(field, seed))
    }
}

fn spawn(roster: &Roster, catalog: &AbilityCatalog, combat: CombatConfig) -> Result<Battlefield> {
    let mut commands = Vec::with_capacity(roster.commands.len());
    for (index, side) in roster.commands.iter().enumerate() {
        let mut command = Command::new(CommandId(index as u8), side.name.clone());
        for template in &side.units {
            let unit = Unit::from_template(command.next_unit_id(), template, catalog)?;
            command.push(unit)?;
        }
        commands.push(command);
    }
    Ok(Battlefield::new(commands, combat)?)
}
