//! Round-based battle loop.
//!
//! Every round, each command acts in order and each living unit in slot order:
//! it refills its trigger resources, re-evaluates its abilities and then uses
//! the first feasible ability or falls back to a basic attack. Paralyzed units
//! lose their turn. After all turns, every unit's effects advance exactly once
//! and the battle checks whether a command has been wiped out.
mod builder;

pub use builder::BattleBuilder;

use tracing::{debug, info, trace, warn};

use skirmish_core::effect::advance_round;
use skirmish_core::{Action, Battlefield, Command, Dice, PcgRng, StateError, UnitId};

use crate::error::{Result, RuntimeError};
use crate::events::{BattleEvent, Outcome};

/// Everything a finished battle produced.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleReport {
    pub seed: u64,
    pub rounds: u32,
    pub outcome: Outcome,
    pub events: Vec<BattleEvent>,
}

/// A battle in progress.
pub struct Battle {
    field: Battlefield,
    rng: PcgRng,
    seed: u64,
    round: u32,
    fallen: Vec<UnitId>,
    outcome: Option<Outcome>,
}

impl Battle {
    pub fn builder() -> BattleBuilder {
        BattleBuilder::new()
    }

    fn new(field: Battlefield, seed: u64) -> Self {
        Self {
            field,
            rng: PcgRng,
            seed,
            round: 0,
            fallen: Vec::new(),
            outcome: None,
        }
    }

    pub fn field(&self) -> &Battlefield {
        &self.field
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play one full round and return what happened.
    ///
    /// The last event of the deciding round is [`BattleEvent::BattleEnded`].
    ///
    /// # Errors
    ///
    /// [`RuntimeError::BattleFinished`] once an outcome is known; core errors
    /// if the rules reject an action the loop considered feasible.
    pub fn play_round(&mut self) -> Result<Vec<BattleEvent>> {
        if self.outcome.is_some() {
            return Err(RuntimeError::BattleFinished { rounds: self.round });
        }

        self.round += 1;
        let round = self.round;
        info!(round, "round started");
        let mut events = vec![BattleEvent::RoundStarted { round }];
        let mut dice = Dice::new(&self.rng, self.seed, u64::from(round));

        for id in self.field.unit_ids() {
            if self.field.winner().is_some() {
                break;
            }
            take_turn(&mut self.field, id, &mut dice, &mut events)?;
            collect_fallen(&self.field, &mut self.fallen, &mut events);
        }

        for id in self.field.unit_ids() {
            let records = advance_round(&mut self.field, id, &mut dice)?;
            if !records.is_empty() {
                debug!(unit = %id, records = records.len(), "effects advanced");
                events.push(BattleEvent::EffectsAdvanced { unit: id, records });
            }
            collect_fallen(&self.field, &mut self.fallen, &mut events);
        }
        debug!(round, rolls = dice.rolls(), "round finished");

        if let Some(outcome) = self.decide() {
            info!(?outcome, rounds = round, "battle ended");
            self.outcome = Some(outcome);
            events.push(BattleEvent::BattleEnded {
                outcome,
                rounds: round,
            });
        }
        Ok(events)
    }

    /// Play rounds until a command is defeated or the round limit is reached.
    pub fn run(&mut self) -> Result<BattleReport> {
        let mut events = Vec::new();
        loop {
            events.extend(self.play_round()?);
            if let Some(outcome) = self.outcome {
                return Ok(BattleReport {
                    seed: self.seed,
                    rounds: self.round,
                    outcome,
                    events,
                });
            }
        }
    }

    fn decide(&self) -> Option<Outcome> {
        if let Some(winner) = self.field.winner() {
            return Some(Outcome::Victory(winner));
        }
        let wiped_out = self.field.commands().iter().all(Command::is_defeated);
        if wiped_out || self.round >= self.field.config().max_rounds {
            return Some(Outcome::Draw);
        }
        None
    }
}

fn take_turn(
    field: &mut Battlefield,
    id: UnitId,
    dice: &mut Dice<'_>,
    events: &mut Vec<BattleEvent>,
) -> Result<()> {
    let gain = field.config().resource_gain;
    let unit = field.try_unit_mut(id)?;
    if !unit.is_alive() {
        return Ok(());
    }
    unit.resources.gain(&gain);
    unit.update_abilities();
    trace!(unit = %id, resources = ?unit.resources, "turn started");
    if unit.is_paralyzed() {
        debug!(unit = %id, "paralyzed, turn skipped");
        events.push(BattleEvent::TurnSkipped { unit: id });
        return Ok(());
    }

    let scope = field.scope_for(id).ok_or(StateError::UnitNotFound(id))?;
    let unit = field.unit(id).ok_or(StateError::UnitNotFound(id))?;
    let chosen = unit
        .abilities()
        .iter()
        .position(|ability| ability.peek_feasible(scope, field));

    if let Some(index) = chosen {
        let ability = &unit.abilities()[index];
        let (name, level) = (ability.name().to_owned(), ability.level());
        let mut actions = ability.materialize(scope)?;
        let planned = actions.len();
        let records = actions.execute(field, dice)?;
        if records.len() < planned {
            warn!(
                unit = %id,
                ability = %name,
                skipped = planned - records.len(),
                "actions became infeasible during execution"
            );
        }
        field.try_unit_mut(id)?.consume_ability(index)?;
        debug!(unit = %id, ability = %name, level, "ability used");
        events.push(BattleEvent::AbilityUsed {
            unit: id,
            ability: name,
            level,
            records,
        });
        return Ok(());
    }

    let mut attack = Action::basic_attack(scope);
    if !attack.can_be_used(field) {
        warn!(unit = %id, "no target for basic attack");
        return Ok(());
    }
    let record = attack.handle(field, dice)?;
    debug!(unit = %id, damage = record.total_power(), "basic attack");
    events.push(BattleEvent::Attacked { unit: id, record });
    Ok(())
}

fn collect_fallen(field: &Battlefield, fallen: &mut Vec<UnitId>, events: &mut Vec<BattleEvent>) {
    for unit in field.commands().iter().flat_map(Command::units) {
        if !unit.is_alive() && !fallen.contains(&unit.id()) {
            info!(unit = %unit.id(), name = unit.name(), "unit defeated");
            fallen.push(unit.id());
            events.push(BattleEvent::UnitDefeated { unit: unit.id() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_content::{AbilityCatalog, CommandRoster, Roster};
    use skirmish_core::{
        AbilityDefinition, ActionSpec, CombatConfig, CommandId, DamageSchool, HitChanceParams,
        ModifierSpec, ResourceKind, Trigger, UnitTemplate,
    };

    const HERO: UnitId = UnitId::new(CommandId(0), 0);
    const MONSTER: UnitId = UnitId::new(CommandId(1), 0);

    fn roster(hero: UnitTemplate, monster: UnitTemplate) -> Roster {
        Roster {
            name: "test".to_owned(),
            commands: vec![
                CommandRoster {
                    name: "Heroes".to_owned(),
                    units: vec![hero],
                },
                CommandRoster {
                    name: "Monsters".to_owned(),
                    units: vec![monster],
                },
            ],
        }
    }

    fn sure_hits() -> CombatConfig {
        CombatConfig {
            hit_chance: HitChanceParams {
                base: 100,
                min: 100,
                max: 100,
            },
            ..CombatConfig::default()
        }
    }

    fn battle(roster: Roster, catalog: AbilityCatalog, combat: CombatConfig) -> Battle {
        Battle::builder()
            .config(crate::RuntimeConfig::default().with_seed(7))
            .combat(combat)
            .roster(roster)
            .abilities(catalog)
            .build()
            .unwrap()
    }

    #[test]
    fn harmless_units_draw_at_the_round_limit() {
        let mut battle = battle(
            roster(
                UnitTemplate::builder("Pacifist").build(),
                UnitTemplate::builder("Statue").build(),
            ),
            AbilityCatalog::new(),
            CombatConfig::default().with_max_rounds(3),
        );

        let report = battle.run().unwrap();
        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.rounds, 3);
        assert_eq!(
            report.events.last(),
            Some(&BattleEvent::BattleEnded {
                outcome: Outcome::Draw,
                rounds: 3
            })
        );
        assert!(matches!(
            battle.play_round(),
            Err(RuntimeError::BattleFinished { rounds: 3 })
        ));
    }

    #[test]
    fn defeated_command_ends_the_battle() {
        let mut battle = battle(
            roster(
                UnitTemplate::builder("Knight")
                    .damage(DamageSchool::Physical, 50)
                    .build(),
                UnitTemplate::builder("Goblin").total_life(10).build(),
            ),
            AbilityCatalog::new(),
            sure_hits(),
        );

        let events = battle.play_round().unwrap();
        assert!(events.contains(&BattleEvent::UnitDefeated { unit: MONSTER }));
        assert_eq!(battle.outcome(), Some(Outcome::Victory(CommandId(0))));
        // The goblin never got a turn.
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, BattleEvent::Attacked { unit, .. } if *unit == MONSTER))
        );
    }

    #[test]
    fn ready_ability_replaces_basic_attack_and_resets_resource() {
        let catalog: AbilityCatalog = [AbilityDefinition::new(
            "Focus",
            1,
            Trigger::resource(ResourceKind::Rage),
        )
        .with_action(ActionSpec::buff(
            "SELF",
            ModifierSpec::new("addAccuracy", 10.0),
        ))]
        .into_iter()
        .collect();
        let mut battle = battle(
            roster(
                UnitTemplate::builder("Monk")
                    .resource(ResourceKind::Rage, 100)
                    .ability("Focus", 1)
                    .build(),
                UnitTemplate::builder("Dummy").build(),
            ),
            catalog,
            CombatConfig::default(),
        );

        let events = battle.play_round().unwrap();
        let used = events.iter().find_map(|e| match e {
            BattleEvent::AbilityUsed {
                unit,
                ability,
                level,
                ..
            } if *unit == HERO => Some((ability.clone(), *level)),
            _ => None,
        });
        assert_eq!(used, Some(("Focus".to_owned(), 1)));
        let monk = battle.field().unit(HERO).unwrap();
        assert_eq!(monk.resources.get(ResourceKind::Rage).current(), 0);
    }

    #[test]
    fn paralyzed_units_lose_their_turn() {
        let catalog: AbilityCatalog =
            [AbilityDefinition::new("Freeze", 1, Trigger::default())
                .with_action(ActionSpec::paralysis("ALL_ENEMIES"))]
            .into_iter()
            .collect();
        let mut battle = battle(
            roster(
                UnitTemplate::builder("Frost Mage").ability("Freeze", 1).build(),
                UnitTemplate::builder("Troll").build(),
            ),
            catalog,
            CombatConfig::default(),
        );

        let events = battle.play_round().unwrap();
        assert!(events.contains(&BattleEvent::TurnSkipped { unit: MONSTER }));
        assert!(battle.field().unit(MONSTER).unwrap().is_paralyzed());
    }

    #[test]
    fn building_without_content_fails() {
        let err = Battle::builder().build().err().unwrap();
        assert!(matches!(err, RuntimeError::MissingContent(_)));
    }
}
