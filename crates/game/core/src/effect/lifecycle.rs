//! Attaching effects and advancing them by one round.

use crate::action::{ActionError, ActionScope, ExecutionRecord};
use crate::env::Dice;
use crate::state::{Battlefield, UnitId};

use super::Effect;

/// Attach a pending effect to `holder` and fire its `on_apply` actions.
///
/// The effect's collections are rebound so that `SELF` means the holder and
/// the caster's stats drive any damage. Buffs and paralysis that could not
/// run (e.g. the holder was already paralyzed) lose their undo.
pub fn attach(
    field: &mut Battlefield,
    holder: UnitId,
    mut effect: Effect,
    dice: &mut Dice<'_>,
) -> Result<Vec<ExecutionRecord>, ActionError> {
    let enemies = field
        .opponent_of(holder.command)
        .ok_or(ActionError::UnitNotFound(holder))?;
    let caster = effect.caster().unwrap_or(holder);
    effect.bind(ActionScope::new(caster, holder.command, enemies).with_subject(holder));
    effect.activate();

    let name = effect.name().to_owned();
    let mut on_apply = effect.on_apply().clone();
    field
        .unit_mut(holder)
        .ok_or(ActionError::UnitNotFound(holder))?
        .effects
        .insert(effect)?;
    let records = on_apply.execute(field, dice)?;

    if let Some(effect) = field.unit_mut(holder).and_then(|u| u.effects.get_mut(&name)) {
        effect.forget_skipped(&on_apply);
    }
    Ok(records)
}

/// Advance every effect on `holder` by one round.
///
/// For each effect, in attach order: `on_next_round` fires while duration
/// remains, then the duration is decremented. An effect reaching zero is
/// removed and its `on_disable` actions fire silently.
pub fn advance_round(
    field: &mut Battlefield,
    holder: UnitId,
    dice: &mut Dice<'_>,
) -> Result<Vec<ExecutionRecord>, ActionError> {
    let names = field
        .unit(holder)
        .ok_or(ActionError::UnitNotFound(holder))?
        .effects
        .names();

    let mut records = Vec::new();
    for name in names {
        let Some(effect) = field.unit(holder).and_then(|u| u.effects.get(&name)) else {
            continue;
        };
        if effect.get_duration() > 0 {
            let mut on_next_round = effect.on_next_round().clone();
            records.extend(on_next_round.execute(field, dice)?);
        }

        let unit = field
            .unit_mut(holder)
            .ok_or(ActionError::UnitNotFound(holder))?;
        let expired = match unit.effects.get_mut(&name) {
            Some(effect) => effect.tick()?,
            None => continue,
        };
        if !expired {
            continue;
        }
        if let Some(effect) = unit.effects.remove(&name) {
            let mut on_disable = effect.on_disable().clone();
            records.extend(on_disable.execute_silent(field, dice)?);
        }
    }
    Ok(records)
}
