//! Text rendering of battle events.
//!
//! Two-tier message system:
//! 1. Event line: "Berserker#0 uses Rage (level 1)"
//! 2. Hit lines: one indented line per affected unit

use skirmish_core::{Battlefield, ExecutionRecord, Hit, HitOutcome, MessageKind, UnitId};
use skirmish_runtime::{BattleEvent, Outcome};

/// Formats one event as zero or more lines.
pub fn format_event(event: &BattleEvent, field: &Battlefield) -> Vec<String> {
    let mut lines = Vec::new();
    match event {
        BattleEvent::RoundStarted { round } => lines.push(format!("=== Round {round} ===")),
        BattleEvent::TurnSkipped { unit } => {
            lines.push(format!("{} is paralyzed and loses the turn", unit_name(field, *unit)));
        }
        BattleEvent::AbilityUsed {
            unit,
            ability,
            level,
            ..
        } => lines.push(format!(
            "{} uses {} (level {})",
            unit_name(field, *unit),
            ability,
            level
        )),
        BattleEvent::Attacked { unit, .. } => {
            lines.push(format!("{} attacks", unit_name(field, *unit)));
        }
        BattleEvent::EffectsAdvanced { .. } => {}
        BattleEvent::UnitDefeated { unit } => {
            lines.push(format!("{} falls", unit_name(field, *unit)));
        }
        BattleEvent::BattleEnded { outcome, rounds } => lines.push(match outcome {
            Outcome::Victory(command) => format!(
                "{} wins after {} rounds",
                field.command(*command).map_or("?", |c| c.name()),
                rounds
            ),
            Outcome::Draw => format!("Draw after {rounds} rounds"),
        }),
    }

    for record in event.records() {
        lines.extend(
            format_record(record, field)
                .into_iter()
                .map(|line| format!("  {line}")),
        );
    }
    lines
}

/// Formats the hits of a record and its follow-ups. Silent records are skipped.
pub fn format_record(record: &ExecutionRecord, field: &Battlefield) -> Vec<String> {
    record
        .flatten()
        .into_iter()
        .filter_map(|r| r.message.map(|message| (message, &r.hits)))
        .flat_map(|(message, hits)| {
            hits.iter()
                .filter_map(move |hit| format_hit(message, hit, field))
        })
        .collect()
}

fn format_hit(message: MessageKind, hit: &Hit, field: &Battlefield) -> Option<String> {
    let target = unit_name(field, hit.target);
    let line = match (message, hit.outcome) {
        (_, HitOutcome::Dodged) => format!("{target} dodges"),
        (_, HitOutcome::Blocked) => format!("{target} blocks"),
        (MessageKind::Attack, HitOutcome::Critical) => {
            format!("{target} takes {} damage (critical!)", hit.power)
        }
        (MessageKind::Attack, _) if hit.power > 0 => format!("{target} takes {} damage", hit.power),
        (MessageKind::Attack, _) => format!("{target} takes no damage"),
        (MessageKind::Heal, _) if hit.power > 0 => format!("{target} heals {} HP", hit.power),
        (MessageKind::Heal, _) => return None,
        (MessageKind::Buff, _) => format!("{target} is strengthened"),
        (MessageKind::BuffRemoved, _) => format!("{target} loses a blessing"),
        (MessageKind::Paralyzed, _) => format!("{target} is paralyzed"),
        (MessageKind::Released, _) => format!("{target} can move again"),
        (MessageKind::ResourceRestored, _) if hit.power > 0 => {
            format!("{target} restores {} resource points", hit.power)
        }
        (MessageKind::ResourceRestored, _) => return None,
        (MessageKind::EffectApplied, HitOutcome::Refreshed) => {
            format!("{target}'s effect is renewed")
        }
        (MessageKind::EffectApplied, _) => format!("{target} is affected"),
    };
    Some(line)
}

/// Display name of a unit: template name and slot.
pub fn unit_name(field: &Battlefield, id: UnitId) -> String {
    match field.unit(id) {
        Some(unit) => format!("{}#{}", unit.name(), id.slot),
        None => id.to_string(),
    }
}

/// One line per command listing its units and their life.
pub fn format_lineup(field: &Battlefield) -> Vec<String> {
    field
        .commands()
        .iter()
        .map(|command| {
            let units = command
                .units()
                .iter()
                .map(|u| format!("{} ({}/{})", unit_name(field, u.id()), u.life(), u.total_life()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", command.name(), units)
        })
        .collect()
}
