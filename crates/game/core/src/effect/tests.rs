use super::*;
use crate::action::{ActionCollection, ActionKind, ActionTag, HitOutcome};
use crate::config::CombatConfig;
use crate::env::{Dice, PcgRng};
use crate::factory::{ActionFactory, ActionSpec, EffectSpec, ModifierSpec};
use crate::testing::{ally, enemy, field, grunt, scope};

fn bare(name: &str, duration: u32) -> Effect {
    Effect::new(
        name,
        "",
        duration,
        StackingPolicy::Reject,
        ActionCollection::default(),
        ActionCollection::default(),
        ActionCollection::default(),
    )
}

/// Prototype built by the factory for a caster in the ally command.
fn prototype(spec: EffectSpec) -> Effect {
    let collection = ActionFactory::new(scope(ally(0)))
        .build(&[ActionSpec::effect_apply("SELF", spec)])
        .unwrap();
    match collection.iter().next().map(|a| a.kind()) {
        Some(ActionKind::EffectApply(apply)) => apply.prototype().unwrap().clone(),
        other => panic!("expected effect apply, got {other:?}"),
    }
}

#[test]
fn tick_counts_down_and_then_underflows() {
    let mut effect = bare("Haste", 2);
    assert_eq!(effect.tick(), Ok(false));
    assert_eq!(effect.get_duration(), 1);
    assert_eq!(effect.tick(), Ok(true));
    assert!(effect.is_expired());
    assert_eq!(
        effect.tick(),
        Err(EffectError::DurationUnderflow {
            name: "Haste".to_owned()
        })
    );
}

#[test]
fn refresh_restores_base_duration() {
    let mut effect = bare("Shield", 4);
    effect.tick().unwrap();
    effect.tick().unwrap();
    effect.refresh();
    assert_eq!(effect.get_duration(), 4);
    assert_eq!(effect.base_duration(), 4);
}

#[test]
fn instantiate_yields_pending_full_copies() {
    let mut worn = bare("Curse", 3);
    worn.tick().unwrap();
    let copy = worn.instantiate(ally(0), enemy(1));
    assert_eq!(copy.state(), EffectState::Pending);
    assert_eq!(copy.get_duration(), 3);
    assert_eq!(copy.caster(), Some(ally(0)));
    assert_eq!(copy.holder(), Some(enemy(1)));
}

#[test]
fn collection_rejects_duplicates_and_overflow() {
    let mut effects = EffectCollection::new();
    effects.insert(bare("Burn", 2)).unwrap();
    assert_eq!(
        effects.insert(bare("Burn", 5)),
        Err(EffectError::AlreadyActive {
            name: "Burn".to_owned()
        })
    );

    for i in 1..CombatConfig::MAX_EFFECTS {
        effects.insert(bare(&format!("Mark {i}"), 1)).unwrap();
    }
    assert!(effects.is_full());
    assert_eq!(
        effects.insert(bare("One too many", 1)),
        Err(EffectError::CollectionFull {
            max: CombatConfig::MAX_EFFECTS
        })
    );
}

#[test]
fn removal_preserves_attach_order() {
    let mut effects = EffectCollection::new();
    for name in ["A", "B", "C"] {
        effects.insert(bare(name, 1)).unwrap();
    }
    assert_eq!(effects.remove("B").map(|e| e.name().to_owned()), Some("B".to_owned()));
    assert_eq!(effects.names(), vec!["A".to_owned(), "C".to_owned()]);
    assert!(effects.remove("B").is_none());
}

#[test]
fn attach_runs_on_apply_against_the_holder() {
    let mut field = field(&[grunt("Knight")], &[grunt("Foe")]);
    let rng = PcgRng;
    let mut dice = Dice::new(&rng, 1, 1);
    let guard = prototype(
        EffectSpec::new("Guard", 2).on_apply(ActionSpec::buff("SELF", ModifierSpec::new("addBlock", 30.0))),
    );

    let records = attach(&mut field, ally(0), guard.instantiate(ally(0), ally(0)), &mut dice).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tag, ActionTag::Buff);
    assert_eq!(records[0].hits[0].target, ally(0));

    let knight = field.unit(ally(0)).unwrap();
    assert_eq!(knight.stats.block(), 30);
    assert_eq!(knight.effects.get("Guard").unwrap().state(), EffectState::Active);
}

#[test]
fn expiry_reverts_silently_and_removes_first() {
    let mut field = field(&[grunt("Knight")], &[grunt("Foe")]);
    let rng = PcgRng;
    let guard = prototype(
        EffectSpec::new("Guard", 2).on_apply(ActionSpec::buff("SELF", ModifierSpec::new("addBlock", 30.0))),
    );
    let mut dice = Dice::new(&rng, 1, 1);
    attach(&mut field, ally(0), guard.instantiate(ally(0), ally(0)), &mut dice).unwrap();

    let mut dice = Dice::new(&rng, 1, 2);
    assert!(advance_round(&mut field, ally(0), &mut dice).unwrap().is_empty());
    assert_eq!(field.unit(ally(0)).unwrap().stats.block(), 30);

    let mut dice = Dice::new(&rng, 1, 3);
    let records = advance_round(&mut field, ally(0), &mut dice).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, None);
    assert_eq!(records[0].hits[0].outcome, HitOutcome::Reverted);

    let knight = field.unit(ally(0)).unwrap();
    assert!(knight.effects.is_empty());
    assert_eq!(knight.stats.block(), 0);
    assert!(knight.stats.modifiers().is_empty());
}

#[test]
fn periodic_damage_fires_once_per_round_of_duration() {
    let mut field = field(&[grunt("Hexer")], &[grunt("Victim")]);
    let rng = PcgRng;
    let burn = prototype(
        EffectSpec::new("Burn", 3).on_next_round(ActionSpec::fixed_damage("SELF", 7, "fire")),
    );
    let mut dice = Dice::new(&rng, 4, 1);
    attach(&mut field, enemy(0), burn.instantiate(ally(0), enemy(0)), &mut dice).unwrap();
    assert_eq!(field.unit(enemy(0)).unwrap().life(), 100);

    let mut total = 0;
    for round in 2..=5 {
        let mut dice = Dice::new(&rng, 4, round);
        let records = advance_round(&mut field, enemy(0), &mut dice).unwrap();
        total += records.iter().map(|r| r.total_power()).sum::<i32>();
    }
    assert_eq!(total, 21);
    assert_eq!(field.unit(enemy(0)).unwrap().life(), 79);
    assert!(field.unit(enemy(0)).unwrap().effects.is_empty());
}

#[test]
fn effects_advance_in_attach_order() {
    let mut field = field(&[grunt("Hexer")], &[grunt("Victim")]);
    let rng = PcgRng;
    let mut dice = Dice::new(&rng, 6, 1);
    for (name, school) in [("Frost", "water"), ("Rot", "death")] {
        let effect = prototype(
            EffectSpec::new(name, 1).on_next_round(ActionSpec::fixed_damage("SELF", 1, school)),
        );
        attach(&mut field, enemy(0), effect.instantiate(ally(0), enemy(0)), &mut dice).unwrap();
    }

    let mut dice = Dice::new(&rng, 6, 2);
    let records = advance_round(&mut field, enemy(0), &mut dice).unwrap();
    assert_eq!(records.len(), 2);
    let victim = field.unit(enemy(0)).unwrap();
    assert_eq!(victim.life(), 98);
    assert!(victim.effects.is_empty());
}

#[test]
fn derived_disable_releases_paralysis_of_dead_holder() {
    let mut field = field(&[grunt("Hexer")], &[grunt("Victim")]);
    let rng = PcgRng;
    let stun = prototype(EffectSpec::new("Stun", 1).on_apply(ActionSpec::paralysis("SELF")));
    let mut dice = Dice::new(&rng, 8, 1);
    attach(&mut field, enemy(0), stun.instantiate(ally(0), enemy(0)), &mut dice).unwrap();
    assert!(field.unit(enemy(0)).unwrap().is_paralyzed());

    field.unit_mut(enemy(0)).unwrap().take_damage(100);
    let mut dice = Dice::new(&rng, 8, 2);
    advance_round(&mut field, enemy(0), &mut dice).unwrap();
    let victim = field.unit(enemy(0)).unwrap();
    assert!(!victim.is_paralyzed());
    assert!(victim.effects.is_empty());
}

#[test]
fn expiry_keeps_paralysis_that_was_already_there() {
    let mut field = field(&[grunt("Hexer")], &[grunt("Victim")]);
    field.unit_mut(enemy(0)).unwrap().set_paralyzed(true);
    let rng = PcgRng;
    let stun = prototype(EffectSpec::new("Stun", 1).on_apply(ActionSpec::paralysis("SELF")));
    let mut dice = Dice::new(&rng, 9, 1);
    let records = attach(&mut field, enemy(0), stun.instantiate(ally(0), enemy(0)), &mut dice).unwrap();
    assert!(records.is_empty());
    assert!(field.unit(enemy(0)).unwrap().effects.get("Stun").unwrap().on_disable().is_empty());

    let mut dice = Dice::new(&rng, 9, 2);
    assert!(advance_round(&mut field, enemy(0), &mut dice).unwrap().is_empty());
    let victim = field.unit(enemy(0)).unwrap();
    assert!(victim.is_paralyzed());
    assert!(victim.effects.is_empty());
}

#[test]
fn expiry_only_reverts_the_buffs_that_ran() {
    let mut field = field(&[grunt("Knight")], &[grunt("Foe")]);
    field.unit_mut(ally(0)).unwrap().set_paralyzed(true);
    let rng = PcgRng;
    let trance = prototype(
        EffectSpec::new("Trance", 1)
            .on_apply(ActionSpec::buff("SELF", ModifierSpec::new("addBlock", 20.0)))
            .on_apply(ActionSpec::paralysis("SELF")),
    );
    let mut dice = Dice::new(&rng, 10, 1);
    let records = attach(&mut field, ally(0), trance.instantiate(ally(0), ally(0)), &mut dice).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        field.unit(ally(0)).unwrap().effects.get("Trance").unwrap().on_disable().len(),
        1
    );

    let mut dice = Dice::new(&rng, 10, 2);
    let records = advance_round(&mut field, ally(0), &mut dice).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tag, ActionTag::Buff);
    let knight = field.unit(ally(0)).unwrap();
    assert_eq!(knight.stats.block(), 0);
    assert!(knight.is_paralyzed());
}
