use super::*;
use crate::action::HitOutcome;
use crate::effect::{self, StackingPolicy};
use crate::env::{Dice, PcgRng};
use crate::error::{ErrorSeverity, GameError};
use crate::factory::{ActionSpec, EffectSpec, FactoryError, ModifierSpec};
use crate::state::UnitVitals;
use crate::stats::{ResourceKind, Resources};
use crate::testing::{ally, enemy, field, grunt, scope};

fn vitals(life: i32, rage: u32) -> UnitVitals {
    let mut resources = Resources::default();
    resources.rage.increase(rage);
    UnitVitals {
        life,
        total_life: 100,
        resources,
    }
}

fn fury() -> AbilityDefinition {
    AbilityDefinition::new("Fury", 1, Trigger::resource(ResourceKind::Rage).and_life_below(0.3))
        .with_action(ActionSpec::effect_apply(
            "SELF",
            EffectSpec::new("Fury", 3).on_apply(ActionSpec::buff(
                "SELF",
                ModifierSpec::new("multiplierDamage", 2.0),
            )),
        ))
}

fn hex(flags: AbilityFlags) -> AbilityDefinition {
    AbilityDefinition::new("Hex", 1, Trigger::default())
        .with_flags(flags)
        .with_action(ActionSpec::effect_apply(
            "RANDOM_ENEMY",
            EffectSpec::new("Hex", 2).on_next_round(ActionSpec::fixed_damage("SELF", 3, "death")),
        ))
}

#[test]
fn trigger_needs_every_condition() {
    let trigger = Trigger::resource(ResourceKind::Rage).and_life_below(0.3);
    assert!(trigger.is_met(&vitals(29, 100)));
    assert!(!trigger.is_met(&vitals(30, 100)));
    assert!(!trigger.is_met(&vitals(10, 99)));
    assert!(Trigger::default().is_met(&vitals(100, 0)));
}

#[test]
fn usage_requires_readiness() {
    let mut ability = Ability::new(fury()).unwrap();
    assert_eq!(ability.state(), AbilityState::NotReady);
    let err = ability.usage().unwrap_err();
    assert_eq!(
        err,
        AbilityError::NotReady {
            name: "Fury".to_owned()
        }
    );
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);

    ability.update(&vitals(20, 100));
    assert_eq!(ability.state(), AbilityState::Ready);
    ability.usage().unwrap();
    assert_eq!(ability.state(), AbilityState::Used);

    ability.update(&vitals(20, 100));
    assert!(ability.is_ready());
}

#[test]
fn disposable_ability_stays_used() {
    let mut ability = Ability::new(fury().with_flags(AbilityFlags::DISPOSABLE)).unwrap();
    ability.update(&vitals(20, 100));
    ability.usage().unwrap();
    assert!(ability.is_exhausted());

    ability.update(&vitals(20, 100));
    assert!(!ability.is_ready());
    assert_eq!(ability.state(), AbilityState::Used);
    assert!(!ability.peek_feasible(scope(ally(0)), &field(&[grunt("A")], &[grunt("B")])));
}

#[test]
fn malformed_template_fails_construction() {
    let definition = AbilityDefinition::new("Broken", 2, Trigger::default())
        .with_action(ActionSpec::new("teleport", "SELF"));
    let err = Ability::new(definition).unwrap_err();
    assert_eq!(
        err,
        AbilityError::Construction {
            name: "Broken".to_owned(),
            source: FactoryError::UnknownActionType("teleport".to_owned()),
        }
    );
    assert_eq!(err.error_code(), "ABILITY_CONSTRUCTION");
}

#[test]
fn materialized_effects_always_start_at_full_duration() {
    let mut field = field(&[grunt("Berserker")], &[grunt("Foe")]);
    let ability = Ability::new(fury()).unwrap();
    let rng = PcgRng;

    let mut first = ability.materialize(scope(ally(0))).unwrap();
    let mut dice = Dice::new(&rng, 1, 1);
    first.execute(&mut field, &mut dice).unwrap();
    for round in 2..5 {
        let mut dice = Dice::new(&rng, 1, round);
        effect::advance_round(&mut field, ally(0), &mut dice).unwrap();
    }
    assert!(field.unit(ally(0)).unwrap().effects.is_empty());

    let mut second = ability.materialize(scope(ally(0))).unwrap();
    let mut dice = Dice::new(&rng, 1, 6);
    second.execute(&mut field, &mut dice).unwrap();
    let fury = field.unit(ally(0)).unwrap().effects.get("Fury").unwrap();
    assert_eq!(fury.get_duration(), 3);
}

#[test]
fn peek_feasible_tracks_the_field() {
    let mut field = field(&[grunt("Warlock")], &[grunt("Foe")]);
    let mut ability = Ability::new(hex(AbilityFlags::empty())).unwrap();
    let rng = PcgRng;
    let here = scope(ally(0));

    assert!(!ability.peek_feasible(here, &field));
    ability.update(&vitals(100, 0));
    assert!(ability.peek_feasible(here, &field));

    let mut dice = Dice::new(&rng, 2, 1);
    ability
        .materialize(here)
        .unwrap()
        .execute(&mut field, &mut dice)
        .unwrap();
    assert!(!ability.peek_feasible(here, &field));

    // The cached probe is only ever read, so it answers for other fields too.
    let mut other = field.clone();
    other.unit_mut(enemy(0)).unwrap().effects.remove("Hex");
    assert!(ability.peek_feasible(here, &other));
}

#[test]
fn active_effect_blocks_reuse_until_expiry() {
    let mut field = field(&[grunt("Warlock")], &[grunt("Foe")]);
    let ability = Ability::new(hex(AbilityFlags::empty())).unwrap();
    let rng = PcgRng;
    let here = scope(ally(0));

    let mut dice = Dice::new(&rng, 3, 1);
    ability.materialize(here).unwrap().execute(&mut field, &mut dice).unwrap();

    let mut dice = Dice::new(&rng, 3, 2);
    effect::advance_round(&mut field, enemy(0), &mut dice).unwrap();
    assert!(!ability.materialize(here).unwrap().can_be_used(&field));

    let mut dice = Dice::new(&rng, 3, 3);
    effect::advance_round(&mut field, enemy(0), &mut dice).unwrap();
    assert!(ability.materialize(here).unwrap().can_be_used(&field));
    assert_eq!(field.unit(enemy(0)).unwrap().life(), 94);
}

#[test]
fn refresh_flag_resets_duration() {
    let mut field = field(&[grunt("Warlock")], &[grunt("Foe")]);
    let ability = Ability::new(hex(AbilityFlags::REFRESH_EFFECTS)).unwrap();
    let rng = PcgRng;
    let here = scope(ally(0));

    let mut dice = Dice::new(&rng, 4, 1);
    ability.materialize(here).unwrap().execute(&mut field, &mut dice).unwrap();
    let mut dice = Dice::new(&rng, 4, 2);
    effect::advance_round(&mut field, enemy(0), &mut dice).unwrap();
    assert_eq!(
        field.unit(enemy(0)).unwrap().effects.get("Hex").unwrap().get_duration(),
        1
    );

    let mut again = ability.materialize(here).unwrap();
    assert!(again.can_be_used(&field));
    let mut dice = Dice::new(&rng, 4, 3);
    let records = again.execute(&mut field, &mut dice).unwrap();
    assert_eq!(records[0].hits[0].outcome, HitOutcome::Refreshed);

    let hex = field.unit(enemy(0)).unwrap().effects.get("Hex").unwrap();
    assert_eq!(hex.get_duration(), 2);
    assert_eq!(hex.stacking(), StackingPolicy::Refresh);
}
