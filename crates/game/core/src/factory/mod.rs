//! Declarative action templates and the factory that builds them.
//!
//! Templates come from data files as strings. [`ActionFactory::build`] resolves
//! every name once and returns owned [`crate::action::ActionCollection`]s, or a
//! [`FactoryError`] for the first malformed entry.
mod builder;
mod error;
mod spec;

pub use builder::{ActionFactory, build_modifier};
pub use error::FactoryError;
pub use spec::{ActionSpec, EffectSpec, ModifierSpec};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, ActionScope, DamageSource, Polarity, TargetPolicy};
    use crate::effect::StackingPolicy;
    use crate::state::{CommandId, UnitId};
    use crate::stats::{DamageSchool, Modifier};

    fn factory() -> ActionFactory {
        ActionFactory::new(ActionScope::new(
            UnitId::new(CommandId(0), 0),
            CommandId(0),
            CommandId(1),
        ))
    }

    fn rage_effect() -> EffectSpec {
        EffectSpec::new("Rage", 8).icon("rage.png").on_apply(ActionSpec::buff(
            "SELF",
            ModifierSpec::new("multiplierSchoolDamage", 2.0).school("physical"),
        ))
    }

    #[test]
    fn building_is_pure() {
        let specs = vec![
            ActionSpec::damage("RANDOM_ENEMY", 1.5),
            ActionSpec::effect_apply("SELF", rage_effect()),
        ];
        let a = factory().build(&specs).unwrap();
        let b = factory().build(&specs).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn disable_is_derived_from_apply() {
        let collection = factory()
            .build(&[ActionSpec::effect_apply("SELF", rage_effect())])
            .unwrap();
        let action = collection.iter().next().unwrap();
        let ActionKind::EffectApply(apply) = action.kind() else {
            panic!("expected effect apply");
        };
        let effect = apply.prototype().unwrap();
        assert_eq!(effect.base_duration(), 8);
        assert_eq!(effect.on_disable().len(), 1);

        let undo = effect.on_disable().iter().next().unwrap();
        let ActionKind::Buff(buff) = undo.kind() else {
            panic!("expected buff");
        };
        assert_eq!(buff.polarity, Polarity::Revert);
        assert_eq!(
            buff.modifier,
            Modifier::MultiplySchoolDamage(DamageSchool::Physical, 2.0)
        );
        assert_eq!(undo.target(), TargetPolicy::Subject);
    }

    #[test]
    fn explicit_disable_must_balance() {
        let buff = ModifierSpec::new("addBlock", 20.0);
        let balanced = EffectSpec::new("Shield", 3)
            .on_apply(ActionSpec::buff("SELF", buff.clone()))
            .on_disable(ActionSpec::buff("SELF", buff.clone()).reverted());
        assert!(factory()
            .build(&[ActionSpec::effect_apply("SELF", balanced)])
            .is_ok());

        let lopsided = EffectSpec::new("Shield", 3)
            .on_apply(ActionSpec::buff("SELF", buff.clone()))
            .on_disable(ActionSpec::buff("SELF", ModifierSpec::new("addBlock", 10.0)).reverted());
        assert_eq!(
            factory().build(&[ActionSpec::effect_apply("SELF", lopsided)]),
            Err(FactoryError::UnbalancedEffect {
                name: "Shield".into()
            })
        );
    }

    #[test]
    fn offense_deltas_resolve() {
        let spec = ActionSpec::damage("ALL_ENEMIES", 0.5)
            .with_offense(ModifierSpec::new("addCriticalChance", 25.0))
            .magic();
        let collection = factory().build(&[spec]).unwrap();
        let ActionKind::Damage(damage) = collection.iter().next().unwrap().kind() else {
            panic!("expected damage");
        };
        assert!(damage.magic);
        assert_eq!(
            damage.source,
            DamageSource::Offense {
                power: 0.5,
                modifiers: vec![Modifier::AddCriticalChance(25)],
            }
        );
    }

    #[test]
    fn refresh_stacking_reaches_effects() {
        let collection = factory()
            .with_stacking(StackingPolicy::Refresh)
            .build(&[ActionSpec::effect_apply("SELF", rage_effect())])
            .unwrap();
        let ActionKind::EffectApply(apply) = collection.iter().next().unwrap().kind() else {
            panic!("expected effect apply");
        };
        assert_eq!(apply.stacking, StackingPolicy::Refresh);
        assert_eq!(
            apply.prototype().unwrap().stacking(),
            StackingPolicy::Refresh
        );
    }

    #[test]
    fn fixed_damage_is_magic_by_school() {
        use crate::action::DamageAction;

        for (school, name) in [(DamageSchool::Water, "water"), (DamageSchool::Physical, "physical")] {
            let built = factory()
                .build(&[ActionSpec::fixed_damage("RANDOM_ENEMY", 9, name)])
                .unwrap();
            let ActionKind::Damage(damage) = built.iter().next().unwrap().kind() else {
                panic!("expected damage");
            };
            assert_eq!(damage, &DamageAction::fixed(9, school));
        }

        let forced = factory()
            .build(&[ActionSpec::fixed_damage("RANDOM_ENEMY", 9, "physical").magic()])
            .unwrap();
        let ActionKind::Damage(damage) = forced.iter().next().unwrap().kind() else {
            panic!("expected damage");
        };
        assert!(damage.magic);
    }

    fn error_of(spec: ActionSpec) -> FactoryError {
        factory().build(&[spec]).unwrap_err()
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            error_of(ActionSpec::new("teleport", "SELF")),
            FactoryError::UnknownActionType("teleport".into())
        );
        assert_eq!(
            error_of(ActionSpec::damage("NEAREST_ENEMY", 1.0)),
            FactoryError::UnknownTargetPolicy("NEAREST_ENEMY".into())
        );
        assert!(matches!(
            error_of(ActionSpec::damage("EFFECT_ENEMY", 1.0)),
            FactoryError::TargetNotAllowed { .. }
        ));
        assert_eq!(
            error_of(ActionSpec::buff("SELF", ModifierSpec::new("addCharisma", 1.0))),
            FactoryError::UnknownModifier("addCharisma".into())
        );
        assert_eq!(
            error_of(ActionSpec::fixed_damage("SELF", 5, "lightning")),
            FactoryError::UnknownSchool("lightning".into())
        );
        assert_eq!(
            error_of(ActionSpec::mana_restore("SELF", "mana", 10.0)),
            FactoryError::UnknownResource("mana".into())
        );
        assert_eq!(
            error_of(ActionSpec::new("heal", "SELF")),
            FactoryError::MissingField {
                kind: "heal".into(),
                field: "power"
            }
        );
        assert!(matches!(
            error_of(ActionSpec::heal("SELF", 2.5)),
            FactoryError::InvalidPower { .. }
        ));
        assert!(matches!(
            error_of(ActionSpec::damage("RANDOM_ENEMY", 0.0)),
            FactoryError::InvalidPower { .. }
        ));
        assert!(matches!(
            error_of(ActionSpec::buff("SELF", ModifierSpec::new("addBlock", 0.5))),
            FactoryError::InvalidPower { .. }
        ));
        assert_eq!(
            error_of(ActionSpec::effect_apply("SELF", EffectSpec::new("Haste", 0))),
            FactoryError::ZeroDuration {
                name: "Haste".into()
            }
        );
        assert_eq!(
            error_of(ActionSpec::effect_apply("SELF", EffectSpec::new("  ", 2))),
            FactoryError::EmptyEffectName
        );
        assert_eq!(
            error_of(ActionSpec::buff(
                "SELF",
                ModifierSpec::new("multiplierSchoolDamage", 1.5)
            )),
            FactoryError::MissingField {
                kind: "multiplierSchoolDamage".into(),
                field: "school"
            }
        );
    }

    #[test]
    fn effects_cannot_nest() {
        let inner = EffectSpec::new("Inner", 1);
        let outer = EffectSpec::new("Outer", 2).on_apply(ActionSpec::effect_apply("SELF", inner));
        assert_eq!(
            error_of(ActionSpec::effect_apply("SELF", outer)),
            FactoryError::NestedEffect {
                name: "Outer".into()
            }
        );
    }
}
