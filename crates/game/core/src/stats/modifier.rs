//! Stat modifiers and the modifier stack.
//!
//! A modifier is a closed value object. Template method names are resolved to a
//! [`ModifierMethod`] once, when the action factory builds an action, and never
//! dispatched by string afterwards.

use super::school::DamageSchool;

/// A single modification of offense or defense.
///
/// Multipliers are plain factors (`2.0` doubles). Additive values are whole
/// points or percentage points depending on the stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    MultiplyAttackSpeed(f64),
    /// Multiplies damage of every school.
    MultiplyDamage(f64),
    MultiplySchoolDamage(DamageSchool, f64),
    AddSchoolDamage(DamageSchool, i32),
    /// Moves `percent` of the `from` damage into `to`.
    ConvertDamage {
        from: DamageSchool,
        to: DamageSchool,
        percent: i32,
    },
    AddAccuracy(i32),
    AddMagicAccuracy(i32),
    AddCriticalChance(i32),
    AddCriticalMultiplier(i32),
    AddBlock(i32),
    AddDefense(i32),
    AddMagicDefense(i32),
    AddResistance(DamageSchool, i32),
}

impl Modifier {
    /// The template method this modifier was built from.
    pub fn method(&self) -> ModifierMethod {
        match self {
            Modifier::MultiplyAttackSpeed(_) => ModifierMethod::MultiplierAttackSpeed,
            Modifier::MultiplyDamage(_) => ModifierMethod::MultiplierDamage,
            Modifier::MultiplySchoolDamage(..) => ModifierMethod::MultiplierSchoolDamage,
            Modifier::AddSchoolDamage(..) => ModifierMethod::AddSchoolDamage,
            Modifier::ConvertDamage { .. } => ModifierMethod::ConvertDamage,
            Modifier::AddAccuracy(_) => ModifierMethod::AddAccuracy,
            Modifier::AddMagicAccuracy(_) => ModifierMethod::AddMagicAccuracy,
            Modifier::AddCriticalChance(_) => ModifierMethod::AddCriticalChance,
            Modifier::AddCriticalMultiplier(_) => ModifierMethod::AddCriticalMultiplier,
            Modifier::AddBlock(_) => ModifierMethod::AddBlock,
            Modifier::AddDefense(_) => ModifierMethod::AddDefense,
            Modifier::AddMagicDefense(_) => ModifierMethod::AddMagicDefense,
            Modifier::AddResistance(..) => ModifierMethod::AddResistance,
        }
    }
}

/// Template names of modifier methods.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ModifierMethod {
    MultiplierAttackSpeed,
    MultiplierDamage,
    MultiplierSchoolDamage,
    AddSchoolDamage,
    ConvertDamage,
    AddAccuracy,
    AddMagicAccuracy,
    AddCriticalChance,
    AddCriticalMultiplier,
    AddBlock,
    AddDefense,
    AddMagicDefense,
    AddResistance,
}

impl ModifierMethod {
    /// Multipliers take a positive factor; all other methods take whole points.
    pub fn is_multiplier(self) -> bool {
        matches!(
            self,
            ModifierMethod::MultiplierAttackSpeed
                | ModifierMethod::MultiplierDamage
                | ModifierMethod::MultiplierSchoolDamage
        )
    }

    /// Methods that need a `school` argument.
    pub fn requires_school(self) -> bool {
        matches!(
            self,
            ModifierMethod::MultiplierSchoolDamage
                | ModifierMethod::AddSchoolDamage
                | ModifierMethod::ConvertDamage
                | ModifierMethod::AddResistance
        )
    }
}

/// Active modifiers in application order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
}

impl ModifierStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Removes the first entry equal to `modifier`. Returns false if none matched.
    pub fn remove(&mut self, modifier: &Modifier) -> bool {
        match self.modifiers.iter().position(|m| m == modifier) {
            Some(index) => {
                self.modifiers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, modifier: &Modifier) -> bool {
        self.modifiers.contains(modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }
}

/// Clamp range for one stat family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    /// Block chance [0, 100]
    pub const BLOCK: Self = Self { min: 0, max: 100 };

    /// Critical chance [0, 100]
    pub const CHANCE: Self = Self { min: 0, max: 100 };

    /// Resistance [-100, 100]
    ///
    /// Negative resistance is a vulnerability; 100 is immunity.
    pub const RESISTANCE: Self = Self {
        min: -100,
        max: 100,
    };

    /// Accuracy, defense and critical multiplier have no upper bound.
    pub const NON_NEGATIVE: Self = Self {
        min: 0,
        max: i32::MAX,
    };

    #[inline]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn template_method_names_resolve() {
        assert_eq!(
            ModifierMethod::from_str("multiplierAttackSpeed").unwrap(),
            ModifierMethod::MultiplierAttackSpeed
        );
        assert_eq!(
            ModifierMethod::from_str("addBlock").unwrap(),
            ModifierMethod::AddBlock
        );
        assert_eq!(
            ModifierMethod::from_str("MULTIPLIERDAMAGE").unwrap(),
            ModifierMethod::MultiplierDamage
        );
        assert!(ModifierMethod::from_str("addCharisma").is_err());
        assert_eq!(ModifierMethod::AddMagicDefense.as_ref(), "addMagicDefense");
    }

    #[test]
    fn stack_removes_one_equal_entry() {
        let mut stack = ModifierStack::new();
        stack.push(Modifier::AddBlock(10));
        stack.push(Modifier::AddBlock(10));
        stack.push(Modifier::MultiplyDamage(1.5));

        assert!(stack.remove(&Modifier::AddBlock(10)));
        assert_eq!(stack.len(), 2);
        assert!(stack.contains(&Modifier::AddBlock(10)));
        assert!(!stack.remove(&Modifier::AddBlock(11)));
        assert!(stack.remove(&Modifier::MultiplyDamage(1.5)));
        assert!(stack.remove(&Modifier::AddBlock(10)));
        assert!(stack.is_empty());
    }

    #[test]
    fn method_round_trips_through_modifier() {
        let modifier = Modifier::ConvertDamage {
            from: DamageSchool::Physical,
            to: DamageSchool::Fire,
            percent: 50,
        };
        assert_eq!(modifier.method(), ModifierMethod::ConvertDamage);
        assert!(modifier.method().requires_school());
        assert!(!modifier.method().is_multiplier());
    }
}
