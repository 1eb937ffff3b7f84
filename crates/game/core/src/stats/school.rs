//! Damage schools and per-school value tables.

/// Damage school. Every unit deals and resists damage per school.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageSchool {
    Physical,
    Fire,
    Water,
    Air,
    Earth,
    Life,
    Death,
}

impl DamageSchool {
    /// All schools in canonical order.
    pub const ALL: [DamageSchool; 7] = [
        DamageSchool::Physical,
        DamageSchool::Fire,
        DamageSchool::Water,
        DamageSchool::Air,
        DamageSchool::Earth,
        DamageSchool::Life,
        DamageSchool::Death,
    ];

    /// Returns true for the elemental and spiritual schools.
    pub fn is_magical(self) -> bool {
        !matches!(self, DamageSchool::Physical)
    }
}

/// One value per [`DamageSchool`].
///
/// Missing schools default to zero when deserialized, so templates only list
/// the schools a unit actually uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchoolValues<T> {
    pub physical: T,
    pub fire: T,
    pub water: T,
    pub air: T,
    pub earth: T,
    pub life: T,
    pub death: T,
}

impl<T: Copy> SchoolValues<T> {
    /// Same value in every school.
    pub fn splat(value: T) -> Self {
        Self {
            physical: value,
            fire: value,
            water: value,
            air: value,
            earth: value,
            life: value,
            death: value,
        }
    }

    pub fn get(&self, school: DamageSchool) -> T {
        match school {
            DamageSchool::Physical => self.physical,
            DamageSchool::Fire => self.fire,
            DamageSchool::Water => self.water,
            DamageSchool::Air => self.air,
            DamageSchool::Earth => self.earth,
            DamageSchool::Life => self.life,
            DamageSchool::Death => self.death,
        }
    }

    pub fn get_mut(&mut self, school: DamageSchool) -> &mut T {
        match school {
            DamageSchool::Physical => &mut self.physical,
            DamageSchool::Fire => &mut self.fire,
            DamageSchool::Water => &mut self.water,
            DamageSchool::Air => &mut self.air,
            DamageSchool::Earth => &mut self.earth,
            DamageSchool::Life => &mut self.life,
            DamageSchool::Death => &mut self.death,
        }
    }

    pub fn set(&mut self, school: DamageSchool, value: T) {
        *self.get_mut(school) = value;
    }

    /// Iterate `(school, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DamageSchool, T)> + '_ {
        DamageSchool::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Apply `f` to every school.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> SchoolValues<U> {
        SchoolValues {
            physical: f(self.physical),
            fire: f(self.fire),
            water: f(self.water),
            air: f(self.air),
            earth: f(self.earth),
            life: f(self.life),
            death: f(self.death),
        }
    }
}

impl SchoolValues<i32> {
    /// Creates a table with a single non-zero school.
    pub fn only(school: DamageSchool, value: i32) -> Self {
        let mut values = Self::default();
        values.set(school, value);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn school_names_parse_case_insensitively() {
        assert_eq!(DamageSchool::from_str("fire").unwrap(), DamageSchool::Fire);
        assert_eq!(DamageSchool::from_str("DEATH").unwrap(), DamageSchool::Death);
        assert!(DamageSchool::from_str("lightning").is_err());
        assert_eq!(DamageSchool::Earth.to_string(), "earth");
    }

    #[test]
    fn get_and_set_address_the_same_slot() {
        let mut values = SchoolValues::only(DamageSchool::Water, 12);
        assert_eq!(values.get(DamageSchool::Water), 12);
        assert_eq!(values.get(DamageSchool::Fire), 0);

        *values.get_mut(DamageSchool::Fire) += 3;
        let sum: i32 = values.iter().map(|(_, v)| v).sum();
        assert_eq!(sum, 15);
    }
}
