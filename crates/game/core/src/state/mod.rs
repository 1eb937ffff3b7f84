//! Battle state: units, commands and the battlefield.
//!
//! Ownership runs strictly downward: the [`Battlefield`] owns commands, commands
//! own units, units own their abilities and effects. Cross references are
//! [`UnitId`] / [`CommandId`] values.
mod battlefield;
mod error;
mod ids;
mod template;
mod unit;

pub use battlefield::{Battlefield, Command};
pub use error::StateError;
pub use ids::{CommandId, UnitId};
pub use template::{AbilityRef, UnitTemplate, UnitTemplateBuilder};
pub use unit::{Unit, UnitVitals};
