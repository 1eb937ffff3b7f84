//! Stat system.
//!
//! Units carry a [`StatPipeline`]: baseline [`Offense`] and [`Defense`] plus a
//! stack of [`Modifier`]s pushed and popped by buff actions and effects.
//!
//! ## Calculation order
//!
//! `Flat → Multiply → Convert → Clamp`, recomputed from the baseline on every
//! change. Damage is truncated exactly once, at the end of the damage formula.

pub mod error;
pub mod modifier;
pub mod pipeline;
pub mod resources;
pub mod school;

pub use error::StatError;
pub use modifier::{Modifier, ModifierMethod, ModifierStack, StatBounds};
pub use pipeline::{Defense, EffectiveOffense, Offense, StatPipeline};
pub use resources::{ResourceKind, ResourceMeter, Resources};
pub use school::{DamageSchool, SchoolValues};
