//! Combat resolution formulas.
//!
//! Pure functions shared by the stat pipeline and the damage action. All
//! randomness is passed in as d100 rolls.
//!
//! # Core Functions
//!
//! - `calculate_hit_chance`: Accuracy vs defense, clamped by configuration
//! - `mitigate`: Resistance scaling of a float damage value
//! - `truncate`: The single floor step turning damage into life loss
//! - `apply_damage`: Life reduction (clamped to 0)

pub mod damage;
pub mod hit;

pub use damage::{apply_critical, apply_damage, mitigate, truncate};
pub use hit::{calculate_hit_chance, check_block, check_critical, check_hit};
