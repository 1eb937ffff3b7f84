//! Hit, block and critical checks.

use crate::config::HitChanceParams;

/// Calculate hit chance based on accuracy vs defense.
///
/// # Formula
///
/// ```text
/// hit_chance = base + (accuracy - defense)
/// clamped to [min, max]
/// ```
///
/// # Returns
///
/// Hit chance as percentage
pub fn calculate_hit_chance(accuracy: i32, defense: i32, params: &HitChanceParams) -> u32 {
    let stat_diff = accuracy.saturating_sub(defense);
    let hit_chance = params.base.saturating_add(stat_diff);

    hit_chance.clamp(params.min, params.max).max(0) as u32
}

/// Check if an attack hits. `roll` is a d100 (1-100).
pub fn check_hit(hit_chance: u32, roll: u32) -> bool {
    roll <= hit_chance
}

/// Check if the defender blocks. A block chance of 0 never blocks.
pub fn check_block(block: i32, roll: u32) -> bool {
    block > 0 && roll <= block as u32
}

/// Check if the attack is a critical hit.
pub fn check_critical(critical_chance: i32, roll: u32) -> bool {
    critical_chance > 0 && roll <= critical_chance as u32
}
