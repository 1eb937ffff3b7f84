//! Damage mitigation and truncation.
//!
//! Damage stays a float through every scaling step. [`truncate`] is the only
//! place a damage value becomes an integer.

/// Scale a raw damage value by a resistance percentage.
///
/// ```text
/// mitigated = value × (100 − resistance) / 100
/// ```
///
/// Negative resistance amplifies damage, 100 nullifies it.
#[inline]
pub fn mitigate(value: f64, resistance: i32) -> f64 {
    value * f64::from(100 - resistance) / 100.0
}

/// Scale by a critical multiplier given in percent (150 = ×1.5).
#[inline]
pub fn apply_critical(value: f64, multiplier_percent: i32) -> f64 {
    value * f64::from(multiplier_percent) / 100.0
}

/// Final truncation step: floor, clamped to zero.
#[inline]
pub fn truncate(value: f64) -> i32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        floored as i32
    }
}

/// Reduce life by `damage`, saturating at zero. Returns damage actually dealt.
pub fn apply_damage(life: &mut i32, damage: i32) -> i32 {
    let dealt = damage.max(0).min(*life);
    *life -= dealt;
    dealt
}
