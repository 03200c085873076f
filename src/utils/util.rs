//! # Utility Module
//!
//! Small numeric helpers shared by the carver and the marker layout.
//!
//! ## Example Function: `clamp_index`
//!
//! The `clamp_index` function rounds a floating-point coordinate to the nearest cell
//! and restricts it to the valid index range of a grid side. Negative and NaN inputs
//! land on the first cell, anything past the end lands on the last one.

/// Rounds `value` and clamps it into `0..len`.
///
/// # Arguments
///
/// * `value` - The coordinate to convert.
/// * `len` - The number of valid indices. Must be at least 1.
///
/// # Examples
///
/// ```
/// use random_walker::utils::util::clamp_index;
///
/// assert_eq!(clamp_index(2.4, 5), 2);
/// assert_eq!(clamp_index(-1.0, 5), 0);
/// assert_eq!(clamp_index(4.6, 5), 4);
/// ```
pub fn clamp_index(value: f64, len: usize) -> usize {
    let max = len.saturating_sub(1);
    let rounded = value.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= max as f64 {
        max
    } else {
        rounded as usize
    }
}

/// Scales a unit sample by the 0.9 safety margin used for start cells and
/// tunnel lengths.
pub fn scaled_sample(sample: f64, range: usize) -> f64 {
    sample * 0.9 * range as f64
}
