//! Symmetric normalization.
//!
//! Float input slightly below `-1.0` rescales (and clamps) to `-max - 1`, one
//! step past the negative end of the table range. When that value is present
//! the whole table is remapped from `[-max - 1, max]` onto `[-max, max]`,
//! otherwise it is left alone.

use crate::core::{max_output_value, BitWidth};

/// Linear map of `value` from `[in_min, in_max]` to `[out_min, out_max]`,
/// truncated toward zero.
///
/// Works on the exact rational in i128 so 32-bit tables don't lose
/// precision.
#[inline]
pub fn map_range(value: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    let span_in = (in_max - in_min) as i128;
    if span_in == 0 {
        return out_min;
    }
    let span_out = (out_max - out_min) as i128;
    let numerator = (value - in_min) as i128 * span_out + out_min as i128 * span_in;
    // i128 division truncates toward zero
    (numerator / span_in) as i64
}

/// Remap the table if it reaches `-max - 1`.
///
/// Returns the new values and whether the remap ran.
pub fn make_symmetrical(values: Vec<i64>, output_bits: BitWidth) -> (Vec<i64>, bool) {
    let max = max_output_value(output_bits);
    let in_min = -max - 1;

    if !values.contains(&in_min) {
        return (values, false);
    }

    let remapped = values
        .into_iter()
        .map(|v| map_range(v, in_min, max, -max, max))
        .collect();
    (remapped, true)
}
