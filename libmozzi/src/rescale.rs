//! Rescaling decoded samples into table values.
//!
//! Float input is assumed to sit in `[-1.0, 1.0]` and is scaled by the output
//! width's `max` with `trunc(v * max + 0.5)`. That rounds half up for positive
//! values only, so `-1.0` lands on `-max + 1`; tables generated elsewhere
//! depend on exactly this arithmetic. Integer input passes through.

use crate::core::{max_output_value, min_output_value, BitWidth, SampleSequence};

/// Rescale one float sample for an output width.
///
/// The result is clamped to `[-max - 1, max]`; NaN becomes 0.
#[inline]
pub fn rescale_float(value: f64, output_bits: BitWidth) -> i64 {
    let max = max_output_value(output_bits);
    let scaled = (value * max as f64 + 0.5).trunc();
    // `as` saturates and maps NaN to 0
    (scaled as i64).clamp(min_output_value(output_bits), max)
}

/// Rescale a whole sequence into table values.
pub fn rescale(samples: &SampleSequence, output_bits: BitWidth) -> Vec<i64> {
    match samples {
        SampleSequence::Int8(v) => v.iter().map(|&s| s as i64).collect(),
        SampleSequence::Int16(v) => v.iter().map(|&s| s as i64).collect(),
        SampleSequence::Int32(v) => v.iter().map(|&s| s as i64).collect(),
        SampleSequence::Float32(v) => v
            .iter()
            .map(|&s| rescale_float(s as f64, output_bits))
            .collect(),
    }
}
