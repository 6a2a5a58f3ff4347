use super::types::BitWidth;

/// Mozzi's audio rate, used when no rate is given
pub const DEFAULT_SAMPLE_RATE: u32 = 16384;

/// value whose triple repetition stops a Mega2560 from accepting the upload
pub const DITHER_TRIGGER: i64 = 33;

/// run length that triggers an insertion
pub const DITHER_RUN: usize = 3;

/// neighbours of the trigger value, one of which gets inserted
pub const DITHER_CHOICES: [i64; 2] = [DITHER_TRIGGER - 1, DITHER_TRIGGER + 1];

/// column limit for the wrapped array literal
pub const LINE_WIDTH: usize = 80;

/// Largest positive table value for an output width: `2 << (bits - 2)`.
///
/// This is one more than the usual signed max (128 for 8 bits), which is the
/// convention Mozzi tables are built with.
#[inline]
pub fn max_output_value(bits: BitWidth) -> i64 {
    2i64 << (bits.bits() - 2)
}

/// Smallest value a float rescale can produce, one below `-max`.
#[inline]
pub fn min_output_value(bits: BitWidth) -> i64 {
    -max_output_value(bits) - 1
}
