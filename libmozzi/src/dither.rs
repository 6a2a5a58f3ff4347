//! Upload-corruption dither.
//!
//! A Mega2560 bootloader refuses a sketch whose flash image contains three
//! `33`s in a row. The pass below watches for that run in table order and
//! appends a neighbouring value (32 or 34) right after the third `33`.
//!
//! The run counter persists across samples and restarts after every
//! insertion, so six consecutive `33`s produce two insertions and four
//! produce one.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::{DITHER_CHOICES, DITHER_RUN, DITHER_TRIGGER};

/// Picks the value inserted after a run of `33`s.
pub trait DitherSource {
    /// one of 32 or 34
    fn next_dither(&mut self) -> i64;
}

/// Uniform choice between the two neighbours, driven by any rng.
pub struct RngDither<R> {
    rng: R,
}

impl<R: RngCore> RngDither<R> {
    pub fn new(rng: R) -> Self {
        RngDither { rng }
    }
}

impl RngDither<Pcg32> {
    /// reproducible dither from a 64-bit seed
    pub fn seeded(seed: u64) -> Self {
        RngDither::new(Pcg32::seed_from_u64(seed))
    }

    /// fresh dither seeded from the OS
    pub fn from_entropy() -> Self {
        RngDither::new(Pcg32::from_entropy())
    }
}

impl<R: RngCore> DitherSource for RngDither<R> {
    fn next_dither(&mut self) -> i64 {
        *DITHER_CHOICES
            .choose(&mut self.rng)
            .unwrap_or(&DITHER_CHOICES[0])
    }
}

/// Always inserts the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedDither(pub i64);

impl DitherSource for FixedDither {
    fn next_dither(&mut self) -> i64 {
        self.0
    }
}

impl<T: DitherSource + ?Sized> DitherSource for &mut T {
    fn next_dither(&mut self) -> i64 {
        (**self).next_dither()
    }
}

/// Break up every run of three `33`s.
///
/// Returns the new sequence and how many values were inserted.
pub fn dither<D: DitherSource + ?Sized>(values: &[i64], source: &mut D) -> (Vec<i64>, usize) {
    let mut out = Vec::with_capacity(values.len() + values.len() / DITHER_RUN);
    let mut run = 0usize;
    let mut inserted = 0usize;

    for &value in values {
        out.push(value);

        if value != DITHER_TRIGGER {
            run = 0;
            continue;
        }

        run += 1;
        if run == DITHER_RUN {
            out.push(source.next_dither());
            inserted += 1;
            run = 0;
        }
    }

    (out, inserted)
}
