//! Deterministic RNG using PCG32.
//!
//! All randomness in the audio backend flows through this module. Noise
//! generators never touch a global random source; they draw from a `Pcg32`
//! handed in by the caller.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws a uniform sample in [-1, 1).
#[inline]
pub fn uniform_bipolar(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
