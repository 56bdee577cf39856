//! Deterministic jitter source.
//!
//! # Determinism strategy
//!
//! One `SmallRng` per scheduler, seeded once at construction.  Every draw
//! happens inside a schedule rebuild, and rebuilds visit plans in canonical
//! `CategoryId` order, so two schedulers built with the same seed and fed the
//! same deltas produce bit-identical schedules.
//!
//! A seed of `0` is coerced to [`DEFAULT_SEED`].  Callers that derive seeds
//! from uninitialised or zeroed state would otherwise silently share one
//! degenerate stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Substitute for a caller-supplied seed of `0`.
pub const DEFAULT_SEED: u64 = 1;

/// Seeded generator producing bounded time perturbations.
///
/// Used only in single-threaded contexts; the scheduler owns exactly one.
pub struct JitterRng {
    rng:  SmallRng,
    seed: u64,
}

impl JitterRng {
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { DEFAULT_SEED } else { seed };
        JitterRng {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The effective seed (after zero coercion).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A value uniformly distributed in `[-amplitude, amplitude)`.
    ///
    /// Returns exactly `0.0` without consuming randomness when `amplitude` is
    /// not strictly positive (including NaN).
    #[inline]
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        if amplitude.is_nan() || amplitude <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-1.0f64..1.0) * amplitude
    }
}

impl std::fmt::Debug for JitterRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JitterRng").field("seed", &self.seed).finish()
    }
}
