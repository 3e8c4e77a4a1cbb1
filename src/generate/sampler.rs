//! Random parameter sampling.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when the run is not reseeded from the clock.
pub const DEFAULT_SEED: u64 = 1;

/// Clock seeds are reduced modulo this so they fit a signed 32-bit range.
const CLOCK_SEED_MODULUS: u32 = 999_999_999;

/// A source of uniform draws.
///
/// Only [`Sampler::unit`] is required; the range helpers are built on it so a
/// fixed-sequence sampler reproduces the exact parameters a generator sees.
pub trait Sampler {
    /// A uniform draw in [0, 1).
    fn unit(&mut self) -> f32;

    /// A uniform draw in [low, high). Callers keep `low < high`.
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.unit() * (high - low) + low
    }

    /// An anchor point kept `margin` away from the top-left edges and
    /// `2 * margin` away from the bottom-right ones.
    fn point(&mut self, margin: f32, width: f32, height: f32) -> (f32, f32) {
        let x = self.uniform(margin, width - 2.0 * margin);
        let y = self.uniform(margin, height - 2.0 * margin);
        (x, y)
    }
}

/// Seeded pseudo-random sampler.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// A sampler seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Re-seed from the wall clock and return the seed used.
    pub fn reseed(&mut self) -> u64 {
        let seed = clock_seed();
        self.rng = StdRng::seed_from_u64(seed);
        seed
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Seed derived from the sub-second part of the current time.
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    u64::from(nanos % CLOCK_SEED_MODULUS)
}

/// Replays a fixed list of unit draws, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct FixedSampler {
    draws: Vec<f32>,
    next: usize,
}

impl FixedSampler {
    /// # Panics
    ///
    /// Panics if `draws` is empty or any draw lies outside [0, 1).
    pub fn new(draws: impl Into<Vec<f32>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "fixed sampler needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "fixed draws must lie in [0, 1)"
        );
        Self { draws, next: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl Sampler for FixedSampler {
    fn unit(&mut self) -> f32 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}
