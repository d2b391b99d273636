//! Seeded dice for table-driven generation.
//!
//! All randomness in catalog generation flows through a single [`Dice`] so a
//! catalog is fully determined by its seed. Each generator owns its own
//! `Dice`; share one between threads and reproducibility is gone.

use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use crate::sampling::{sample_shell, sample_unit_sphere};

/// Dice rolls, percentiles and spatial samples over a seeded ChaCha stream
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaChaRng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(ChaChaRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: ChaChaRng) -> Self {
        Self { rng }
    }

    /// Seed from a UUID, the same way planetary systems derive theirs.
    pub fn from_id(id: Uuid) -> Self {
        Self::from_seed(id.as_u64_pair().0)
    }

    /// Seed from a name; the same name always yields the same rolls.
    pub fn from_name(name: &str) -> Self {
        Self::from_id(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Sum of `n` six-sided dice, in `[n, 6n]`.
    pub fn roll_d6(&mut self, n: u32) -> u32 {
        (0..n).map(|_| self.rng.random_range(1..=6u32)).sum()
    }

    /// Sum of `n` ten-sided dice, in `[n, 10n]`.
    pub fn roll_d10(&mut self, n: u32) -> u32 {
        (0..n).map(|_| self.rng.random_range(1..=10u32)).sum()
    }

    /// A percentile roll in `[1, 100]`.
    pub fn roll_d100(&mut self) -> u32 {
        self.rng.random_range(1..=100)
    }

    /// Uniform value in `[0, 1)`.
    pub fn roll_percentile(&mut self) -> f64 {
        self.rng.random()
    }

    /// `value` varied by up to ±5%.
    ///
    /// 2d6 spans 2..=12, so the factor spans 0.95..=1.05.
    pub fn vary_5pct(&mut self, value: f64) -> f64 {
        value * (0.93 + f64::from(self.roll_d6(2)) / 100.0)
    }

    /// `value` varied by up to ±10%.
    ///
    /// 4d6 spans 4..=24, so the factor spans 0.90..=1.10.
    pub fn vary_10pct(&mut self, value: f64) -> f64 {
        value * (0.86 + f64::from(self.roll_d6(4)) / 100.0)
    }

    /// `value` perturbed by a 3d6 bell centered on 10.5, scaled by `fraction`.
    ///
    /// The offset is `value * (3d6 - 10.5) / 15 * fraction`, so the result
    /// stays within `value * (1 ± fraction / 2)`.
    pub fn vary_by_fraction(&mut self, value: f64, fraction: f64) -> f64 {
        let bell = (f64::from(self.roll_d6(3)) - 10.5) / 15.0;
        value + value * bell * fraction
    }

    /// Uniform point inside the unit ball.
    pub fn unit_sphere(&mut self) -> Vector3<f64> {
        sample_unit_sphere(&mut self.rng)
    }

    /// Uniform point inside the shell between `min_fraction` and `max_fraction`
    /// of the unit radius. Requires `0 <= min_fraction <= max_fraction`.
    pub fn shell(&mut self, min_fraction: f64, max_fraction: f64) -> Vector3<f64> {
        sample_shell(&mut self.rng, min_fraction, max_fraction)
    }
}
