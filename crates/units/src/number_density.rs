use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

use crate::length::PARSEC_TO_LIGHT_YEARS;

/// A number density (objects per volume) quantity using f64 precision.
///
/// The `NumberDensity` struct represents how many star systems occupy a
/// volume of space, with systems per cubic parsec as the base unit.
///
/// Typical stellar densities:
/// - Solar neighborhood, all populations: ~0.08 systems/pc³
/// - Young Population I near the Sun: ~0.034 systems/pc³
/// - Halo Population II near the Sun: ~0.0003 systems/pc³
///
/// # Examples
///
/// ```rust
/// use units::NumberDensity;
///
/// let local = NumberDensity::per_cubic_parsec(0.081);
/// let systems = local.count_in(12_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NumberDensity(f64); // Base unit: systems/pc³

impl NumberDensity {
    /// Creates a zero density
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `NumberDensity` from a value in systems per cubic parsec.
    pub fn per_cubic_parsec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `NumberDensity` from a value in systems per cubic light year.
    pub fn per_cubic_light_year(value: f64) -> Self {
        Self(value * PARSEC_TO_LIGHT_YEARS.powi(3))
    }

    /// Returns the density in systems per cubic parsec.
    pub fn to_per_cubic_parsec(&self) -> f64 {
        self.0
    }

    /// Converts the density to systems per cubic light year.
    pub fn to_per_cubic_light_year(&self) -> f64 {
        self.0 / PARSEC_TO_LIGHT_YEARS.powi(3)
    }

    /// Expected number of systems in `volume` cubic parsecs.
    pub fn count_in(&self, volume: f64) -> f64 {
        self.0 * volume
    }

    /// Mean volume (cubic parsecs) occupied by a single system.
    ///
    /// Infinite for a zero density.
    pub fn volume_per_system(&self) -> f64 {
        1.0 / self.0
    }
}

impl Add for NumberDensity {
    type Output = NumberDensity;

    fn add(self, rhs: NumberDensity) -> NumberDensity {
        NumberDensity(self.0 + rhs.0)
    }
}

impl Mul<f64> for NumberDensity {
    type Output = NumberDensity;

    fn mul(self, rhs: f64) -> NumberDensity {
        NumberDensity(self.0 * rhs)
    }
}

impl Div<f64> for NumberDensity {
    type Output = NumberDensity;

    fn div(self, rhs: f64) -> NumberDensity {
        NumberDensity(self.0 / rhs)
    }
}

/// Allow f64 * NumberDensity (commutative multiplication)
impl Mul<NumberDensity> for f64 {
    type Output = NumberDensity;

    fn mul(self, rhs: NumberDensity) -> NumberDensity {
        rhs * self
    }
}

impl std::iter::Sum for NumberDensity {
    fn sum<I: Iterator<Item = NumberDensity>>(iter: I) -> Self {
        iter.fold(NumberDensity::zero(), |acc, d| acc + d)
    }
}
