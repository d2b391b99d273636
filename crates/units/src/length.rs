use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const PARSEC_TO_LIGHT_YEARS: f64 = 3.261_563_777;
pub const PARSEC_TO_AU: f64 = 206_264.806;
pub const PARSEC_TO_KM: f64 = 3.085_677_581e13;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with parsecs as the base unit.
/// Star catalogs span tens to hundreds of parsecs, so this keeps the numbers
/// in a comfortable range for density and volume calculations.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let region = Length::from_parsecs(15.0);
/// let nearby = Length::from_light_years(4.24);
///
/// let region_ly = region.to_light_years();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: parsecs

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in light years.
    pub fn from_light_years(value: f64) -> Self {
        Self(value / PARSEC_TO_LIGHT_YEARS)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value / PARSEC_TO_AU)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / PARSEC_TO_KM)
    }

    /// Returns the length in parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0
    }

    /// Converts the length to light years.
    pub fn to_light_years(&self) -> f64 {
        self.0 * PARSEC_TO_LIGHT_YEARS
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 * PARSEC_TO_AU
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * PARSEC_TO_KM
    }

    /// Volume of a sphere with this radius, in cubic parsecs.
    pub fn sphere_volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.0.powi(3)
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
