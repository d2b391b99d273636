//! Stellar population density tables.
//!
//! Two ways to build a [`DensityTable`]:
//! - [`DensityTable::reference`]: literal values calibrated to the solar neighborhood
//! - [`DensityTable::at_galactic_position`]: exponential disk model, each group
//!   falling off with galactocentric radius and with height above the plane
//!
//! The position model is
//!
//! ```text
//! ρ(R, h) = ρ₀ · exp(-R / 3500 pc) · exp(-|h| / H)
//! ```
//!
//! with a shared radial scale length and a per-group scale height H.

use serde::{Deserialize, Serialize};
use units::{NumberDensity, Time};

use crate::population::StellarPopulation;

/// Radial scale length of the disk in parsecs
pub const RADIAL_SCALE_LENGTH_PC: f64 = 3_500.0;

/// Base age and age range (Gyr) per group, in table order.
const GROUP_AGES: [(f64, f64); 5] = [(0.0, 2.0), (2.0, 3.0), (5.0, 3.0), (8.0, 1.5), (9.5, 3.0)];

/// Solar neighborhood densities (systems/pc³), in table order.
const REFERENCE_DENSITIES: [f64; 5] = [0.0344, 0.0272, 0.0158, 0.00339, 0.000339];

/// Central coefficient (systems/pc³) and scale height (pc) per group.
const POSITION_COEFFICIENTS: [(f64, f64); 5] = [
    (0.373, 200.0),
    (0.280, 400.0),
    (0.160, 700.0),
    (0.0339, 1_000.0),
    (0.00339, 2_000.0),
];

/// Density and age distribution of one stellar population group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationDensity {
    pub population: StellarPopulation,
    pub density: NumberDensity,
    /// Youngest age in the group
    pub base_age: Time,
    /// Width of the uniform age distribution above `base_age`
    pub age_range: Time,
}

impl PopulationDensity {
    /// Age at `fraction` (0..1) of the way through the group's range.
    pub fn age_at(&self, fraction: f64) -> Time {
        self.base_age + self.age_range * fraction
    }

    /// Oldest age the group can produce.
    pub fn max_age(&self) -> Time {
        self.base_age + self.age_range
    }
}

/// Per-group densities and their sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityTable {
    groups: [PopulationDensity; 5],
    combined: NumberDensity,
}

impl DensityTable {
    /// Table for a region of space similar to the solar neighborhood.
    pub fn reference() -> Self {
        Self::from_densities(REFERENCE_DENSITIES)
    }

    /// Table for a neighborhood `radial` parsecs from the galactic center and
    /// `vertical` parsecs above or below the plane.
    ///
    /// Both offsets are taken as magnitudes. Densities shrink toward zero as
    /// either grows but stay positive for any finite input.
    pub fn at_galactic_position(radial: f64, vertical: f64) -> Self {
        let radial = radial.abs();
        let vertical = vertical.abs();
        let radial_falloff = (-radial / RADIAL_SCALE_LENGTH_PC).exp();

        let densities = POSITION_COEFFICIENTS.map(|(coefficient, scale_height)| {
            coefficient * radial_falloff * (-vertical / scale_height).exp()
        });

        Self::from_densities(densities)
    }

    fn from_densities(densities: [f64; 5]) -> Self {
        let mut groups = StellarPopulation::ALL.map(|population| PopulationDensity {
            population,
            density: NumberDensity::zero(),
            base_age: Time::zero(),
            age_range: Time::zero(),
        });

        for (i, group) in groups.iter_mut().enumerate() {
            let (base_age, age_range) = GROUP_AGES[i];
            group.density = NumberDensity::per_cubic_parsec(densities[i]);
            group.base_age = Time::from_gyr(base_age);
            group.age_range = Time::from_gyr(age_range);
        }

        let combined: NumberDensity = groups.iter().map(|g| g.density).sum();
        Self { groups, combined }
    }

    /// Groups in table order (Young I first, Halo II last).
    pub fn groups(&self) -> &[PopulationDensity; 5] {
        &self.groups
    }

    pub fn get(&self, population: StellarPopulation) -> &PopulationDensity {
        // ALL is declared in discriminant order
        &self.groups[population as usize]
    }

    /// Sum of the per-group densities.
    pub fn combined(&self) -> NumberDensity {
        self.combined
    }
}

impl Default for DensityTable {
    fn default() -> Self {
        Self::reference()
    }
}
