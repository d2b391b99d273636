//! A single generated star system.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use stellar::StellarPopulation;
use units::Time;

/// A star system placed in a catalog
///
/// Position is in parsecs relative to the owning catalog's origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub population: StellarPopulation,
    pub age: Time,
    pub position: Point3<f64>,

    /// Distance to the last origin passed to `Catalog::sort_by_distance`
    #[serde(skip)]
    pub(crate) distance: Option<f64>,
}

impl StarSystem {
    pub fn new(population: StellarPopulation, age: Time, position: Point3<f64>) -> Self {
        Self {
            population,
            age,
            position,
            distance: None,
        }
    }

    /// Distance computed by the most recent distance sort, if any.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Euclidean distance in parsecs to `point`.
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }

    /// A copy of this system moved by `offset`.
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self::new(self.population, self.age, self.position + *offset)
    }
}

// The sort distance is bookkeeping, not part of the system's identity.
impl PartialEq for StarSystem {
    fn eq(&self, other: &Self) -> bool {
        self.population == other.population
            && self.age == other.age
            && self.position == other.position
    }
}
