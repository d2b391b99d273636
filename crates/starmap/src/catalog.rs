//! Ordered collections of star systems.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use units::Length;

use crate::star_system::StarSystem;

/// What a catalog is meant to record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogKind {
    /// Every system in the region
    #[default]
    Survey,
    /// Only the systems worth a closer look
    Reference,
}

/// An insertion-ordered list of star systems within a spherical region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub kind: CatalogKind,
    /// Radius of the region the systems were placed in
    pub radius: Length,
    /// Center of the region; system positions are relative to it
    pub origin: Point3<f64>,
    systems: Vec<StarSystem>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, radius: Length) -> Self {
        Self {
            kind,
            radius,
            origin: Point3::origin(),
            systems: Vec::new(),
        }
    }

    pub fn push(&mut self, system: StarSystem) {
        self.systems.push(system);
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarSystem> {
        self.systems.iter()
    }

    /// Append a copy of every system in `other`, translated by `offset`.
    ///
    /// `other` is left untouched; use this to drop a cluster generated around
    /// its own origin into a larger region.
    pub fn merge(&mut self, other: &Catalog, offset: Vector3<f64>) {
        self.systems.reserve(other.len());
        self.systems
            .extend(other.systems.iter().map(|system| system.translated(&offset)));
    }

    /// Sort youngest first, breaking ties by population group.
    ///
    /// The sort is stable, so exact ties keep insertion order.
    pub fn sort_by_age(&mut self) {
        self.systems.sort_by(|a, b| {
            a.age
                .total_cmp(&b.age)
                .then_with(|| a.population.cmp(&b.population))
        });
    }

    /// Sort nearest first by Euclidean distance to `origin`.
    ///
    /// Each system remembers its distance until the next distance sort.
    pub fn sort_by_distance(&mut self, origin: Point3<f64>) {
        for system in &mut self.systems {
            system.distance = Some(system.distance_to(&origin));
        }
        self.systems.sort_by(|a, b| {
            let da = a.distance.unwrap_or(f64::INFINITY);
            let db = b.distance.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarSystem;
    type IntoIter = std::slice::Iter<'a, StarSystem>;

    fn into_iter(self) -> Self::IntoIter {
        self.systems.iter()
    }
}
