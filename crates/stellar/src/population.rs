//! Stellar population groups.

use serde::{Deserialize, Serialize};

/// Formation epoch and galactic component of a star system.
///
/// Variants are declared from the youngest tier to the oldest, and the derived
/// `Ord` is used as the tie-break when sorting catalogs by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StellarPopulation {
    /// Thin disk, 0-2 Gyr
    YoungI,
    /// Thin disk, 2-5 Gyr
    IntermediateI,
    /// Thin disk, 5-8 Gyr
    OldI,
    /// Thick disk, 8-9.5 Gyr
    DiskII,
    /// Halo, 9.5-12.5 Gyr
    HaloII,
}

impl StellarPopulation {
    /// All groups in table order.
    pub const ALL: [StellarPopulation; 5] = [
        StellarPopulation::YoungI,
        StellarPopulation::IntermediateI,
        StellarPopulation::OldI,
        StellarPopulation::DiskII,
        StellarPopulation::HaloII,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StellarPopulation::YoungI => "Young Population I",
            StellarPopulation::IntermediateI => "Intermediate Population I",
            StellarPopulation::OldI => "Old Population I",
            StellarPopulation::DiskII => "Disk Population II",
            StellarPopulation::HaloII => "Halo Population II",
        }
    }

    /// Population I group for a cluster of the given age in Gyr.
    ///
    /// Open clusters form in the thin disk, so Population II never arises here.
    pub fn from_cluster_age(age_gyr: f64) -> Self {
        if age_gyr < 2.0 {
            StellarPopulation::YoungI
        } else if age_gyr < 5.0 {
            StellarPopulation::IntermediateI
        } else {
            StellarPopulation::OldI
        }
    }
}

impl std::fmt::Display for StellarPopulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
