//! Open cluster generation
//!
//! A cluster is rolled in stages, each feeding the next:
//! 1. binding: tightly bound on 3d6 ≤ 5
//! 2. age: a d100 roll through the age table for that binding
//! 3. population group from the age
//! 4. radius (2d6 / 2 pc, jittered) and system count (2d6 / 2 × r³)
//! 5. evaporation: the effective age picks how the systems split between the
//!    core, the tidal zone and the extended halo
//!
//! Tightly bound clusters evaporate ten times slower, so their effective age
//! is a tenth of their true age.

use log::debug;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use stellar::{Dice, StellarPopulation};
use units::{Length, Time};

use crate::catalog::{Catalog, CatalogKind};
use crate::star_system::StarSystem;

/// Highest 3d6 roll that yields a tightly bound cluster
const TIGHT_BINDING_MAX_ROLL: u32 = 5;

/// Minimum 2d6 / 2 count factor for a tightly bound cluster
const TIGHT_MIN_COUNT_FACTOR: f64 = 3.5;

/// Spread of the radius jitter
const RADIUS_JITTER_FRACTION: f64 = 0.25;

/// One row of a cumulative d100 age table
#[derive(Debug, Clone, Copy)]
struct AgeBucket {
    max_roll: u32,
    base_gyr: f64,
    range_gyr: f64,
}

const fn bucket(max_roll: u32, base_gyr: f64, range_gyr: f64) -> AgeBucket {
    AgeBucket {
        max_roll,
        base_gyr,
        range_gyr,
    }
}

const TIGHT_AGE_TABLE: [AgeBucket; 12] = [
    bucket(2, 0.0, 0.1),
    bucket(4, 0.1, 0.1),
    bucket(6, 0.2, 0.1),
    bucket(8, 0.3, 0.1),
    bucket(10, 0.4, 0.1),
    bucket(12, 0.5, 0.1),
    bucket(14, 0.6, 0.1),
    bucket(16, 0.7, 0.1),
    bucket(18, 0.8, 0.1),
    bucket(20, 0.9, 0.1),
    bucket(45, 1.0, 2.0),
    bucket(100, 3.0, 5.0),
];

const LOOSE_AGE_TABLE: [AgeBucket; 10] = [
    bucket(21, 0.0, 0.1),
    bucket(38, 0.1, 0.1),
    bucket(52, 0.2, 0.1),
    bucket(64, 0.3, 0.1),
    bucket(73, 0.4, 0.1),
    bucket(81, 0.5, 0.1),
    bucket(87, 0.6, 0.1),
    bucket(92, 0.7, 0.1),
    bucket(96, 0.8, 0.1),
    bucket(100, 0.9, 0.1),
];

/// Fraction of a cluster's systems in each zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaporationFractions {
    pub core: f64,
    pub tidal: f64,
    pub halo: f64,
}

impl EvaporationFractions {
    const fn new(core: f64, tidal: f64, halo: f64) -> Self {
        Self { core, tidal, halo }
    }

    /// Fraction still bound to the cluster; the rest has evaporated.
    pub fn retained(&self) -> f64 {
        self.core + self.tidal + self.halo
    }
}

/// Evaporation table: rows apply to effective ages below the first column.
const EVAPORATION_TABLE: [(f64, EvaporationFractions); 10] = [
    (0.1, EvaporationFractions::new(1.00, 0.00, 0.00)),
    (0.2, EvaporationFractions::new(0.80, 0.20, 0.00)),
    (0.3, EvaporationFractions::new(0.64, 0.32, 0.04)),
    (0.4, EvaporationFractions::new(0.51, 0.38, 0.10)),
    (0.5, EvaporationFractions::new(0.41, 0.41, 0.15)),
    (0.6, EvaporationFractions::new(0.33, 0.41, 0.20)),
    (0.7, EvaporationFractions::new(0.26, 0.39, 0.25)),
    (0.8, EvaporationFractions::new(0.21, 0.37, 0.28)),
    (0.9, EvaporationFractions::new(0.17, 0.33, 0.29)),
    (1.0, EvaporationFractions::new(0.13, 0.30, 0.30)),
];

/// Row for effective ages of 1.0 and above
const EVAPORATION_LATE: EvaporationFractions = EvaporationFractions::new(0.11, 0.27, 0.30);

/// Zone fractions for a cluster of the given effective age (Gyr).
pub fn evaporation_fractions(effective_age_gyr: f64) -> EvaporationFractions {
    EVAPORATION_TABLE
        .iter()
        .find(|(below, _)| effective_age_gyr < *below)
        .map(|(_, fractions)| *fractions)
        .unwrap_or(EVAPORATION_LATE)
}

/// Gravitational cohesion of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Binding {
    Tight,
    Loose,
}

impl Binding {
    pub fn roll(dice: &mut Dice) -> Self {
        if dice.roll_d6(3) <= TIGHT_BINDING_MAX_ROLL {
            Binding::Tight
        } else {
            Binding::Loose
        }
    }

    pub fn is_tight(&self) -> bool {
        matches!(self, Binding::Tight)
    }

    fn age_table(&self) -> &'static [AgeBucket] {
        match self {
            Binding::Tight => &TIGHT_AGE_TABLE,
            Binding::Loose => &LOOSE_AGE_TABLE,
        }
    }

    /// Cluster age in Gyr from a d100 roll and a uniform draw within the bucket.
    pub fn roll_age(&self, dice: &mut Dice) -> f64 {
        let table = self.age_table();
        let roll = dice.roll_d100();
        let row = table
            .iter()
            .find(|b| roll <= b.max_roll)
            .unwrap_or(&table[table.len() - 1]);
        row.base_gyr + row.range_gyr * dice.roll_percentile()
    }

    /// Age used for the evaporation lookup.
    pub fn effective_age(&self, age_gyr: f64) -> f64 {
        match self {
            Binding::Tight => age_gyr / 10.0,
            Binding::Loose => age_gyr,
        }
    }
}

/// Concentric regions of a cluster, as fractions of its radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClusterZone {
    Core,
    Tidal,
    ExtendedHalo,
}

impl ClusterZone {
    pub const ALL: [ClusterZone; 3] = [
        ClusterZone::Core,
        ClusterZone::Tidal,
        ClusterZone::ExtendedHalo,
    ];

    /// Inner and outer radius as fractions of the cluster radius.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            ClusterZone::Core => (0.0, 0.05),
            ClusterZone::Tidal => (0.05, 0.20),
            ClusterZone::ExtendedHalo => (0.20, 1.00),
        }
    }
}

/// Number of systems in each zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneCounts {
    pub core: usize,
    pub tidal: usize,
    pub halo: usize,
    /// Systems that have left the cluster
    pub evaporated: usize,
}

impl ZoneCounts {
    /// Split `total` systems between the zones.
    ///
    /// Each zone gets the floor of its share. A shortfall against `total` is
    /// made up one system to the core, then one to the tidal zone; the halo
    /// is never adjusted. Whatever is still unplaced evaporated.
    pub fn allocate(fractions: EvaporationFractions, total: usize) -> Self {
        let n = total as f64;
        let mut core = (fractions.core * n).floor() as usize;
        let mut tidal = (fractions.tidal * n).floor() as usize;
        let halo = (fractions.halo * n).floor() as usize;

        if core + tidal + halo < total {
            core += 1;
            if core + tidal + halo < total {
                tidal += 1;
            }
        }

        Self {
            core,
            tidal,
            halo,
            evaporated: total.saturating_sub(core + tidal + halo),
        }
    }

    /// Systems still bound to the cluster.
    pub fn placed(&self) -> usize {
        self.core + self.tidal + self.halo
    }

    pub fn total(&self) -> usize {
        self.placed() + self.evaporated
    }

    pub fn get(&self, zone: ClusterZone) -> usize {
        match zone {
            ClusterZone::Core => self.core,
            ClusterZone::Tidal => self.tidal,
            ClusterZone::ExtendedHalo => self.halo,
        }
    }
}

/// The rolled parameters of one open cluster, before placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProfile {
    pub binding: Binding,
    pub age: Time,
    pub population: StellarPopulation,
    pub radius: Length,
    pub total_systems: usize,
    /// Age used for the evaporation lookup, in Gyr
    pub effective_age_gyr: f64,
    pub fractions: EvaporationFractions,
    pub zones: ZoneCounts,
}

impl ClusterProfile {
    /// Roll binding, age, size and zoning for a new cluster.
    pub fn roll(dice: &mut Dice) -> Self {
        let binding = Binding::roll(dice);
        debug!("cluster binding: {:?}", binding);

        let age_gyr = binding.roll_age(dice);
        let population = StellarPopulation::from_cluster_age(age_gyr);
        debug!("cluster age: {:.3} Gyr ({})", age_gyr, population);

        // 2d6 / 2 parsecs, give or take a little
        let mut radius = f64::from(dice.roll_d6(2)) / 2.0;
        radius += dice.vary_by_fraction(1.0, RADIUS_JITTER_FRACTION) - 1.0;
        debug!("cluster radius: {:.3} pc", radius);

        let mut count_factor = f64::from(dice.roll_d6(2)) / 2.0;
        if binding.is_tight() && count_factor < TIGHT_MIN_COUNT_FACTOR {
            count_factor = TIGHT_MIN_COUNT_FACTOR;
        }
        let total_systems = (count_factor * radius.powi(3)).floor().max(0.0) as usize;
        debug!("cluster systems: {}", total_systems);

        let effective_age_gyr = binding.effective_age(age_gyr);
        let fractions = evaporation_fractions(effective_age_gyr);
        let zones = ZoneCounts::allocate(fractions, total_systems);
        debug!(
            "effective age {:.3} Gyr: core {} / tidal {} / halo {} / evaporated {}",
            effective_age_gyr, zones.core, zones.tidal, zones.halo, zones.evaporated
        );

        Self {
            binding,
            age: Time::from_gyr(age_gyr),
            population,
            radius: Length::from_parsecs(radius),
            total_systems,
            effective_age_gyr,
            fractions,
            zones,
        }
    }

    /// Place the cluster's systems, zone by zone, around its own origin.
    ///
    /// Ages are the cluster age varied by ±5%.
    pub fn populate(&self, dice: &mut Dice) -> Catalog {
        let mut catalog = Catalog::new(CatalogKind::Survey, self.radius);
        let radius = self.radius.to_parsecs();
        let age_gyr = self.age.to_gyr();

        for zone in ClusterZone::ALL {
            let (min_fraction, max_fraction) = zone.bounds();
            for _ in 0..self.zones.get(zone) {
                let age = Time::from_gyr(dice.vary_5pct(age_gyr));
                let position = Point3::from(dice.shell(min_fraction, max_fraction) * radius);
                catalog.push(StarSystem::new(self.population, age, position));
            }
        }

        catalog
    }
}

/// Roll and place a new open cluster centered on its own origin.
///
/// A cluster with no systems is valid and yields an empty catalog.
pub fn open_cluster(dice: &mut Dice) -> Catalog {
    ClusterProfile::roll(dice).populate(dice)
}

/// Stellar associations are generated exactly like open clusters.
pub fn stellar_association(dice: &mut Dice) -> Catalog {
    open_cluster(dice)
}
