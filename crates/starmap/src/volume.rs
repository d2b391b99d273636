//! Region sizing
//!
//! Turns a target number of systems into the smallest volume of space likely
//! to hold them, and the radius of a sphere with that volume. Three targets:
//! - Earth-like systems, at 2 × 150 pc³ per Sol-like system
//! - any systems in a region like the solar neighborhood, at 12 pc³ each
//! - any systems at a given galactic position, at 1 / combined density each
//!
//! Each takes a `tweak` that nudges the per-system volume. A tweak outside its
//! window is ignored rather than rejected.

use serde::{Deserialize, Serialize};
use stellar::DensityTable;
use units::Length;

/// Cubic parsecs per Sol-like system
pub const EARTH_LIKE_VOLUME_PER_SYSTEM: f64 = 150.0;
/// Largest tweak added to [`EARTH_LIKE_VOLUME_PER_SYSTEM`]
pub const EARTH_LIKE_MAX_TWEAK: f64 = 5.0;
/// Cubic parsecs per star system near the Sun
pub const REFERENCE_VOLUME_PER_SYSTEM: f64 = 12.0;
/// Largest tweak for the neighborhood and galactic position targets
pub const NEIGHBORHOOD_MAX_TWEAK: f64 = 1.0;

fn tweak_applies(tweak: f64, max: f64) -> bool {
    0.0 < tweak && tweak <= max
}

/// Smallest volume (pc³) likely to contain `n` systems with Earth-like planets.
///
/// A tweak in (0, 5] is added to the 150 pc³ per Sol-like system.
pub fn volume_for_earth_like(n: usize, tweak: f64) -> f64 {
    let mut per_system = EARTH_LIKE_VOLUME_PER_SYSTEM;
    if tweak_applies(tweak, EARTH_LIKE_MAX_TWEAK) {
        per_system += tweak;
    }
    n as f64 * 2.0 * per_system
}

/// Smallest volume (pc³) likely to contain `n` systems in a region like the
/// solar neighborhood.
///
/// A tweak in (0, 1] is added to the 12 pc³ per system.
pub fn volume_for_reference_neighborhood(n: usize, tweak: f64) -> f64 {
    let mut per_system = REFERENCE_VOLUME_PER_SYSTEM;
    if tweak_applies(tweak, NEIGHBORHOOD_MAX_TWEAK) {
        per_system += tweak;
    }
    n as f64 * per_system
}

/// Smallest volume (pc³) likely to contain `n` systems `radial` parsecs from the
/// galactic center and `vertical` parsecs off the plane.
///
/// A tweak in (0, 1] scales the per-system volume by `1 + tweak`.
pub fn volume_for_galactic_position(n: usize, radial: f64, vertical: f64, tweak: f64) -> f64 {
    let table = DensityTable::at_galactic_position(radial, vertical);
    volume_for_table(n, &table, tweak)
}

fn volume_for_table(n: usize, table: &DensityTable, tweak: f64) -> f64 {
    let mut per_system = table.combined().volume_per_system();
    if tweak_applies(tweak, NEIGHBORHOOD_MAX_TWEAK) {
        per_system += per_system * tweak;
    }
    n as f64 * per_system
}

/// Radius of a sphere holding at least `volume` cubic parsecs.
///
/// Rounded up to a whole parsec so the region never falls short of the volume.
pub fn radius_for_volume(volume: f64) -> Length {
    Length::from_parsecs((3.0 * volume / (4.0 * std::f64::consts::PI)).cbrt().ceil())
}

/// Density table plus the region it will populate
///
/// Built once per generation request and read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationModel {
    pub table: DensityTable,
    /// Region volume in cubic parsecs
    pub volume: f64,
    /// Radius of the spherical region, from [`radius_for_volume`]
    pub radius: Length,
}

impl PopulationModel {
    pub fn new(table: DensityTable, volume: f64) -> Self {
        Self {
            table,
            volume,
            radius: radius_for_volume(volume),
        }
    }

    /// Solar neighborhood populations sized for `n` Earth-like systems.
    pub fn for_earth_like(n: usize, tweak: f64) -> Self {
        Self::new(DensityTable::reference(), volume_for_earth_like(n, tweak))
    }

    /// Solar neighborhood populations sized for `n` systems.
    pub fn for_reference_neighborhood(n: usize, tweak: f64) -> Self {
        Self::new(
            DensityTable::reference(),
            volume_for_reference_neighborhood(n, tweak),
        )
    }

    /// Position-dependent populations sized for `n` systems.
    pub fn for_galactic_position(n: usize, radial: f64, vertical: f64, tweak: f64) -> Self {
        let table = DensityTable::at_galactic_position(radial, vertical);
        let volume = volume_for_table(n, &table, tweak);
        Self::new(table, volume)
    }

    /// Number of systems the model expects in its volume, before variance.
    pub fn expected_systems(&self) -> f64 {
        self.table.combined().count_in(self.volume)
    }
}
