//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogKind;
use crate::error::GeneratorError;
use crate::volume::PopulationModel;

/// Closest a neighborhood may sit to the galactic center, in parsecs
pub const MIN_RADIAL_OFFSET_PC: f64 = 300.0;
/// Farthest a neighborhood may sit from the galactic center, in parsecs
pub const MAX_RADIAL_OFFSET_PC: f64 = 30_000.0;
/// Farthest a neighborhood may sit above or below the plane, in parsecs
pub const MAX_VERTICAL_OFFSET_PC: f64 = 1_250.0;

/// What the target system count refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizingTarget {
    /// Star systems of any kind
    #[default]
    Systems,
    /// Systems with Earth-like planets
    EarthLikeSystems,
}

/// Position of the neighborhood within the galaxy, in parsecs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticOffset {
    /// Distance from the galactic center along the plane
    pub radial: f64,
    /// Distance above or below the plane
    pub vertical: f64,
}

impl GalacticOffset {
    pub fn new(radial: f64, vertical: f64) -> Self {
        Self { radial, vertical }
    }

    /// Check the offset against the range the disk model is valid for.
    ///
    /// Signs are ignored: `300 <= |radial| <= 30,000` and `|vertical| <= 1,250`.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !self.radial.is_finite() || !self.vertical.is_finite() {
            return Err(GeneratorError::NonFiniteOffset);
        }

        let radial = self.radial.abs();
        let vertical = self.vertical.abs();
        if radial < MIN_RADIAL_OFFSET_PC {
            return Err(GeneratorError::OffsetTooSmall { radial });
        }
        if radial > MAX_RADIAL_OFFSET_PC || vertical > MAX_VERTICAL_OFFSET_PC {
            return Err(GeneratorError::OffsetTooLarge { radial, vertical });
        }
        Ok(())
    }
}

/// Settings for a [`Generator`](crate::Generator)
///
/// # Examples
///
/// ```
/// use starmap::{CatalogKind, GeneratorConfig, SizingTarget};
///
/// // 40 Earth-like systems near the Sun
/// let config = GeneratorConfig::new(40)
///     .with_target(SizingTarget::EarthLikeSystems)
///     .with_seed(0xcafe);
///
/// // 1,000 systems halfway out the disk, 200 pc above the plane
/// let config = GeneratorConfig::new(1_000)
///     .with_kind(CatalogKind::Reference)
///     .with_galactic_offset(4_000.0, 200.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Number of systems to size the region for
    #[serde(default)]
    pub target_systems: usize,

    #[serde(default)]
    pub target: SizingTarget,

    /// Nudge to the per-system volume; ignored outside its window
    #[serde(default)]
    pub tweak: f64,

    #[serde(default)]
    pub kind: CatalogKind,

    /// Seed for the generator's dice; required unless dice are supplied
    #[serde(default)]
    pub seed: Option<u64>,

    /// Selects the position-dependent density model when set
    #[serde(default)]
    pub galactic_offset: Option<GalacticOffset>,
}

impl GeneratorConfig {
    pub fn new(target_systems: usize) -> Self {
        Self {
            target_systems,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: SizingTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_tweak(mut self, tweak: f64) -> Self {
        self.tweak = tweak;
        self
    }

    pub fn with_kind(mut self, kind: CatalogKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_galactic_offset(mut self, radial: f64, vertical: f64) -> Self {
        self.galactic_offset = Some(GalacticOffset::new(radial, vertical));
        self
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        match &self.galactic_offset {
            Some(offset) => offset.validate(),
            None => Ok(()),
        }
    }

    /// Population model for these settings.
    ///
    /// A galactic offset selects the position-dependent densities; otherwise
    /// the solar neighborhood table is sized for the target.
    pub fn population_model(&self) -> PopulationModel {
        let n = self.target_systems;
        match (self.galactic_offset, self.target) {
            (Some(offset), _) => {
                PopulationModel::for_galactic_position(n, offset.radial, offset.vertical, self.tweak)
            }
            (None, SizingTarget::EarthLikeSystems) => PopulationModel::for_earth_like(n, self.tweak),
            (None, SizingTarget::Systems) => {
                PopulationModel::for_reference_neighborhood(n, self.tweak)
            }
        }
    }
}
