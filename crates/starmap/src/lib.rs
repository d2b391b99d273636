//! Procedural star catalogs
//!
//! Generates three-dimensional catalogs of star systems from published
//! stellar population tables:
//! - region sizing from a target system count ([`PopulationModel`])
//! - the diffuse background population of a region ([`background_population`])
//! - bound open clusters with age-dependent evaporation ([`open_cluster`])
//! - merging and sorting catalogs ([`Catalog`])
//!
//! [`Generator`] ties these together behind a validated [`GeneratorConfig`].

pub mod background;
pub mod catalog;
pub mod cluster;
pub mod config;
pub mod error;
pub mod generator;
pub mod star_system;
pub mod volume;

#[cfg(test)]
mod background_test;
#[cfg(test)]
mod volume_test;

/// Crate version, fixed at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogKind};
pub use cluster::{Binding, ClusterProfile, ClusterZone, EvaporationFractions, ZoneCounts};
pub use config::{GalacticOffset, GeneratorConfig, SizingTarget};
pub use error::GeneratorError;
pub use generator::Generator;
pub use star_system::StarSystem;
pub use volume::PopulationModel;

// Re-export generation functions
pub use background::background_population;
pub use cluster::{evaporation_fractions, open_cluster, stellar_association};
pub use volume::{
    radius_for_volume, volume_for_earth_like, volume_for_galactic_position,
    volume_for_reference_neighborhood,
};

// Re-export stellar types for convenience
pub use stellar::{DensityTable, Dice, PopulationDensity, StellarPopulation};
