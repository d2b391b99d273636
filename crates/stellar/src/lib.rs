//! Stellar populations and the random machinery used to place them.
//!
//! Density tables follow the published population model for the galactic
//! disk and halo; [`Dice`] wraps a seeded ChaCha stream so every catalog is
//! reproducible from its seed.

pub mod density;
pub mod dice;
pub mod population;
pub mod sampling;

#[cfg(test)]
mod population_test;

// Re-export types
pub use density::{DensityTable, PopulationDensity};
pub use dice::Dice;
pub use population::StellarPopulation;

// Re-export sampling functions
pub use sampling::{sample_shell, sample_unit_sphere};
