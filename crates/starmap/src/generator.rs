//! Catalog generation front end.

use log::info;
use nalgebra::Point3;
use stellar::Dice;
use units::Length;

use crate::background::background_population;
use crate::catalog::Catalog;
use crate::cluster::open_cluster;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::volume::PopulationModel;

/// Builds a catalog for one region from a validated configuration
///
/// The generator owns its dice, so two generators built from the same
/// configuration and seed produce identical catalogs.
///
/// # Example
/// ```
/// use starmap::{Generator, GeneratorConfig};
///
/// let mut generator = Generator::new(GeneratorConfig::new(100).with_seed(0xcafe)).unwrap();
/// generator.background_population();
/// generator.sort_catalog();
/// assert!(!generator.catalog().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    dice: Dice,
    model: PopulationModel,
    catalog: Catalog,
}

impl Generator {
    /// Create a generator seeded from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let seed = config.seed.ok_or(GeneratorError::MissingRandomSource)?;
        Self::with_dice(config, Dice::from_seed(seed))
    }

    /// Create a generator that rolls with `dice`; `config.seed` is ignored.
    pub fn with_dice(config: GeneratorConfig, dice: Dice) -> Result<Self, GeneratorError> {
        config.validate()?;

        let model = config.population_model();
        info!(
            "population model: {:.1} pc³, radius {} pc, {:.1} systems expected",
            model.volume,
            model.radius.to_parsecs(),
            model.expected_systems()
        );

        let catalog = Catalog::new(config.kind, model.radius);
        Ok(Self {
            config,
            dice,
            model,
            catalog,
        })
    }

    /// Replace the catalog with a fresh background population.
    pub fn background_population(&mut self) -> &Catalog {
        let mut catalog = background_population(&self.model, &mut self.dice);
        catalog.kind = self.config.kind;
        info!("background population: {} systems", catalog.len());
        self.catalog = catalog;
        &self.catalog
    }

    /// Roll a new open cluster centered on its own origin.
    ///
    /// The cluster is returned separately; see [`Generator::add_open_cluster`]
    /// to place one in this generator's catalog.
    pub fn open_cluster(&mut self) -> Catalog {
        let mut cluster = open_cluster(&mut self.dice);
        cluster.kind = self.config.kind;
        cluster
    }

    /// Stellar associations are rolled exactly like open clusters.
    pub fn stellar_association(&mut self) -> Catalog {
        self.open_cluster()
    }

    /// Roll an open cluster and merge it into the catalog centered at `at`.
    ///
    /// Returns the number of systems added.
    pub fn add_open_cluster(&mut self, at: Point3<f64>) -> usize {
        let cluster = self.open_cluster();
        info!(
            "open cluster at ({:.2}, {:.2}, {:.2}): {} systems",
            at.x,
            at.y,
            at.z,
            cluster.len()
        );
        self.catalog.merge(&cluster, at.coords);
        cluster.len()
    }

    /// Sort the catalog youngest first.
    pub fn sort_catalog(&mut self) {
        self.catalog.sort_by_age();
    }

    /// Sort the catalog nearest first to `origin`.
    pub fn sort_catalog_by_distance(&mut self, origin: Point3<f64>) {
        self.catalog.sort_by_distance(origin);
    }

    /// Uniformly random point within the region.
    pub fn random_position(&mut self) -> Point3<f64> {
        Point3::from(self.dice.unit_sphere() * self.radius().to_parsecs())
    }

    /// Uniformly random point between `min_fraction` and `max_fraction` of
    /// the region radius.
    pub fn random_zoned_position(&mut self, min_fraction: f64, max_fraction: f64) -> Point3<f64> {
        let radius = self.radius().to_parsecs();
        Point3::from(self.dice.shell(min_fraction, max_fraction) * radius)
    }

    /// Radius of the region in parsecs.
    pub fn radius(&self) -> Length {
        self.model.radius
    }

    pub fn model(&self) -> &PopulationModel {
        &self.model
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }
}
