//! Background population of a region.

use log::debug;
use nalgebra::Point3;
use stellar::Dice;

use crate::catalog::{Catalog, CatalogKind};
use crate::star_system::StarSystem;
use crate::volume::PopulationModel;

/// Fill the model's region with its diffuse stellar populations
///
/// For each population group, in table order:
/// 1. expected count = density × volume, varied by ±10% and rounded up
/// 2. each system gets an age uniform over the group's age range
/// 3. and a position uniform by volume within the region radius
///
/// Every group with a positive density contributes at least one system.
pub fn background_population(model: &PopulationModel, dice: &mut Dice) -> Catalog {
    let mut catalog = Catalog::new(CatalogKind::Survey, model.radius);
    let radius = model.radius.to_parsecs();

    for group in model.table.groups() {
        let expected = group.density.count_in(model.volume);
        let count = dice.vary_10pct(expected).ceil() as usize;
        debug!(
            "{}: expected {:.2} systems, placing {}",
            group.population, expected, count
        );

        for _ in 0..count {
            let age = group.age_at(dice.roll_percentile());
            let position = Point3::from(dice.unit_sphere() * radius);
            catalog.push(StarSystem::new(group.population, age, position));
        }
    }

    catalog
}
