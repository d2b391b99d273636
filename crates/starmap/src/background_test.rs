use std::collections::HashMap;

use stellar::{Dice, StellarPopulation};

use crate::background::background_population;
use crate::volume::PopulationModel;

#[test]
fn every_group_is_represented() {
    let model = PopulationModel::for_earth_like(40, 0.0);
    let mut dice = Dice::from_seed(0xcafe);
    let catalog = background_population(&model, &mut dice);

    let mut counts: HashMap<StellarPopulation, usize> = HashMap::new();
    for system in &catalog {
        *counts.entry(system.population).or_default() += 1;
    }

    for population in StellarPopulation::ALL {
        assert!(
            counts.get(&population).copied().unwrap_or(0) >= 1,
            "{population} should contribute at least one system"
        );
    }
}

#[test]
fn group_counts_stay_within_variance() {
    let model = PopulationModel::for_earth_like(40, 0.0);
    let mut dice = Dice::from_seed(42);
    let catalog = background_population(&model, &mut dice);

    for group in model.table.groups() {
        let expected = group.density.count_in(model.volume);
        let count = catalog
            .iter()
            .filter(|s| s.population == group.population)
            .count() as f64;

        assert!(count >= (expected * 0.9).ceil() - 1e-9, "{}: {count}", group.population);
        assert!(count <= (expected * 1.1).ceil() + 1e-9, "{}: {count}", group.population);
    }
}

#[test]
fn systems_are_emitted_in_table_order() {
    let model = PopulationModel::for_reference_neighborhood(200, 0.0);
    let mut dice = Dice::from_seed(5);
    let catalog = background_population(&model, &mut dice);

    let populations: Vec<_> = catalog.iter().map(|s| s.population).collect();
    let mut sorted = populations.clone();
    sorted.sort();
    assert_eq!(populations, sorted);
}

#[test]
fn ages_and_positions_respect_the_model() {
    let model = PopulationModel::for_reference_neighborhood(500, 0.0);
    let mut dice = Dice::from_seed(9);
    let catalog = background_population(&model, &mut dice);
    let radius = model.radius.to_parsecs();

    assert_eq!(catalog.radius, model.radius);
    for system in &catalog {
        let group = model.table.get(system.population);
        let age = system.age.to_gyr();
        assert!(age >= group.base_age.to_gyr());
        assert!(age < group.max_age().to_gyr() + 1e-9);

        let distance = system.position.coords.norm();
        assert!(distance <= radius + 1e-9, "{distance} outside radius {radius}");
    }
}

#[test]
fn same_seed_same_catalog() {
    let model = PopulationModel::for_galactic_position(300, 8_000.0, 20.0, 0.0);

    let a = background_population(&model, &mut Dice::from_seed(77));
    let b = background_population(&model, &mut Dice::from_seed(77));
    let c = background_population(&model, &mut Dice::from_seed(78));

    assert_eq!(a, b);
    assert_ne!(a, c);
}
