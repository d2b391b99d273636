//! End-to-end catalog generation through the public API.

use nalgebra::{Point3, Vector3};
use starmap::{
    Catalog, CatalogKind, Dice, Generator, GeneratorConfig, SizingTarget, StellarPopulation,
    open_cluster,
};

#[test]
fn bob_wants_forty_earth_like_systems() {
    let config = GeneratorConfig::new(40)
        .with_target(SizingTarget::EarthLikeSystems)
        .with_kind(CatalogKind::Reference)
        .with_seed(0xcafe);
    let mut generator = Generator::new(config).unwrap();
    assert_eq!(generator.model().volume, 12_000.0);

    generator.background_population();
    let at = generator.random_zoned_position(2.0 / 3.0, 1.0);
    let added = generator.add_open_cluster(at);
    generator.sort_catalog();

    let catalog = generator.catalog();
    assert!(catalog.len() > 850, "{} systems", catalog.len());
    assert!(catalog.len() >= added);

    for pair in catalog.systems().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.age < b.age || (a.age == b.age && a.population <= b.population));
    }

    for population in StellarPopulation::ALL {
        assert!(catalog.iter().any(|s| s.population == population));
    }
}

#[test]
fn cluster_composes_into_a_distant_neighborhood() {
    let config = GeneratorConfig::new(2_000)
        .with_galactic_offset(12_000.0, -600.0)
        .with_seed(7);
    let mut generator = Generator::new(config).unwrap();
    generator.background_population();

    let mut dice = Dice::from_seed(8);
    let cluster = open_cluster(&mut dice);
    let mut catalog: Catalog = generator.into_catalog();
    let before = catalog.len();

    let offset = Vector3::new(10.0, 0.0, -10.0);
    catalog.merge(&cluster, offset);
    assert_eq!(catalog.len(), before + cluster.len());

    catalog.sort_by_distance(Point3::from(offset));
    if !cluster.is_empty() {
        // The cluster's core sits right at the offset
        let nearest = catalog.systems()[0].distance().unwrap();
        assert!(nearest <= cluster.radius.to_parsecs());
    }
}

#[test]
fn catalogs_export_as_json() {
    let mut generator = Generator::new(GeneratorConfig::new(50).with_seed(3)).unwrap();
    generator.background_population();
    generator.sort_catalog_by_distance(Point3::origin());
    let catalog = generator.into_catalog();

    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.contains("\"kind\":\"survey\""));
    assert!(!json.contains("distance"));

    let restored: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, catalog);
    assert!(restored.iter().all(|s| s.distance().is_none()));
}
