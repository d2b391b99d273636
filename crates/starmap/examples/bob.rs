//! Bob's map: a thousand systems around the Sun, optionally with an open
//! cluster two thirds of the way out.
//!
//! Run with: cargo run -p starmap --example bob -- [--cluster]

use std::time::Instant;

use starmap::{CatalogKind, Generator, GeneratorConfig, GeneratorError};

fn main() -> Result<(), GeneratorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let add_cluster = std::env::args().any(|arg| arg == "--cluster");
    let started = Instant::now();

    let config = GeneratorConfig::new(1_000)
        .with_kind(CatalogKind::Reference)
        .with_seed(0xcafe);
    let mut generator = Generator::new(config)?;

    generator.background_population();
    log::info!(
        "{} star systems, {} pc radius",
        generator.catalog().len(),
        generator.radius().to_parsecs()
    );

    if add_cluster {
        let at = generator.random_zoned_position(2.0 / 3.0, 1.0);
        generator.add_open_cluster(at);
    }
    generator.sort_catalog();

    for (n, system) in generator.catalog().iter().enumerate() {
        let p = system.position;
        println!(
            "{:4}: {:<26} {:6.3} Gyr  ({:7.2} {:7.2} {:7.2})",
            n + 1,
            system.population.name(),
            system.age.to_gyr(),
            p.x,
            p.y,
            p.z
        );
    }

    log::info!("starmap {} took {:?}", starmap::VERSION, started.elapsed());
    Ok(())
}
