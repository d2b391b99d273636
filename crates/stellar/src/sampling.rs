use std::f64::consts::PI;

use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample a point uniformly by volume inside the unit sphere
///
/// Uses inverse transform sampling on each spherical coordinate:
/// - radius `r = ∛u`, since the volume inside radius r grows as r³
/// - inclination `θ = acos(2u - 1)`, uniform over the sphere's surface
///   (a uniform θ would crowd points at the poles)
/// - azimuth `φ = 2πu`
///
/// # Returns
/// Unscaled Cartesian coordinates with `|p| <= 1`; multiply by the region
/// radius before use.
pub fn sample_unit_sphere(rng: &mut ChaChaRng) -> Vector3<f64> {
    let r = rng.random::<f64>().cbrt();
    spherical_to_cartesian(rng, r)
}

/// Sample a point uniformly by volume inside a spherical shell
///
/// The shell is bounded by `min_fraction` and `max_fraction` of a unit radius:
///
/// ```text
/// r = ∛(u·(max³ - min³) + min³)
/// ```
///
/// With `min_fraction = 0` and `max_fraction = 1` this is the unit sphere.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `min_fraction` - Inner radius as a fraction of the outer scale (>= 0)
/// * `max_fraction` - Outer radius as a fraction of the outer scale (>= `min_fraction`)
///
/// # Returns
/// Unscaled Cartesian coordinates with `min_fraction <= |p| <= max_fraction`
pub fn sample_shell(rng: &mut ChaChaRng, min_fraction: f64, max_fraction: f64) -> Vector3<f64> {
    let inner = min_fraction.powi(3);
    let outer = max_fraction.powi(3);
    let u: f64 = rng.random();
    let r = (u * (outer - inner) + inner).cbrt();
    spherical_to_cartesian(rng, r)
}

fn spherical_to_cartesian(rng: &mut ChaChaRng, r: f64) -> Vector3<f64> {
    let theta = (2.0 * rng.random::<f64>() - 1.0).acos();
    let phi = 2.0 * PI * rng.random::<f64>();
    Vector3::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}
