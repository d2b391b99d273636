use approx::assert_relative_eq;

use crate::volume::{
    PopulationModel, radius_for_volume, volume_for_earth_like, volume_for_galactic_position,
    volume_for_reference_neighborhood,
};

#[test]
fn earth_like_volume_for_bob() {
    assert_relative_eq!(volume_for_earth_like(40, 0.0), 12_000.0);
    assert_relative_eq!(volume_for_earth_like(40, 5.0), 40.0 * 2.0 * 155.0);
}

#[test]
fn earth_like_tweak_outside_window_is_ignored() {
    let baseline = volume_for_earth_like(40, 0.0);

    for tweak in [-3.0, -0.0001, 0.0, 5.0001, 6.0, 1e9, f64::NAN, f64::INFINITY] {
        assert_eq!(
            volume_for_earth_like(40, tweak),
            baseline,
            "tweak {tweak} should have no effect"
        );
    }
}

#[test]
fn reference_neighborhood_volume_for_alice() {
    assert_relative_eq!(volume_for_reference_neighborhood(100, 1.0), 1_300.0);
    assert_relative_eq!(volume_for_reference_neighborhood(100, 0.0), 1_200.0);
    assert_relative_eq!(volume_for_reference_neighborhood(100, 1.5), 1_200.0);
}

#[test]
fn galactic_position_volume_near_sun() {
    let volume = volume_for_galactic_position(100, 8_000.0, 20.0, 0.0);
    assert_relative_eq!(volume, 1_235.378, epsilon = 1e-3);

    // Tweak scales the per-system volume
    let tweaked = volume_for_galactic_position(100, 8_000.0, 20.0, 0.5);
    assert_relative_eq!(tweaked, volume * 1.5, epsilon = 1e-9);

    // Offsets are magnitudes
    assert_relative_eq!(
        volume_for_galactic_position(100, -8_000.0, -20.0, 0.0),
        volume,
        epsilon = 1e-9
    );
}

#[test]
fn zero_target_needs_no_volume() {
    assert_eq!(volume_for_earth_like(0, 2.0), 0.0);
    assert_eq!(volume_for_reference_neighborhood(0, 0.5), 0.0);
    assert_eq!(radius_for_volume(0.0).to_parsecs(), 0.0);
}

#[test]
fn radius_rounds_up() {
    // 12,000 pc³ → r ≈ 14.2 pc
    let radius = radius_for_volume(12_000.0);
    assert_eq!(radius.to_parsecs(), 15.0);
    assert!(radius.sphere_volume() >= 12_000.0);
}

#[test]
fn radius_is_monotonic_in_target() {
    let mut previous = 0.0;
    for n in 0..2_000 {
        let radius = PopulationModel::for_reference_neighborhood(n, 0.0)
            .radius
            .to_parsecs();
        assert!(radius >= previous, "radius shrank at n = {n}");
        previous = radius;
    }
}

#[test]
fn models_carry_their_tables() {
    let earth = PopulationModel::for_earth_like(40, 0.0);
    assert_relative_eq!(earth.volume, 12_000.0);
    assert_eq!(earth.radius.to_parsecs(), 15.0);
    assert_relative_eq!(
        earth.table.combined().to_per_cubic_parsec(),
        0.081129,
        epsilon = 1e-12
    );

    let position = PopulationModel::for_galactic_position(100, 8_000.0, 20.0, 0.0);
    assert_relative_eq!(position.volume, 1_235.378, epsilon = 1e-3);
    // Sized so the expected count matches the target
    assert_relative_eq!(position.expected_systems(), 100.0, epsilon = 1e-9);
}
