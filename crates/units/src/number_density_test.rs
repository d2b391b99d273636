mod tests {
    use approx::assert_relative_eq;

    use crate::number_density::NumberDensity;

    #[test]
    fn test_number_density_conversions() {
        let density = NumberDensity::per_cubic_parsec(0.081129);
        let per_ly3 = density.to_per_cubic_light_year();

        // A cubic parsec holds ~34.7 cubic light years
        assert_relative_eq!(per_ly3, 0.081129 / 34.695, epsilon = 1e-5);
        assert_relative_eq!(
            NumberDensity::per_cubic_light_year(per_ly3).to_per_cubic_parsec(),
            0.081129,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_number_density_counts() {
        let density = NumberDensity::per_cubic_parsec(0.08);

        assert_relative_eq!(density.count_in(1_000.0), 80.0);
        assert_relative_eq!(density.volume_per_system(), 12.5);
        assert!(NumberDensity::zero().volume_per_system().is_infinite());
    }

    #[test]
    fn test_number_density_sum() {
        let groups = [
            NumberDensity::per_cubic_parsec(0.0344),
            NumberDensity::per_cubic_parsec(0.0272),
            NumberDensity::per_cubic_parsec(0.0158),
        ];
        let combined: NumberDensity = groups.iter().copied().sum();

        assert_relative_eq!(combined.to_per_cubic_parsec(), 0.0774, epsilon = 1e-12);
        assert_relative_eq!((combined * 2.0).to_per_cubic_parsec(), 0.1548, epsilon = 1e-12);
    }
}
