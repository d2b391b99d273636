mod tests {
    use std::cmp::Ordering;

    use approx::assert_relative_eq;

    use crate::time::{GYR_TO_YEARS, MYR_TO_YEARS, Time};

    #[test]
    fn test_time_conversions() {
        let one_gyr = Time::from_gyr(1.0);
        assert_relative_eq!(one_gyr.to_years(), GYR_TO_YEARS);
        assert_relative_eq!(one_gyr.to_myr(), 1_000.0);

        let one_myr = Time::from_myr(1.0);
        assert_relative_eq!(one_myr.to_years(), MYR_TO_YEARS);
        assert_relative_eq!(one_myr.to_gyr(), 0.001);

        let one_year = Time::from_years(1.0);
        assert_relative_eq!(one_year.to_years(), 1.0);
        assert_relative_eq!(Time::from_years(GYR_TO_YEARS).to_gyr(), 1.0);

        // Population ages round trip through years
        let age = Time::from_gyr(9.5) + Time::from_gyr(3.0) * 0.25;
        assert_relative_eq!(age.to_gyr(), 10.25);
    }

    #[test]
    fn test_time_arithmetic() {
        let a = Time::from_gyr(5.0);
        let b = Time::from_gyr(2.0);

        assert_relative_eq!((a - b).to_gyr(), 3.0);
        assert_relative_eq!((a / 2.0).to_gyr(), 2.5);
        assert_relative_eq!((0.5 * b).to_gyr(), 1.0);
        assert_relative_eq!(a / b, 2.5);
    }

    #[test]
    fn test_time_total_cmp() {
        let young = Time::from_gyr(0.1);
        let old = Time::from_gyr(12.0);

        assert_eq!(young.total_cmp(&old), Ordering::Less);
        assert_eq!(old.total_cmp(&young), Ordering::Greater);
        assert_eq!(old.total_cmp(&Time::from_gyr(12.0)), Ordering::Equal);
    }
}
