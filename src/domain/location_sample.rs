/// A single latitude/longitude fix emitted by a provider, in decimal degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationSample {
    const EARTH_RADIUS_M: f64 = 6_371_008.8;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        LocationSample { latitude, longitude }
    }

    /// Great-circle distance in meters using the haversine formula.
    pub fn distance_to(&self, other: &LocationSample) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_long = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_long / 2.0).sin().powi(2);
        // Rounding can push `a` past 1 for antipodal points
        2.0 * Self::EARTH_RADIUS_M * a.min(1.0).sqrt().asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn distance_to_itself_is_zero() {
        let sample = LocationSample::new(37.7749, -122.4194);

        assert_eq!(sample.distance_to(&sample), 0.0);
    }

    #[rstest]
    #[case(LocationSample::new(0.0, 0.0), LocationSample::new(0.0, 180.0))]
    #[case(LocationSample::new(90.0, 0.0), LocationSample::new(-90.0, 0.0))]
    #[case(LocationSample::new(37.7749, -122.4194), LocationSample::new(-37.7749, 57.5806))]
    #[case(LocationSample::new(10.000000001, 20.0), LocationSample::new(-10.0, -160.0))]
    fn antipodal_distance_is_half_the_circumference(#[case] from: LocationSample, #[case] to: LocationSample) {
        let distance = from.distance_to(&to);

        assert!(!distance.is_nan());
        assert!((distance - std::f64::consts::PI * LocationSample::EARTH_RADIUS_M).abs() < 1.0, "distance was {}", distance);
    }

    #[rstest]
    #[case(LocationSample::new(0.0, 0.0), LocationSample::new(0.0, 1.0), 111_195.0)]
    #[case(LocationSample::new(37.7749, -122.4194), LocationSample::new(34.0522, -118.2437), 559_120.0)]
    #[case(LocationSample::new(51.8615899, 4.3580323), LocationSample::new(51.8615899, 4.3580323), 0.0)]
    fn distance_to_is_within_a_kilometer(#[case] from: LocationSample, #[case] to: LocationSample, #[case] expected_m: f64) {
        let distance = from.distance_to(&to);

        assert!((distance - expected_m).abs() < 1_000.0, "distance was {}", distance);
        assert!((distance - to.distance_to(&from)).abs() < 1e-6);
    }
}
