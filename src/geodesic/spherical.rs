use crate::domain::GeoPoint;
use crate::geodesic::Geodesic;

pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SphericalEarth {
    radius_m: f64,
}

impl SphericalEarth {
    pub fn new(radius_m: f64) -> Self {
        SphericalEarth { radius_m }
    }
}

impl Default for SphericalEarth {
    fn default() -> Self {
        SphericalEarth::new(EARTH_MEAN_RADIUS_M)
    }
}

impl Geodesic for SphericalEarth {
    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();
        let delta_lng = (to.longitude - from.longitude).to_radians();

        let y = delta_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

        // Never 360.0 for finite input, unlike rem_euclid on a tiny negative angle
        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();
        let delta_lat = (to.latitude - from.latitude).to_radians();
        let delta_lng = (to.longitude - from.longitude).to_radians();

        let half_lat = (delta_lat / 2.0).sin();
        let half_lng = (delta_lng / 2.0).sin();
        let a = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lng * half_lng;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_m * c
    }
}

/// Plain average of both axes; only used to anchor a label between two nearby corners.
pub fn midpoint(a: &GeoPoint, b: &GeoPoint) -> GeoPoint {
    GeoPoint::new((a.latitude + b.latitude) / 2.0, (a.longitude + b.longitude) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const EARTH: SphericalEarth = SphericalEarth { radius_m: EARTH_MEAN_RADIUS_M };

    fn assert_approx(actual: f64, expected: f64, tolerance: f64) {
        assert!((actual - expected).abs() <= tolerance, "expected {} ± {}, was {}", expected, tolerance, actual);
    }

    #[rstest]
    #[case::east(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0), 90.0)]
    #[case::west(GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 0.0), 270.0)]
    #[case::north(GeoPoint::new(10.0, 5.0), GeoPoint::new(11.0, 5.0), 0.0)]
    #[case::south(GeoPoint::new(11.0, 5.0), GeoPoint::new(10.0, 5.0), 180.0)]
    #[case::north_east(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.001), 45.0)]
    fn computes_the_initial_bearing(#[case] from: GeoPoint, #[case] to: GeoPoint, #[case] expected: f64) {
        assert_approx(EARTH.bearing(&from, &to), expected, 1e-6);
    }

    #[test]
    fn bearing_between_identical_points_is_zero() {
        let point = GeoPoint::new(28.8789, 77.1258);
        assert_eq!(EARTH.bearing(&point, &point), 0.0);
        assert_eq!(EARTH.distance(&point, &point), 0.0);
    }

    #[test]
    fn bearing_stays_below_360_for_a_tiny_westward_step() {
        let from = GeoPoint::new(0.0, 0.0);
        let to = GeoPoint::new(1.0, -1e-15);
        let bearing = EARTH.bearing(&from, &to);
        assert!((0.0..360.0).contains(&bearing), "bearing {} out of range", bearing);
    }

    #[test]
    fn bearing_is_always_within_range() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(89.9, 179.9),
            GeoPoint::new(-89.9, -179.9),
            GeoPoint::new(28.8789, 77.1258),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(51.8616, 4.3580),
        ];

        for from in &points {
            for to in &points {
                let bearing = EARTH.bearing(from, to);
                assert!((0.0..360.0).contains(&bearing), "bearing {} from {} to {} out of range", bearing, from, to);
            }
        }
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let distance = EARTH.distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 1.0));
        assert_approx(distance, 111_195.0, 1.0);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let distance = EARTH.distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
        assert_approx(distance, std::f64::consts::PI * EARTH_MEAN_RADIUS_M, 1e-3);
    }

    #[rstest]
    #[case(GeoPoint::new(28.8789, 77.1258), GeoPoint::new(28.8795, 77.1262))]
    #[case(GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.8616, 4.3580))]
    #[case(GeoPoint::new(64.1466, -21.9426), GeoPoint::new(-0.5, 0.5))]
    fn distance_is_symmetric(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        assert_eq!(EARTH.distance(&a, &b), EARTH.distance(&b, &a));
    }

    #[rstest]
    #[case::along_the_equator(GeoPoint::new(0.0, 10.0), GeoPoint::new(0.0, 12.5))]
    #[case::along_a_meridian(GeoPoint::new(-20.0, 33.0), GeoPoint::new(40.0, 33.0))]
    fn reverse_bearing_is_opposite_on_great_circles_through_the_axes(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        let forward = EARTH.bearing(&a, &b);
        let backward = EARTH.bearing(&b, &a);
        assert_approx((forward - backward).abs(), 180.0, 1e-9);
    }

    #[test]
    fn reverse_bearing_of_a_short_wall_is_nearly_opposite() {
        let a = GeoPoint::new(28.8789, 77.1258);
        let b = GeoPoint::new(28.8795, 77.1262);
        let difference = (EARTH.bearing(&a, &b) - EARTH.bearing(&b, &a) + 360.0) % 360.0;
        assert_approx(difference, 180.0, 0.01);
    }

    #[test]
    fn uses_the_configured_radius() {
        let unit_sphere = SphericalEarth::new(1.0);
        let distance = unit_sphere.distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 90.0));
        assert_approx(distance, std::f64::consts::FRAC_PI_2, 1e-12);
    }

    #[test]
    fn midpoint_averages_both_axes() {
        assert_eq!(midpoint(&GeoPoint::new(10.0, 20.0), &GeoPoint::new(12.0, 24.0)), GeoPoint::new(11.0, 22.0));
    }
}
