//! Spherical-earth navigation math.
//!
//! All functions take and return degrees; conversion to radians happens internally.
//! Distances are in nautical miles on a sphere of radius [`EARTH_RADIUS_NM`].

use super::constants::EARTH_RADIUS_NM;
use super::math::{deg_to_rad, rad_to_deg};
use super::types::Coordinate;

/// Great-circle distance between two coordinates (Haversine formula).
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = deg_to_rad(from.latitude);
    let lat2 = deg_to_rad(to.latitude);
    let delta_lat = deg_to_rad(to.latitude - from.latitude);
    let delta_lon = deg_to_rad(to.longitude - from.longitude);

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs just past 1.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Initial great-circle bearing from `from` towards `to`, in degrees within [0, 360).
pub fn initial_bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = deg_to_rad(from.latitude);
    let lat2 = deg_to_rad(to.latitude);
    let delta_lon = deg_to_rad(to.longitude - from.longitude);

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    (rad_to_deg(y.atan2(x)) + 360.0) % 360.0
}

/// Point reached by travelling `distance_nm` from `start` along the initial `bearing` (degrees).
///
/// The resulting longitude is normalised into [-180, 180].
pub fn destination_point(start: Coordinate, distance_nm: f64, bearing: f64) -> Coordinate {
    let lat1 = deg_to_rad(start.latitude);
    let lon1 = deg_to_rad(start.longitude);
    let brng = deg_to_rad(bearing);
    let angular = distance_nm / EARTH_RADIUS_NM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * brng.cos()).asin();
    let lon2 = lon1
        + (brng.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        latitude: rad_to_deg(lat2),
        longitude: normalize_longitude(rad_to_deg(lon2)),
    }
}

fn normalize_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 540.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ONE_DEGREE_NM: f64 = EARTH_RADIUS_NM * std::f64::consts::PI / 180.0;

    #[test]
    fn test_distance_one_degree_on_equator() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert_relative_eq!(d, ONE_DEGREE_NM, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let points = [
            Coordinate::new(28.5383, -81.3792),
            Coordinate::new(55.7558, 37.6173),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(60.0, 100.0),
            Coordinate::new(35.0, -160.0),
        ];

        for a in points {
            assert_relative_eq!(haversine_distance(a, a), 0.0);
            for b in points {
                assert_relative_eq!(
                    haversine_distance(a, b),
                    haversine_distance(b, a),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let east = Coordinate::new(0.0, 179.5);
        let west = Coordinate::new(0.0, -179.5);
        assert_relative_eq!(haversine_distance(east, west), ONE_DEGREE_NM, epsilon = 1e-6);
    }

    #[test]
    fn test_distance_between_antipodes_is_half_circumference() {
        let half = EARTH_RADIUS_NM * std::f64::consts::PI;
        let pairs = [
            ((2.5, -179.5), (-2.5, 0.5)),
            ((0.0, 0.0), (0.0, 180.0)),
            ((45.0, 90.0), (-45.0, -90.0)),
            ((89.9, 10.0), (-89.9, -170.0)),
        ];

        for (a, b) in pairs {
            let (a, b) = (Coordinate::from(a), Coordinate::from(b));
            let d = haversine_distance(a, b);
            assert!(d.is_finite(), "{a} to {b} gave {d}");
            assert_relative_eq!(d, half, epsilon = 1e-3);
            assert_relative_eq!(d, haversine_distance(b, a), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_relative_eq!(initial_bearing(origin, Coordinate::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(initial_bearing(origin, Coordinate::new(0.0, 1.0)), 90.0);
        assert_relative_eq!(initial_bearing(origin, Coordinate::new(-1.0, 0.0)), 180.0);
        assert_relative_eq!(initial_bearing(origin, Coordinate::new(0.0, -1.0)), 270.0);
    }

    #[test]
    fn test_destination_along_equator() {
        let dest = destination_point(Coordinate::new(0.0, 0.0), ONE_DEGREE_NM, 90.0);
        assert_relative_eq!(dest.latitude, 0.0, epsilon = 1e-9);
        assert_relative_eq!(dest.longitude, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_destination_matches_distance_and_bearing() {
        let start = Coordinate::new(28.5383, -81.3792);
        let target = Coordinate::new(40.0, -40.0);
        let bearing = initial_bearing(start, target);

        let step = destination_point(start, 250.0, bearing);
        assert_relative_eq!(haversine_distance(start, step), 250.0, epsilon = 1e-6);

        // Travelling along the great circle shortens the remaining leg by the same amount.
        let remaining = haversine_distance(step, target);
        assert_relative_eq!(
            remaining,
            haversine_distance(start, target) - 250.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_destination_wraps_longitude() {
        let dest = destination_point(Coordinate::new(0.0, 179.5), ONE_DEGREE_NM, 90.0);
        assert_relative_eq!(dest.longitude, -179.5, epsilon = 1e-9);
    }
}
