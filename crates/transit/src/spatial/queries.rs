//! Great-circle distance utilities.

use geo::Point;

/// Mean Earth radius used by the tracker, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.32;

/// Haversine distance between two points in kilometers.
///
/// Symmetric, zero for coincident points and total over finite inputs;
/// no domain errors for any finite latitude/longitude.
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lng = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Convert kilometers to approximate degrees (for bounding-box pre-filters).
pub fn km_to_degrees_approx(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// Convert degrees to approximate kilometers at the equator.
pub fn degrees_to_km_approx(degrees: f64) -> f64 {
    degrees * KM_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use geo::HaversineDistance;

    // Central Station and City Hall in the demo network.
    const CENTRAL: (f64, f64) = (40.7128, -74.0060);
    const CITY_HALL: (f64, f64) = (40.7589, -73.9851);

    fn point(latlng: (f64, f64)) -> Point {
        Point::new(latlng.1, latlng.0)
    }

    #[test]
    fn test_symmetry() {
        let a = point(CENTRAL);
        let b = point(CITY_HALL);
        assert_abs_diff_eq!(haversine_km(a, b), haversine_km(b, a), epsilon = 1e-9);
    }

    #[test]
    fn test_identity() {
        let a = point(CENTRAL);
        assert_eq!(haversine_km(a, a), 0.0);
    }

    #[test]
    fn test_known_distance() {
        let km = haversine_km(point(CENTRAL), point(CITY_HALL));
        assert!((km - 5.3).abs() < 0.2, "expected ~5.3 km, got {km}");
    }

    #[test]
    fn test_agrees_with_geo() {
        // geo uses a slightly different mean radius; allow for that.
        let a = point(CENTRAL);
        let b = point(CITY_HALL);
        assert_relative_eq!(
            haversine_km(a, b),
            a.haversine_distance(&b) / 1000.0,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_non_negative_and_finite() {
        let points = [
            point((0.0, 0.0)),
            point((90.0, 0.0)),
            point((-90.0, 180.0)),
            point((40.7128, -74.0060)),
        ];
        for &a in &points {
            for &b in &points {
                let km = haversine_km(a, b);
                assert!(km >= 0.0);
                assert!(km.is_finite());
            }
        }
    }

    #[test]
    fn test_degree_km_roundtrip() {
        assert_relative_eq!(
            degrees_to_km_approx(km_to_degrees_approx(5.0)),
            5.0,
            max_relative = 1e-12
        );
    }
}
