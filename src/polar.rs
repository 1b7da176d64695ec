//! Polar ⇄ Cartesian helpers for the emotion compass.
//!
//! Angles are in degrees throughout. Anything leaving this module as an angle
//! is normalised into [0, 360).

/// Convert a polar point to Cartesian `(x, y)`.
#[inline]
pub fn polar_to_cartesian(radius: f64, angle_degrees: f64) -> (f64, f64) {
    let theta = angle_degrees.to_radians();
    (radius * theta.cos(), radius * theta.sin())
}

/// Convert a Cartesian point to polar `(radius, angle_degrees)`.
///
/// The angle comes from `atan2` and is shifted into [0, 360). The origin maps to
/// `(0.0, 0.0)`.
#[inline]
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    let radius = (x * x + y * y).sqrt();
    let angle = y.atan2(x).to_degrees();
    (radius, normalize_angle(angle))
}

/// Fold any finite angle in degrees into [0, 360).
#[inline]
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    let a = angle_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest angular distance between two compass directions, in [0, 180].
///
/// Inputs are expected in [0, 360), which is what anchor tables guarantee.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_polar_to_cartesian_axes() {
        let (x, y) = polar_to_cartesian(1.0, 0.0);
        assert!(close(x, 1.0) && close(y, 0.0));
        let (x, y) = polar_to_cartesian(0.5, 90.0);
        assert!(close(x, 0.0) && close(y, 0.5), "({x}, {y})");
        let (x, y) = polar_to_cartesian(1.0, 180.0);
        assert!(close(x, -1.0) && close(y, 0.0));
    }

    #[test]
    fn test_cartesian_to_polar_normalises_negative_angles() {
        let (r, a) = cartesian_to_polar(0.0, -1.0);
        assert!(close(r, 1.0));
        assert!(close(a, 270.0), "angle={a}");
    }

    #[test]
    fn test_polar_round_trip_on_compass_points() {
        for &(r, deg) in &[(0.3_f64, 0.0_f64), (0.6, 10.0), (0.9, 195.0), (0.8, 355.0)] {
            let (x, y) = polar_to_cartesian(r, deg);
            let (r2, deg2) = cartesian_to_polar(x, y);
            assert!(close(r, r2), "radius {r} -> {r2}");
            assert!(angular_distance(deg, deg2) < 1e-3, "angle {deg} -> {deg2}");
        }
    }

    #[test]
    fn test_origin_maps_to_zero_angle() {
        assert_eq!(cartesian_to_polar(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(10.0, 350.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(50.0, 110.0), 60.0);
        assert_eq!(angular_distance(15.0, 15.0), 0.0);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(725.0), 5.0);
        let tiny = normalize_angle(-1e-7);
        assert!((0.0..360.0).contains(&tiny));
    }
}
