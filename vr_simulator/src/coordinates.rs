// Conversion between cartesian and polar (azimuth, elevation, radius) positions.
//
// Controller positions are accumulated in polar form so mouse deltas orbit the
// hand around the pawn origin. Angles are radians, the up axis is Z.
//
// Neither function guards its singularities: a zero-length vector yields NaN
// components from `to_polar`, and at the poles (elevation = ±90°) the azimuth
// collapses, so the two are not exact inverses there.

use cgmath::{vec3, InnerSpace, Vector3};

/// to_polar
///
/// Returns (azimuth, elevation, radius) for a cartesian position
pub fn to_polar(cartesian: Vector3<f32>) -> Vector3<f32> {
    let radius = cartesian.magnitude();
    let planar = (cartesian.x * cartesian.x + cartesian.y * cartesian.y).sqrt();
    let sign = if cartesian.y >= 0.0 { 1.0 } else { -1.0 };

    vec3(
        (cartesian.x / planar).acos() * sign,
        (cartesian.z / radius).asin(),
        radius,
    )
}

/// to_cartesian
///
/// Inverse of `to_polar` away from the origin and the poles
pub fn to_cartesian(polar: Vector3<f32>) -> Vector3<f32> {
    let (azimuth, elevation, radius) = (polar.x, polar.y, polar.z);

    vec3(
        elevation.cos() * azimuth.cos() * radius,
        elevation.cos() * azimuth.sin() * radius,
        elevation.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        let distance = (actual - expected).magnitude();
        assert!(
            distance < 1e-4,
            "Vectors are not close enough: {:?} vs {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_to_polar_on_axes() {
        assert_close(to_polar(vec3(2.0, 0.0, 0.0)), vec3(0.0, 0.0, 2.0));
        assert_close(to_polar(vec3(0.0, 3.0, 0.0)), vec3(FRAC_PI_2, 0.0, 3.0));
        assert_close(to_polar(vec3(0.0, -3.0, 0.0)), vec3(-FRAC_PI_2, 0.0, 3.0));
        assert_close(to_polar(vec3(-1.0, 0.0, 0.0)), vec3(PI, 0.0, 1.0));
    }

    #[test]
    fn test_to_polar_elevation() {
        // Given a point 45 degrees above the XY plane
        let polar = to_polar(vec3(1.0, 0.0, 1.0));

        // Then elevation is PI/4 and radius is the full length
        assert_close(polar, vec3(0.0, FRAC_PI_4, 2.0_f32.sqrt()));
    }

    #[test]
    fn test_to_cartesian() {
        assert_close(to_cartesian(vec3(0.0, 0.0, 5.0)), vec3(5.0, 0.0, 0.0));
        assert_close(to_cartesian(vec3(FRAC_PI_2, 0.0, 5.0)), vec3(0.0, 5.0, 0.0));
        assert_close(to_cartesian(vec3(0.0, FRAC_PI_2, 5.0)), vec3(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_round_trip_away_from_singularities() {
        let samples = [
            vec3(40.0, -20.0, -10.0),
            vec3(40.0, 20.0, -10.0),
            vec3(-3.5, 7.25, 1.0),
            vec3(-0.5, -0.5, 0.25),
            vec3(12.0, 0.0, 30.0),
        ];

        for sample in samples {
            assert_close(to_cartesian(to_polar(sample)), sample);
        }
    }

    #[test]
    fn test_zero_vector_is_undefined() {
        let polar = to_polar(vec3(0.0, 0.0, 0.0));
        assert!(polar.x.is_nan());
        assert!(polar.y.is_nan());
        assert_eq!(polar.z, 0.0);
    }
}
