//! Stellar aberration.
//!
//! Rigorous velocity-composition form, including the small term from the
//! Sun's gravitational potential at the observer. The Earth's own potential
//! and the potentials of the planets are not included.

use celestial_core::constants::SCHWARZSCHILD_RADIUS_SUN_AU;
use celestial_core::Vector3;

/// Applies aberration to a natural direction.
///
/// - `natural`: unit direction to the source, after light deflection
/// - `velocity`: barycentric observer velocity, units of c
/// - `sun_distance`: observer's distance from the Sun, AU
/// - `lorentz_reciprocal`: sqrt(1 - |v|²)
///
/// The result is renormalised explicitly, so a slightly non-unit input still
/// comes back as a unit vector.
pub fn aberrate(
    natural: &Vector3,
    velocity: &Vector3,
    sun_distance: f64,
    lorentz_reciprocal: f64,
) -> Vector3 {
    let pdv = natural.dot(velocity);
    let w1 = 1.0 + pdv / (1.0 + lorentz_reciprocal);
    let w2 = SCHWARZSCHILD_RADIUS_SUN_AU / sun_distance;

    let p = *natural * lorentz_reciprocal + *velocity * w1 + (*velocity - *natural * pdv) * w2;
    p.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use celestial_core::test_helpers::assert_vec_close;

    fn earth_like() -> (Vector3, Vector3, f64, f64) {
        (
            Vector3::new(-0.76321968546737951, -0.60869453983060384, -0.21676408580639883),
            Vector3::new(2.1044018893653786e-5, -8.9108923304429319e-5, -3.8633714797716569e-5),
            0.99980921395708788,
            0.99999999506209258,
        )
    }

    #[test]
    fn test_reference_values() {
        let (pnat, v, s, bm1) = earth_like();
        let ppr = aberrate(&pnat, &v, s, bm1);

        assert_abs_diff_eq!(ppr.x, -0.7631631094219556269, epsilon = 1e-12);
        assert_abs_diff_eq!(ppr.y, -0.6087553082505590832, epsilon = 1e-12);
        assert_abs_diff_eq!(ppr.z, -0.2167926269368471279, epsilon = 1e-12);
    }

    #[test]
    fn test_output_is_unit_for_sloppy_input() {
        let (pnat, v, s, bm1) = earth_like();
        for scale in [1.0 - 1e-6, 1.0 + 1e-6, 1.0 + 3e-7] {
            let ppr = aberrate(&(pnat * scale), &v, s, bm1);
            assert!((ppr.magnitude() - 1.0).abs() < 1e-15, "scale {}", scale);
        }
    }

    #[test]
    fn test_at_rest_far_from_sun_is_identity() {
        let pnat = Vector3::new(0.48, -0.6, 0.64);
        let ppr = aberrate(&pnat, &Vector3::zeros(), 1e12, 1.0);
        assert_vec_close(&ppr, &pnat, 1e-15, "observer at rest");
    }

    #[test]
    fn test_displacement_towards_apex() {
        // ~20" for the Earth's orbital speed, largest at 90° from the apex
        let v = Vector3::new(0.0, 1e-4, 0.0);
        let bm1 = libm::sqrt(1.0 - 1e-8);
        let ppr = aberrate(&Vector3::x_axis(), &v, 1.0, bm1);
        let shift = libm::atan2(ppr.y, ppr.x);
        assert!((shift - 1e-4).abs() < 1e-9, "shift {:e}", shift);
    }
}
