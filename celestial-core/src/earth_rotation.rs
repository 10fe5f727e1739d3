//! Earth rotation angle, TIO locator and polar motion.
//!
//! Together with the CIO-based celestial matrix these give the full
//! celestial-to-terrestrial chain `W(xp, yp, s') · R3(ERA) · C(X, Y, s)`.

use crate::angle::wrap_0_2pi;
use crate::constants::{ARCSEC_TO_RAD, J2000_JD, TWOPI};
use crate::math::fmod;
use crate::matrix::RotationMatrix3;
use crate::JulianDate;

/// Earth rotation angle (IAU 2000) for a UT1 date, radians in [0, 2π).
///
/// The smaller date part is taken first so the fractional day keeps full
/// precision whichever way the caller split the date.
pub fn earth_rotation_angle(ut1: &JulianDate) -> f64 {
    let (d1, d2) = if ut1.jd1 < ut1.jd2 {
        (ut1.jd1, ut1.jd2)
    } else {
        (ut1.jd2, ut1.jd1)
    };

    let t = d1 + (d2 - J2000_JD);
    let f = fmod(d1, 1.0) + fmod(d2, 1.0);

    wrap_0_2pi(TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t))
}

/// TIO locator s' (IAU 2000), radians, from a TT date.
///
/// Dominated by a secular drift of -47 µas per century.
pub fn tio_locator(tt: &JulianDate) -> f64 {
    -47e-6 * tt.centuries_since_j2000() * ARCSEC_TO_RAD
}

/// Polar-motion matrix W = R1(-yp) · R2(-xp) · R3(s'), TIRS→ITRS.
pub fn polar_motion_matrix(xp: f64, yp: f64, sp: f64) -> RotationMatrix3 {
    let mut w = RotationMatrix3::identity();
    w.rotate_z(sp);
    w.rotate_y(-xp);
    w.rotate_x(-yp);
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_reference_value() {
        let era = earth_rotation_angle(&JulianDate::new(2400000.5, 54388.0));
        assert!((era - 0.4022837240028158102).abs() < 1e-12, "ERA = {}", era);

        // split order does not matter
        let swapped = earth_rotation_angle(&JulianDate::new(54388.0, 2400000.5));
        assert_eq!(era, swapped);
    }

    #[test]
    fn test_era_j2000() {
        let era = earth_rotation_angle(&JulianDate::j2000());
        assert!((era - 4.894961212823757).abs() < 1e-12);
    }

    #[test]
    fn test_tio_locator() {
        let sp = tio_locator(&JulianDate::new(2400000.5, 52541.0));
        assert!((sp - -0.6216698469981019309e-11).abs() < 1e-24, "{:e}", sp);
    }

    #[test]
    fn test_polar_motion_matrix() {
        let w = polar_motion_matrix(2.55060238e-7, 1.860359247e-6, -0.1367174580728891460e-10);
        assert!(w.is_rotation_matrix(1e-15));
        assert!((w.get(0, 1) - -0.1367174580728846989e-10).abs() < 1e-20);
        assert!((w.get(0, 2) - 0.2550602379999972345e-6).abs() < 1e-18);
        assert!((w.get(1, 0) - 0.1414624947957029801e-10).abs() < 1e-20);
        assert!((w.get(1, 2) - -0.1860359246998866389e-5).abs() < 1e-17);
        assert!((w.get(2, 1) - 0.1860359247002414021e-5).abs() < 1e-17);
    }
}
