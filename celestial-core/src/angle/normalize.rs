//! Angle normalization.
//!
//! Right ascension, azimuth and the local Earth rotation angle are all kept
//! in [0, 2π). The reduction goes through `libm::fmod`; the workspace keeps
//! all transcendental and modular arithmetic in `libm`.

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2π).
///
/// ```
/// use celestial_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_0_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-15);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
        assert!((wrap_0_2pi(-0.5) - (TWOPI - 0.5)).abs() < 1e-15);
    }
}
