//! WGS84 geodetic to geocentric conversion.

use super::Location;
use crate::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::Vector3;

impl Location {
    /// Geocentric Cartesian position in meters, Earth-fixed axes.
    pub fn to_geocentric(&self) -> AstroResult<Vector3> {
        let (sp, cp) = libm::sincos(self.latitude);
        let w = (1.0 - WGS84_FLATTENING) * (1.0 - WGS84_FLATTENING);
        let d = cp * cp + w * sp * sp;
        if d <= 0.0 {
            return Err(AstroError::math_error(
                "geocentric_conversion",
                MathErrorKind::DivisionByZero,
                "degenerate ellipsoid normal",
            ));
        }

        let ac = WGS84_SEMI_MAJOR_AXIS / libm::sqrt(d);
        let as_ = w * ac;
        let r = (ac + self.height) * cp;
        let (sl, cl) = libm::sincos(self.longitude);

        Ok(Vector3::new(r * cl, r * sl, (as_ + self.height) * sp))
    }
}
