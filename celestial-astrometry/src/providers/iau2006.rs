//! The bundled Earth-orientation model.

use celestial_core::cio::cio_locator;
use celestial_core::nutation::NutationIAU2000B;
use celestial_core::precession::FukushimaWilliamsAngles;
use celestial_core::{AstroResult, JulianDate, RotationMatrix3};

use super::EarthOrientationModel;

/// IAU 2006 precession with truncated IAU 2000B nutation.
///
/// The nutation keeps only the largest lunisolar terms, so the CIP is good to
/// a few milliarcseconds over the present era. For sub-mas work implement
/// [`EarthOrientationModel`] over a full series or IERS-supplied offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iau2006Model {
    nutation: NutationIAU2000B,
}

impl Iau2006Model {
    pub fn new() -> Self {
        Self {
            nutation: NutationIAU2000B::new(),
        }
    }
}

impl EarthOrientationModel for Iau2006Model {
    fn bias_precession_nutation(&self, tt: &JulianDate) -> AstroResult<RotationMatrix3> {
        let t = tt.validated()?.centuries_since_j2000();
        let nut = self.nutation.compute_iau2006(t);
        Ok(FukushimaWilliamsAngles::at(t).bias_precession_nutation_matrix(nut.delta_psi, nut.delta_eps))
    }

    fn cio_locator(&self, tt: &JulianDate, x: f64, y: f64) -> AstroResult<f64> {
        cio_locator(tt.validated()?.centuries_since_j2000(), x, y)
    }
}
