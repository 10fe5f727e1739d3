//! Sources of the date-dependent model values the context builders need.
//!
//! The builders in [`crate::context::builders`] take every model value
//! explicitly. The `*_from_models` variants fetch them through the two traits
//! here instead, so an application can plug in a full nutation series or a
//! numerical ephemeris without touching the pipeline.
//!
//! Bundled implementations:
//!
//! - [`Iau2006Model`]: IAU 2006 precession, truncated IAU 2000B nutation and
//!   the IAU 2006 CIO locator. Milliarcsecond class.
//! - [`LowPrecisionEphemeris`]: analytic Earth, Moon and giant-planet theory.
//!   Good to a few 1e-5 AU in position and a few 1e-7 AU/day in velocity.

pub mod ephemeris;
pub mod iau2006;

pub use ephemeris::LowPrecisionEphemeris;
pub use iau2006::Iau2006Model;

use celestial_core::{AstroResult, CipCoordinates, EquationOfOrigins, JulianDate, PvVector, RotationMatrix3};

use crate::context::IntermediatePole;

/// Earth's state in the BCRS, AU and AU/day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EarthState {
    pub barycentric: PvVector,
    pub heliocentric: PvVector,
}

pub trait EarthEphemeris {
    /// Earth's barycentric and heliocentric state at a TDB date.
    fn earth_state(&self, tdb: &JulianDate) -> AstroResult<EarthState>;
}

pub trait EarthOrientationModel {
    /// Bias-precession-nutation matrix (GCRS → true equator and equinox) at a TT date.
    fn bias_precession_nutation(&self, tt: &JulianDate) -> AstroResult<RotationMatrix3>;

    /// CIO locator s, given the CIP coordinates at the same date.
    fn cio_locator(&self, tt: &JulianDate, x: f64, y: f64) -> AstroResult<f64>;

    /// CIP X, Y, the CIO locator and the equation of the origins at a TT date.
    fn intermediate_pole(&self, tt: &JulianDate) -> AstroResult<(IntermediatePole, f64)> {
        let npb = self.bias_precession_nutation(tt)?;
        let cip = CipCoordinates::from_npb_matrix(&npb)?;
        let s = self.cio_locator(tt, cip.x, cip.y)?;
        let eo = EquationOfOrigins::from_npb_and_locator(&npb, s);
        Ok((IntermediatePole::new(cip.x, cip.y, s), eo))
    }
}

/// The ephemeris and Earth-orientation model used by the high-level builders
/// and pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Models<E, O> {
    pub ephemeris: E,
    pub orientation: O,
}

impl<E: EarthEphemeris, O: EarthOrientationModel> Models<E, O> {
    pub fn new(ephemeris: E, orientation: O) -> Self {
        Self {
            ephemeris,
            orientation,
        }
    }
}

impl Models<LowPrecisionEphemeris, Iau2006Model> {
    /// The models shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(LowPrecisionEphemeris::new(), Iau2006Model::new())
    }
}

impl<T: EarthEphemeris + ?Sized> EarthEphemeris for &T {
    fn earth_state(&self, tdb: &JulianDate) -> AstroResult<EarthState> {
        (**self).earth_state(tdb)
    }
}

impl<T: EarthOrientationModel + ?Sized> EarthOrientationModel for &T {
    fn bias_precession_nutation(&self, tt: &JulianDate) -> AstroResult<RotationMatrix3> {
        (**self).bias_precession_nutation(tt)
    }

    fn cio_locator(&self, tt: &JulianDate, x: f64, y: f64) -> AstroResult<f64> {
        (**self).cio_locator(tt, x, y)
    }
}
