//! Geometric and Earth-orientation primitives for astrometry.
//!
//! `celestial-core` carries everything the astrometric pipeline leans on but
//! that is not itself astrometry: vectors and rotation matrices, two-part
//! Julian dates, IAU 2006 precession, a truncated IAU 2000B nutation, the
//! IAU 2006 CIO locator, Earth rotation and polar motion, WGS84 geodesy.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`], [`RotationMatrix3`], [`PvVector`] |
//! | [`angle`] | Angle wrapping |
//! | [`precession`] | Fukushima-Williams angles and matrices |
//! | [`nutation`] | Truncated IAU 2000B series |
//! | [`cio`] | CIP X/Y, CIO locator `s`, equation of the origins, GCRS→CIRS |
//! | [`earth_rotation`] | ERA, TIO locator `s'`, polar-motion matrix |
//! | [`location`] | Geodetic sites and their geocentric position |
//! | [`constants`] | Frozen numerical constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! GCRS → CIRS with the bundled models:
//!
//! ```
//! use celestial_core::{cio, nutation::NutationIAU2000B, precession::FukushimaWilliamsAngles};
//! use celestial_core::JulianDate;
//!
//! let tt = JulianDate::new(2451545.0, 3000.25);
//! let t = tt.centuries_since_j2000();
//! let nut = NutationIAU2000B::new().compute_iau2006(t);
//! let npb = FukushimaWilliamsAngles::at(t).bias_precession_nutation_matrix(nut.delta_psi, nut.delta_eps);
//! let cip = cio::CipCoordinates::from_npb_matrix(&npb)?;
//! let s = cio::cio_locator(t, cip.x, cip.y)?;
//! let c2i = cio::gcrs_to_cirs_matrix(cip.x, cip.y, s);
//! assert!(c2i.is_rotation_matrix(1e-14));
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

pub mod angle;
pub mod cio;
pub mod constants;
pub mod earth_rotation;
pub mod errors;
pub mod julian;
pub mod location;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod precession;

pub use cio::{gcrs_to_cirs_matrix, CipCoordinates, EquationOfOrigins};
pub use earth_rotation::{earth_rotation_angle, polar_motion_matrix, tio_locator};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use julian::JulianDate;
pub use location::Location;
pub use matrix::{PvVector, RotationMatrix3, SphericalMotion, Vector3};

pub mod test_helpers;
