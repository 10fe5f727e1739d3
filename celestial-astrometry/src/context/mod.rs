//! The star-independent astrometry parameters.
//!
//! An [`AstrometryContext`] is built once per (date, site, Earth orientation)
//! by one of the builders in [`builders`] and then shared, read-only, by every
//! transform applied to a list of stars. Contexts are `Copy`; hand each thread
//! its own.
//!
//! The only partial update supported is the Earth-rotation refresh, which
//! rewrites [`local_era`](AstrometryContext::local_era) so that a sequence of
//! observations a few seconds apart can reuse the expensive parts.

pub mod builders;

use celestial_core::angle::wrap_0_2pi;
use celestial_core::{
    earth_rotation_angle, gcrs_to_cirs_matrix, JulianDate, Location, RotationMatrix3, Vector3,
};

use crate::refraction::Atmosphere;

/// Parameters shared by all stars for one observing instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstrometryContext {
    /// Proper-motion interval, Julian years of TDB since J2000.0.
    pub pm_interval: f64,
    /// Barycentre → observer, AU.
    pub barycentric_position: Vector3,
    /// Unit vector Sun → observer.
    pub sun_direction: Vector3,
    /// Sun → observer distance, AU.
    pub sun_distance: f64,
    /// Barycentric observer velocity, units of c.
    pub velocity: Vector3,
    /// sqrt(1 - |v|²).
    pub lorentz_reciprocal: f64,
    /// Catalog axes → the observer's intermediate frame.
    pub bpn: RotationMatrix3,
    /// Site longitude adjusted for s' and polar motion, radians.
    pub longitude: f64,
    pub polar_motion_x: f64,
    pub polar_motion_y: f64,
    pub sin_latitude: f64,
    pub cos_latitude: f64,
    /// Diurnal aberration magnitude, units of c.
    pub diurnal_aberration: f64,
    /// Earth rotation angle plus adjusted longitude, radians, in [0, 2π).
    pub local_era: f64,
    pub refraction_a: f64,
    pub refraction_b: f64,
}

impl Default for AstrometryContext {
    fn default() -> Self {
        Self {
            pm_interval: 0.0,
            barycentric_position: Vector3::zeros(),
            sun_direction: Vector3::zeros(),
            sun_distance: 0.0,
            velocity: Vector3::zeros(),
            lorentz_reciprocal: 1.0,
            bpn: RotationMatrix3::identity(),
            longitude: 0.0,
            polar_motion_x: 0.0,
            polar_motion_y: 0.0,
            sin_latitude: 0.0,
            cos_latitude: 1.0,
            diurnal_aberration: 0.0,
            local_era: 0.0,
            refraction_a: 0.0,
            refraction_b: 0.0,
        }
    }
}

impl AstrometryContext {
    /// Refreshes the local Earth rotation angle. Nothing else is touched.
    pub fn set_earth_rotation_angle(&mut self, era: f64) {
        self.local_era = wrap_0_2pi(era + self.longitude);
    }

    /// By-value form of [`set_earth_rotation_angle`](Self::set_earth_rotation_angle).
    pub fn with_earth_rotation_angle(mut self, era: f64) -> Self {
        self.set_earth_rotation_angle(era);
        self
    }

    /// Refreshes the local Earth rotation angle for a new UT1 instant.
    pub fn advance_to_ut1(&mut self, ut1: &JulianDate) {
        self.set_earth_rotation_angle(earth_rotation_angle(ut1));
    }
}

/// Celestial intermediate pole coordinates and CIO locator, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntermediatePole {
    pub x: f64,
    pub y: f64,
    pub s: f64,
}

impl IntermediatePole {
    pub fn new(x: f64, y: f64, s: f64) -> Self {
        Self { x, y, s }
    }

    /// The GCRS → CIRS rotation.
    pub fn to_matrix(&self) -> RotationMatrix3 {
        gcrs_to_cirs_matrix(self.x, self.y, self.s)
    }
}

/// Polar motion and TIO locator, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarMotion {
    pub xp: f64,
    pub yp: f64,
    pub sp: f64,
}

impl PolarMotion {
    pub fn new(xp: f64, yp: f64, sp: f64) -> Self {
        Self { xp, yp, sp }
    }

    /// Polar motion with s' evaluated at `tt`.
    pub fn at(xp: f64, yp: f64, tt: &JulianDate) -> Self {
        Self::new(xp, yp, celestial_core::tio_locator(tt))
    }
}

/// Everything about a ground-based observer the high-level builders need
/// besides the date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    pub site: Location,
    /// Polar motion coordinates (IERS bulletins), radians.
    pub xp: f64,
    pub yp: f64,
    pub atmosphere: Atmosphere,
}

impl Observer {
    pub fn new(site: Location, xp: f64, yp: f64, atmosphere: Atmosphere) -> Self {
        Self {
            site,
            xp,
            yp,
            atmosphere,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::TWOPI;

    #[test]
    fn test_earth_rotation_update_touches_only_local_era() {
        let ctx = AstrometryContext {
            longitude: -0.5,
            refraction_a: 2.0e-4,
            ..Default::default()
        };

        let updated = ctx.with_earth_rotation_angle(1.25);
        assert_eq!(updated.local_era, 0.75);
        assert_eq!(
            AstrometryContext {
                local_era: ctx.local_era,
                ..updated
            },
            ctx
        );
    }

    #[test]
    fn test_local_era_stays_in_range_after_update() {
        let mut ctx = AstrometryContext {
            longitude: 2.5,
            ..Default::default()
        };

        ctx.set_earth_rotation_angle(6.0);
        assert!((ctx.local_era - (8.5 - TWOPI)).abs() < 1e-15, "{}", ctx.local_era);

        ctx.longitude = -2.5;
        ctx.set_earth_rotation_angle(0.5);
        assert!((ctx.local_era - (TWOPI - 2.0)).abs() < 1e-15, "{}", ctx.local_era);
        assert!((0.0..TWOPI).contains(&ctx.local_era));
    }

    #[test]
    fn test_advance_to_ut1() {
        let mut ctx = AstrometryContext {
            longitude: 0.1,
            ..Default::default()
        };
        let ut1 = JulianDate::new(2400000.5, 54388.0);
        ctx.advance_to_ut1(&ut1);
        assert!((ctx.local_era - (0.4022837240028158102 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_polar_motion_at_date() {
        let tt = JulianDate::new(2400000.5, 52541.0);
        let pm = PolarMotion::at(1e-7, 2e-7, &tt);
        assert!((pm.sp - -6.216698469981019309e-12).abs() < 1e-18);
    }
}
