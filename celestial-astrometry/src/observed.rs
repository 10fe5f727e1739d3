//! CIRS ↔ observed place for a ground-based observer.
//!
//! Uses the Earth-fixed fields of the context: local ERA, polar motion on
//! the local meridian, latitude, diurnal aberration and the refraction
//! constants. Refresh `local_era` with
//! [`set_earth_rotation_angle`](AstrometryContext::set_earth_rotation_angle)
//! when stepping through time.
//!
//! Refraction uses the tangent model `Δζ = A tan ζ + B tan³ ζ`. Going from
//! CIRS to observed, the model is evaluated at the unrefracted (topocentric)
//! zenith distance with one Newton-Raphson step. Going back it is evaluated
//! directly at the observed zenith distance. The two directions therefore
//! agree to well under a microarcsecond near the zenith, but the mismatch
//! grows with zenith distance and becomes milliarcseconds beyond 80°.

use celestial_core::angle::wrap_0_2pi;
use celestial_core::Vector3;

use crate::context::AstrometryContext;

/// Floor on cos(elevation) in the refraction step.
const CELMIN: f64 = 1e-6;
/// Floor on sin(elevation) in the refraction step, about 2.9°.
const SELMIN: f64 = 0.05;

/// Observed coordinates, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservedPlace {
    /// Azimuth, N=0 E=90°, in [0, 2π).
    pub azimuth: f64,
    pub zenith_distance: f64,
    pub hour_angle: f64,
    pub declination: f64,
    /// CIO-based right ascension, in [0, 2π).
    pub right_ascension: f64,
}

/// Which pair of observed coordinates is being supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservedKind {
    /// Azimuth (N=0, E=90°) and zenith distance.
    AzimuthZenith,
    /// Hour angle and declination.
    HourAngleDec,
    /// CIO-based right ascension and declination.
    RaDec,
}

impl ObservedKind {
    /// `'R'` or `'r'` for RA/Dec, `'H'` or `'h'` for HA/Dec, anything else
    /// for azimuth/zenith distance.
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'R' => ObservedKind::RaDec,
            'H' => ObservedKind::HourAngleDec,
            _ => ObservedKind::AzimuthZenith,
        }
    }
}

/// CIRS (RA, Dec) → observed place.
pub fn cirs_to_observed(ri: f64, di: f64, ctx: &AstrometryContext) -> ObservedPlace {
    // CIRS RA,Dec → Cartesian -HA,Dec
    let v = Vector3::from_spherical(ri - ctx.local_era, di);

    let (sx, cx) = libm::sincos(ctx.polar_motion_x);
    let (sy, cy) = libm::sincos(ctx.polar_motion_y);
    let xhd = cx * v.x + sx * v.z;
    let yhd = sx * sy * v.x + cy * v.y - cx * sy * v.z;
    let zhd = -sx * cy * v.x + sy * v.y + cx * cy * v.z;

    let f = 1.0 - ctx.diurnal_aberration * yhd;
    let xhdt = f * xhd;
    let yhdt = f * (yhd + ctx.diurnal_aberration);
    let zhdt = f * zhd;

    // -HA,Dec → Az,El (S=0, E=90°)
    let (sphi, cphi) = (ctx.sin_latitude, ctx.cos_latitude);
    let xaet = sphi * xhdt - cphi * zhdt;
    let yaet = yhdt;
    let zaet = cphi * xhdt + sphi * zhdt;

    let azobs = if xaet != 0.0 || yaet != 0.0 {
        libm::atan2(yaet, -xaet)
    } else {
        0.0
    };

    let r = libm::sqrt(xaet * xaet + yaet * yaet).max(CELMIN);
    let z = zaet.max(SELMIN);

    let tz = r / z;
    let w = ctx.refraction_b * tz * tz;
    let del = (ctx.refraction_a + w) * tz / (1.0 + (ctx.refraction_a + 3.0 * w) / (z * z));

    let cosdel = 1.0 - del * del / 2.0;
    let f = cosdel - del * z / r;
    let xaeo = xaet * f;
    let yaeo = yaet * f;
    let zaeo = cosdel * zaet + del * r;

    let zdobs = libm::atan2(libm::sqrt(xaeo * xaeo + yaeo * yaeo), zaeo);

    let v = Vector3::new(sphi * xaeo + cphi * zaeo, yaeo, -cphi * xaeo + sphi * zaeo);
    let (hmobs, dcobs) = v.to_spherical();

    ObservedPlace {
        azimuth: wrap_0_2pi(azobs),
        zenith_distance: zdobs,
        hour_angle: -hmobs,
        declination: dcobs,
        right_ascension: wrap_0_2pi(ctx.local_era + hmobs),
    }
}

/// Observed place → CIRS (RA, Dec).
///
/// For [`ObservedKind::AzimuthZenith`] `c1` is the azimuth and `c2` the
/// zenith distance; otherwise `c1` is the hour angle or right ascension and
/// `c2` the declination.
pub fn observed_to_cirs(kind: ObservedKind, c1: f64, c2: f64, ctx: &AstrometryContext) -> (f64, f64) {
    let (sphi, cphi) = (ctx.sin_latitude, ctx.cos_latitude);

    let (xaeo, yaeo, zaeo) = match kind {
        ObservedKind::AzimuthZenith => {
            let ce = libm::sin(c2);
            (-libm::cos(c1) * ce, libm::sin(c1) * ce, libm::cos(c2))
        }
        ObservedKind::HourAngleDec | ObservedKind::RaDec => {
            let ha = if kind == ObservedKind::RaDec {
                ctx.local_era - c1
            } else {
                c1
            };
            let m = Vector3::from_spherical(-ha, c2);
            (sphi * m.x - cphi * m.z, m.y, cphi * m.x + sphi * m.z)
        }
    };

    // azimuth, S=0 E=90°
    let az = if xaeo != 0.0 || yaeo != 0.0 {
        libm::atan2(yaeo, xaeo)
    } else {
        0.0
    };

    let sz = libm::sqrt(xaeo * xaeo + yaeo * yaeo);
    let zdo = libm::atan2(sz, zaeo);

    let tz = sz / zaeo.max(SELMIN);
    let dref = (ctx.refraction_a + ctx.refraction_b * tz * tz) * tz;
    let zdt = zdo + dref;

    let ce = libm::sin(zdt);
    let xaet = libm::cos(az) * ce;
    let yaet = libm::sin(az) * ce;
    let zaet = libm::cos(zdt);

    // Az,ZD → -HA,Dec
    let xmhda = sphi * xaet + cphi * zaet;
    let ymhda = yaet;
    let zmhda = -cphi * xaet + sphi * zaet;

    let f = 1.0 + ctx.diurnal_aberration * ymhda;
    let xhd = f * xmhda;
    let yhd = f * (ymhda - ctx.diurnal_aberration);
    let zhd = f * zmhda;

    let (sx, cx) = libm::sincos(ctx.polar_motion_x);
    let (sy, cy) = libm::sincos(ctx.polar_motion_y);
    let v = Vector3::new(
        cx * xhd + sx * sy * yhd - sx * cy * zhd,
        cy * yhd + sy * zhd,
        sx * xhd - cx * sy * yhd + cx * cy * zhd,
    );

    let (hma, dci) = v.to_spherical();
    (wrap_0_2pi(ctx.local_era + hma), dci)
}

#[cfg(test)]
mod tests {
    use super::*;

    // high, cold southern site, April 2013
    fn site_context() -> AstrometryContext {
        AstrometryContext {
            longitude: -0.5278008060295996,
            polar_motion_x: 1.133427418130753e-6,
            polar_motion_y: 1.4533475957806462e-6,
            sin_latitude: -0.9440115679003211,
            cos_latitude: 0.32991235149714754,
            diurnal_aberration: 5.135843661699914e-7,
            local_era: 2.617608909189652,
            refraction_a: 2.014187785940397e-4,
            refraction_b: -2.3614083149436963e-7,
            ..Default::default()
        }
    }

    #[test]
    fn test_cirs_to_observed_reference_values() {
        let obs = cirs_to_observed(2.710121572969038991, 0.1729371367218230438, &site_context());

        assert!((obs.azimuth - 0.09233952224895122499).abs() < 1e-12, "az {}", obs.azimuth);
        assert!((obs.zenith_distance - 1.407758704513549991).abs() < 1e-12, "zd {}", obs.zenith_distance);
        assert!((obs.hour_angle - -0.09247619879881698140).abs() < 1e-12, "ha {}", obs.hour_angle);
        assert!((obs.declination - 0.1717653435756234676).abs() < 1e-12, "dec {}", obs.declination);
        assert!((obs.right_ascension - 2.710085107988480746).abs() < 1e-12, "ra {}", obs.right_ascension);
    }

    #[test]
    fn test_observed_to_cirs_reference_values() {
        let ctx = site_context();
        let cases = [
            ('R', 2.710085107986886201, 0.1717653435758265198, 2.710121574447540810, 0.1729371839116608778),
            ('H', -0.09247619879782006106, 0.1717653435758265198, 2.710121574448138676, 0.1729371839116608778),
            ('A', 0.09233952224794989993, 1.407758704513722461, 2.710121574448138676, 0.1729371839118964462),
        ];

        for &(code, c1, c2, ri, di) in &cases {
            let (r, d) = observed_to_cirs(ObservedKind::from_code(code), c1, c2, &ctx);
            assert!((r - ri).abs() < 1e-12, "{}: ra {}", code, r);
            assert!((d - di).abs() < 1e-12, "{}: dec {}", code, d);
        }
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ObservedKind::from_code('R'), ObservedKind::RaDec);
        assert_eq!(ObservedKind::from_code('r'), ObservedKind::RaDec);
        assert_eq!(ObservedKind::from_code('h'), ObservedKind::HourAngleDec);
        assert_eq!(ObservedKind::from_code('A'), ObservedKind::AzimuthZenith);
        assert_eq!(ObservedKind::from_code('?'), ObservedKind::AzimuthZenith);
    }

    #[test]
    fn test_equator_observer_without_atmosphere() {
        // equator, no polar motion or refraction: a star on the meridian at
        // dec 0 is at the zenith
        let ctx = AstrometryContext {
            local_era: 1.0,
            sin_latitude: 0.0,
            cos_latitude: 1.0,
            ..Default::default()
        };
        let obs = cirs_to_observed(1.0, 0.0, &ctx);
        assert!(obs.zenith_distance.abs() < 1e-15);
        assert!(obs.hour_angle.abs() < 1e-15);
        assert!((obs.right_ascension - 1.0).abs() < 1e-15);

        // due east on the horizon
        let obs = cirs_to_observed(1.0 + celestial_core::constants::HALF_PI, 0.0, &ctx);
        assert!((obs.azimuth - celestial_core::constants::HALF_PI).abs() < 1e-15);
        assert!((obs.zenith_distance - celestial_core::constants::HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_refraction_raises_objects() {
        let ctx = AstrometryContext {
            local_era: 0.3,
            sin_latitude: libm::sin(0.6),
            cos_latitude: libm::cos(0.6),
            refraction_a: 2.8e-4,
            refraction_b: -3.1e-7,
            ..Default::default()
        };
        let vacuum = AstrometryContext {
            refraction_a: 0.0,
            refraction_b: 0.0,
            ..ctx
        };

        let with = cirs_to_observed(1.2, 0.1, &ctx);
        let without = cirs_to_observed(1.2, 0.1, &vacuum);
        assert!(with.zenith_distance < without.zenith_distance);
        assert!((with.azimuth - without.azimuth).abs() < 1e-12);
    }
}
