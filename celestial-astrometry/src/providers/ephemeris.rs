//! Low-precision analytic Earth ephemeris.
//!
//! Built from three short theories:
//!
//! - the Sun's geometric longitude and radius vector from mean elements with
//!   the equation of centre (Meeus, *Astronomical Algorithms*, ch. 25), which
//!   gives the Earth-Moon barycentre,
//! - the Moon's leading periodic terms (Meeus ch. 47), to step from the
//!   Earth-Moon barycentre to the Earth,
//! - Keplerian mean elements of the four giant planets (Standish, *Keplerian
//!   Elements for Approximate Positions of the Major Planets*), for the Sun's
//!   reflex motion about the barycentre.
//!
//! Positions are good to a few 1e-5 AU and velocities to better than 1e-6
//! AU/day between 1800 and 2200, which keeps the resulting aberration error
//! near a milliarcsecond. Velocities come from central differences.

use celestial_core::constants::{
    ARCSEC_TO_RAD, AU_KM, DEG_TO_RAD, J2000_OBLIQUITY_RAD, SECONDS_PER_DAY_F64, TWOPI,
};
use celestial_core::math::fmod;
use celestial_core::{AstroError, AstroResult, JulianDate, PvVector, Vector3};

use super::{EarthEphemeris, EarthState};
use crate::deflection::DeflectingBody;

const DT_DAYS: f64 = 1.0 / SECONDS_PER_DAY_F64;

/// Supported span, Julian centuries either side of J2000.
const MAX_CENTURIES: f64 = 2.0;

/// Moon/Earth mass ratio.
const MOON_EARTH_MASS_RATIO: f64 = 0.0123000371;

/// General precession in longitude, arcsec per century.
const PRECESSION_RATE: f64 = 5028.796195;

/// Mean orbital elements at J2000 and their rates per century: semi-major
/// axis (AU), eccentricity, inclination, mean longitude, longitude of
/// perihelion, longitude of the node (degrees), all on the J2000 ecliptic.
struct MeanElements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    perihelion: (f64, f64),
    node: (f64, f64),
}

/// Giant planet with its mass in solar masses.
struct Planet {
    mass: f64,
    elements: MeanElements,
}

const JUPITER: Planet = Planet {
    mass: 1.0 / 1047.348644,
    elements: MeanElements {
        a: (5.20288700, -0.00011607),
        e: (0.04838624, -0.00013253),
        i: (1.30439695, -0.00183714),
        l: (34.39644051, 3034.74612775),
        perihelion: (14.72847983, 0.21252668),
        node: (100.47390909, 0.20469106),
    },
};

const SATURN: Planet = Planet {
    mass: 1.0 / 3497.9018,
    elements: MeanElements {
        a: (9.53667594, -0.00125060),
        e: (0.05386179, -0.00050991),
        i: (2.48599187, 0.00193609),
        l: (49.95424423, 1222.49362201),
        perihelion: (92.59887831, -0.41897216),
        node: (113.66242448, -0.28867794),
    },
};

const URANUS: Planet = Planet {
    mass: 1.0 / 22902.98,
    elements: MeanElements {
        a: (19.18916464, -0.00196176),
        e: (0.04725744, -0.00004397),
        i: (0.77263783, -0.00242939),
        l: (313.23810451, 428.48202785),
        perihelion: (170.95427630, 0.40805281),
        node: (74.01692503, 0.04240589),
    },
};

const NEPTUNE: Planet = Planet {
    mass: 1.0 / 19412.24,
    elements: MeanElements {
        a: (30.06992276, 0.00026291),
        e: (0.00859048, 0.00005105),
        i: (1.77004347, 0.00035372),
        l: (-55.12002969, 218.45945325),
        perihelion: (44.96476227, -0.32241464),
        node: (131.78422574, -0.00508664),
    },
};

const GIANTS: [&Planet; 4] = [&JUPITER, &SATURN, &URANUS, &NEPTUNE];

#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionEphemeris;

impl LowPrecisionEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Saturn, Jupiter and the Sun as light deflectors, in that order, with
    /// barycentric states at `tdb`.
    pub fn deflecting_bodies(&self, tdb: &JulianDate) -> AstroResult<[DeflectingBody; 3]> {
        let jd = checked(tdb)?;

        let sun = central_difference(jd, &sun_barycentric);
        let jupiter = central_difference(jd, &|t| planet_heliocentric(&JUPITER, t) + sun_barycentric(t));
        let saturn = central_difference(jd, &|t| planet_heliocentric(&SATURN, t) + sun_barycentric(t));

        Ok([
            DeflectingBody::saturn(saturn),
            DeflectingBody::jupiter(jupiter),
            DeflectingBody::sun(sun),
        ])
    }
}

impl EarthEphemeris for LowPrecisionEphemeris {
    fn earth_state(&self, tdb: &JulianDate) -> AstroResult<EarthState> {
        let jd = checked(tdb)?;

        let heliocentric = central_difference(jd, &earth_heliocentric);
        let barycentric =
            central_difference(jd, &|t| earth_heliocentric(t) + sun_barycentric(t));

        Ok(EarthState {
            barycentric,
            heliocentric,
        })
    }
}

fn checked(tdb: &JulianDate) -> AstroResult<JulianDate> {
    let jd = tdb.validated()?;
    if jd.centuries_since_j2000().abs() > MAX_CENTURIES {
        return Err(AstroError::data_error(
            "LowPrecisionEphemeris",
            "earth_state",
            &format!("{} is outside the supported span 1800-2200", jd),
        ));
    }
    Ok(jd)
}

/// Position and velocity from a position function of TDB centuries.
fn central_difference(jd: JulianDate, position: &dyn Fn(f64) -> Vector3) -> PvVector {
    let at = |days: f64| position(jd.add_days(days).centuries_since_j2000());

    let p = at(0.0);
    let p_minus = at(-DT_DAYS);
    let p_plus = at(DT_DAYS);
    let inv_2dt = 1.0 / (2.0 * DT_DAYS);

    PvVector::new(p, (p_plus - p_minus) * inv_2dt)
}

/// J2000 ecliptic → ICRS-aligned equatorial axes. Frame bias is ignored.
fn ecliptic_to_equatorial(v: Vector3) -> Vector3 {
    let (se, ce) = libm::sincos(J2000_OBLIQUITY_RAD);
    Vector3::new(v.x, v.y * ce - v.z * se, v.y * se + v.z * ce)
}

fn earth_heliocentric(t: f64) -> Vector3 {
    earth_moon_barycentre(t) - moon_geocentric(t) * (MOON_EARTH_MASS_RATIO / (1.0 + MOON_EARTH_MASS_RATIO))
}

fn earth_moon_barycentre(t: f64) -> Vector3 {
    let l0 = 280.46646 + (36000.76983 + 0.0003032 * t) * t;
    let m = (357.52911 + (35999.05029 - 0.0001537 * t) * t) * DEG_TO_RAD;
    let e = 0.016708634 - (0.000042037 + 0.0000001267 * t) * t;

    let centre = (1.914602 - (0.004817 + 0.000014 * t) * t) * libm::sin(m)
        + (0.019993 - 0.000101 * t) * libm::sin(2.0 * m)
        + 0.000289 * libm::sin(3.0 * m);

    // geometric longitude of the Sun, referred to the J2000 equinox
    let lon = (l0 + centre) * DEG_TO_RAD - PRECESSION_RATE * t * ARCSEC_TO_RAD;
    let nu = m + centre * DEG_TO_RAD;
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * libm::cos(nu));

    let (sl, cl) = libm::sincos(lon);
    ecliptic_to_equatorial(Vector3::new(-r * cl, -r * sl, 0.0))
}

fn moon_geocentric(t: f64) -> Vector3 {
    let lp = 218.3164477 + 481267.88123421 * t;
    let d = (297.8501921 + 445267.1114034 * t) * DEG_TO_RAD;
    let m = (357.5291092 + 35999.0502909 * t) * DEG_TO_RAD;
    let mp = (134.9633964 + 477198.8675055 * t) * DEG_TO_RAD;
    let f = (93.2720950 + 483202.0175233 * t) * DEG_TO_RAD;

    let lon = (lp
        + 6.288774 * libm::sin(mp)
        + 1.274027 * libm::sin(2.0 * d - mp)
        + 0.658314 * libm::sin(2.0 * d)
        + 0.213618 * libm::sin(2.0 * mp)
        - 0.185116 * libm::sin(m)
        - 0.114332 * libm::sin(2.0 * f))
        * DEG_TO_RAD
        - PRECESSION_RATE * t * ARCSEC_TO_RAD;

    let lat = (5.128122 * libm::sin(f)
        + 0.280602 * libm::sin(mp + f)
        + 0.277693 * libm::sin(mp - f)
        + 0.173237 * libm::sin(2.0 * d - f))
        * DEG_TO_RAD;

    let dist_km = 385000.56
        - 20905.355 * libm::cos(mp)
        - 3699.111 * libm::cos(2.0 * d - mp)
        - 2955.968 * libm::cos(2.0 * d)
        - 569.925 * libm::cos(2.0 * mp);

    ecliptic_to_equatorial(Vector3::from_spherical(lon, lat) * (dist_km / AU_KM))
}

fn planet_heliocentric(planet: &Planet, t: f64) -> Vector3 {
    let el = &planet.elements;
    let at = |(v0, v1): (f64, f64)| v0 + v1 * t;

    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.i) * DEG_TO_RAD;
    let l = at(el.l) * DEG_TO_RAD;
    let varpi = at(el.perihelion) * DEG_TO_RAD;
    let node = at(el.node) * DEG_TO_RAD;

    let omega = varpi - node;
    let m = fmod(l - varpi, TWOPI);

    // Kepler's equation
    let mut ecc_anom = m + e * libm::sin(m);
    for _ in 0..10 {
        ecc_anom -= (ecc_anom - e * libm::sin(ecc_anom) - m) / (1.0 - e * libm::cos(ecc_anom));
    }

    let xp = a * (libm::cos(ecc_anom) - e);
    let yp = a * libm::sqrt(1.0 - e * e) * libm::sin(ecc_anom);

    let (so, co) = libm::sincos(omega);
    let (sn, cn) = libm::sincos(node);
    let (si, ci) = libm::sincos(incl);

    ecliptic_to_equatorial(Vector3::new(
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ))
}

/// The Sun's barycentric position from the giant planets' pull.
fn sun_barycentric(t: f64) -> Vector3 {
    let (moment, total) = GIANTS.iter().fold((Vector3::zeros(), 1.0), |(sum, m), p| {
        (sum + planet_heliocentric(p, t) * p.mass, m + p.mass)
    });
    -(moment / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;

    #[test]
    fn test_against_full_theory() {
        let tdb = JulianDate::new(2400000.5, 53411.52501161);
        let s = LowPrecisionEphemeris::new().earth_state(&tdb).unwrap();

        // VSOP87-based Earth state at the same instant
        let ph = Vector3::new(-0.7757238809297706813, 0.5598052241363340596, 0.2426998466481686993);
        let vh = Vector3::new(-0.1091891824147313846e-1, -0.1247187268440845008e-1, -0.5407569418065039061e-2);
        let pb = Vector3::new(-0.7714104440491111971, 0.5598412061824171323, 0.2425996277722452400);
        let vb = Vector3::new(-0.1091874268116823295e-1, -0.1246525461732861538e-1, -0.5404773180966231279e-2);

        let err = |a: Vector3, b: Vector3| (a - b).magnitude();
        assert!(err(s.heliocentric.position, ph) < 5e-5, "{:e}", err(s.heliocentric.position, ph));
        assert!(err(s.barycentric.position, pb) < 5e-5, "{:e}", err(s.barycentric.position, pb));
        assert!(err(s.heliocentric.velocity, vh) < 2e-6, "{:e}", err(s.heliocentric.velocity, vh));
        assert!(err(s.barycentric.velocity, vb) < 2e-6, "{:e}", err(s.barycentric.velocity, vb));
    }

    #[test]
    fn test_orbit_is_plausible_across_span() {
        let eph = LowPrecisionEphemeris::new();
        for k in -8..=8 {
            let tdb = JulianDate::new(J2000_JD, k as f64 * 9000.0 + 17.3);
            let s = eph.earth_state(&tdb).unwrap();
            let r = s.heliocentric.position.magnitude();
            let v = s.heliocentric.velocity.magnitude();
            assert!(r > 0.98 && r < 1.02, "r = {} at {}", r, tdb);
            assert!(v > 0.0165 && v < 0.0176, "v = {} at {}", v, tdb);

            let offset = (s.barycentric.position - s.heliocentric.position).magnitude();
            assert!(offset < 0.011, "Sun offset {} at {}", offset, tdb);
        }
    }

    #[test]
    fn test_rejects_dates_outside_span() {
        let eph = LowPrecisionEphemeris::new();
        let err = eph.earth_state(&JulianDate::new(J2000_JD, -80000.0)).unwrap_err();
        assert!(err.is_recoverable());
        assert!(eph.earth_state(&JulianDate::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_deflectors_order_and_distances() {
        let tdb = JulianDate::new(J2000_JD, 2000.0);
        let [saturn, jupiter, sun] = LowPrecisionEphemeris::new().deflecting_bodies(&tdb).unwrap();

        assert_eq!(sun.mass, 1.0);
        assert!(sun.state.position.magnitude() < 0.011);
        let rj = (jupiter.state.position - sun.state.position).magnitude();
        let rs = (saturn.state.position - sun.state.position).magnitude();
        assert!(rj > 4.9 && rj < 5.5, "Jupiter at {} AU", rj);
        assert!(rs > 9.0 && rs < 10.1, "Saturn at {} AU", rs);
    }
}
