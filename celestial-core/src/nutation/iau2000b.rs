//! Truncated IAU 2000B nutation.
//!
//! The twenty largest lunisolar terms of the IAU 2000B series plus the fixed
//! offsets standing in for the planetary terms:
//!
//! - Longitude (Δψ): -0.135 milliarcseconds
//! - Obliquity (Δε): +0.388 milliarcseconds
//!
//! Truncation leaves errors of a few milliarcseconds, which is the accuracy
//! class of the bundled Earth-orientation model. Callers wanting more plug a
//! full model in through the orientation provider trait.
//!
//! The angles are scaled by the IAU 2006 J2 rate adjustment so they combine
//! consistently with IAU 2006 precession.
//!
//! # References
//!
//! - McCarthy, D. D. & Luzum, B. J. (2003), Celest. Mech. Dyn. Astron. 85, 37
//! - IERS Conventions (2010), Chapter 5

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, MILLIARCSEC_TO_RAD, TWOPI};
use crate::math::fmod;

const PLANETARY_BIAS_LONGITUDE: f64 = -0.135 * MILLIARCSEC_TO_RAD;
const PLANETARY_BIAS_OBLIQUITY: f64 = 0.388 * MILLIARCSEC_TO_RAD;

/// 0.1 microarcsecond to radians.
const UNIT_TO_RAD: f64 = ARCSEC_TO_RAD / 1e7;

/// Multipliers of (l, l', F, D, Ω), then Δψ sin, sin·t, cos and Δε cos,
/// cos·t, sin, in units of 0.1 µas.
#[rustfmt::skip]
const LUNISOLAR_TERMS: [(i8, i8, i8, i8, i8, f64, f64, f64, f64, f64, f64); 20] = [
    ( 0,  0,  0,  0, 1, -172064161.0, -174666.0,  33386.0, 92052331.0,  9086.0, 15377.0),
    ( 0,  0,  2, -2, 2,  -13170906.0,   -1675.0, -13696.0,  5730336.0, -3015.0, -4587.0),
    ( 0,  0,  2,  0, 2,   -2276413.0,    -234.0,   2796.0,   978459.0,  -485.0,  1374.0),
    ( 0,  0,  0,  0, 2,    2074554.0,     207.0,   -698.0,  -897492.0,   470.0,  -291.0),
    ( 0,  1,  0,  0, 0,    1475877.0,   -3633.0,  11817.0,    73871.0,  -184.0, -1924.0),
    ( 0,  1,  2, -2, 2,    -516821.0,    1226.0,   -524.0,   224386.0,  -677.0,  -174.0),
    ( 1,  0,  0,  0, 0,     711159.0,      73.0,   -872.0,    -6750.0,     0.0,   358.0),
    ( 0,  0,  2,  0, 1,    -387298.0,    -367.0,    380.0,   200728.0,    18.0,   318.0),
    ( 1,  0,  2,  0, 2,    -301461.0,     -36.0,    816.0,   129025.0,   -63.0,   367.0),
    ( 0, -1,  2, -2, 2,     215829.0,    -494.0,    111.0,   -95929.0,   299.0,   132.0),
    ( 0,  0,  2, -2, 1,     128227.0,     137.0,    181.0,   -68982.0,    -9.0,    39.0),
    (-1,  0,  2,  0, 2,     123457.0,      11.0,     19.0,   -53311.0,    32.0,    -4.0),
    (-1,  0,  0,  2, 0,     156994.0,      10.0,   -168.0,    -1235.0,     0.0,    82.0),
    ( 1,  0,  0,  0, 1,      63110.0,      63.0,     27.0,   -33228.0,     0.0,    -9.0),
    (-1,  0,  0,  0, 1,     -57976.0,     -63.0,   -189.0,    31429.0,     0.0,   -75.0),
    (-1,  0,  2,  2, 2,     -59641.0,     -11.0,    149.0,    25543.0,   -11.0,    66.0),
    ( 1,  0,  2,  0, 1,     -51613.0,     -42.0,    129.0,    26366.0,     0.0,    78.0),
    (-2,  0,  2,  0, 1,      45893.0,      50.0,     31.0,   -24236.0,   -10.0,    20.0),
    ( 0,  0,  0,  2, 0,      63384.0,      11.0,   -150.0,    -1220.0,     0.0,    29.0),
    ( 0,  0,  2,  2, 2,     -38571.0,      -1.0,    158.0,    16452.0,   -11.0,    68.0),
];

/// Nutation in longitude and obliquity, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

/// Truncated IAU 2000B nutation calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutationIAU2000B;

impl NutationIAU2000B {
    pub fn new() -> Self {
        Self
    }

    /// Nutation at `t` Julian centuries of TT since J2000.0, IAU 2000 rates.
    pub fn compute(&self, t: f64) -> Nutation {
        let (dpsi, deps) = lunisolar(t);
        Nutation {
            delta_psi: dpsi + PLANETARY_BIAS_LONGITUDE,
            delta_eps: deps + PLANETARY_BIAS_OBLIQUITY,
        }
    }

    /// As [`compute`](Self::compute), rescaled for use with IAU 2006 precession.
    pub fn compute_iau2006(&self, t: f64) -> Nutation {
        let n = self.compute(t);
        let fj2 = -2.7774e-6 * t;
        Nutation {
            delta_psi: n.delta_psi * (1.0 + 0.4697e-6 + fj2),
            delta_eps: n.delta_eps * (1.0 + fj2),
        }
    }
}

fn lunisolar(t: f64) -> (f64, f64) {
    let el = fmod(485868.249036 + 1717915923.2178 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let elp = fmod(1287104.79305 + 129596581.0481 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let f = fmod(335779.526232 + 1739527262.8478 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let d = fmod(1072260.70369 + 1602961601.2090 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;
    let om = fmod(450160.398036 - 6962890.5431 * t, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD;

    let mut dpsi = 0.0;
    let mut deps = 0.0;

    // smallest terms first
    for &(nl, nlp, nf, nd, nom, sp, spt, cp, ce, cet, se) in LUNISOLAR_TERMS.iter().rev() {
        let arg = fmod(
            f64::from(nl) * el
                + f64::from(nlp) * elp
                + f64::from(nf) * f
                + f64::from(nd) * d
                + f64::from(nom) * om,
            TWOPI,
        );
        let (sarg, carg) = libm::sincos(arg);

        dpsi += (sp + spt * t) * sarg + cp * carg;
        deps += (ce + cet * t) * carg + se * sarg;
    }

    (dpsi * UNIT_TO_RAD, deps * UNIT_TO_RAD)
}
