//! IAU 2006 CIO locator `s`.
//!
//! `s` places the Celestial Intermediate Origin on the CIP equator. The series
//! gives `s + XY/2` as a polynomial in TT centuries whose coefficients are
//! themselves Fourier series in the fundamental arguments; subtracting
//! `XY/2` for the caller's CIP coordinates gives `s`.
//!
//! # References
//!
//! - Capitaine et al. (2003), A&A 400, 1145-1154
//! - IERS Conventions (2010), Chapter 5, Table 5.2d

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, MICROARCSEC_TO_RAD, TWOPI};
use crate::errors::{AstroError, AstroResult};
use crate::math::fmod;

/// Multipliers of (l, l', F, D, Ω, L_Ve, L_E, p_A), then sine and cosine
/// amplitudes in microarcseconds.
type Term = ([i8; 8], f64, f64);

/// Polynomial part, microarcseconds.
const POLYNOMIAL: [f64; 6] = [94.00, 3808.65, -122.68, -72574.11, 27.98, 15.62];

/// Beyond this many centuries from J2000 the series is not trusted.
const MAX_CENTURIES: f64 = 20.0;

#[rustfmt::skip]
const S0: [Term; 33] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],  -2640.73,    0.39),
    ([  0,   0,   0,   0,   2,   0,   0,   0],    -63.53,    0.02),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],    -11.75,   -0.01),
    ([  0,   0,   2,  -2,   1,   0,   0,   0],    -11.21,   -0.01),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],      4.57,    0.00),
    ([  0,   0,   2,   0,   3,   0,   0,   0],     -2.02,    0.00),
    ([  0,   0,   2,   0,   1,   0,   0,   0],     -1.98,    0.00),
    ([  0,   0,   0,   0,   3,   0,   0,   0],      1.72,    0.00),
    ([  0,   1,   0,   0,   1,   0,   0,   0],      1.41,    0.01),
    ([  0,   1,   0,   0,  -1,   0,   0,   0],      1.26,    0.01),
    ([  1,   0,   0,   0,  -1,   0,   0,   0],      0.63,    0.00),
    ([  1,   0,   0,   0,   1,   0,   0,   0],      0.63,    0.00),
    ([  0,   1,   2,  -2,   3,   0,   0,   0],     -0.46,    0.00),
    ([  0,   1,   2,  -2,   1,   0,   0,   0],     -0.45,    0.00),
    ([  0,   0,   4,  -4,   4,   0,   0,   0],     -0.36,    0.00),
    ([  0,   0,   1,  -1,   1,  -8,  12,   0],      0.24,    0.12),
    ([  0,   0,   2,   0,   0,   0,   0,   0],     -0.32,    0.00),
    ([  0,   0,   2,   0,   2,   0,   0,   0],     -0.28,    0.00),
    ([  1,   0,   2,   0,   3,   0,   0,   0],     -0.27,    0.00),
    ([  1,   0,   2,   0,   1,   0,   0,   0],     -0.26,    0.00),
    ([  0,   0,   2,  -2,   0,   0,   0,   0],      0.21,    0.00),
    ([  0,   1,  -2,   2,  -3,   0,   0,   0],     -0.19,    0.00),
    ([  0,   1,  -2,   2,  -1,   0,   0,   0],     -0.18,    0.00),
    ([  0,   0,   0,   0,   0,   8, -13,  -1],      0.10,   -0.05),
    ([  0,   0,   0,   2,   0,   0,   0,   0],     -0.15,    0.00),
    ([  2,   0,  -2,   0,  -1,   0,   0,   0],      0.14,    0.00),
    ([  0,   1,   2,  -2,   2,   0,   0,   0],      0.14,    0.00),
    ([  1,   0,   0,  -2,   1,   0,   0,   0],     -0.14,    0.00),
    ([  1,   0,   0,  -2,  -1,   0,   0,   0],     -0.14,    0.00),
    ([  0,   0,   4,  -2,   4,   0,   0,   0],     -0.13,    0.00),
    ([  0,   0,   2,  -2,   4,   0,   0,   0],      0.11,    0.00),
    ([  1,   0,  -2,   0,  -3,   0,   0,   0],     -0.11,    0.00),
    ([  1,   0,  -2,   0,  -1,   0,   0,   0],     -0.11,    0.00),
];

#[rustfmt::skip]
const S1: [Term; 3] = [
    ([  0,   0,   0,   0,   2,   0,   0,   0],     -0.07,    3.57),
    ([  0,   0,   0,   0,   1,   0,   0,   0],      1.73,   -0.03),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],      0.00,    0.48),
];

#[rustfmt::skip]
const S2: [Term; 25] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],    743.52,   -0.17),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],     56.91,    0.06),
    ([  0,   0,   2,   0,   2,   0,   0,   0],      9.84,   -0.01),
    ([  0,   0,   0,   0,   2,   0,   0,   0],     -8.85,    0.01),
    ([  0,   1,   0,   0,   0,   0,   0,   0],     -6.38,   -0.05),
    ([  1,   0,   0,   0,   0,   0,   0,   0],     -3.07,    0.00),
    ([  0,   1,   2,  -2,   2,   0,   0,   0],      2.23,    0.00),
    ([  0,   0,   2,   0,   1,   0,   0,   0],      1.67,    0.00),
    ([  1,   0,   2,   0,   2,   0,   0,   0],      1.30,    0.00),
    ([  0,   1,  -2,   2,  -2,   0,   0,   0],      0.93,    0.00),
    ([  1,   0,   0,  -2,   0,   0,   0,   0],      0.68,    0.00),
    ([  0,   0,   2,  -2,   1,   0,   0,   0],     -0.55,    0.00),
    ([  1,   0,  -2,   0,  -2,   0,   0,   0],      0.53,    0.00),
    ([  0,   0,   0,   2,   0,   0,   0,   0],     -0.27,    0.00),
    ([  1,   0,   0,   0,   1,   0,   0,   0],     -0.27,    0.00),
    ([  1,   0,  -2,  -2,  -2,   0,   0,   0],     -0.26,    0.00),
    ([  1,   0,   0,   0,  -1,   0,   0,   0],     -0.25,    0.00),
    ([  1,   0,   2,   0,   1,   0,   0,   0],      0.22,    0.00),
    ([  2,   0,   0,  -2,   0,   0,   0,   0],     -0.21,    0.00),
    ([  2,   0,  -2,   0,  -1,   0,   0,   0],      0.20,    0.00),
    ([  0,   0,   2,   2,   2,   0,   0,   0],      0.17,    0.00),
    ([  2,   0,   2,   0,   2,   0,   0,   0],      0.13,    0.00),
    ([  2,   0,   0,   0,   0,   0,   0,   0],     -0.13,    0.00),
    ([  1,   0,   2,  -2,   2,   0,   0,   0],     -0.12,    0.00),
    ([  0,   0,   2,   0,   0,   0,   0,   0],     -0.11,    0.00),
];

#[rustfmt::skip]
const S3: [Term; 4] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],      0.30,  -23.42),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],     -0.03,   -1.46),
    ([  0,   0,   2,   0,   2,   0,   0,   0],     -0.01,   -0.25),
    ([  0,   0,   0,   0,   2,   0,   0,   0],      0.00,    0.23),
];

#[rustfmt::skip]
const S4: [Term; 1] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],     -0.26,   -0.01),
];
fn fundamental_arguments(t: f64) -> [f64; 8] {
    let delaunay = |c0: f64, c1: f64, c2: f64, c3: f64, c4: f64| {
        fmod(c0 + t * (c1 + t * (c2 + t * (c3 + t * c4))), CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD
    };

    [
        delaunay(485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470),
        delaunay(1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149),
        delaunay(335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417),
        delaunay(1072260.703692, 1602961601.2090, -6.3706, 0.006593, -0.00003169),
        delaunay(450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939),
        fmod(3.176146697 + 1021.3285546211 * t, TWOPI),
        fmod(1.753470314 + 628.3075849991 * t, TWOPI),
        (0.024381750 + 0.00000538691 * t) * t,
    ]
}

fn sum_terms(start: f64, terms: &[Term], fa: &[f64; 8]) -> f64 {
    terms.iter().rev().fold(start, |acc, (multipliers, sine, cosine)| {
        let arg: f64 = multipliers
            .iter()
            .zip(fa.iter())
            .map(|(&m, a)| f64::from(m) * a)
            .sum();
        let (sarg, carg) = libm::sincos(arg);
        acc + sine * sarg + cosine * carg
    })
}

/// CIO locator `s` in radians.
///
/// `t` is TT Julian centuries since J2000.0; `x`, `y` are the CIP
/// coordinates. Fails when `|t|` exceeds 20 centuries.
pub fn cio_locator(t: f64, x: f64, y: f64) -> AstroResult<f64> {
    if !t.is_finite() || t.abs() > MAX_CENTURIES {
        return Err(AstroError::calculation_error(
            "cio_locator",
            &format!("epoch {:.1} centuries from J2000.0 is outside the series range", t),
        ));
    }

    let fa = fundamental_arguments(t);
    let w0 = sum_terms(POLYNOMIAL[0], &S0, &fa);
    let w1 = sum_terms(POLYNOMIAL[1], &S1, &fa);
    let w2 = sum_terms(POLYNOMIAL[2], &S2, &fa);
    let w3 = sum_terms(POLYNOMIAL[3], &S3, &fa);
    let w4 = sum_terms(POLYNOMIAL[4], &S4, &fa);
    let w5 = POLYNOMIAL[5];

    let series = (w0 + (w1 + (w2 + (w3 + (w4 + w5 * t) * t) * t) * t) * t) * MICROARCSEC_TO_RAD;
    Ok(series - 0.5 * x * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

    #[test]
    fn test_reference_value_2006() {
        let t = ((2400000.5 - J2000_JD) + 53736.0) / DAYS_PER_JULIAN_CENTURY;
        let s = cio_locator(t, 0.5791308486706011000e-3, 0.4020579816732961219e-4).unwrap();
        assert!(
            (s - -0.1220032213076463117e-7).abs() < 1e-18,
            "s = {:.19e}",
            s
        );
    }

    #[test]
    fn test_xy_term() {
        let s0 = cio_locator(0.3, 0.0, 0.0).unwrap();
        let s1 = cio_locator(0.3, 2e-3, 1e-4).unwrap();
        assert!((s0 - s1 - 1e-7).abs() < 1e-20);
    }

    #[test]
    fn test_out_of_range_epochs_rejected() {
        assert!(cio_locator(25.0, 0.0, 0.0).is_err());
        assert!(cio_locator(-20.5, 0.0, 0.0).is_err());
        assert!(cio_locator(f64::NAN, 0.0, 0.0).is_err());
        assert!(cio_locator(19.9, 0.0, 0.0).is_ok());
    }
}
