//! Equation of the origins.
//!
//! The arc on the CIP equator from the equinox to the CIO, so that
//! `GAST = ERA - EO`. CIO-based right ascensions convert to equinox-based ones
//! by subtracting EO: `α_equinox = α_CIO - EO`.

use crate::matrix::RotationMatrix3;

pub struct EquationOfOrigins;

impl EquationOfOrigins {
    /// EO from a bias-precession-nutation matrix and the matching CIO locator.
    pub fn from_npb_and_locator(npb_matrix: &RotationMatrix3, s: f64) -> f64 {
        let m = npb_matrix.elements();

        // CIO direction expressed in the true-of-date frame
        let x = m[2][0];
        let ax = x / (1.0 + m[2][2]);
        let xs = 1.0 - ax * x;
        let ys = -ax * m[2][1];
        let zs = -x;

        let p = m[0][0] * xs + m[0][1] * ys + m[0][2] * zs;
        let q = m[1][0] * xs + m[1][1] * ys + m[1][2] * zs;

        if p != 0.0 || q != 0.0 {
            s - libm::atan2(q, p)
        } else {
            s
        }
    }
}
