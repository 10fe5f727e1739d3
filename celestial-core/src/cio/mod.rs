//! CIO-based celestial-to-intermediate transformation.
//!
//! - [`CipCoordinates`]: X/Y of the Celestial Intermediate Pole
//! - [`cio_locator`]: the CIO locator `s`
//! - [`EquationOfOrigins`]: CIO to equinox arc, `GAST = ERA - EO`
//!
//! [`gcrs_to_cirs_matrix`] turns (X, Y, s) into the GCRS→CIRS rotation.

pub mod coordinates;
pub mod locator;
pub mod origins;

pub use coordinates::CipCoordinates;
pub use locator::cio_locator;
pub use origins::EquationOfOrigins;

use crate::matrix::RotationMatrix3;

/// GCRS→CIRS matrix from CIP coordinates and CIO locator.
///
/// `R3(-(E+s)) · R2(d) · R3(E)` with `E = atan2(Y, X)` and
/// `d = atan(sqrt(r² / (1 - r²)))`, `r² = X² + Y²`.
pub fn gcrs_to_cirs_matrix(x: f64, y: f64, s: f64) -> RotationMatrix3 {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { libm::atan2(y, x) } else { 0.0 };
    let d = libm::atan(libm::sqrt(r2 / (1.0 - r2)));

    let mut matrix = RotationMatrix3::identity();
    matrix.rotate_z(e);
    matrix.rotate_y(d);
    matrix.rotate_z(-(e + s));

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcrs_to_cirs_matrix_with_zero_inputs_returns_identity() {
        let matrix = gcrs_to_cirs_matrix(0.0, 0.0, 0.0);
        assert!(matrix.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn gcrs_to_cirs_matrix_reference_values() {
        let x = 0.5791308486706011000e-3;
        let y = 0.4020579816732961219e-4;
        let m = gcrs_to_cirs_matrix(x, y, -0.1220040848472271978e-7);

        assert!(m.is_rotation_matrix(1e-15));
        assert!((m.get(0, 0) - 0.9999998323037157138).abs() < 1e-12);
        assert!((m.get(0, 1) - 0.5581984869168499149e-9).abs() < 1e-14);
        assert!((m.get(1, 0) - -0.2384261642670440317e-7).abs() < 1e-14);
        assert!((m.get(1, 2) - -0.4020579110169668931e-4).abs() < 1e-14);
        // bottom row is the CIP itself
        assert!((m.get(2, 0) - x).abs() < 1e-15);
        assert!((m.get(2, 1) - y).abs() < 1e-15);
    }

    #[test]
    fn cip_round_trips_through_matrix() {
        let m = gcrs_to_cirs_matrix(-3e-4, 7e-5, 2e-8);
        let cip = CipCoordinates::from_npb_matrix(&m).unwrap();
        assert!((cip.x + 3e-4).abs() < 1e-16);
        assert!((cip.y - 7e-5).abs() < 1e-16);
    }
}
