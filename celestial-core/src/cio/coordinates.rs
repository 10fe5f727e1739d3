//! CIP coordinates X, Y.
//!
//! The bottom row of a bias-precession-nutation matrix is the CIP unit vector
//! in the GCRS; its first two components are X and Y.

use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::RotationMatrix3;

/// Largest |X| or |Y| accepted from a matrix, radians (about 11°).
const MAX_CIP_OFFSET: f64 = 0.2;

/// Position of the Celestial Intermediate Pole in the GCRS, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
}

impl CipCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Extracts X, Y from a bias-precession-nutation matrix.
    ///
    /// Rejects matrices whose pole is implausibly far from the GCRS pole.
    pub fn from_npb_matrix(npb_matrix: &RotationMatrix3) -> AstroResult<Self> {
        let x = npb_matrix.get(2, 0);
        let y = npb_matrix.get(2, 1);

        if x.abs() > MAX_CIP_OFFSET || y.abs() > MAX_CIP_OFFSET {
            return Err(AstroError::math_error(
                "CipCoordinates::from_npb_matrix",
                MathErrorKind::OutOfRange,
                &format!(
                    "CIP coordinates out of reasonable range: X={:.6}, Y={:.6}",
                    x, y
                ),
            ));
        }

        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cip_from_identity_matrix() {
        let cip = CipCoordinates::from_npb_matrix(&RotationMatrix3::identity()).unwrap();
        assert_eq!(cip, CipCoordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_cip_validation_error() {
        let invalid_matrix = RotationMatrix3::from_array([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.25, 0.05, 1.0],
        ]);

        let err = CipCoordinates::from_npb_matrix(&invalid_matrix).unwrap_err();
        assert!(err
            .to_string()
            .contains("CIP coordinates out of reasonable range"));
    }
}
