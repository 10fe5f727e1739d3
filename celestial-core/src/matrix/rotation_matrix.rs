//! 3x3 rotation matrices.
//!
//! Rotations follow the ERFA conventions: `rotate_x/y/z(angle)` left-multiply
//! the matrix by the elementary rotation, positive angles being anticlockwise
//! when looking from the positive axis toward the origin. Chains are built in
//! application order:
//!
//! ```
//! use celestial_core::RotationMatrix3;
//!
//! // polar motion W = R1(-yp) R2(-xp) R3(sp)
//! let mut w = RotationMatrix3::identity();
//! w.rotate_z(-1.0e-10);
//! w.rotate_y(-2.0e-7);
//! w.rotate_x(-1.5e-6);
//! assert!(w.is_rotation_matrix(1e-15));
//! ```
//!
//! The inverse of a rotation is its transpose.

use super::Vector3;

/// A 3x3 rotation matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements without validating it.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// `self = Rx(phi) * self`.
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);
        let e = &mut self.elements;

        for j in 0..3 {
            let a1 = c * e[1][j] + s * e[2][j];
            let a2 = -s * e[1][j] + c * e[2][j];
            e[1][j] = a1;
            e[2][j] = a2;
        }
    }

    /// `self = Ry(theta) * self`.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        let e = &mut self.elements;

        for j in 0..3 {
            let a0 = c * e[0][j] - s * e[2][j];
            let a2 = s * e[0][j] + c * e[2][j];
            e[0][j] = a0;
            e[2][j] = a2;
        }
    }

    /// `self = Rz(psi) * self`.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        let e = &mut self.elements;

        for j in 0..3 {
            let a0 = c * e[0][j] + s * e[1][j];
            let a1 = -s * e[0][j] + c * e[1][j];
            e[0][j] = a0;
            e[1][j] = a1;
        }
    }

    /// Matrix product `self * other`: `other` acts first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// `M * v`.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0][0] * v.x + e[0][1] * v.y + e[0][2] * v.z,
            e[1][0] * v.x + e[1][1] * v.y + e[1][2] * v.z,
            e[2][0] * v.x + e[2][1] * v.y + e[2][2] * v.z,
        )
    }

    /// `Mᵀ * v`, the inverse rotation, without forming the transpose.
    pub fn apply_transpose(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0][0] * v.x + e[1][0] * v.y + e[2][0] * v.z,
            e[0][1] * v.x + e[1][1] * v.y + e[2][1] * v.z,
            e[0][2] * v.x + e[1][2] * v.y + e[2][2] * v.z,
        )
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self::from_array([
            [e[0][0], e[1][0], e[2][0]],
            [e[0][1], e[1][1], e[2][1]],
            [e[0][2], e[1][2], e[2][2]],
        ])
    }

    /// Checks `det = +1` and `M Mᵀ = I` within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Largest element-wise absolute difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(&vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_elementary_rotations_follow_erfa_sense() {
        // Rz(+90°): x -> -y
        let mut rz = RotationMatrix3::identity();
        rz.rotate_z(HALF_PI);
        let v = rz * Vector3::x_axis();
        assert!(v.x.abs() < 1e-15 && (v.y + 1.0).abs() < 1e-15);

        // Rx(+90°): y -> -z
        let mut rx = RotationMatrix3::identity();
        rx.rotate_x(HALF_PI);
        let v = rx * Vector3::y_axis();
        assert!((v.z + 1.0).abs() < 1e-15);

        // Ry(+90°): z -> -x
        let mut ry = RotationMatrix3::identity();
        ry.rotate_y(HALF_PI);
        let v = ry * Vector3::z_axis();
        assert!((v.x + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotation_chain_left_multiplies() {
        let mut chained = RotationMatrix3::identity();
        chained.rotate_z(0.3);
        chained.rotate_x(-0.2);

        let mut rz = RotationMatrix3::identity();
        rz.rotate_z(0.3);
        let mut rx = RotationMatrix3::identity();
        rx.rotate_x(-0.2);

        assert!(chained.max_difference(&(rx * rz)) < 1e-16);
    }

    #[test]
    fn test_transpose_inverts() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(1.1);
        m.rotate_y(-0.4);
        m.rotate_x(2.3);
        assert!(m.is_rotation_matrix(1e-14));

        let v = Vector3::new(0.2, -0.7, 0.5);
        let back = m.apply_transpose(&m.apply(&v));
        assert!((back - v).magnitude() < 1e-15);
        assert!((m.transpose() * m.apply(&v) - v).magnitude() < 1e-15);
    }

    #[test]
    fn test_non_rotation_detected() {
        let scaled = RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-12));
        let mirror = RotationMatrix3::from_array([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!mirror.is_rotation_matrix(1e-12));
    }
}
