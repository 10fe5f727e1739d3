//! IAU 2006 precession, Fukushima-Williams angles.
//!
//! The four angles (γ̄, φ̄, ψ̄, ε_A) describe the mean equator and equinox of
//! date relative to the GCRS, frame bias included. Adding nutation to ψ̄ and
//! ε_A before building the matrix gives the full bias-precession-nutation
//! matrix in one step.
//!
//! # References
//!
//! - Hilton, J.L., et al. (2006), Celest. Mech. Dyn. Astron. 94, 351-367
//! - IERS Conventions (2010), Chapter 5

use crate::constants::ARCSEC_TO_RAD;
use crate::matrix::RotationMatrix3;

/// Fukushima-Williams precession angles, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FukushimaWilliamsAngles {
    pub gamma_bar: f64,
    pub phi_bar: f64,
    pub psi_bar: f64,
    pub epsilon_a: f64,
}

impl FukushimaWilliamsAngles {
    /// Angles at `t` Julian centuries of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let gamma_bar = (-0.052928
            + (10.556378
                + (0.4932044 + (-0.00031238 + (-0.000002788 + (0.0000000260) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let phi_bar = (84381.412819
            + (-46.811016
                + (0.0511268 + (0.00053289 + (-0.000000440 + (-0.0000000176) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let psi_bar = (-0.041775
            + (5038.481484
                + (1.5584175 + (-0.00018522 + (-0.000026452 + (-0.0000000148) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let epsilon_a = (84381.406
            + (-46.836769
                + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        Self {
            gamma_bar,
            phi_bar,
            psi_bar,
            epsilon_a,
        }
    }

    /// Bias-precession-nutation matrix, GCRS to true of date. Zero
    /// nutation gives the bias-precession matrix, GCRS to mean of date.
    ///
    /// `R1(-ε_A - Δε) · R3(-ψ̄ - Δψ) · R1(φ̄) · R3(γ̄)`
    pub fn bias_precession_nutation_matrix(&self, dpsi: f64, deps: f64) -> RotationMatrix3 {
        let mut matrix = RotationMatrix3::identity();
        matrix.rotate_z(self.gamma_bar);
        matrix.rotate_x(self.phi_bar);
        matrix.rotate_z(-(self.psi_bar + dpsi));
        matrix.rotate_x(-(self.epsilon_a + deps));
        matrix
    }
}
