//! Position/velocity pairs and their spherical form.
//!
//! A [`PvVector`] carries a position and a velocity in consistent units (AU
//! and AU/day throughout the astrometry crates). [`SphericalMotion`] is the
//! same state expressed as angles, distance and their rates.

use super::Vector3;

/// Position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PvVector {
    pub position: Vector3,
    pub velocity: Vector3,
}

/// Spherical coordinates plus rates.
///
/// `theta` is longitude-like, `phi` latitude-like; the rates are per unit of
/// time of the originating velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalMotion {
    pub theta: f64,
    pub phi: f64,
    pub distance: f64,
    pub theta_rate: f64,
    pub phi_rate: f64,
    pub distance_rate: f64,
}

impl PvVector {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    pub fn zeros() -> Self {
        Self::default()
    }

    /// Builds the Cartesian state from spherical coordinates and rates.
    pub fn from_spherical(motion: &SphericalMotion) -> Self {
        let (st, ct) = libm::sincos(motion.theta);
        let (sp, cp) = libm::sincos(motion.phi);
        let r = motion.distance;

        let rcp = r * cp;
        let x = rcp * ct;
        let y = rcp * st;
        let rpd = r * motion.phi_rate;
        let w = rpd * sp - cp * motion.distance_rate;

        Self {
            position: Vector3::new(x, y, r * sp),
            velocity: Vector3::new(
                -y * motion.theta_rate - w * ct,
                x * motion.theta_rate - w * st,
                rpd * cp + sp * motion.distance_rate,
            ),
        }
    }

    /// Converts to spherical coordinates and rates.
    ///
    /// A null position takes its direction from the velocity, so the angles
    /// stay meaningful for an object passing through the origin. At a pole the
    /// angular rates are returned as zero.
    pub fn to_spherical(&self) -> SphericalMotion {
        let Vector3 {
            x: mut px,
            y: mut py,
            z: mut pz,
        } = self.position;
        let Vector3 {
            x: vx,
            y: vy,
            z: vz,
        } = self.velocity;

        let mut rxy2 = px * px + py * py;
        let mut r2 = rxy2 + pz * pz;
        let rtrue = libm::sqrt(r2);

        let mut rw = rtrue;
        if rtrue == 0.0 {
            px = vx;
            py = vy;
            pz = vz;
            rxy2 = px * px + py * py;
            r2 = rxy2 + pz * pz;
            rw = libm::sqrt(r2);
        }

        let rxy = libm::sqrt(rxy2);
        let xyp = px * vx + py * vy;

        let (theta, phi, theta_rate, phi_rate) = if rxy2 != 0.0 {
            (
                libm::atan2(py, px),
                libm::atan2(pz, rxy),
                (px * vy - py * vx) / rxy2,
                (vz * rxy2 - pz * xyp) / (r2 * rxy),
            )
        } else {
            let phi = if pz != 0.0 { libm::atan2(pz, rxy) } else { 0.0 };
            (0.0, phi, 0.0, 0.0)
        };

        SphericalMotion {
            theta,
            phi,
            distance: rtrue,
            theta_rate,
            phi_rate,
            distance_rate: if rw != 0.0 { (xyp + pz * vz) / rw } else { 0.0 },
        }
    }

    /// Linear motion over `dt`: position advanced by `dt * velocity`.
    pub fn propagate(&self, dt: f64) -> Self {
        Self {
            position: self.position + self.velocity * dt,
            velocity: self.velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_vec_close;

    #[test]
    fn test_spherical_round_trip() {
        let motion = SphericalMotion {
            theta: -3.21,
            phi: 0.123,
            distance: 0.456,
            theta_rate: -7.8e-6,
            phi_rate: 9.01e-6,
            distance_rate: -1.23e-5,
        };
        let pv = PvVector::from_spherical(&motion);

        // published s2pv check values
        assert_vec_close(
            &pv.position,
            &Vector3::new(-0.4514964673880165228, 0.0309339427734258688, 0.0559466810510877933),
            1e-12,
            "s2pv position",
        );
        assert_vec_close(
            &pv.velocity,
            &Vector3::new(0.1292270850663260170e-4, 0.2652814182060691422e-5, 0.2568431853930292259e-5),
            1e-16,
            "s2pv velocity",
        );

        let back = pv.to_spherical();
        assert!((back.theta - (motion.theta + crate::constants::TWOPI)).abs() < 1e-12);
        assert!((back.phi - motion.phi).abs() < 1e-12);
        assert!((back.distance - motion.distance).abs() < 1e-12);
        assert!((back.theta_rate - motion.theta_rate).abs() < 1e-16);
        assert!((back.phi_rate - motion.phi_rate).abs() < 1e-16);
        assert!((back.distance_rate - motion.distance_rate).abs() < 1e-16);
    }

    #[test]
    fn test_null_position_uses_velocity_direction() {
        let pv = PvVector::new(Vector3::zeros(), Vector3::new(0.0, 2.0, 0.0));
        let s = pv.to_spherical();
        assert_eq!(s.distance, 0.0);
        assert!((s.theta - crate::constants::HALF_PI).abs() < 1e-15);
        assert_eq!(s.phi, 0.0);
        assert!((s.distance_rate - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_pole_has_zero_angular_rates() {
        let pv = PvVector::new(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 0.5));
        let s = pv.to_spherical();
        assert_eq!(s.theta, 0.0);
        assert!((s.phi - crate::constants::HALF_PI).abs() < 1e-15);
        assert_eq!(s.theta_rate, 0.0);
        assert_eq!(s.phi_rate, 0.0);
        assert!((s.distance_rate - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_propagate() {
        let pv = PvVector::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.5, -1.0));
        let moved = pv.propagate(2.0);
        assert_eq!(moved.position, Vector3::new(1.0, 1.0, -2.0));
        assert_eq!(moved.velocity, pv.velocity);
    }
}
