//! Gravitational light deflection.
//!
//! The single-body form applies to any deflector, with a limiter that keeps
//! the result finite when the source direction passes close to the body.
//! The multi-body form walks an ordered list of bodies, back-projecting each
//! to the time the light passed it.

use celestial_core::constants::{AU_LIGHT_TIME_S, SCHWARZSCHILD_RADIUS_SUN_AU, SECONDS_PER_DAY_F64};
use celestial_core::{PvVector, Vector3};

/// A body that bends light on its way to the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeflectingBody {
    /// Mass, solar masses.
    pub mass: f64,
    /// Deflection limiter, radians²/2.
    pub limiter: f64,
    /// Barycentric position (AU) and velocity (AU/day).
    pub state: PvVector,
}

impl DeflectingBody {
    pub fn new(mass: f64, limiter: f64, state: PvVector) -> Self {
        Self {
            mass,
            limiter,
            state,
        }
    }

    pub fn sun(state: PvVector) -> Self {
        Self::new(1.0, 6e-6, state)
    }

    pub fn jupiter(state: PvVector) -> Self {
        Self::new(0.00095435, 3e-9, state)
    }

    pub fn saturn(state: PvVector) -> Self {
        Self::new(0.00028574, 3e-10, state)
    }
}

/// Deflection of light by one body.
///
/// `p` is the direction from observer to source and `q` from body to source
/// (both unit vectors), `e` the unit vector body → observer and `em` that
/// distance in AU. The denominator is floored at `limiter`. The result is not
/// renormalised.
///
/// For a star `q` and `p` coincide. For a solar-system source `q` differs
/// from `p`, which is why both are taken.
pub fn deflect(mass: f64, p: &Vector3, q: &Vector3, e: &Vector3, em: f64, limiter: f64) -> Vector3 {
    let qpe = *q + *e;
    let qdqpe = q.dot(&qpe);

    let w = mass * SCHWARZSCHILD_RADIUS_SUN_AU / em / qdqpe.max(limiter);

    let eq = e.cross(q);
    let peq = p.cross(&eq);

    *p + peq * w
}

/// Deflection of starlight by the Sun.
///
/// The limiter shrinks with distance from the Sun, so an observer far out in
/// the solar system still sees deflection right down to the limb.
pub fn deflect_by_sun(p: &Vector3, e: &Vector3, em: f64) -> Vector3 {
    let em2 = (em * em).max(1.0);
    deflect(1.0, p, p, e, em, 1e-6 / em2)
}

/// Deflection by a sequence of bodies, applied in slice order.
///
/// `observer` is the barycentric observer position (AU), `direction` the
/// unit source direction. Each body is moved back to where it was when the
/// light passed it, but never forward.
pub fn deflect_by_bodies(bodies: &[DeflectingBody], observer: &Vector3, direction: &Vector3) -> Vector3 {
    const LIGHT_TIME_DAYS_PER_AU: f64 = AU_LIGHT_TIME_S / SECONDS_PER_DAY_F64;

    bodies.iter().fold(*direction, |sn, body| {
        let v = *observer - body.state.position;

        let dt = (sn.dot(&v) * LIGHT_TIME_DAYS_PER_AU).min(0.0);
        let ev = v - body.state.velocity * dt;
        let (em, e) = ev.split();

        deflect(body.mass, &sn, &sn, &e, em, body.limiter)
    })
}
