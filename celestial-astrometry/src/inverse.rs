//! Apparent place → ICRS astrometric place.
//!
//! The inverse of [`forward`](crate::forward) for a star with no space
//! motion. Aberration and deflection have no closed-form inverse, so each is
//! undone by fixed-point iteration: apply the forward step to the current
//! estimate, and subtract the displacement it produced from the target. Two
//! passes suffice for aberration and five for deflection; the counts are
//! fixed so run time does not depend on the input.

use celestial_core::angle::wrap_0_2pi;
use celestial_core::Vector3;

use crate::aberration::aberrate;
use crate::context::AstrometryContext;
use crate::deflection::{deflect_by_bodies, deflect_by_sun, DeflectingBody};

const ABERRATION_PASSES: usize = 2;
const DEFLECTION_PASSES: usize = 5;

/// ICRS (RA, Dec) of an apparent place, undoing Sun deflection.
pub fn apparent_to_icrs(ri: f64, di: f64, ctx: &AstrometryContext) -> (f64, f64) {
    let pnat = remove_aberration(ri, di, ctx);
    let pco = invert(&pnat, DEFLECTION_PASSES, |before| {
        deflect_by_sun(before, &ctx.sun_direction, ctx.sun_distance)
    });
    spherical(&pco)
}

/// As [`apparent_to_icrs`], undoing deflection by `bodies` in the order given.
pub fn apparent_to_icrs_with_bodies(
    ri: f64,
    di: f64,
    ctx: &AstrometryContext,
    bodies: &[DeflectingBody],
) -> (f64, f64) {
    let pnat = remove_aberration(ri, di, ctx);
    let pco = invert(&pnat, DEFLECTION_PASSES, |before| {
        deflect_by_bodies(bodies, &ctx.barycentric_position, before)
    });
    spherical(&pco)
}

fn remove_aberration(ri: f64, di: f64, ctx: &AstrometryContext) -> Vector3 {
    let pi = Vector3::from_spherical(ri, di);
    let ppr = ctx.bpn.apply_transpose(&pi);

    invert(&ppr, ABERRATION_PASSES, |before| {
        aberrate(before, &ctx.velocity, ctx.sun_distance, ctx.lorentz_reciprocal)
    })
}

/// Solves `forward(x) = target` for unit vectors by repeated correction.
fn invert<F: Fn(&Vector3) -> Vector3>(target: &Vector3, passes: usize, forward: F) -> Vector3 {
    let mut d = Vector3::zeros();
    let mut estimate = *target;

    for _ in 0..passes {
        let before = (*target - d).normalize();
        let after = forward(&before);
        d = after - before;
        estimate = (*target - d).normalize();
    }

    estimate
}

fn spherical(p: &Vector3) -> (f64, f64) {
    let (ra, dec) = p.to_spherical();
    (wrap_0_2pi(ra), dec)
}
