//! Catalog place → astrometric and apparent place.
//!
//! The apparent place produced here is referred to the context's
//! intermediate frame: CIRS for the `*_cirs` and `terrestrial` contexts, GCRS
//! for the geocentric and space contexts.
//!
//! Chain, per star:
//!
//! 1. space motion and parallax → BCRS coordinate direction ([`pm_parallax`])
//! 2. gravitational light deflection by the Sun, or by a list of bodies
//! 3. aberration
//! 4. the context's BPN matrix
//!
//! None of these functions fail and none touch the context.

use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::{
    ARCSEC_TO_RAD, AU_LIGHT_TIME_S, AU_M, DAYS_PER_JULIAN_MILLENNIUM, DAYS_PER_JULIAN_YEAR,
    SECONDS_PER_DAY_F64,
};
use celestial_core::Vector3;

use crate::aberration::aberrate;
use crate::catalog::CatalogStar;
use crate::context::AstrometryContext;
use crate::deflection::{deflect_by_bodies, deflect_by_sun, DeflectingBody};

/// km/s → AU per Julian year.
const KM_PER_S_TO_AU_PER_YEAR: f64 = SECONDS_PER_DAY_F64 * DAYS_PER_JULIAN_MILLENNIUM / AU_M;

/// Light time per AU, Julian years.
const LIGHT_TIME_YEARS_PER_AU: f64 = AU_LIGHT_TIME_S / SECONDS_PER_DAY_F64 / DAYS_PER_JULIAN_YEAR;

/// Applies proper motion and parallax, returning the unit BCRS coordinate
/// direction of the star as seen by the observer.
///
/// `pm_interval` is in Julian years of TDB since the catalog epoch and
/// `observer` the barycentric observer position in AU. The interval is
/// corrected for the Rømer delay across the observer's offset from the
/// barycentre.
pub fn pm_parallax(star: &CatalogStar, pm_interval: f64, observer: &Vector3) -> Vector3 {
    let p = Vector3::from_spherical(star.ra, star.dec);

    let dt = pm_interval + p.dot(observer) * LIGHT_TIME_YEARS_PER_AU;

    let pxr = star.parallax * ARCSEC_TO_RAD;
    let w = KM_PER_S_TO_AU_PER_YEAR * star.radial_velocity * pxr;
    let pdz = star.pm_dec * p.z;
    let (sr, cr) = libm::sincos(star.ra);

    let pm = Vector3::new(
        -star.pm_ra * p.y - pdz * cr + w * p.x,
        star.pm_ra * p.x - pdz * sr + w * p.y,
        star.pm_dec * libm::cos(star.dec) + w * p.z,
    );

    (p + pm * dt - *observer * pxr).normalize()
}

/// Astrometric place: proper motion and parallax only.
///
/// Returns (RA, Dec) with RA in [0, 2π).
pub fn catalog_to_astrometric(star: &CatalogStar, ctx: &AstrometryContext) -> (f64, f64) {
    let pco = pm_parallax(star, ctx.pm_interval, &ctx.barycentric_position);
    let (ra, dec) = pco.to_spherical();
    (wrap_0_2pi(ra), dec)
}

/// Apparent place, with light deflection by the Sun alone.
pub fn catalog_to_apparent(star: &CatalogStar, ctx: &AstrometryContext) -> (f64, f64) {
    let pco = pm_parallax(star, ctx.pm_interval, &ctx.barycentric_position);
    let pnat = deflect_by_sun(&pco, &ctx.sun_direction, ctx.sun_distance);
    finish(&pnat, ctx)
}

/// Apparent place of a distant source with no proper motion or parallax.
///
/// Faster than [`catalog_to_apparent`] with a zero-motion star and gives
/// the same answer.
pub fn icrs_to_apparent(ra: f64, dec: f64, ctx: &AstrometryContext) -> (f64, f64) {
    let pco = Vector3::from_spherical(ra, dec);
    let pnat = deflect_by_sun(&pco, &ctx.sun_direction, ctx.sun_distance);
    finish(&pnat, ctx)
}

/// Apparent place with light deflection by `bodies`, applied in order.
///
/// Put the Sun last; see [`deflect_by_bodies`].
pub fn catalog_to_apparent_with_bodies(
    star: &CatalogStar,
    ctx: &AstrometryContext,
    bodies: &[DeflectingBody],
) -> (f64, f64) {
    let pco = pm_parallax(star, ctx.pm_interval, &ctx.barycentric_position);
    let pnat = deflect_by_bodies(bodies, &ctx.barycentric_position, &pco);
    finish(&pnat, ctx)
}

fn finish(pnat: &Vector3, ctx: &AstrometryContext) -> (f64, f64) {
    let ppr = aberrate(pnat, &ctx.velocity, ctx.sun_distance, ctx.lorentz_reciprocal);
    let pi = ctx.bpn.apply(&ppr);
    let (ra, dec) = pi.to_spherical();
    (wrap_0_2pi(ra), dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::TWOPI;
    use celestial_core::test_helpers::assert_vec_close;

    #[test]
    fn test_pm_parallax_reference_values() {
        let star = CatalogStar::new(1.234, 0.789, 1e-5, -2e-5, 1e-2, 10.0);
        let pco = pm_parallax(&star, 8.75, &Vector3::new(0.9, 0.4, 0.1));

        let expected = Vector3::new(0.2328137623960308438, 0.6651097085397855328, 0.7095257765896359837);
        assert_vec_close(&pco, &expected, 1e-12, "pmpx reference");
    }

    #[test]
    fn test_fixed_star_at_barycentre_is_unchanged() {
        let star = CatalogStar::fixed(5.9, -1.1);
        let ctx = AstrometryContext::default();
        let (ra, dec) = catalog_to_astrometric(&star, &ctx);
        assert!((ra - 5.9).abs() < 1e-14);
        assert!((dec + 1.1).abs() < 1e-14);
    }

    #[test]
    fn test_zero_motion_matches_fast_path() {
        let ctx = AstrometryContext {
            barycentric_position: Vector3::new(-0.97, -0.21, -0.09),
            sun_direction: Vector3::new(-0.973, -0.209, -0.0907).normalize(),
            sun_distance: 0.9998,
            velocity: Vector3::new(2.1e-5, -8.9e-5, -3.9e-5),
            lorentz_reciprocal: libm::sqrt(1.0 - 8.76e-9),
            ..Default::default()
        };
        let star = CatalogStar::fixed(2.71, 0.174);

        let (r1, d1) = catalog_to_apparent(&star, &ctx);
        let (r2, d2) = icrs_to_apparent(star.ra, star.dec, &ctx);
        assert!((r1 - r2).abs() < 1e-15 && (d1 - d2).abs() < 1e-15);
        assert!((0.0..TWOPI).contains(&r1));
    }

    #[test]
    fn test_bodies_list_with_sun_matches_sun_path() {
        let ctx = AstrometryContext {
            barycentric_position: Vector3::new(0.4, -0.8, -0.35),
            sun_direction: Vector3::new(0.4, -0.8, -0.35).normalize(),
            sun_distance: Vector3::new(0.4, -0.8, -0.35).magnitude(),
            velocity: Vector3::new(9.0e-5, 3.5e-5, 1.5e-5),
            lorentz_reciprocal: libm::sqrt(1.0 - 9.5e-9),
            ..Default::default()
        };
        let star = CatalogStar::new(0.3, 0.2, 1e-6, -3e-7, 0.1, 25.0);
        let sun = DeflectingBody::new(1.0, 1e-6, celestial_core::PvVector::zeros());

        let (r1, d1) = catalog_to_apparent(&star, &ctx);
        let (r2, d2) = catalog_to_apparent_with_bodies(&star, &ctx, &[sun]);
        assert!((r1 - r2).abs() < 1e-14, "{:e}", r1 - r2);
        assert!((d1 - d2).abs() < 1e-14, "{:e}", d1 - d2);
    }
}
