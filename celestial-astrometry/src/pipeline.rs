//! One-call transformations that build the context and run the transform.
//!
//! Each call fetches the model values it needs from a [`Models`] bundle,
//! builds a fresh [`AstrometryContext`] and applies one forward or inverse
//! chain. Convenient for a single star; for many stars at the same date,
//! build the context once with the [`builders`](crate::context::builders)
//! and call the transforms directly.
//!
//! `tt` stands in for TDB throughout, and `ut1` only feeds the Earth
//! rotation angle.

use celestial_core::{AstroResult, JulianDate};

use crate::catalog::CatalogStar;
use crate::context::{AstrometryContext, Observer};
use crate::forward::catalog_to_apparent;
use crate::inverse::apparent_to_icrs;
use crate::observed::{cirs_to_observed, observed_to_cirs, ObservedKind, ObservedPlace};
use crate::providers::{EarthEphemeris, EarthOrientationModel, Models};
use crate::warnings::Solution;

/// ICRS catalog star → CIRS (RA, Dec) for a geocentric observer.
///
/// Also returns the equation of the origins; `ri - eo` is the apparent
/// right ascension referred to the true equinox.
pub fn icrs_to_cirs<E, O>(
    star: &CatalogStar,
    tdb: &JulianDate,
    models: &Models<E, O>,
) -> AstroResult<(f64, f64, f64)>
where
    E: EarthEphemeris,
    O: EarthOrientationModel,
{
    let (ctx, eo) = AstrometryContext::geocentric_cirs_from_models(tdb, models)?;
    let (ri, di) = catalog_to_apparent(star, &ctx);
    Ok((ri, di, eo))
}

/// Geocentric CIRS (RA, Dec) → ICRS astrometric place, with the equation of
/// the origins.
pub fn cirs_to_icrs<E, O>(
    ri: f64,
    di: f64,
    tdb: &JulianDate,
    models: &Models<E, O>,
) -> AstroResult<(f64, f64, f64)>
where
    E: EarthEphemeris,
    O: EarthOrientationModel,
{
    let (ctx, eo) = AstrometryContext::geocentric_cirs_from_models(tdb, models)?;
    let (rc, dc) = apparent_to_icrs(ri, di, &ctx);
    Ok((rc, dc, eo))
}

/// ICRS catalog star → observed place for a ground-based observer.
///
/// Returns the equation of the origins alongside the place. Warnings report
/// clamped meteorological inputs.
pub fn icrs_to_observed<E, O>(
    star: &CatalogStar,
    tt: &JulianDate,
    ut1: &JulianDate,
    observer: &Observer,
    models: &Models<E, O>,
) -> AstroResult<Solution<(ObservedPlace, f64)>>
where
    E: EarthEphemeris,
    O: EarthOrientationModel,
{
    let built = AstrometryContext::terrestrial_from_models(tt, ut1, observer, models)?;
    Ok(built.map(|(ctx, eo)| {
        let (ri, di) = catalog_to_apparent(star, &ctx);
        (cirs_to_observed(ri, di, &ctx), eo)
    }))
}

/// Observed place → ICRS astrometric place for a ground-based observer.
pub fn observed_to_icrs<E, O>(
    kind: ObservedKind,
    c1: f64,
    c2: f64,
    tt: &JulianDate,
    ut1: &JulianDate,
    observer: &Observer,
    models: &Models<E, O>,
) -> AstroResult<Solution<(f64, f64)>>
where
    E: EarthEphemeris,
    O: EarthOrientationModel,
{
    let built = AstrometryContext::terrestrial_from_models(tt, ut1, observer, models)?;
    Ok(built.map(|(ctx, _)| {
        let (ri, di) = observed_to_cirs(kind, c1, c2, &ctx);
        apparent_to_icrs(ri, di, &ctx)
    }))
}

/// CIRS (RA, Dec) → observed place. Needs no ephemeris or precession model.
pub fn cirs_to_observed_at(
    ri: f64,
    di: f64,
    tt: &JulianDate,
    ut1: &JulianDate,
    observer: &Observer,
) -> AstroResult<Solution<ObservedPlace>> {
    let built = AstrometryContext::terrestrial_cirs_from_models(tt, ut1, observer)?;
    Ok(built.map(|ctx| cirs_to_observed(ri, di, &ctx)))
}

/// Observed place → CIRS (RA, Dec).
pub fn observed_to_cirs_at(
    kind: ObservedKind,
    c1: f64,
    c2: f64,
    tt: &JulianDate,
    ut1: &JulianDate,
    observer: &Observer,
) -> AstroResult<Solution<(f64, f64)>> {
    let built = AstrometryContext::terrestrial_cirs_from_models(tt, ut1, observer)?;
    Ok(built.map(|ctx| observed_to_cirs(kind, c1, c2, &ctx)))
}
