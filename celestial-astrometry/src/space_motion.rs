//! Relativistic conversion between catalog elements and space motion.
//!
//! A star's catalog proper motion and radial velocity are what the observer
//! sees, so they include the light-time foreshortening of the motion along
//! the line of sight. The inertial space motion differs from the naive
//! conversion by the special-relativistic Doppler factor
//! `d = 1 + βr` together with a second-order term in `β²`. Going to space
//! motion that factor depends on the answer, so it is found by iteration;
//! going back it has a closed form.
//!
//! The position and velocity produced here are barycentric, in AU and
//! AU/day. Parallax below 1e-7 arcsec (10 Mpc) is raised to that floor, and
//! space velocities above half the speed of light are discarded. Both cases
//! are reported in the returned [`Warnings`] rather than as errors.
//!
//! ```
//! use celestial_astrometry::catalog::CatalogStar;
//! use celestial_astrometry::space_motion::propagate;
//! use celestial_core::JulianDate;
//!
//! // Barnard's star from J2000 to J2100
//! let star = CatalogStar::from_catalog_units(269.452, 4.693, -798.58, 10328.12, 548.31, -110.6);
//! let later = propagate(&star, &JulianDate::j2000(), &JulianDate::new(2451545.0, 36525.0));
//! assert!(later.is_clean());
//! assert!(later.value.dec > star.dec);
//! ```

use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::{
    ARCSEC_PER_RAD, AU_KM, DAYS_PER_JULIAN_YEAR, SECONDS_PER_DAY_F64, SPEED_OF_LIGHT_AU_PER_DAY,
};
use celestial_core::math::angular_separation;
use celestial_core::{JulianDate, PvVector, SphericalMotion, Vector3};
use tracing::warn;

use crate::catalog::CatalogStar;
use crate::warnings::{Solution, Warnings};

/// Smallest parallax accepted, arcsec.
const PARALLAX_FLOOR: f64 = 1e-7;

/// Largest space speed accepted, as a fraction of c.
const MAX_SPEED: f64 = 0.5;

const MAX_ITERATIONS: usize = 100;

/// km/s → AU/day.
const KM_PER_S_TO_AU_PER_DAY: f64 = SECONDS_PER_DAY_F64 / AU_KM;

/// Minimum parallax applied before propagation, arcsec.
const SAFE_PARALLAX_FLOOR: f64 = 5e-7;

/// Ratio of parallax to one year's proper motion below which a star is
/// treated as too distant for its radial velocity to be trusted.
const SAFE_PARALLAX_FACTOR: f64 = 326.0;

/// Catalog elements → barycentric position (AU) and velocity (AU/day).
pub fn catalog_to_space_motion(star: &CatalogStar) -> Solution<PvVector> {
    let mut warnings = Warnings::empty();

    let parallax = if star.parallax >= PARALLAX_FLOOR {
        star.parallax
    } else {
        warnings |= Warnings::DISTANCE_OVERRIDDEN;
        PARALLAX_FLOOR
    };

    let naive = PvVector::from_spherical(&SphericalMotion {
        theta: star.ra,
        phi: star.dec,
        distance: ARCSEC_PER_RAD / parallax,
        theta_rate: star.pm_ra / DAYS_PER_JULIAN_YEAR,
        phi_rate: star.pm_dec / DAYS_PER_JULIAN_YEAR,
        distance_rate: star.radial_velocity * KM_PER_S_TO_AU_PER_DAY,
    });

    let mut velocity = naive.velocity;
    if velocity.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY > MAX_SPEED {
        velocity = Vector3::zeros();
        warnings |= Warnings::EXCESSIVE_VELOCITY;
    }

    // radial and transverse parts of the observed velocity
    let x = naive.position.normalize();
    let vsr = x.dot(&velocity);
    let ust = velocity - x * vsr;
    let betsr = vsr / SPEED_OF_LIGHT_AU_PER_DAY;
    let betst = ust.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;

    let (d, del, converged) = doppler_factor(betsr, betst, MAX_ITERATIONS);
    if !converged {
        warnings |= Warnings::NOT_CONVERGED;
    }

    let ut = ust * d;
    let ur = x * (SPEED_OF_LIGHT_AU_PER_DAY * (d * betsr + del));

    if !warnings.is_empty() {
        warn!(
            ra = star.ra,
            dec = star.dec,
            parallax = star.parallax,
            radial_velocity = star.radial_velocity,
            ?warnings,
            "space motion conversion adjusted the star"
        );
    }

    Solution::new(PvVector::new(naive.position, ur + ut), warnings)
}

/// Solves for the Doppler factor `d` and the second-order term `del`,
/// stopping when successive corrections stop shrinking. Running out of
/// iterations returns the last estimate with `false`.
fn doppler_factor(betsr: f64, betst: f64, max_iterations: usize) -> (f64, f64, bool) {
    let mut betr = betsr;
    let mut bett = betst;

    let (mut d, mut del) = (0.0, 0.0);
    let (mut od, mut odel) = (0.0, 0.0);
    let (mut odd, mut oddel) = (0.0, 0.0);

    for i in 0..max_iterations {
        d = 1.0 + betr;
        let w = betr * betr + bett * bett;
        del = -w / (libm::sqrt(1.0 - w) + 1.0);
        betr = d * betsr + del;
        bett = d * betst;

        if i > 0 {
            let dd = (d - od).abs();
            let ddel = (del - odel).abs();
            if i > 1 && dd >= odd && ddel >= oddel {
                return (d, del, true);
            }
            odd = dd;
            oddel = ddel;
        }
        od = d;
        odel = del;
    }

    (d, del, false)
}

/// Barycentric position (AU) and velocity (AU/day) → catalog elements.
///
/// A null position has no distance; the result then keeps the parallax and
/// radial velocity of `fallback` and flags
/// [`DEGENERATE_DISTANCE`](Warnings::DEGENERATE_DISTANCE). A velocity at or
/// beyond c is treated as zero and flagged
/// [`SUPERLUMINAL`](Warnings::SUPERLUMINAL).
pub fn space_motion_to_catalog(pv: &PvVector, fallback: &CatalogStar) -> Solution<CatalogStar> {
    let mut warnings = Warnings::empty();

    let x = pv.position.normalize();
    let vr = x.dot(&pv.velocity);
    let ut = pv.velocity - x * vr;

    let betr = vr / SPEED_OF_LIGHT_AU_PER_DAY;
    let bett = ut.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;
    let d = 1.0 + betr;
    let w = betr * betr + bett * bett;

    let velocity = if d == 0.0 || w > 1.0 {
        warnings |= Warnings::SUPERLUMINAL;
        Vector3::zeros()
    } else {
        let del = -w / (libm::sqrt(1.0 - w) + 1.0);
        let ust = ut / d;
        let usr = x * (SPEED_OF_LIGHT_AU_PER_DAY * (betr - del) / d);
        usr + ust
    };

    let s = PvVector::new(pv.position, velocity).to_spherical();

    let (parallax, radial_velocity) = if s.distance == 0.0 {
        warnings |= Warnings::DEGENERATE_DISTANCE;
        (fallback.parallax, fallback.radial_velocity)
    } else {
        (ARCSEC_PER_RAD / s.distance, s.distance_rate / KM_PER_S_TO_AU_PER_DAY)
    };

    if !warnings.is_empty() {
        warn!(?warnings, "catalog elements recovered from degenerate space motion");
    }

    Solution::new(
        CatalogStar::new(
            wrap_0_2pi(s.theta),
            s.phi,
            s.theta_rate * DAYS_PER_JULIAN_YEAR,
            s.phi_rate * DAYS_PER_JULIAN_YEAR,
            parallax,
            radial_velocity,
        ),
        warnings,
    )
}

/// Moves a star's catalog elements from `epoch1` to `epoch2` (TDB).
///
/// Rectilinear motion in space, with the light time to the star taken into
/// account at both epochs. Warnings from both conversions are merged.
pub fn propagate(star: &CatalogStar, epoch1: &JulianDate, epoch2: &JulianDate) -> Solution<CatalogStar> {
    let (pv1, mut warnings) = catalog_to_space_motion(star).into_parts();

    // light time when observed at epoch1
    let tl1 = pv1.position.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;
    let dt = (epoch2.jd1 - epoch1.jd1) + (epoch2.jd2 - epoch1.jd2);

    let mut velocity = pv1.velocity;
    let pv = pv1.propagate(dt + tl1);

    let r2 = pv.position.magnitude_squared();
    let rdv = pv.position.dot(&velocity);
    let v2 = velocity.magnitude_squared();
    let c2mv2 = SPEED_OF_LIGHT_AU_PER_DAY * SPEED_OF_LIGHT_AU_PER_DAY - v2;

    // light time when observed at epoch2
    let tl2 = if c2mv2 > 0.0 {
        (-rdv + libm::sqrt(rdv * rdv + c2mv2 * r2)) / c2mv2
    } else {
        warnings |= Warnings::SUPERLUMINAL;
        velocity = Vector3::zeros();
        tl1
    };

    let pv2 = PvVector::new(pv1.position, velocity).propagate(dt + (tl1 - tl2));

    space_motion_to_catalog(&pv2, star).with_warnings(warnings)
}

/// As [`propagate`], but first raises the parallax of stars too distant for
/// their radial velocity to be meaningful.
///
/// The parallax is raised to at least 326 times the proper motion covered in
/// one year, and to at least 5e-7 arcsec. Either adjustment sets
/// [`DISTANCE_OVERRIDDEN`](Warnings::DISTANCE_OVERRIDDEN).
pub fn propagate_safe(star: &CatalogStar, epoch1: &JulianDate, epoch2: &JulianDate) -> Solution<CatalogStar> {
    // radians per year scaled as arcseconds; the product is the threshold
    let pm = angular_separation(star.ra, star.dec, star.ra + star.pm_ra, star.dec + star.pm_dec)
        * SAFE_PARALLAX_FACTOR;

    let floor = pm.max(SAFE_PARALLAX_FLOOR);
    let mut warnings = Warnings::empty();
    let mut adjusted = *star;
    if adjusted.parallax < floor {
        adjusted.parallax = floor;
        warnings |= Warnings::DISTANCE_OVERRIDDEN;
        warn!(
            parallax = star.parallax,
            raised_to = floor,
            "parallax raised before propagation"
        );
    }

    propagate(&adjusted, epoch1, epoch2).with_warnings(warnings)
}
