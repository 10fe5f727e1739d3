//! Constructors for [`AstrometryContext`].
//!
//! Two families:
//!
//! - **Low-level** builders take every model value (Earth state, CIP, ERA,
//!   polar motion, refraction constants) from the caller.
//! - **`*_from_models`** builders fetch them through an [`EarthEphemeris`]
//!   and an [`EarthOrientationModel`], using TT as a stand-in for TDB when
//!   querying the ephemeris. The difference (under 2 ms) is negligible here.
//!
//! | Builder | Observer | Intermediate frame |
//! |---------|----------|--------------------|
//! | [`geocentric`](AstrometryContext::geocentric) | geocentre | GCRS |
//! | [`geocentric_cirs`](AstrometryContext::geocentric_cirs) | geocentre | CIRS |
//! | [`space`](AstrometryContext::space) | anywhere near the Earth | GCRS |
//! | [`terrestrial`](AstrometryContext::terrestrial) | ground site | CIRS, plus the observed-place group |
//! | [`terrestrial_cirs`](AstrometryContext::terrestrial_cirs) | ground site | observed-place group only |

use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::{
    AU_LIGHT_TIME_S, AU_M, EARTH_ROTATION_RATE, SECONDS_PER_DAY_F64, SPEED_OF_LIGHT_M_PER_S,
};
use celestial_core::{
    earth_rotation_angle, polar_motion_matrix, AstroResult, JulianDate, Location, PvVector,
    RotationMatrix3, Vector3,
};
use tracing::debug;

use super::{AstrometryContext, IntermediatePole, Observer, PolarMotion};
use crate::providers::{EarthEphemeris, EarthOrientationModel, EarthState, Models};
use crate::refraction::RefractionConstants;
use crate::warnings::Solution;

/// AU/day → m/s.
const AU_PER_DAY_TO_M_PER_S: f64 = AU_M / SECONDS_PER_DAY_F64;

/// AU/day → units of c.
const AU_PER_DAY_TO_C: f64 = AU_LIGHT_TIME_S / SECONDS_PER_DAY_F64;

impl AstrometryContext {
    /// Observer with a known geocentric state, GCRS axes.
    ///
    /// `observer` is the observer's geocentric position (m) and velocity
    /// (m/s), GCRS axes. The general path behind the other builders.
    pub fn space(tdb: &JulianDate, observer: &PvVector, earth: &EarthState) -> Self {
        let mut ctx = Self::default();
        ctx.set_barycentric_group(tdb, observer, earth);

        debug!(
            pm_interval = ctx.pm_interval,
            sun_distance = ctx.sun_distance,
            "built space-observer astrometry context"
        );
        ctx
    }

    /// Geocentric observer, GCRS axes.
    pub fn geocentric(tdb: &JulianDate, earth: &EarthState) -> Self {
        Self::space(tdb, &PvVector::zeros(), earth)
    }

    /// Geocentric observer, CIRS axes.
    pub fn geocentric_cirs(tdb: &JulianDate, earth: &EarthState, pole: &IntermediatePole) -> Self {
        Self {
            bpn: pole.to_matrix(),
            ..Self::geocentric(tdb, earth)
        }
    }

    /// Ground-based observer: catalog ↔ CIRS and CIRS ↔ observed.
    ///
    /// The site's diurnal velocity is folded into the barycentric velocity,
    /// so [`diurnal_aberration`](Self::diurnal_aberration) is zero.
    pub fn terrestrial(
        tdb: &JulianDate,
        earth: &EarthState,
        pole: &IntermediatePole,
        era: f64,
        site: &Location,
        polar: &PolarMotion,
        refraction: &RefractionConstants,
    ) -> AstroResult<Self> {
        let mut ctx = Self::default();
        ctx.set_earth_fixed_group(era, site, polar, refraction);

        let c2i = pole.to_matrix();
        let cirs = observer_state(site, polar, era)?;
        let gcrs = PvVector::new(c2i.apply_transpose(&cirs.position), c2i.apply_transpose(&cirs.velocity));

        ctx.set_barycentric_group(tdb, &gcrs, earth);
        ctx.bpn = c2i;
        ctx.local_era = wrap_0_2pi(ctx.local_era);

        debug!(
            pm_interval = ctx.pm_interval,
            local_era = ctx.local_era,
            latitude = site.latitude,
            "built terrestrial astrometry context"
        );
        Ok(ctx)
    }

    /// Ground-based observer, CIRS ↔ observed only.
    ///
    /// Leaves the catalog-side fields at their defaults.
    pub fn terrestrial_cirs(
        era: f64,
        site: &Location,
        polar: &PolarMotion,
        refraction: &RefractionConstants,
    ) -> AstroResult<Self> {
        let mut ctx = Self::default();
        ctx.set_earth_fixed_group(era, site, polar, refraction);

        let pv = observer_state(site, polar, era)?;
        ctx.local_era = wrap_0_2pi(ctx.local_era);
        ctx.diurnal_aberration =
            libm::sqrt(pv.velocity.x * pv.velocity.x + pv.velocity.y * pv.velocity.y)
                / SPEED_OF_LIGHT_M_PER_S;

        debug!(
            local_era = ctx.local_era,
            diurnal_aberration = ctx.diurnal_aberration,
            "built CIRS-to-observed context"
        );
        Ok(ctx)
    }

    pub fn geocentric_from_models<E: EarthEphemeris>(tdb: &JulianDate, ephemeris: &E) -> AstroResult<Self> {
        Ok(Self::geocentric(tdb, &ephemeris.earth_state(tdb)?))
    }

    /// Also returns the equation of the origins, for converting CIRS right
    /// ascensions to apparent ones.
    pub fn geocentric_cirs_from_models<E, O>(
        tdb: &JulianDate,
        models: &Models<E, O>,
    ) -> AstroResult<(Self, f64)>
    where
        E: EarthEphemeris,
        O: EarthOrientationModel,
    {
        let earth = models.ephemeris.earth_state(tdb)?;
        let (pole, eo) = models.orientation.intermediate_pole(tdb)?;
        Ok((Self::geocentric_cirs(tdb, &earth, &pole), eo))
    }

    pub fn space_from_models<E: EarthEphemeris>(
        tdb: &JulianDate,
        observer: &PvVector,
        ephemeris: &E,
    ) -> AstroResult<Self> {
        Ok(Self::space(tdb, observer, &ephemeris.earth_state(tdb)?))
    }

    /// Ground-based context at `tt`/`ut1`, with the equation of the origins.
    ///
    /// Refraction constants come from the observer's atmosphere; clamped
    /// inputs are reported in the returned warnings.
    pub fn terrestrial_from_models<E, O>(
        tt: &JulianDate,
        ut1: &JulianDate,
        observer: &Observer,
        models: &Models<E, O>,
    ) -> AstroResult<Solution<(Self, f64)>>
    where
        E: EarthEphemeris,
        O: EarthOrientationModel,
    {
        let earth = models.ephemeris.earth_state(tt)?;
        let (pole, eo) = models.orientation.intermediate_pole(tt)?;
        let era = earth_rotation_angle(&ut1.validated()?);
        let polar = PolarMotion::at(observer.xp, observer.yp, tt);
        let refraction = RefractionConstants::from_atmosphere(&observer.atmosphere);

        let ctx = Self::terrestrial(tt, &earth, &pole, era, &observer.site, &polar, &refraction.value)?;
        Ok(Solution::new((ctx, eo), refraction.warnings))
    }

    pub fn terrestrial_cirs_from_models(
        tt: &JulianDate,
        ut1: &JulianDate,
        observer: &Observer,
    ) -> AstroResult<Solution<Self>> {
        let era = earth_rotation_angle(&ut1.validated()?);
        let polar = PolarMotion::at(observer.xp, observer.yp, &tt.validated()?);
        let refraction = RefractionConstants::from_atmosphere(&observer.atmosphere);

        let ctx = Self::terrestrial_cirs(era, &observer.site, &polar, &refraction.value)?;
        Ok(Solution::new(ctx, refraction.warnings))
    }

    /// Catalog-side fields: time, observer position, velocity.
    fn set_barycentric_group(&mut self, tdb: &JulianDate, observer: &PvVector, earth: &EarthState) {
        self.pm_interval = tdb.years_since_j2000();

        let dp = observer.position / AU_M;
        let dv = observer.velocity / AU_PER_DAY_TO_M_PER_S;

        self.barycentric_position = earth.barycentric.position + dp;
        let (em, eh) = (earth.heliocentric.position + dp).split();
        self.sun_distance = em;
        self.sun_direction = eh;

        self.velocity = (earth.barycentric.velocity + dv) * AU_PER_DAY_TO_C;
        self.lorentz_reciprocal = libm::sqrt(1.0 - self.velocity.magnitude_squared());
        self.bpn = RotationMatrix3::identity();
    }

    /// Earth-fixed fields: adjusted longitude, polar motion on the local
    /// meridian, latitude, local ERA, refraction.
    fn set_earth_fixed_group(
        &mut self,
        era: f64,
        site: &Location,
        polar: &PolarMotion,
        refraction: &RefractionConstants,
    ) {
        let mut r = RotationMatrix3::identity();
        r.rotate_z(polar.sp);
        r.rotate_y(-polar.xp);
        r.rotate_x(-polar.yp);
        r.rotate_z(site.longitude);

        let (a, b) = (r.get(0, 0), r.get(0, 1));
        self.longitude = if a != 0.0 || b != 0.0 { libm::atan2(b, a) } else { 0.0 };
        self.polar_motion_x = libm::atan2(r.get(0, 2), libm::sqrt(a * a + b * b));

        let (a, b) = (r.get(1, 2), r.get(2, 2));
        self.polar_motion_y = if a != 0.0 || b != 0.0 { -libm::atan2(a, b) } else { 0.0 };

        let (sphi, cphi) = libm::sincos(site.latitude);
        self.sin_latitude = sphi;
        self.cos_latitude = cphi;

        self.refraction_a = refraction.a;
        self.refraction_b = refraction.b;
        self.diurnal_aberration = 0.0;

        self.set_earth_rotation_angle(era);
    }
}

/// Position (m) and velocity (m/s) of a ground site, CIRS axes.
///
/// `polar` carries polar motion and s', `era` the Earth rotation angle. The
/// site rotates at the sidereal rate; nutation and precession rates are
/// ignored.
pub fn observer_state(site: &Location, polar: &PolarMotion, era: f64) -> AstroResult<PvVector> {
    let itrs = site.to_geocentric()?;
    let tirs = polar_motion_matrix(polar.xp, polar.yp, polar.sp).apply_transpose(&itrs);

    let (s, c) = libm::sincos(era);
    let Vector3 { x, y, z } = tirs;

    Ok(PvVector::new(
        Vector3::new(c * x - s * y, s * x + c * y, z),
        Vector3::new(
            EARTH_ROTATION_RATE * (-s * x - c * y),
            EARTH_ROTATION_RATE * (c * x - s * y),
            0.0,
        ),
    ))
}
