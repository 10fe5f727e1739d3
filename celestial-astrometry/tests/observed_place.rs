use celestial_astrometry::observed::{cirs_to_observed, observed_to_cirs};
use celestial_astrometry::{
    Atmosphere, AstrometryContext, ObservedKind, PolarMotion, RefractionConstants, Warnings,
};
use celestial_core::angle::wrap_0_2pi;
use celestial_core::math::angular_separation;
use celestial_core::{earth_rotation_angle, tio_locator, JulianDate, Location};

const KINDS: [ObservedKind; 3] = [
    ObservedKind::AzimuthZenith,
    ObservedKind::HourAngleDec,
    ObservedKind::RaDec,
];

// 2738 m, 70.7° S; 2013-04-02 23:15:43.55 UTC
fn site_context() -> AstrometryContext {
    let tt = JulianDate::new(2456384.5, 0.969254051 + 67.184 / 86400.0);
    let ut1 = JulianDate::new(2456384.5, 0.969254051 + 0.1550675 / 86400.0);
    let site = Location::new(-1.2345856, -0.527800806, 2738.0).unwrap();
    let polar = PolarMotion::new(2.47230737e-7, 1.82640464e-6, tio_locator(&tt));
    let refraction = RefractionConstants::from_atmosphere(&Atmosphere::new(731.0, 12.8, 0.59, 0.55));
    assert!(refraction.is_clean());

    AstrometryContext::terrestrial_cirs(earth_rotation_angle(&ut1), &site, &polar, &refraction.value)
        .unwrap()
}

fn coordinates(kind: ObservedKind, place: &celestial_astrometry::ObservedPlace) -> (f64, f64) {
    match kind {
        ObservedKind::AzimuthZenith => (place.azimuth, place.zenith_distance),
        ObservedKind::HourAngleDec => (place.hour_angle, place.declination),
        ObservedKind::RaDec => (place.right_ascension, place.declination),
    }
}

// --- Context ---

#[test]
fn context_matches_reference_site() {
    let ctx = site_context();
    assert!((ctx.local_era - 2.617608909189652).abs() < 1e-12, "{}", ctx.local_era);
    assert!((ctx.diurnal_aberration - 5.135843661699914e-7).abs() < 1e-18);
    assert!((ctx.refraction_a - 2.014187785940397e-4).abs() < 1e-15);
    assert!((ctx.refraction_b - -2.3614083149436963e-7).abs() < 1e-18);
    assert!((ctx.polar_motion_x - 1.133427418130753e-6).abs() < 1e-17);
    assert!((ctx.polar_motion_y - 1.4533475957806462e-6).abs() < 1e-17);
}

#[test]
fn reference_star_through_all_kinds() {
    let ctx = site_context();
    let obs = cirs_to_observed(2.710121572969038991, 0.1729371367218230438, &ctx);
    assert!((obs.zenith_distance - 1.407758704513549991).abs() < 1e-12);

    let (r, d) = observed_to_cirs(ObservedKind::RaDec, 2.710085107986886201, 0.1717653435758265198, &ctx);
    assert!((r - 2.710121574447540810).abs() < 1e-12, "{}", r);
    assert!((d - 0.1729371839116608778).abs() < 1e-12, "{}", d);
}

// --- Round trips ---

#[test]
fn round_trip_near_zenith_for_every_kind() {
    let ctx = site_context();
    let dec_zenith = -1.2345856;

    for dd in [0.0, 0.05, 0.15, -0.2, 0.3] {
        for dh in [-0.3, -0.05, 0.0, 0.1, 0.4] {
            let ri = wrap_0_2pi(ctx.local_era - dh);
            let di = dec_zenith + dd;
            let place = cirs_to_observed(ri, di, &ctx);
            assert!(place.zenith_distance < 0.45);

            for kind in KINDS {
                let (c1, c2) = coordinates(kind, &place);
                let (r, d) = observed_to_cirs(kind, c1, c2, &ctx);
                let sep = angular_separation(ri, di, r, d);
                assert!(sep < 1e-12, "{:?} at zd {}: {:e}", kind, place.zenith_distance, sep);
            }
        }
    }
}

#[test]
fn refraction_asymmetry_is_bounded_at_low_elevation() {
    let ctx = site_context();
    let ri = wrap_0_2pi(ctx.local_era - 0.05);

    let mut previous = 0.0;
    for di in [-0.8, -0.5, -0.2, 0.0, 0.17] {
        let place = cirs_to_observed(ri, di, &ctx);
        let (r, d) = observed_to_cirs(ObservedKind::AzimuthZenith, place.azimuth, place.zenith_distance, &ctx);
        let sep = angular_separation(ri, di, r, d);

        // grows with zenith distance; a few 1e-8 rad at 80°
        assert!(sep >= previous, "zd {}: {:e}", place.zenith_distance, sep);
        assert!(sep < 1e-7, "zd {}: {:e}", place.zenith_distance, sep);
        previous = sep;
    }
}

#[test]
fn kinds_agree_with_each_other() {
    let ctx = site_context();
    let place = cirs_to_observed(2.4, -0.9, &ctx);

    let (r1, d1) = observed_to_cirs(ObservedKind::AzimuthZenith, place.azimuth, place.zenith_distance, &ctx);
    let (r2, d2) = observed_to_cirs(ObservedKind::HourAngleDec, place.hour_angle, place.declination, &ctx);
    let (r3, d3) = observed_to_cirs(ObservedKind::RaDec, place.right_ascension, place.declination, &ctx);

    assert!(angular_separation(r1, d1, r2, d2) < 1e-13);
    assert!(angular_separation(r2, d2, r3, d3) < 1e-13);
}

// --- Earth rotation update ---

#[test]
fn rotating_the_earth_moves_hour_angle_only() {
    let ctx = site_context();
    let later = ctx.with_earth_rotation_angle(ctx.local_era - ctx.longitude + 0.01);

    let before = cirs_to_observed(2.7, -1.0, &ctx);
    let after = cirs_to_observed(2.7, -1.0, &later);

    assert!((after.hour_angle - before.hour_angle - 0.01).abs() < 1e-5);
    assert!((after.right_ascension - before.right_ascension).abs() < 1e-5);
    assert_eq!(later.refraction_a, ctx.refraction_a);
    assert_eq!(later.diurnal_aberration, ctx.diurnal_aberration);
}

#[test]
fn clamped_meteorology_is_flagged() {
    let s = RefractionConstants::from_atmosphere(&Atmosphere::new(731.0, 250.0, 0.59, 0.55));
    assert_eq!(s.warnings, Warnings::ATMOSPHERE_CLAMPED);
}
