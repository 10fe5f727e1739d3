//! Frozen numerical constants shared by every crate in the workspace.
//!
//! Nothing here is configurable at runtime.

pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365250.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
pub const MICROARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-13;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

/// Astronomical Unit in meters (IAU 2012 definition, exact)
pub const AU_M: f64 = 149_597_870_700.0;

/// Astronomical Unit in kilometers (derived from IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in m/s.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

/// Light time for one AU, in seconds.
pub const AU_LIGHT_TIME_S: f64 = AU_M / SPEED_OF_LIGHT_M_PER_S;

pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = SECONDS_PER_DAY_F64 / AU_LIGHT_TIME_S;

/// Schwarzschild radius of the Sun in AU: 2 GM / (c² AU).
pub const SCHWARZSCHILD_RADIUS_SUN_AU: f64 = 1.97412574336e-8;

/// Earth rotation rate in radians per second of UT1.
#[allow(clippy::excessive_precision)]
pub const EARTH_ROTATION_RATE: f64 = 1.00273781191135448 * TWOPI / SECONDS_PER_DAY_F64;

pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

#[allow(clippy::excessive_precision)]
pub const J2000_OBLIQUITY_RAD: f64 = 84381.406 * ARCSEC_TO_RAD;
