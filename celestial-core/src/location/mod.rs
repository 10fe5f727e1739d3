//! Observer sites on the WGS84 ellipsoid.

pub mod geodesy;

use crate::constants::{HALF_PI, PI};
use crate::errors::{AstroError, AstroResult, MathErrorKind};

/// Geodetic site: latitude and longitude in radians (east and north
/// positive), height above the WGS84 ellipsoid in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl Location {
    /// Validated constructor.
    ///
    /// Height must lie in [-12000, 100000] m, which covers ocean trenches up
    /// to balloon altitudes.
    pub fn new(latitude: f64, longitude: f64, height: f64) -> AstroResult<Self> {
        let invalid = |reason: &str| {
            Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::InvalidInput,
                reason,
            ))
        };

        if !latitude.is_finite() || !longitude.is_finite() || !height.is_finite() {
            return invalid("coordinates must be finite");
        }
        if latitude.abs() > HALF_PI {
            return invalid("Latitude outside valid range [-π/2, π/2]");
        }
        if longitude.abs() > PI {
            return invalid("Longitude outside valid range [-π, π]");
        }
        if !(-12000.0..=100000.0).contains(&height) {
            return invalid("Height outside reasonable range [-12000, 100000] meters");
        }

        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_m: f64) -> AstroResult<Self> {
        Self::new(lat_deg.to_radians(), lon_deg.to_radians(), height_m)
    }
}
