#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Angular separation between two spherical positions (Vincenty form).
///
/// Stable at all separations, including near 0 and π.
#[inline]
pub fn angular_separation(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2);
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(lon2 - lon1);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}
