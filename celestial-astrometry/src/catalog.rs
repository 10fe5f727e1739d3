//! Catalog star elements.

use celestial_core::constants::{ARCSEC_TO_RAD, DEG_TO_RAD, MILLIARCSEC_TO_RAD};

/// ICRS catalog position and space motion.
///
/// Proper motion in right ascension is dα/dt, not cos δ · dα/dt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogStar {
    /// Right ascension, radians.
    pub ra: f64,
    /// Declination, radians.
    pub dec: f64,
    /// dα/dt, radians per Julian year.
    pub pm_ra: f64,
    /// dδ/dt, radians per Julian year.
    pub pm_dec: f64,
    /// Parallax, arcseconds.
    pub parallax: f64,
    /// Radial velocity, km/s, positive receding.
    pub radial_velocity: f64,
}

impl CatalogStar {
    pub fn new(
        ra: f64,
        dec: f64,
        pm_ra: f64,
        pm_dec: f64,
        parallax: f64,
        radial_velocity: f64,
    ) -> Self {
        Self {
            ra,
            dec,
            pm_ra,
            pm_dec,
            parallax,
            radial_velocity,
        }
    }

    /// A fixed direction: no proper motion, parallax or radial velocity.
    pub fn fixed(ra: f64, dec: f64) -> Self {
        Self::new(ra, dec, 0.0, 0.0, 0.0, 0.0)
    }

    /// From the units most catalogs publish: degrees, mas/yr with the RA
    /// component multiplied by cos δ, mas and km/s.
    pub fn from_catalog_units(
        ra_deg: f64,
        dec_deg: f64,
        pm_ra_cosdec_mas: f64,
        pm_dec_mas: f64,
        parallax_mas: f64,
        radial_velocity: f64,
    ) -> Self {
        let dec = dec_deg * DEG_TO_RAD;
        let cosdec = libm::cos(dec);
        let pm_ra = if cosdec != 0.0 {
            pm_ra_cosdec_mas * MILLIARCSEC_TO_RAD / cosdec
        } else {
            0.0
        };

        Self::new(
            ra_deg * DEG_TO_RAD,
            dec,
            pm_ra,
            pm_dec_mas * MILLIARCSEC_TO_RAD,
            parallax_mas * MILLIARCSEC_TO_RAD / ARCSEC_TO_RAD,
            radial_velocity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_units() {
        // Barnard's star, Gaia DR3
        let star = CatalogStar::from_catalog_units(
            269.4486, 4.7399, -801.551, 10362.394, 546.9759, -110.47,
        );
        assert!((star.parallax - 0.5469759).abs() < 1e-12);
        assert!((star.dec - 4.7399 * DEG_TO_RAD).abs() < 1e-15);
        assert!(
            (star.pm_ra * libm::cos(star.dec) - -801.551 * MILLIARCSEC_TO_RAD).abs() < 1e-15
        );
        assert_eq!(star.radial_velocity, -110.47);
    }

    #[test]
    fn test_fixed_star_has_no_motion() {
        let star = CatalogStar::fixed(1.0, -0.3);
        assert_eq!(star.pm_ra, 0.0);
        assert_eq!(star.parallax, 0.0);
    }
}
