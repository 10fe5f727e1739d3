//! Two-part Julian dates.
//!
//! Every epoch in the workspace is a `(jd1, jd2)` pair whose sum is the Julian
//! date in the relevant time scale (TT, TDB or UT1; the type does not know
//! which). Splitting keeps full precision: the conventional split is the
//! J2000 day number plus a fraction, or the date at 0h plus the day fraction.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD};
use crate::{AstroError, AstroResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    /// Days since J2000.0, summed in the order that preserves precision.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian years since J2000.0.
    pub fn years_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_YEAR
    }

    /// Rejects non-finite parts.
    pub fn validated(self) -> AstroResult<Self> {
        if self.jd1.is_finite() && self.jd2.is_finite() {
            Ok(self)
        } else {
            Err(AstroError::invalid_date(
                self.jd1,
                self.jd2,
                "both parts must be finite",
            ))
        }
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_from_j2000() {
        let jd = JulianDate::new(2400000.5, 51544.5 + 36525.0);
        assert_eq!(jd.days_since_j2000(), 36525.0);
        assert_eq!(jd.centuries_since_j2000(), 1.0);
        assert_eq!(jd.years_since_j2000(), 100.0);
        assert_eq!(JulianDate::j2000().days_since_j2000(), 0.0);
    }

    #[test]
    fn test_add_days_keeps_jd1() {
        let jd = JulianDate::new(J2000_JD, 0.25).add_days(1.5);
        assert_eq!(jd.jd1, J2000_JD);
        assert_eq!(jd.jd2, 1.75);
        assert_eq!(format!("{}", jd), "JD 2451546.750000000");
    }

    #[test]
    fn test_validated() {
        assert!(JulianDate::new(J2000_JD, 0.1).validated().is_ok());
        let err = JulianDate::new(f64::NAN, 0.0).validated().unwrap_err();
        assert!(matches!(err, AstroError::InvalidDate { .. }));
        assert!(JulianDate::new(J2000_JD, f64::INFINITY).validated().is_err());
    }
}
