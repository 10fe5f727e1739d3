//! Refraction constants for the tangent model.
//!
//! Refraction is modelled as `Δζ = A tan ζ + B tan³ ζ`, ζ being the observed
//! zenith distance. The constants come from the ground meteorology: optical
//! and infrared wavelengths (≤ 100 µm) use the Hohenkerk & Sinclair
//! refractivity, longer wavelengths the Rueger (2002) radio formula.
//!
//! Good to about 1% of the refraction itself down to 75° zenith distance;
//! the model is unusable beyond about 83°.

use tracing::warn;

use crate::warnings::{Solution, Warnings};

const PRESSURE_RANGE_HPA: (f64, f64) = (0.0, 10000.0);
const TEMPERATURE_RANGE_C: (f64, f64) = (-150.0, 200.0);
const HUMIDITY_RANGE: (f64, f64) = (0.0, 1.0);
const WAVELENGTH_RANGE_UM: (f64, f64) = (0.1, 1e6);

/// Optical/radio boundary, micrometres.
const RADIO_THRESHOLD_UM: f64 = 100.0;

/// Ground meteorology at the site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atmosphere {
    /// Pressure at the observer, hPa. Zero disables refraction.
    pub pressure_hpa: f64,
    pub temperature_c: f64,
    /// Relative humidity, 0-1.
    pub relative_humidity: f64,
    /// Effective wavelength, µm.
    pub wavelength_um: f64,
}

impl Atmosphere {
    pub fn new(
        pressure_hpa: f64,
        temperature_c: f64,
        relative_humidity: f64,
        wavelength_um: f64,
    ) -> Self {
        Self {
            pressure_hpa,
            temperature_c,
            relative_humidity,
            wavelength_um,
        }
    }

    /// No atmosphere: refraction constants come out zero.
    pub fn vacuum() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.55)
    }
}

/// Tangent-model refraction constants, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefractionConstants {
    pub a: f64,
    pub b: f64,
}

impl RefractionConstants {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Derives the constants from the site meteorology.
    ///
    /// Inputs outside the model's range are clamped and reported with
    /// [`Warnings::ATMOSPHERE_CLAMPED`].
    pub fn from_atmosphere(atmosphere: &Atmosphere) -> Solution<Self> {
        let mut clamped = false;
        let mut clamp = |value: f64, (lo, hi): (f64, f64)| {
            let c = value.clamp(lo, hi);
            if c != value {
                clamped = true;
            }
            c
        };

        let t = clamp(atmosphere.temperature_c, TEMPERATURE_RANGE_C);
        let p = clamp(atmosphere.pressure_hpa, PRESSURE_RANGE_HPA);
        let r = clamp(atmosphere.relative_humidity, HUMIDITY_RANGE);
        let w = clamp(atmosphere.wavelength_um, WAVELENGTH_RANGE_UM);

        let mut warnings = Warnings::empty();
        if clamped {
            warn!(
                pressure_hpa = atmosphere.pressure_hpa,
                temperature_c = atmosphere.temperature_c,
                relative_humidity = atmosphere.relative_humidity,
                wavelength_um = atmosphere.wavelength_um,
                "meteorological inputs clamped to the refraction model's range"
            );
            warnings |= Warnings::ATMOSPHERE_CLAMPED;
        }

        let optical = atmosphere.wavelength_um <= RADIO_THRESHOLD_UM;

        // water vapour pressure
        let pw = if p > 0.0 {
            let ps = libm::pow(10.0, (0.7859 + 0.03477 * t) / (1.0 + 0.00412 * t))
                * (1.0 + p * (4.5e-6 + 6e-10 * t * t));
            r * ps / (1.0 - (1.0 - r) * ps / p)
        } else {
            0.0
        };

        let tk = t + 273.15;
        let gamma = if optical {
            let wlsq = w * w;
            ((77.53484e-6 + (4.39108e-7 + 3.666e-9 / wlsq) / wlsq) * p - 11.2684e-6 * pw) / tk
        } else {
            (77.6890e-6 * p - (6.3938e-6 - 0.375463 / tk) * pw) / tk
        };

        let mut beta = 4.4474e-6 * tk;
        if !optical {
            beta -= 0.0074 * pw * beta;
        }

        Solution::new(
            Self {
                a: gamma * (1.0 - beta),
                b: -gamma * (beta - gamma / 2.0),
            },
            warnings,
        )
    }
}
