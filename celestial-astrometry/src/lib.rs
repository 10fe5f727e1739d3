//! Astrometric observation pipeline.
//!
//! Turns catalog star data into the direction an observer sees, and back.
//! Everything that depends on the date and the observer, but not on the
//! star, is gathered once into an [`AstrometryContext`]; the per-star
//! transforms then read it without touching it.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`context`] | [`AstrometryContext`] and its builders |
//! | [`providers`] | Ephemeris and Earth-orientation traits, bundled models |
//! | [`forward`] | Catalog → astrometric → apparent place |
//! | [`inverse`] | Apparent → ICRS place |
//! | [`observed`] | CIRS ↔ azimuth, zenith distance, hour angle |
//! | [`refraction`] | Tangent-model refraction constants |
//! | [`deflection`] | Gravitational light deflection |
//! | [`aberration`] | Relativistic stellar aberration |
//! | [`space_motion`] | Catalog elements ↔ space motion, epoch propagation |
//! | [`pipeline`] | One-call conversions with context building included |
//! | [`warnings`] | Non-fatal status flags |
//!
//! Nothing in the numerical chain returns an error. Unphysical inputs are
//! clamped or overridden and reported through [`Warnings`]; only the model
//! providers can fail, with [`AstroError`](celestial_core::AstroError).
//!
//! ```
//! use celestial_astrometry::{pipeline, CatalogStar, Models, Observer, Atmosphere};
//! use celestial_core::{JulianDate, Location};
//!
//! let site = Location::from_degrees(19.8207, -155.4681, 4205.0)?;
//! let observer = Observer::new(site, 0.0, 0.0, Atmosphere::new(615.0, 2.0, 0.2, 0.55));
//! let tt = JulianDate::new(2460000.5, 0.3);
//! let ut1 = JulianDate::new(2460000.5, 0.3 - 69.2 / 86400.0);
//!
//! let vega = CatalogStar::from_catalog_units(279.2347, 38.7837, 200.94, 286.23, 130.23, -13.5);
//! let s = pipeline::icrs_to_observed(&vega, &tt, &ut1, &observer, &Models::bundled())?;
//! let (place, _eo) = s.value;
//! assert!((0.0..std::f64::consts::PI).contains(&place.zenith_distance));
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

pub mod aberration;
pub mod catalog;
pub mod context;
pub mod deflection;
pub mod forward;
pub mod inverse;
pub mod observed;
pub mod pipeline;
pub mod providers;
pub mod refraction;
pub mod space_motion;
pub mod warnings;

pub use catalog::CatalogStar;
pub use context::{AstrometryContext, IntermediatePole, Observer, PolarMotion};
pub use deflection::DeflectingBody;
pub use observed::{ObservedKind, ObservedPlace};
pub use providers::{EarthEphemeris, EarthOrientationModel, EarthState, Models};
pub use refraction::{Atmosphere, RefractionConstants};
pub use warnings::{Solution, Warnings};
