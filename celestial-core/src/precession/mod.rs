//! IAU 2006 precession in the Fukushima-Williams parameterization.

pub mod iau2006;

pub use iau2006::FukushimaWilliamsAngles;
