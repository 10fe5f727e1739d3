//! Truncated IAU 2000B nutation.

pub mod iau2000b;

pub use iau2000b::{Nutation, NutationIAU2000B};
