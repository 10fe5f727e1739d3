//! Non-fatal status reported alongside numerical results.
//!
//! The astrometric pipeline never fails on physically odd input. Instead it
//! clamps, overrides or stops iterating, and says so through [`Warnings`].
//! Composed operations OR their flags together.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Warnings: u8 {
        /// Parallax was raised to the minimum the space-motion engine accepts.
        const DISTANCE_OVERRIDDEN = 0b0000_0001;
        /// Space velocity exceeded half the speed of light and was zeroed.
        const EXCESSIVE_VELOCITY  = 0b0000_0010;
        /// The relativistic correction ran out of iterations.
        const NOT_CONVERGED       = 0b0000_0100;
        /// Null position; parallax and radial velocity taken from the input star.
        const DEGENERATE_DISTANCE = 0b0000_1000;
        /// Inertial speed at or above c; velocity treated as zero.
        const SUPERLUMINAL        = 0b0001_0000;
        /// Meteorological inputs clamped to the refraction model's range.
        const ATMOSPHERE_CLAMPED  = 0b0010_0000;
    }
}

/// A value together with the warnings raised while computing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    pub value: T,
    pub warnings: Warnings,
}

impl<T> Solution<T> {
    pub fn new(value: T, warnings: Warnings) -> Self {
        Self { value, warnings }
    }

    pub fn clean(value: T) -> Self {
        Self::new(value, Warnings::empty())
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Solution<U> {
        Solution {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Adds further warnings, keeping the value.
    pub fn with_warnings(mut self, warnings: Warnings) -> Self {
        self.warnings |= warnings;
        self
    }

    pub fn into_parts(self) -> (T, Warnings) {
        (self.value, self.warnings)
    }
}
