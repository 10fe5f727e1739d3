//! 3D Cartesian vectors.
//!
//! Directions on the sky are carried as unit vectors; positions and velocities
//! as plain vectors in AU and AU/day. Convert with
//! [`from_spherical`](Vector3::from_spherical) and
//! [`to_spherical`](Vector3::to_spherical):
//!
//! ```
//! use celestial_core::Vector3;
//!
//! let star = Vector3::from_spherical(1.2, -0.4);
//! let (ra, dec) = star.to_spherical();
//! assert!((ra - 1.2).abs() < 1e-15);
//! assert!((dec + 0.4).abs() < 1e-15);
//! ```
//!
//! The spherical convention is the astronomical one: θ is measured from +X
//! toward +Y (like right ascension) and φ is the elevation from the XY plane
//! (like declination).
use std::fmt;

/// A 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// The zero vector is returned unchanged rather than producing NaN.
    pub fn normalize(&self) -> Self {
        self.split().1
    }

    /// Splits the vector into its modulus and unit direction.
    ///
    /// For the zero vector the modulus is 0 and the direction is the zero
    /// vector.
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let (r, u) = Vector3::new(0.0, 3.0, 4.0).split();
    /// assert_eq!(r, 5.0);
    /// assert_eq!(u, Vector3::new(0.0, 0.6, 0.8));
    /// ```
    pub fn split(&self) -> (f64, Self) {
        let mag = self.magnitude();
        if mag == 0.0 {
            (0.0, Self::zeros())
        } else {
            (mag, Self::new(self.x / mag, self.y / mag, self.z / mag))
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit vector from longitude-like `theta` and latitude-like `phi` (radians).
    pub fn from_spherical(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = libm::sincos(theta);
        let (sin_phi, cos_phi) = libm::sincos(phi);
        Self::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi)
    }

    /// Converts to `(theta, phi)`.
    ///
    /// `theta` is in `(-π, π]`, `phi` in `[-π/2, π/2]`. The vector need not be
    /// normalized; the zero vector gives `(0, 0)`, and a pole gives `theta = 0`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let theta = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let phi = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (theta, phi)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.12}, {:.12}, {:.12})", self.x, self.y, self.z)
    }
}
