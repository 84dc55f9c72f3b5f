//! 2D vector value type
//!
//! Plain `f64` coordinates with the normalization policy the collision code
//! relies on: normalizing a zero-length vector yields the zero vector instead
//! of NaN. Plain scalar division is *not* guarded, so dividing by zero still
//! produces Inf/NaN. Length and dot products go through `glam::DVec2`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::float_repr;

/// A 2D vector with value semantics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    #[serde(with = "float_repr")]
    pub x: f64,
    #[serde(with = "float_repr")]
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> f64 {
        DVec2::from(self).length()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        DVec2::from(self).length_squared()
    }

    /// Unit vector in the same direction, or `ZERO` if the length is not positive
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 { self / mag } else { Self::ZERO }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Uniform random point in `[min_x, max_x) x [min_y, max_y)`
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Self {
        Self::new(
            rng.random::<f64>() * (max_x - min_x) + min_x,
            rng.random::<f64>() * (max_y - min_y) + min_y,
        )
    }
}

impl From<DVec2> for Vector2D {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    #[inline]
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
