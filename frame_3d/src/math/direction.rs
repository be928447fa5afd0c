//! Direction: a unit vector.
//!
//! A `Direction` can only be obtained by normalizing a non-zero vector, from
//! the axis constants, or from a `Frame`'s basis, so its length is always 1
//! up to rounding.

use std::ops::Neg;
use glam::DVec3;
use crate::error::Result;
use super::vector::Vector;

/// Unit-length direction, in double precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction(DVec3);

impl Direction {
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);
    pub const NEG_X: Self = Self(DVec3::NEG_X);
    pub const NEG_Y: Self = Self(DVec3::NEG_Y);
    pub const NEG_Z: Self = Self(DVec3::NEG_Z);

    /// Normalize `(x, y, z)` into a direction.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::direction`]: the input must be finite and non-zero.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Vector::new(x, y, z).direction()
    }

    /// Wrap an already unit-length vector. Callers guarantee the invariant.
    pub(crate) const fn from_normalized(unit: DVec3) -> Self {
        Self(unit)
    }

    // ===== GETTERS =====

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The three unit-vector components `[x, y, z]`
    pub fn components(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Widen into a general vector with the same components
    pub fn to_vector(&self) -> Vector {
        Vector::from_dvec3(self.0)
    }

    pub fn to_dvec3(&self) -> DVec3 {
        self.0
    }

    // ===== OPERATIONS =====

    pub fn dot_product(&self, other: &Direction) -> f64 {
        self.0.dot(other.0)
    }

    /// `self × other`; only unit length when the inputs are perpendicular
    pub fn cross_product(&self, other: &Direction) -> Vector {
        Vector::from_dvec3(self.0.cross(other.0))
    }

    /// Two directions `(b1, b2)` completing a right-handed orthonormal basis
    /// `(b1, b2, self)`, so `b1 × b2 == self`.
    ///
    /// Uses the branch-free construction of Duff et al., "Building an
    /// Orthonormal Basis, Revisited" (JCGT 2017). The result is continuous
    /// everywhere except across the `z = 0` plane, where the sign of `z`
    /// picks the branch (`+0.0` counts as positive). For example
    /// `Z -> (X, Y)` and `Y -> (X, NEG_Z)`.
    pub fn perpendicular_basis(&self) -> (Direction, Direction) {
        let (b1, b2) = self.0.any_orthonormal_pair();
        (Self(b1), Self(b2))
    }

    /// True if every component differs by at most `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &Direction, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Self(-self.0)
    }
}

impl From<Direction> for DVec3 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod tests;
