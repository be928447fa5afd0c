//! Vector: a displacement with magnitude, plus the normalization and
//! Gram-Schmidt orthonormalization that produce unit `Direction`s.

use std::ops::{Add, Mul, Neg, Sub};
use glam::DVec3;
use crate::config::Tolerance;
use crate::error::{Error, Result};
use super::direction::Direction;
use super::point::Point;

/// A displacement in 3D space, in double precision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(DVec3);

impl Vector {
    pub const ZERO: Self = Self(DVec3::ZERO);
    pub const X_AXIS: Self = Self(DVec3::X);
    pub const Y_AXIS: Self = Self(DVec3::Y);
    pub const Z_AXIS: Self = Self(DVec3::Z);

    /// Create a vector from components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a vector from a glam vector
    pub const fn from_dvec3(components: DVec3) -> Self {
        Self(components)
    }

    /// The vector `to - from`, pointing from `from` to `to`
    pub fn from_points(to: Point, from: Point) -> Self {
        to - from
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

    /// The three components `[x, y, z]`
    pub fn components(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Components as a glam vector
    pub fn to_dvec3(&self) -> DVec3 {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    // ===== PRODUCTS =====

    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Right-handed cross product `self × other`
    pub fn cross_product(&self, other: &Vector) -> Vector {
        Self(self.0.cross(other.0))
    }

    // ===== NORMALIZATION =====

    /// Unit direction of this vector, using the default tolerance.
    ///
    /// # Errors
    ///
    /// - `NonFiniteValue` if a component is NaN or infinite
    /// - `ZeroLengthVector` if the length is at or below `zero_length`
    pub fn direction(&self) -> Result<Direction> {
        self.direction_with(&Tolerance::default())
    }

    /// Unit direction of this vector.
    pub fn direction_with(&self, tolerance: &Tolerance) -> Result<Direction> {
        if !self.is_finite() {
            return Err(Error::NonFiniteValue(format!("vector {}", self.0)));
        }
        let length = self.0.length();
        if tolerance.is_zero_length(length) {
            return Err(Error::ZeroLengthVector(format!(
                "vector {} has length {:e}",
                self.0, length
            )));
        }
        Ok(Direction::from_normalized(self.0 / length))
    }

    /// Orthonormalize three vectors, using the default tolerance.
    ///
    /// See [`Vector::orthonormalize_with`].
    pub fn orthonormalize(first: Vector, second: Vector, third: Vector) -> Result<[Direction; 3]> {
        Self::orthonormalize_with(first, second, third, &Tolerance::default())
    }

    /// Orthonormalize three vectors with modified Gram-Schmidt.
    ///
    /// The first output is `first` normalized. The second is the part of
    /// `second` perpendicular to the first output, normalized. The third is
    /// the part of `third` perpendicular to both, normalized. Each output keeps
    /// the general direction of its input, so when `third` is on the positive
    /// side of `first × second` the result is a right-handed basis.
    ///
    /// # Errors
    ///
    /// - `NonFiniteValue` if any input has a NaN or infinite component
    /// - `DegenerateBasis` if `first` is zero, `second` is parallel to
    ///   `first`, or `third` lies in their plane
    pub fn orthonormalize_with(
        first: Vector,
        second: Vector,
        third: Vector,
        tolerance: &Tolerance,
    ) -> Result<[Direction; 3]> {
        if !(first.is_finite() && second.is_finite() && third.is_finite()) {
            return Err(Error::NonFiniteValue(format!(
                "orthonormalize({}, {}, {})",
                first.0, second.0, third.0
            )));
        }

        let e0 = first.direction_with(tolerance)
            .map_err(|_| Error::DegenerateBasis(format!("first vector {} is zero", first.0)))?
            .to_dvec3();

        let r1 = second.0 - e0 * second.0.dot(e0);
        let r1_length = r1.length();
        if tolerance.is_parallel_residual(r1_length, second.length()) {
            return Err(Error::DegenerateBasis(format!(
                "second vector {} is parallel to first vector {}",
                second.0, first.0
            )));
        }
        let e1 = r1 / r1_length;

        let mut r2 = third.0 - e0 * third.0.dot(e0);
        r2 -= e1 * r2.dot(e1);
        let r2_length = r2.length();
        if tolerance.is_parallel_residual(r2_length, third.length()) {
            return Err(Error::DegenerateBasis(format!(
                "third vector {} lies in the plane of {} and {}",
                third.0, first.0, second.0
            )));
        }
        let e2 = r2 / r2_length;

        Ok([
            Direction::from_normalized(e0),
            Direction::from_normalized(e1),
            Direction::from_normalized(e2),
        ])
    }

    /// True if every component differs by at most `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &Vector, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl From<Direction> for Vector {
    fn from(direction: Direction) -> Self {
        direction.to_vector()
    }
}

impl From<Vector> for DVec3 {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
