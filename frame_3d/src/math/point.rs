//! Point: a location in 3D space.
//!
//! Points and vectors are kept as distinct types: subtracting two points
//! yields a `Vector`, and only a `Vector` can translate a point.

use std::ops::{Add, Sub};
use glam::DVec3;
use super::vector::Vector;

/// A location in 3D space, in double precision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(DVec3);

impl Point {
    /// The parent-space origin
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    /// Create a point from coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a point from a glam vector
    pub const fn from_dvec3(coordinates: DVec3) -> Self {
        Self(coordinates)
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

    /// The three coordinates `[x, y, z]`
    pub fn coordinates(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Coordinates as a glam vector
    pub fn to_dvec3(&self) -> DVec3 {
        self.0
    }

    // ===== OPERATIONS =====

    /// This point moved by `offset`
    pub fn translated(&self, offset: Vector) -> Self {
        Self(self.0 + offset.to_dvec3())
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        self.0.distance(other.0)
    }

    /// True if every coordinate differs by at most `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &Point, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translated(rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        self.translated(-rhs)
    }
}

/// `a - b` is the vector pointing from `b` to `a`
impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from_dvec3(self.0 - rhs.0)
    }
}

impl From<[f64; 3]> for Point {
    fn from(coordinates: [f64; 3]) -> Self {
        Self(DVec3::from_array(coordinates))
    }
}

impl From<Point> for DVec3 {
    fn from(point: Point) -> Self {
        point.0
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
