//! Frame: a rigid-body pose, made of an origin point plus a right-handed
//! orthonormal basis, both expressed in a parent space.
//!
//! Frames are immutable values. Re-expressing a frame in another frame's
//! coordinates (`relative_to`) or back (`compose`) always builds a new frame.

use glam::{DQuat, DVec3};
use crate::config::Tolerance;
use crate::error::{Error, Result};
use crate::{frame_error, frame_warn};
use super::direction::Direction;
use super::point::Point;
use super::vector::Vector;

/// Rigid-body pose: origin + right-handed orthonormal basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    origin: Point,
    x_direction: Direction,
    y_direction: Direction,
    z_direction: Direction,
}

impl Frame {
    /// The parent space itself: origin at zero, axes aligned
    pub const WORLD: Self = Self::at(Point::ORIGIN);

    /// Frame at `origin` aligned with the parent axes
    pub const fn at(origin: Point) -> Self {
        Self {
            origin,
            x_direction: Direction::X,
            y_direction: Direction::Y,
            z_direction: Direction::Z,
        }
    }

    /// Create a frame from an explicit basis, using the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`Frame::try_new_with`].
    pub fn try_new(
        origin: Point,
        x_direction: Direction,
        y_direction: Direction,
        z_direction: Direction,
    ) -> Result<Self> {
        Self::try_new_with(origin, x_direction, y_direction, z_direction, &Tolerance::default())
    }

    /// Create a frame from an explicit basis.
    ///
    /// # Errors
    ///
    /// - `NonFiniteValue` if the origin is not finite
    /// - `NotOrthonormal` if the directions are not unit length, not
    ///   mutually perpendicular, or form a left-handed basis
    pub fn try_new_with(
        origin: Point,
        x_direction: Direction,
        y_direction: Direction,
        z_direction: Direction,
        tolerance: &Tolerance,
    ) -> Result<Self> {
        if !origin.is_finite() {
            let msg = format!("frame origin {:?} is not finite", origin.coordinates());
            frame_error!("frame3d::Frame", "{}", msg);
            return Err(Error::NonFiniteValue(msg));
        }

        let frame = Self::from_basis(origin, x_direction, y_direction, z_direction);
        if let Some(msg) = frame.basis_defect(tolerance) {
            frame_error!("frame3d::Frame", "Rejected basis: {}", msg);
            return Err(Error::NotOrthonormal(msg));
        }
        Ok(frame)
    }

    /// Frame at `origin` whose axes are the parent axes rotated by `rotation`.
    ///
    /// `rotation` is normalized first. A zero-length or non-finite quaternion
    /// carries no orientation: the result is then `Frame::at(origin)` and a
    /// warning is logged.
    pub fn from_rotation(origin: Point, rotation: DQuat) -> Self {
        let length = rotation.length();
        if !length.is_finite() || Tolerance::default().is_zero_length(length) {
            frame_warn!(
                "frame3d::Frame",
                "Rotation {:?} has no orientation, using parent axes",
                rotation
            );
            return Self::at(origin);
        }
        let rotation = rotation / length;
        Self::from_basis(
            origin,
            Direction::from_normalized(rotation * DVec3::X),
            Direction::from_normalized(rotation * DVec3::Y),
            Direction::from_normalized(rotation * DVec3::Z),
        )
    }

    /// Assemble a frame whose basis the caller has already made orthonormal
    pub(crate) const fn from_basis(
        origin: Point,
        x_direction: Direction,
        y_direction: Direction,
        z_direction: Direction,
    ) -> Self {
        Self {
            origin,
            x_direction,
            y_direction,
            z_direction,
        }
    }

    // ===== GETTERS =====

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn x_direction(&self) -> Direction {
        self.x_direction
    }

    pub fn y_direction(&self) -> Direction {
        self.y_direction
    }

    pub fn z_direction(&self) -> Direction {
        self.z_direction
    }

    // ===== COORDINATE CHANGES =====

    /// Parent-space position of a point given in this frame's coordinates
    pub fn to_parent_point(&self, local: Point) -> Point {
        self.origin + self.to_parent_vector(Vector::from_dvec3(local.to_dvec3()))
    }

    /// This frame's coordinates of a parent-space point
    pub fn to_local_point(&self, parent: Point) -> Point {
        Point::from_dvec3(self.to_local_vector(parent - self.origin).to_dvec3())
    }

    /// Parent-space components of a vector given in this frame's coordinates
    pub fn to_parent_vector(&self, local: Vector) -> Vector {
        Vector::from_dvec3(self.globalize(local.to_dvec3()))
    }

    /// This frame's components of a parent-space vector
    pub fn to_local_vector(&self, parent: Vector) -> Vector {
        Vector::from_dvec3(self.localize(parent.to_dvec3()))
    }

    pub fn to_parent_direction(&self, local: Direction) -> Direction {
        Direction::from_normalized(self.globalize(local.to_dvec3()))
    }

    pub fn to_local_direction(&self, parent: Direction) -> Direction {
        Direction::from_normalized(self.localize(parent.to_dvec3()))
    }

    // ===== FRAME COMPOSITION =====

    /// This frame's pose re-expressed in `base`'s local coordinates.
    ///
    /// Both frames must share the same parent space.
    /// `Frame::WORLD.relative_to(&camera)` is the world seen from the camera.
    pub fn relative_to(&self, base: &Frame) -> Frame {
        Self::from_basis(
            base.to_local_point(self.origin),
            base.to_local_direction(self.x_direction),
            base.to_local_direction(self.y_direction),
            base.to_local_direction(self.z_direction),
        )
    }

    /// Pose, in this frame's parent space, of a frame given in this frame's
    /// local coordinates. Undoes `relative_to`:
    /// `base.compose(&target.relative_to(&base)) == target` up to rounding.
    pub fn compose(&self, local: &Frame) -> Frame {
        Self::from_basis(
            self.to_parent_point(local.origin),
            self.to_parent_direction(local.x_direction),
            self.to_parent_direction(local.y_direction),
            self.to_parent_direction(local.z_direction),
        )
    }

    /// The parent frame as seen from this frame
    pub fn inverse(&self) -> Frame {
        Frame::WORLD.relative_to(self)
    }

    // ===== VALIDATION =====

    /// True if the basis is unit length, orthogonal and right-handed
    pub fn is_orthonormal(&self, tolerance: &Tolerance) -> bool {
        self.basis_defect(tolerance).is_none()
    }

    /// True if origin and all directions match within `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &Frame, max_abs_diff: f64) -> bool {
        self.origin.abs_diff_eq(&other.origin, max_abs_diff)
            && self.x_direction.abs_diff_eq(&other.x_direction, max_abs_diff)
            && self.y_direction.abs_diff_eq(&other.y_direction, max_abs_diff)
            && self.z_direction.abs_diff_eq(&other.z_direction, max_abs_diff)
    }

    fn basis_defect(&self, tolerance: &Tolerance) -> Option<String> {
        let axes = [
            ("x", self.x_direction.to_dvec3()),
            ("y", self.y_direction.to_dvec3()),
            ("z", self.z_direction.to_dvec3()),
        ];

        for (name, axis) in axes {
            let deviation = (axis.length() - 1.0).abs();
            if !(deviation <= tolerance.unit_length) {
                return Some(format!("{} direction {} is not unit length", name, axis));
            }
        }

        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let dot = axes[i].1.dot(axes[j].1);
            if dot.abs() > tolerance.orthogonality {
                return Some(format!(
                    "{} and {} directions are not perpendicular (dot = {:e})",
                    axes[i].0, axes[j].0, dot
                ));
            }
        }

        if axes[0].1.cross(axes[1].1).dot(axes[2].1) < 0.0 {
            return Some("basis is left-handed".to_string());
        }
        None
    }

    fn globalize(&self, v: DVec3) -> DVec3 {
        self.x_direction.to_dvec3() * v.x
            + self.y_direction.to_dvec3() * v.y
            + self.z_direction.to_dvec3() * v.z
    }

    fn localize(&self, v: DVec3) -> DVec3 {
        DVec3::new(
            v.dot(self.x_direction.to_dvec3()),
            v.dot(self.y_direction.to_dvec3()),
            v.dot(self.z_direction.to_dvec3()),
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::WORLD
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
