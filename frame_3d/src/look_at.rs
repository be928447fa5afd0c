//! Look-at frame builder.
//!
//! Builds the camera frame at an eye point looking toward a focal point.
//! The frame's `+z` points from the focal point back to the eye (out of the
//! screen), so the camera looks down its local `-z`.
//!
//! The builder is total. When the view direction is parallel to the up
//! direction, or the eye sits on the focal point, it falls back to a
//! deterministic orientation instead of failing:
//!
//! 1. orthonormalize `(eye - focal, up, up × (eye - focal))`
//! 2. otherwise, if `eye - focal` has a direction, complete it with
//!    `Direction::perpendicular_basis`
//! 3. otherwise, parent-aligned axes at the eye

use crate::config::Tolerance;
use crate::math::{Direction, Frame, Point, Vector};
use crate::{frame_debug, frame_trace};

/// Which branch of the look-at construction produced the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookAt {
    /// View direction and up direction span a plane; y follows `up`
    Oriented(Frame),
    /// View direction is parallel to `up`; x/y come from the perpendicular basis
    UpParallel(Frame),
    /// Eye and focal point coincide; parent-aligned axes at the eye
    Coincident(Frame),
}

impl LookAt {
    /// The frame, whichever branch produced it
    pub fn frame(&self) -> &Frame {
        match self {
            LookAt::Oriented(frame) | LookAt::UpParallel(frame) | LookAt::Coincident(frame) => frame,
        }
    }

    /// Consume the result, keeping only the frame
    pub fn into_frame(self) -> Frame {
        *self.frame()
    }

    /// True unless the up direction was honoured
    pub fn is_fallback(&self) -> bool {
        !matches!(self, LookAt::Oriented(_))
    }
}

/// Camera frame at `eye_point` looking toward `focal_point`, with its y axis
/// as close to `up_direction` as possible. Never fails.
pub fn look_at(focal_point: Point, eye_point: Point, up_direction: Direction) -> Frame {
    look_at_with(focal_point, eye_point, up_direction, &Tolerance::default())
}

/// `look_at` with explicit degeneracy thresholds.
pub fn look_at_with(
    focal_point: Point,
    eye_point: Point,
    up_direction: Direction,
    tolerance: &Tolerance,
) -> Frame {
    resolve_look_at(focal_point, eye_point, up_direction, tolerance).into_frame()
}

/// Run the look-at construction and report which branch was taken.
///
/// Non-finite eye or focal coordinates fail both checks and land in
/// `LookAt::Coincident`.
pub fn resolve_look_at(
    focal_point: Point,
    eye_point: Point,
    up_direction: Direction,
    tolerance: &Tolerance,
) -> LookAt {
    let z_vector = eye_point - focal_point;
    let y_vector = up_direction.to_vector();
    let x_vector = y_vector.cross_product(&z_vector);

    if let Ok([z_direction, y_direction, x_direction]) =
        Vector::orthonormalize_with(z_vector, y_vector, x_vector, tolerance)
    {
        frame_trace!("frame3d::look_at", "Oriented frame at {:?}", eye_point.coordinates());
        return LookAt::Oriented(Frame::from_basis(eye_point, x_direction, y_direction, z_direction));
    }

    if let Ok(z_direction) = z_vector.direction_with(tolerance) {
        frame_debug!(
            "frame3d::look_at",
            "View direction {:?} is parallel to up {:?}, using perpendicular basis",
            z_direction.components(),
            up_direction.components()
        );
        let (x_direction, y_direction) = z_direction.perpendicular_basis();
        return LookAt::UpParallel(Frame::from_basis(eye_point, x_direction, y_direction, z_direction));
    }

    frame_debug!(
        "frame3d::look_at",
        "Eye and focal point coincide at {:?}, using parent axes",
        eye_point.coordinates()
    );
    LookAt::Coincident(Frame::at(eye_point))
}

#[cfg(test)]
#[path = "look_at_tests.rs"]
mod tests;
