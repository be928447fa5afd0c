//! Frame-to-matrix conversion.
//!
//! Every function here is total and pure. Matrices are column-major
//! homogeneous transforms: columns 0..2 hold a frame's x/y/z directions,
//! column 3 holds its origin followed by 1, and the last row is (0, 0, 0, 1).
//!
//! Render matrices are `glam::Mat4` (f32). Frames are f64, so relative
//! transforms are composed on frames first and narrowed to f32 once.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, Mat4};
use crate::math::Frame;

/// Local-to-parent matrix of `frame` (object-to-world for a model frame).
pub fn model_matrix(frame: &Frame) -> Mat4 {
    model_matrix_f64(frame).as_mat4()
}

/// World-to-eye matrix for a camera at `frame`.
///
/// The camera looks down its local `-z`, with `+x` to the right and `+y` up.
/// This is the inverse of `model_matrix(frame)`.
pub fn view_matrix(frame: &Frame) -> Mat4 {
    model_matrix(&Frame::WORLD.relative_to(frame))
}

/// Model-to-eye matrix, built from the single relative frame of `model_frame`
/// in `eye_frame`.
///
/// Equivalent to `view_matrix(eye_frame) * model_matrix(model_frame)`, minus
/// the rounding of two f32 matrices and their product.
pub fn model_view_matrix(eye_frame: &Frame, model_frame: &Frame) -> Mat4 {
    model_matrix(&model_frame.relative_to(eye_frame))
}

/// Double-precision `model_matrix`
pub fn model_matrix_f64(frame: &Frame) -> DMat4 {
    DMat4::from_cols(
        frame.x_direction().to_dvec3().extend(0.0),
        frame.y_direction().to_dvec3().extend(0.0),
        frame.z_direction().to_dvec3().extend(0.0),
        frame.origin().to_dvec3().extend(1.0),
    )
}

/// Double-precision `view_matrix`
pub fn view_matrix_f64(frame: &Frame) -> DMat4 {
    model_matrix_f64(&Frame::WORLD.relative_to(frame))
}

/// Double-precision `model_view_matrix`
pub fn model_view_matrix_f64(eye_frame: &Frame, model_frame: &Frame) -> DMat4 {
    model_matrix_f64(&model_frame.relative_to(eye_frame))
}

/// Per-draw transform block for a uniform buffer.
///
/// Layout (std140 compatible, 192 bytes):
///   0: model (Mat4), 64: view (Mat4), 128: modelView (Mat4)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub model_view: Mat4,
}

impl FrameUniforms {
    /// Size in bytes of the uniform block
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Matrices for drawing `model_frame` as seen from `eye_frame`
    pub fn new(eye_frame: &Frame, model_frame: &Frame) -> Self {
        Self {
            model: model_matrix(model_frame),
            view: view_matrix(eye_frame),
            model_view: model_view_matrix(eye_frame, model_frame),
        }
    }

    /// Raw bytes, ready for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
