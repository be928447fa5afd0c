use glam::{DQuat, DVec3, Mat4, Vec3, Vec4};
use crate::math::{Frame, Point};
use super::*;

fn camera_frame() -> Frame {
    Frame::from_rotation(
        Point::new(3.0, 1.5, 10.0),
        DQuat::from_euler(glam::EulerRot::YXZ, 0.3, -0.2, 0.05),
    )
}

fn object_frame() -> Frame {
    Frame::from_rotation(
        Point::new(-2.0, 0.0, 1.0),
        DQuat::from_axis_angle(DVec3::new(0.0, 1.0, 1.0).normalize(), 1.2),
    )
}

// ============================================================================
// model_matrix
// ============================================================================

#[test]
fn test_model_matrix_of_world_is_identity() {
    assert_eq!(model_matrix(&Frame::WORLD), Mat4::IDENTITY);
}

#[test]
fn test_model_matrix_of_translated_frame() {
    let m = model_matrix(&Frame::at(Point::new(1.0, 2.0, 3.0)));
    assert_eq!(m, Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn test_model_matrix_columns_are_frame_fields() {
    let frame = object_frame();
    let m = model_matrix(&frame);

    assert!(m.x_axis.abs_diff_eq(frame.x_direction().to_dvec3().as_vec3().extend(0.0), 1e-7));
    assert!(m.y_axis.abs_diff_eq(frame.y_direction().to_dvec3().as_vec3().extend(0.0), 1e-7));
    assert!(m.z_axis.abs_diff_eq(frame.z_direction().to_dvec3().as_vec3().extend(0.0), 1e-7));
    assert!(m.w_axis.abs_diff_eq(frame.origin().to_dvec3().as_vec3().extend(1.0), 1e-6));
}

#[test]
fn test_model_matrix_last_row() {
    let m = model_matrix(&object_frame());
    assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_model_matrix_maps_local_to_parent() {
    let frame = object_frame();
    let m = model_matrix_f64(&frame);
    let local = Point::new(0.5, -1.0, 2.0);
    let expected = frame.to_parent_point(local).to_dvec3();
    assert!(m.transform_point3(local.to_dvec3()).abs_diff_eq(expected, 1e-12));
}

#[test]
fn test_model_matrix_f64_matches_f32() {
    let frame = object_frame();
    assert!(model_matrix_f64(&frame).as_mat4().abs_diff_eq(model_matrix(&frame), 0.0));
}

// ============================================================================
// view_matrix
// ============================================================================

#[test]
fn test_view_matrix_of_world_is_identity() {
    assert_eq!(view_matrix(&Frame::WORLD), Mat4::IDENTITY);
}

#[test]
fn test_view_matrix_inverts_model_matrix() {
    let frame = camera_frame();
    let product = view_matrix(&frame) * model_matrix(&frame);
    assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-5));

    let product = view_matrix_f64(&frame) * model_matrix_f64(&frame);
    assert!(product.abs_diff_eq(glam::DMat4::IDENTITY, 1e-12));
}

#[test]
fn test_view_matrix_puts_camera_origin_at_eye_space_origin() {
    let frame = camera_frame();
    let eye = view_matrix(&frame).transform_point3(frame.origin().to_dvec3().as_vec3());
    assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-5));
}

#[test]
fn test_view_matrix_matches_glam_look_at() {
    // Camera at (0, 0, 5) looking at the origin: local axes equal world axes.
    let frame = Frame::at(Point::new(0.0, 0.0, 5.0));
    let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    assert!(view_matrix(&frame).abs_diff_eq(expected, 1e-6));

    // A point in front of the camera lands on eye-space -z
    let p = view_matrix(&frame).transform_point3(Vec3::ZERO);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-6));
}

// ============================================================================
// model_view_matrix
// ============================================================================

#[test]
fn test_model_view_matrix_matches_product() {
    let eye = camera_frame();
    let model = object_frame();
    let direct = model_view_matrix(&eye, &model);
    let product = view_matrix(&eye) * model_matrix(&model);
    assert!(direct.abs_diff_eq(product, 1e-5));
}

#[test]
fn test_model_view_matrix_with_world_eye_is_model_matrix() {
    let model = object_frame();
    assert!(model_view_matrix(&Frame::WORLD, &model).abs_diff_eq(model_matrix(&model), 1e-6));
}

#[test]
fn test_model_view_matrix_is_closer_to_exact_far_from_origin() {
    // Large translations: f32 products lose precision, the frame path does not.
    let eye = Frame::from_rotation(
        Point::new(100_000.0, 20_000.0, -50_000.0),
        DQuat::from_rotation_y(0.3),
    );
    let model = Frame::from_rotation(
        Point::new(100_001.25, 20_000.5, -50_002.0),
        DQuat::from_rotation_y(0.35),
    );

    let exact = model_view_matrix_f64(&eye, &model);
    let direct = model_view_matrix(&eye, &model).as_dmat4();
    let product = (view_matrix(&eye) * model_matrix(&model)).as_dmat4();

    let direct_error = (direct.w_axis - exact.w_axis).length();
    let product_error = (product.w_axis - exact.w_axis).length();
    assert!(direct_error <= product_error);
    assert!(direct_error < 1e-5);
}

// ============================================================================
// FrameUniforms
// ============================================================================

#[test]
fn test_frame_uniforms_layout() {
    assert_eq!(FrameUniforms::SIZE, 192);
    let uniforms = FrameUniforms::new(&camera_frame(), &object_frame());
    assert_eq!(uniforms.as_bytes().len(), 192);

    let first_column: &[f32] = bytemuck::cast_slice(&uniforms.as_bytes()[0..16]);
    assert_eq!(first_column, &uniforms.model.x_axis.to_array());
}

#[test]
fn test_frame_uniforms_content() {
    let eye = camera_frame();
    let model = object_frame();
    let uniforms = FrameUniforms::new(&eye, &model);
    assert_eq!(uniforms.model, model_matrix(&model));
    assert_eq!(uniforms.view, view_matrix(&eye));
    assert_eq!(uniforms.model_view, model_view_matrix(&eye, &model));
}
