use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use crate::error::Error;
use super::*;

fn sample_matrices() -> Vec<Matrix> {
    vec![
        Matrix::IDENTITY,
        Matrix::translation(Vec3::new(1.0, -2.0, 3.0)),
        Matrix::rotation_y(0.7).dot(&Matrix::scale(Vec3::new(2.0, 0.5, 1.5))),
        Matrix::perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0).unwrap(),
        Matrix::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]),
    ]
}

// ============================================================================
// Identity / storage
// ============================================================================

#[test]
fn test_dot_identity_is_noop() {
    for m in sample_matrices() {
        assert_eq!(m.dot(&Matrix::IDENTITY), m);
        assert_eq!(Matrix::IDENTITY.dot(&m), m);
    }
}

#[test]
fn test_identity_constructor_and_default() {
    assert_eq!(Matrix::identity(), Matrix::IDENTITY);
    assert_eq!(Matrix::default(), Matrix::IDENTITY);
}

#[test]
fn test_rows_and_cols_layout() {
    let rows = [
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    ];
    let m = Matrix::from_rows_array(&rows);

    assert_eq!(m.get(0, 3), 4.0);
    assert_eq!(m.get(3, 0), 13.0);
    assert_eq!(m.to_rows_array(), rows);
    assert_eq!(Matrix::from_cols_array(&m.to_cols_array()), m);
    assert_eq!(m.transpose().to_cols_array(), rows);
}

#[test]
fn test_matrix_is_64_bytes_pod() {
    let m = Matrix::translation(Vec3::new(1.0, 2.0, 3.0));
    let bytes = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 64);
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    // Column-major: translation sits in elements 12..15
    assert_eq!(&floats[12..15], &[1.0, 2.0, 3.0]);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_is_component_wise() {
    let a = Matrix::from_cols_array(&[1.0; 16]);
    let b = Matrix::from_cols_array(&[2.0; 16]);
    assert_eq!(a.add(&b), Matrix::from_cols_array(&[3.0; 16]));
    assert_eq!(a + b, Matrix::from_cols_array(&[3.0; 16]));
    assert_eq!(a + Matrix::ZERO, a);
}

#[test]
fn test_mul_operator_matches_dot() {
    let a = Matrix::rotation_z(0.3);
    let b = Matrix::translation(Vec3::X);
    assert_eq!(a * b, a.dot(&b));
    assert_eq!(Mat4::from(a.dot(&b)), Mat4::from(a) * Mat4::from(b));
}

#[test]
fn test_dot_vs_composed_transformation() {
    // a.dot(b) must apply b first, then a
    let a = Matrix::translation(Vec3::new(10.0, 0.0, 0.0));
    let b = Matrix::rotation_z(FRAC_PI_2);
    let p = Vec3::new(1.0, 0.0, 0.0);

    let composed = a.dot(&b).transform_point(p).unwrap();
    let step_by_step = a.transform_point(b.transform_point(p).unwrap()).unwrap();

    assert!((composed - step_by_step).length() < 1e-5);
    // Rotate (1,0,0) to (0,1,0), then translate
    assert!((composed - Vec3::new(10.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_dot_vs_composition_for_projection_chain() {
    let model = Matrix::translation(Vec3::new(0.5, 0.0, -3.0));
    let view = Matrix::look_at(Vec3::new(0.0, 1.0, 4.0), Vec3::ZERO, Vec3::Y).unwrap();
    let proj = Matrix::perspective(FRAC_PI_4, 1.5, 0.1, 50.0).unwrap();
    let mvp = proj.dot(&view).dot(&model);

    let p = Vec3::new(0.2, -0.1, 0.3);
    let chained = proj
        .transform_point(view.transform_point(model.transform_point(p).unwrap()).unwrap())
        .unwrap();
    let direct = mvp.transform_point(p).unwrap();

    assert!((chained - direct).length() < 1e-4);
}

#[test]
fn test_inverse_round_trip() {
    let m = Matrix::translation(Vec3::new(1.0, 2.0, 3.0)).dot(&Matrix::rotation_x(0.4));
    let inv = m.inverse().unwrap();
    assert!(m.dot(&inv).approx_eq(&Matrix::IDENTITY, 1e-5));
}

#[test]
fn test_inverse_of_singular_is_none() {
    assert!(Matrix::ZERO.inverse().is_none());
    assert!(Matrix::scale(Vec3::new(1.0, 0.0, 1.0)).inverse().is_none());
}

// ============================================================================
// Vector transforms
// ============================================================================

#[test]
fn test_transform_point_applies_translation() {
    let m = Matrix::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.transform_point(Vec3::ZERO).unwrap(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_transform_vector_ignores_translation() {
    let m = Matrix::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
}

#[test]
fn test_transform_point_homogeneous_divide() {
    let proj = Matrix::perspective(FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
    // A point on the near plane, straight ahead, lands at depth 0
    let near = proj.transform_point(Vec3::new(0.0, 0.0, -1.0)).unwrap();
    assert!(near.z.abs() < 1e-5);
    // Far plane lands at depth 1
    let far = proj.transform_point(Vec3::new(0.0, 0.0, -10.0)).unwrap();
    assert!((far.z - 1.0).abs() < 1e-5);
    // Right edge of the 90° frustum maps to x = 1
    let edge = proj.transform_point(Vec3::new(2.0, 0.0, -2.0)).unwrap();
    assert!((edge.x - 1.0).abs() < 1e-5);
}

#[test]
fn test_transform_point_zero_w_is_error() {
    let proj = Matrix::perspective(FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
    // Points on the camera plane (z = 0) have w = 0
    assert!(matches!(
        proj.transform_point(Vec3::new(1.0, 1.0, 0.0)),
        Err(Error::DegenerateVector(_))
    ));
}

#[test]
fn test_transform_vec4_matches_mat4() {
    let m = Matrix::rotation_y(1.0);
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
    assert_eq!(m.transform_vec4(v), Mat4::from(m) * v);
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_rotation_around_axis_matches_axis_builders() {
    let a = Matrix::rotation(Vec3::Y * 5.0, 0.8).unwrap();
    assert!(a.approx_eq(&Matrix::rotation_y(0.8), 1e-6));
}

#[test]
fn test_rotation_zero_axis_is_error() {
    assert!(Matrix::rotation(Vec3::ZERO, 1.0).is_err());
}

#[test]
fn test_scale_builders() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(Matrix::uniform_scale(2.0).transform_point(p).unwrap(), Vec3::splat(2.0));
    assert_eq!(
        Matrix::scale(Vec3::new(1.0, 2.0, 3.0)).transform_point(p).unwrap(),
        Vec3::new(1.0, 2.0, 3.0)
    );
}

#[test]
fn test_perspective_rejects_invalid_arguments() {
    assert!(Matrix::perspective(0.0, 1.0, 0.1, 10.0).is_err());
    assert!(Matrix::perspective(4.0, 1.0, 0.1, 10.0).is_err());
    assert!(Matrix::perspective(1.0, 0.0, 0.1, 10.0).is_err());
    assert!(Matrix::perspective(1.0, 1.0, 0.0, 10.0).is_err());
    assert!(Matrix::perspective(1.0, 1.0, 10.0, 1.0).is_err());
    assert!(matches!(
        Matrix::perspective(1.0, f32::NAN, 0.1, 10.0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_orthographic_maps_extents_to_ndc() {
    let m = Matrix::orthographic(-4.0, 4.0, -2.0, 2.0, 0.0, 10.0).unwrap();
    let corner = m.transform_point(Vec3::new(4.0, 2.0, -10.0)).unwrap();
    assert!((corner - Vec3::new(1.0, 1.0, 1.0)).length() < 1e-5);
}

#[test]
fn test_orthographic_rejects_empty_extents() {
    assert!(Matrix::orthographic(1.0, 1.0, -1.0, 1.0, 0.1, 10.0).is_err());
    assert!(Matrix::orthographic(-1.0, 1.0, 1.0, -1.0, 0.1, 10.0).is_err());
    assert!(Matrix::orthographic(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).is_err());
}

#[test]
fn test_look_at_moves_target_onto_negative_z() {
    let view = Matrix::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
    let target = view.transform_point(Vec3::ZERO).unwrap();
    assert!((target - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
}

#[test]
fn test_look_at_degenerate_inputs() {
    assert!(Matrix::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y).is_err());
    assert!(Matrix::look_at(Vec3::ZERO, Vec3::Y, Vec3::Y).is_err());
}
