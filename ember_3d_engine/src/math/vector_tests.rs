use glam::Vec3;
use crate::error::Error;
use super::*;

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_has_unit_length() {
    let samples = [
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(-0.001, 0.002, 0.0005),
        Vec3::new(1e4, -2e4, 3e4),
        Vec3::new(0.0, 0.0, -7.5),
    ];

    for v in samples {
        let n = normalize(v).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-5, "{:?} -> {:?}", v, n);
        // Same direction
        assert!(n.dot(v) > 0.0);
    }
}

#[test]
fn test_normalize_zero_vector_is_error() {
    let result = normalize(Vec3::ZERO);
    assert!(matches!(result, Err(Error::DegenerateVector(_))));
}

#[test]
fn test_normalize_tiny_vector_is_error() {
    assert!(normalize(Vec3::splat(1e-9)).is_err());
}

#[test]
fn test_normalize_non_finite_is_error() {
    assert!(normalize(Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
    assert!(normalize(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
}

// ============================================================================
// Basis
// ============================================================================

#[test]
fn test_basis_from_default_forward() {
    let basis = Basis::from_forward(Vec3::NEG_Z, Vec3::Y).unwrap();
    assert!((basis.x_axis - Vec3::X).length() < 1e-6);
    assert!((basis.y_axis - Vec3::Y).length() < 1e-6);
    assert!((basis.z_axis - Vec3::Z).length() < 1e-6);
    assert_eq!(basis.forward(), -basis.z_axis);
}

#[test]
fn test_basis_is_orthonormal_for_oblique_forward() {
    let basis = Basis::from_forward(Vec3::new(1.0, -2.0, 0.5), Vec3::Y).unwrap();
    assert!(basis.is_orthonormal(1e-5));
    // Right-handed: x × y = z
    assert!((basis.x_axis.cross(basis.y_axis) - basis.z_axis).length() < 1e-5);
}

#[test]
fn test_basis_parallel_to_up_is_error() {
    assert!(matches!(
        Basis::from_forward(Vec3::Y, Vec3::Y),
        Err(Error::DegenerateVector(_))
    ));
    assert!(Basis::from_forward(Vec3::NEG_Y * 3.0, Vec3::Y).is_err());
}

#[test]
fn test_basis_zero_forward_is_error() {
    assert!(Basis::from_forward(Vec3::ZERO, Vec3::Y).is_err());
}

#[test]
fn test_is_orthonormal_detects_skew() {
    let skewed = Basis {
        x_axis: Vec3::X,
        y_axis: Vec3::new(0.1, 1.0, 0.0).normalize(),
        z_axis: Vec3::Z,
    };
    assert!(!skewed.is_orthonormal(1e-3));
    assert!(Basis::IDENTITY.is_orthonormal(0.0));
}
