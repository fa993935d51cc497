use glam::{Vec3, Vec4};
use crate::error::Error;
use crate::mesh::PrimitiveTopology;
use super::*;

const WHITE: Vec4 = Vec4::ONE;

fn unit_square() -> [Vec3; 4] {
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

/// Every triangle of a list must face along its stored normal.
fn assert_ccw_outward(mesh: &Mesh) {
    for tri in mesh.vertices().chunks(3) {
        let face = (tri[1].position - tri[0].position).cross(tri[2].position - tri[0].position);
        if face.length() < 1e-6 {
            continue; // collapsed at a sphere pole
        }
        assert!(face.dot(tri[0].normal) > 0.0, "clockwise triangle {:?}", tri);
    }
}

// ============================================================================
// Point / triangle
// ============================================================================

#[test]
fn test_point() {
    let mesh = MeshBuilder::new("dot").point(Vec3::new(1.0, 2.0, 3.0), WHITE).unwrap();
    assert_eq!(mesh.name(), "dot");
    assert_eq!(mesh.vertex_count(), 1);
    assert_eq!(mesh.topology(), PrimitiveTopology::PointList);
}

#[test]
fn test_triangle_normal() {
    let mesh = MeshBuilder::new("tri").triangle(
        [Vec3::ZERO, Vec3::X, Vec3::Y],
        [WHITE; 3],
    ).unwrap();

    assert_eq!(mesh.vertex_count(), 3);
    assert!((mesh.vertices()[0].normal - Vec3::Z).length() < 1e-6);
}

#[test]
fn test_triangle_degenerate() {
    let result = MeshBuilder::new("line").triangle(
        [Vec3::ZERO, Vec3::X, Vec3::X * 2.0],
        [WHITE; 3],
    );
    assert!(matches!(result, Err(Error::DegenerateVector(_))));
}

// ============================================================================
// Rectangle
// ============================================================================

#[test]
fn test_rectangle_vertex_count() {
    let builder = MeshBuilder::new("quad");
    for precision in 1..=5 {
        let mesh = builder.rectangle(unit_square(), [WHITE; 4], precision).unwrap();
        assert_eq!(mesh.vertex_count(), (6 * precision * precision) as usize);
    }
}

#[test]
fn test_rectangle_fan_from_first_corner() {
    let corners = unit_square();
    let mesh = MeshBuilder::new("quad").rectangle(corners, [WHITE; 4], 1).unwrap();
    let positions: Vec<Vec3> = mesh.vertices().iter().map(|v| v.position).collect();

    assert_eq!(
        positions,
        vec![corners[0], corners[1], corners[2], corners[0], corners[2], corners[3]]
    );
    assert_ccw_outward(&mesh);
}

#[test]
fn test_rectangle_interpolates_colors() {
    let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
    let mesh = MeshBuilder::new("quad")
        .rectangle(unit_square(), [red, blue, blue, red], 2)
        .unwrap();

    // second vertex of the first cell sits halfway along A-B
    let mid = mesh.vertices()[1];
    assert!((mid.position - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    assert!((mid.color - Vec4::new(0.5, 0.0, 0.5, 1.0)).length() < 1e-6);
    assert!((mid.tex_coord.x - 0.5).abs() < 1e-6);
}

#[test]
fn test_rectangle_zero_precision_fails() {
    let result = MeshBuilder::new("quad").rectangle(unit_square(), [WHITE; 4], 0);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_rectangle_degenerate_fails() {
    let corners = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::X * 3.0];
    let result = MeshBuilder::new("flat").rectangle(corners, [WHITE; 4], 1);
    assert!(matches!(result, Err(Error::DegenerateVector(_))));
}

// ============================================================================
// Cube
// ============================================================================

#[test]
fn test_cube_vertex_count_and_bounds() {
    let mesh = MeshBuilder::new("cube")
        .cube(Vec3::new(1.0, 0.0, 0.0), 2.0, [WHITE; 6], 2)
        .unwrap();

    assert_eq!(mesh.vertex_count(), 36 * 4);
    let aabb = mesh.bounding_box();
    assert!((aabb.min - Vec3::new(0.0, -1.0, -1.0)).length() < 1e-6);
    assert!((aabb.max - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-6);
}

#[test]
fn test_cube_faces_point_outward() {
    let colors = [
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 1.0, 1.0),
        Vec4::new(1.0, 1.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 1.0, 1.0),
        Vec4::new(1.0, 0.0, 1.0, 1.0),
    ];
    let mesh = MeshBuilder::new("cube").cube(Vec3::ZERO, 1.0, colors, 1).unwrap();
    assert_ccw_outward(&mesh);

    for vertex in mesh.vertices() {
        // outward normal points the same way as the face center
        assert!(vertex.position.dot(vertex.normal) > 0.0);
    }

    let top = mesh.vertices()[CUBE_FACE_TOP * 6];
    assert_eq!(top.normal, Vec3::Y);
    assert_eq!(top.color, colors[CUBE_FACE_TOP]);
    assert_eq!(mesh.vertices()[CUBE_FACE_LEFT * 6].normal, Vec3::NEG_X);
}

#[test]
fn test_cube_invalid_size() {
    let builder = MeshBuilder::new("cube");
    assert!(builder.cube(Vec3::ZERO, 0.0, [WHITE; 6], 1).is_err());
    assert!(builder.cube(Vec3::ZERO, -1.0, [WHITE; 6], 1).is_err());
    assert!(builder.cube(Vec3::ZERO, f32::NAN, [WHITE; 6], 1).is_err());
    assert!(builder.cube(Vec3::ZERO, 1.0, [WHITE; 6], 0).is_err());
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn test_sphere_vertex_count() {
    let builder = MeshBuilder::new("ball");
    for precision in 1..=3 {
        let mesh = builder.sphere(Vec3::ZERO, 1.0, WHITE, precision).unwrap();
        assert_eq!(mesh.vertex_count(), (48 * precision * precision) as usize);
    }
}

#[test]
fn test_sphere_vertices_on_surface() {
    let center = Vec3::new(0.0, 2.0, -1.0);
    let mesh = MeshBuilder::new("ball").sphere(center, 3.0, WHITE, 3).unwrap();

    for vertex in mesh.vertices() {
        assert!(((vertex.position - center).length() - 3.0).abs() < 1e-4);
        assert!((vertex.normal.length() - 1.0).abs() < 1e-4);
        assert!(vertex.tex_coord.x >= 0.0 && vertex.tex_coord.x <= 1.0);
        assert!(vertex.tex_coord.y >= 0.0 && vertex.tex_coord.y <= 1.0);
    }
    assert_ccw_outward(&mesh);
}

#[test]
fn test_sphere_invalid_arguments() {
    let builder = MeshBuilder::new("ball");
    assert!(matches!(builder.sphere(Vec3::ZERO, 1.0, WHITE, 0), Err(Error::InvalidArgument(_))));
    assert!(matches!(builder.sphere(Vec3::ZERO, 0.0, WHITE, 1), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_precision_upper_bound() {
    let builder = MeshBuilder::new("big");
    let too_fine = MAX_PRECISION + 1;

    assert!(matches!(builder.rectangle(unit_square(), [WHITE; 4], too_fine), Err(Error::InvalidArgument(_))));
    assert!(matches!(builder.cube(Vec3::ZERO, 1.0, [WHITE; 6], too_fine), Err(Error::InvalidArgument(_))));
    assert!(matches!(builder.sphere(Vec3::ZERO, 1.0, WHITE, too_fine), Err(Error::InvalidArgument(_))));

    // large enough to overflow u32 vertex counts
    assert!(builder.rectangle(unit_square(), [WHITE; 4], 70_000).is_err());
    assert!(builder.sphere(Vec3::ZERO, 1.0, WHITE, 25_000).is_err());
    assert!(builder.cube(Vec3::ZERO, 1.0, [WHITE; 6], u32::MAX).is_err());
}

#[test]
fn test_max_precision_rectangle_builds() {
    let mesh = MeshBuilder::new("fine")
        .rectangle(unit_square(), [WHITE; 4], MAX_PRECISION)
        .unwrap();
    assert_eq!(mesh.vertex_count(), 6 * (MAX_PRECISION as usize).pow(2));
}
