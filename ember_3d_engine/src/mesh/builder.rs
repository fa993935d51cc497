/// MeshBuilder - procedural primitives (point, triangle, rectangle, cube, sphere).
///
/// Every surface is emitted as a `TriangleList` with counter-clockwise
/// winding seen from the side the normal points to. Quads are split into
/// `precision * precision` cells and every cell into two triangles fanned
/// from its first corner: `(A, B, C)` then `(A, C, D)`.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3, Vec4};
use crate::engine_bail;
use crate::error::Result;
use crate::math::normalize;
use super::mesh::Mesh;
use super::vertex::Vertex;
use super::vertex_array::PrimitiveTopology;

/// Cube face order used by `MeshBuilder::cube` colors
pub const CUBE_FACE_FRONT: usize = 0;  // +Z
pub const CUBE_FACE_BACK: usize = 1;   // -Z
pub const CUBE_FACE_RIGHT: usize = 2;  // +X
pub const CUBE_FACE_LEFT: usize = 3;   // -X
pub const CUBE_FACE_TOP: usize = 4;    // +Y
pub const CUBE_FACE_BOTTOM: usize = 5; // -Y

/// Highest accepted precision (a sphere at this precision has 3 145 728 vertices)
pub const MAX_PRECISION: u32 = 256;

/// Corners of each unit cube face (half size 1), A-B-C-D counter-clockwise
/// from outside.
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
];

/// Builds named meshes.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    name: String,
}

impl MeshBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Single vertex, `PointList`. The normal is zero.
    pub fn point(&self, position: Vec3, color: Vec4) -> Result<Mesh> {
        Mesh::new(&self.name, vec![Vertex::new(position, color)], PrimitiveTopology::PointList)
    }

    /// One triangle with per-vertex colors.
    ///
    /// # Errors
    ///
    /// `DegenerateVector` if the three points are collinear.
    pub fn triangle(&self, positions: [Vec3; 3], colors: [Vec4; 3]) -> Result<Mesh> {
        let [a, b, c] = positions;
        let normal = normalize((b - a).cross(c - a))?;
        let tex_coords = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];

        let vertices = (0..3)
            .map(|i| Vertex {
                position: positions[i],
                color: colors[i],
                tex_coord: tex_coords[i],
                normal,
            })
            .collect();
        Mesh::new(&self.name, vertices, PrimitiveTopology::TriangleList)
    }

    /// Quad A-B-C-D split into `precision²` cells, `6 * precision²` vertices.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `precision` is 0 or above `MAX_PRECISION`
    /// - `DegenerateVector` if A, B and D are collinear
    pub fn rectangle(&self, corners: [Vec3; 4], colors: [Vec4; 4], precision: u32) -> Result<Mesh> {
        self.check_precision(precision)?;
        let mut vertices = Vec::with_capacity(6 * cell_count(precision, precision));
        tessellate_quad(&mut vertices, corners, colors, precision)?;
        Mesh::new(&self.name, vertices, PrimitiveTopology::TriangleList)
    }

    /// Axis-aligned cube, `36 * precision²` vertices.
    ///
    /// `face_colors` is indexed by the `CUBE_FACE_*` constants.
    pub fn cube(&self, center: Vec3, size: f32, face_colors: [Vec4; 6], precision: u32) -> Result<Mesh> {
        self.check_precision(precision)?;
        if !(size > 0.0) || !size.is_finite() {
            engine_bail!("ember3d::MeshBuilder", "cube '{}': size must be > 0, got {}", self.name, size);
        }

        let half = size * 0.5;
        let mut vertices = Vec::with_capacity(36 * cell_count(precision, precision));
        for (face, color) in CUBE_FACES.iter().zip(face_colors) {
            let corners = face.map(|c| center + Vec3::from_array(c) * half);
            tessellate_quad(&mut vertices, corners, [color; 4], precision)?;
        }
        Mesh::new(&self.name, vertices, PrimitiveTopology::TriangleList)
    }

    /// UV sphere with `2 * precision` stacks and `4 * precision` slices,
    /// `48 * precision²` vertices.
    ///
    /// Texture coordinates are equirectangular: `u` follows longitude,
    /// `v` goes from 0 at the north pole to 1 at the south pole.
    pub fn sphere(&self, center: Vec3, radius: f32, color: Vec4, precision: u32) -> Result<Mesh> {
        self.check_precision(precision)?;
        if !(radius > 0.0) || !radius.is_finite() {
            engine_bail!("ember3d::MeshBuilder", "sphere '{}': radius must be > 0, got {}", self.name, radius);
        }

        let stacks = 2 * precision;
        let slices = 4 * precision;
        let vertex = |stack: u32, slice: u32| -> Vertex {
            let u = slice as f32 / slices as f32;
            let v = stack as f32 / stacks as f32;
            // poles are exact so their triangles collapse cleanly
            let (sin_theta, cos_theta) = match stack {
                0 => (0.0, 1.0),
                s if s == stacks => (0.0, -1.0),
                _ => (v * PI).sin_cos(),
            };
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let normal = Vec3::new(sin_theta * sin_phi, cos_theta, sin_theta * cos_phi);
            Vertex {
                position: center + normal * radius,
                color,
                tex_coord: Vec2::new(u, v),
                normal,
            }
        };

        let mut vertices = Vec::with_capacity(6 * cell_count(stacks, slices));
        for stack in 0..stacks {
            for slice in 0..slices {
                // A/B on the lower ring, C/D on the upper one
                let a = vertex(stack + 1, slice);
                let b = vertex(stack + 1, slice + 1);
                let c = vertex(stack, slice + 1);
                let d = vertex(stack, slice);
                vertices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
        Mesh::new(&self.name, vertices, PrimitiveTopology::TriangleList)
    }

    fn check_precision(&self, precision: u32) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&precision) {
            engine_bail!(
                "ember3d::MeshBuilder",
                "mesh '{}': precision must be in 1..={}, got {}",
                self.name, MAX_PRECISION, precision
            );
        }
        Ok(())
    }
}

/// Cells of a `rows x columns` grid; only called with checked precisions.
fn cell_count(rows: u32, columns: u32) -> usize {
    rows as usize * columns as usize
}

/// Bilinear interpolation over a quad: `u` runs A→B, `v` runs A→D.
fn bilerp<T>(corners: [T; 4], u: f32, v: f32) -> T
where
    T: Copy + std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T>,
{
    let [a, b, c, d] = corners;
    let bottom = a * (1.0 - u) + b * u;
    let top = d * (1.0 - u) + c * u;
    bottom * (1.0 - v) + top * v
}

fn tessellate_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], colors: [Vec4; 4], precision: u32) -> Result<()> {
    let [a, b, _, d] = corners;
    let normal = normalize((b - a).cross(d - a))?;
    let steps = precision as f32;

    let sample = |i: u32, j: u32| -> Vertex {
        let u = i as f32 / steps;
        let v = j as f32 / steps;
        Vertex {
            position: bilerp(corners, u, v),
            color: bilerp(colors, u, v),
            tex_coord: Vec2::new(u, v),
            normal,
        }
    };

    for j in 0..precision {
        for i in 0..precision {
            let a = sample(i, j);
            let b = sample(i + 1, j);
            let c = sample(i + 1, j + 1);
            let d = sample(i, j + 1);
            out.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
