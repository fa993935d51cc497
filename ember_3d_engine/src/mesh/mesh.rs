/// Mesh - CPU-side vertex list with simple linear motion.

use glam::{Vec3, Vec4};
use crate::engine_bail;
use crate::error::Result;
use crate::math::{normalize, AABB};
use super::vertex::{Vertex, VertexAttributes};
use super::vertex_array::{PrimitiveTopology, VertexArray};

/// A named list of vertices plus a direction and speed.
///
/// `update(dt)` integrates the motion directly into the vertex positions;
/// the model transform is left to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vertex>,
    topology: PrimitiveTopology,
    direction: Vec3,
    speed: f32,
}

impl Mesh {
    /// Create a motionless mesh.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `vertices` is empty.
    pub fn new(name: &str, vertices: Vec<Vertex>, topology: PrimitiveTopology) -> Result<Self> {
        if vertices.is_empty() {
            engine_bail!("ember3d::Mesh", "mesh '{}' has no vertices", name);
        }
        Ok(Self {
            name: name.to_string(),
            vertices,
            topology,
            direction: Vec3::ZERO,
            speed: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set direction and speed (units per second).
    ///
    /// The direction does not need to be unit length and may be zero,
    /// which stops the mesh.
    pub fn set_motion(&mut self, direction: Vec3, speed: f32) -> Result<()> {
        if !direction.is_finite() || !speed.is_finite() {
            engine_bail!(
                "ember3d::Mesh",
                "mesh '{}': non-finite motion {:?} at speed {}",
                self.name, direction, speed
            );
        }
        self.direction = direction;
        self.speed = speed;
        Ok(())
    }

    /// Move every vertex by `normalize(direction) * speed * dt`.
    pub fn update(&mut self, dt: f32) {
        if self.speed == 0.0 || dt == 0.0 || !dt.is_finite() {
            return;
        }
        // zero direction means "not moving"
        let Ok(direction) = normalize(self.direction) else {
            return;
        };
        self.translate(direction * (self.speed * dt));
    }

    pub fn translate(&mut self, offset: Vec3) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Paint every vertex with one color.
    pub fn set_color(&mut self, color: Vec4) {
        for vertex in &mut self.vertices {
            vertex.color = color;
        }
    }

    /// Local-space bounds of the current vertex positions
    pub fn bounding_box(&self) -> AABB {
        AABB::from_points(self.vertices.iter().map(|v| v.position))
            .unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO))
    }

    /// Pack the vertices for upload.
    pub fn vertex_array(&self, attributes: VertexAttributes) -> Result<VertexArray> {
        VertexArray::from_vertices(&self.vertices, self.topology, attributes)
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
