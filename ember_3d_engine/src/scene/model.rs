/// Model - a mesh placed in the world with a shader name.

use crate::math::{Matrix, Transform, AABB};
use crate::mesh::Mesh;

slotmap::new_key_type! {
    /// Stable key for a model in a Scene
    pub struct ModelKey;
}

/// Shader used when none is given
pub const DEFAULT_SHADER: &str = "default";

/// A mesh instance: geometry, world transform, shader and visibility flag.
///
/// The mesh is owned; two models built from the same primitive are two
/// independent vertex lists.
#[derive(Debug, Clone)]
pub struct Model {
    pub mesh: Mesh,
    pub transform: Transform,
    /// Shader program name, used to group draws
    pub shader: String,
    /// Hidden models are skipped by culling
    pub visible: bool,
}

impl Model {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: Transform::IDENTITY,
            shader: DEFAULT_SHADER.to_string(),
            visible: true,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_shader(mut self, shader: &str) -> Self {
        self.shader = shader.to_string();
        self
    }

    pub fn world_matrix(&self) -> Matrix {
        self.transform.matrix()
    }

    /// Mesh bounds in world space
    pub fn world_bounds(&self) -> AABB {
        self.mesh.bounding_box().transformed(self.world_matrix().as_mat4())
    }
}
