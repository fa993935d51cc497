//! Mesh module - vertices, packed vertex arrays, meshes and procedural primitives.

mod builder;
mod mesh;
mod vertex;
mod vertex_array;

pub use builder::{
    MeshBuilder, MAX_PRECISION,
    CUBE_FACE_FRONT, CUBE_FACE_BACK, CUBE_FACE_RIGHT, CUBE_FACE_LEFT, CUBE_FACE_TOP, CUBE_FACE_BOTTOM,
};
pub use mesh::Mesh;
pub use vertex::{Vertex, VertexAttributes, VertexAttribute, VertexLayout, BufferFormat};
pub use vertex_array::{VertexArray, PrimitiveTopology};
