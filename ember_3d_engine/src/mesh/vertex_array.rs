/// VertexArray - packed interleaved vertex data ready for upload.

use crate::error::Result;
use super::vertex::{Vertex, VertexAttributes, VertexLayout};

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Triangle strip
    TriangleStrip,
    /// Line list
    LineList,
    /// Point list
    PointList,
}

/// Interleaved `f32` vertex data plus the layout describing it.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexArray {
    layout: VertexLayout,
    topology: PrimitiveTopology,
    vertex_count: u32,
    data: Vec<f32>,
}

impl VertexArray {
    /// Pack vertices with the given attributes.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `attributes` lacks `POSITION`.
    pub fn from_vertices(
        vertices: &[Vertex],
        topology: PrimitiveTopology,
        attributes: VertexAttributes,
    ) -> Result<Self> {
        let layout = VertexLayout::from_attributes(attributes)?;
        let mut data = Vec::with_capacity(vertices.len() * layout.stride_floats());
        for vertex in vertices {
            layout.pack(vertex, &mut data);
        }

        Ok(Self {
            layout,
            topology,
            vertex_count: vertices.len() as u32,
            data,
        })
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn stride_floats(&self) -> usize {
        self.layout.stride_floats()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Floats of vertex `index`, or `None` when out of range
    pub fn vertex(&self, index: usize) -> Option<&[f32]> {
        let stride = self.stride_floats();
        let start = index.checked_mul(stride)?;
        let end = start.checked_add(stride)?;
        self.data.get(start..end)
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
