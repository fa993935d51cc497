/// Vertex format and packed vertex layout description.

use bitflags::bitflags;
use glam::{Vec2, Vec3, Vec4};
use crate::engine_bail;
use crate::error::Result;

/// One mesh vertex. Every primitive fills all four attributes; the
/// `VertexLayout` decides which of them are packed into a `VertexArray`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    /// Linear RGBA
    pub color: Vec4,
    pub tex_coord: Vec2,
    /// Unit surface normal (zero for points)
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position,
            color,
            tex_coord: Vec2::ZERO,
            normal: Vec3::ZERO,
        }
    }
}

bitflags! {
    /// Attributes packed per vertex, in this order: position, color, tex_coord, normal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VertexAttributes: u32 {
        const POSITION  = 1 << 0;
        const COLOR     = 1 << 1;
        const TEX_COORD = 1 << 2;
        const NORMAL    = 1 << 3;

        /// Position + color (untextured, unlit shapes)
        const POSITION_COLOR = Self::POSITION.bits() | Self::COLOR.bits();
    }
}

/// Float vertex attribute formats
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferFormat {
    R32G32_SFLOAT,       // vec2 (8 bytes)
    R32G32B32_SFLOAT,    // vec3 (12 bytes)
    R32G32B32A32_SFLOAT, // vec4 (16 bytes)
}

impl BufferFormat {
    pub fn component_count(&self) -> u32 {
        match self {
            BufferFormat::R32G32_SFLOAT => 2,
            BufferFormat::R32G32B32_SFLOAT => 3,
            BufferFormat::R32G32B32A32_SFLOAT => 4,
        }
    }

    pub fn size_bytes(&self) -> u32 {
        self.component_count() * std::mem::size_of::<f32>() as u32
    }
}

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in shader
    pub location: u32,
    /// Format of the attribute (data type and component count)
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Interleaved layout of one vertex binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attribute_set: VertexAttributes,
    /// Stride in bytes between consecutive vertices
    stride: u32,
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Compute locations and offsets for a set of attributes.
    ///
    /// Locations are assigned consecutively in packing order, so a
    /// position + normal layout uses locations 0 and 1.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `POSITION` is missing.
    pub fn from_attributes(attribute_set: VertexAttributes) -> Result<Self> {
        if !attribute_set.contains(VertexAttributes::POSITION) {
            engine_bail!(
                "ember3d::VertexLayout",
                "vertex layout {:?} has no POSITION attribute",
                attribute_set
            );
        }

        let ordered = [
            (VertexAttributes::POSITION, BufferFormat::R32G32B32_SFLOAT),
            (VertexAttributes::COLOR, BufferFormat::R32G32B32A32_SFLOAT),
            (VertexAttributes::TEX_COORD, BufferFormat::R32G32_SFLOAT),
            (VertexAttributes::NORMAL, BufferFormat::R32G32B32_SFLOAT),
        ];

        let mut attributes = Vec::with_capacity(ordered.len());
        let mut offset = 0;
        for (flag, format) in ordered {
            if attribute_set.contains(flag) {
                attributes.push(VertexAttribute {
                    location: attributes.len() as u32,
                    format,
                    offset,
                });
                offset += format.size_bytes();
            }
        }

        Ok(Self {
            attribute_set,
            stride: offset,
            attributes,
        })
    }

    pub fn attribute_set(&self) -> VertexAttributes {
        self.attribute_set
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Floats per vertex
    pub fn stride_floats(&self) -> usize {
        self.stride as usize / std::mem::size_of::<f32>()
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Append one vertex to `out` according to this layout.
    pub(crate) fn pack(&self, vertex: &Vertex, out: &mut Vec<f32>) {
        let set = self.attribute_set;
        out.extend_from_slice(&vertex.position.to_array());
        if set.contains(VertexAttributes::COLOR) {
            out.extend_from_slice(&vertex.color.to_array());
        }
        if set.contains(VertexAttributes::TEX_COORD) {
            out.extend_from_slice(&vertex.tex_coord.to_array());
        }
        if set.contains(VertexAttributes::NORMAL) {
            out.extend_from_slice(&vertex.normal.to_array());
        }
    }
}
