/// Per-frame camera uniforms.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::camera::Camera;
use crate::math::Matrix;

/// Camera data shared by every draw of a frame (208 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: Matrix,
    pub projection: Matrix,
    pub view_projection: Matrix,
    /// xyz = eye position in world space, w = 1
    pub camera_position: Vec4,
}

impl FrameUniforms {
    pub fn new(camera: &Camera, position: Vec3) -> Self {
        Self {
            view: *camera.view_matrix(),
            projection: *camera.projection_matrix(),
            view_projection: camera.view_projection_matrix(),
            camera_position: position.extend(1.0),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
