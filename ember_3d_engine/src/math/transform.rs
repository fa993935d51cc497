/// Model transform: translation, rotation and scale composed as `T * R * S`.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::error::Result;
use super::matrix::Matrix;
use super::vector::{normalize, NORMALIZE_EPSILON};

/// Translation / rotation / scale of a model in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self { rotation, ..Self::IDENTITY }
    }

    pub fn from_scale(scale: Vec3) -> Self {
        Self { scale, ..Self::IDENTITY }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Apply `rotation` on top of the current rotation (world space).
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = (rotation * self.rotation).normalize();
    }

    /// Rotate `angle` radians around a world-space `axis`.
    pub fn rotate_axis(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        let axis = normalize(axis)?;
        self.rotate(Quat::from_axis_angle(axis, angle));
        Ok(())
    }

    /// Model matrix `T * R * S`.
    pub fn matrix(&self) -> Matrix {
        Matrix::from(Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        ))
    }

    /// Inverse-transpose of the upper 3x3, for transforming normals.
    ///
    /// The result is not normalized: normals must be renormalized after
    /// transforming. A zero (or non-finite) scale axis makes the matrix
    /// singular; identity is returned then.
    pub fn normal_matrix(&self) -> Mat4 {
        if !self.scale.is_finite() || self.scale.abs().min_element() <= NORMALIZE_EPSILON {
            return Mat4::IDENTITY;
        }
        let linear = Mat3::from_mat4(*self.matrix().as_mat4());
        Mat4::from_mat3(linear.inverse().transpose())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
