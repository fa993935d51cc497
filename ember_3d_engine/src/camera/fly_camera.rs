/// FlyCamera - free-flying first-person camera.
///
/// Orientation is stored as yaw/pitch; the orthonormal basis is re-derived
/// from them after every mutation, so it can never drift. Pitch is clamped
/// to `±MAX_PITCH` which keeps the forward vector away from the world up
/// axis and the cross products well defined.
///
/// Conventions: yaw 0 / pitch 0 looks down -Z. Positive yaw turns right,
/// positive pitch looks up.

use std::f32::consts::{PI, TAU};
use glam::{Mat4, Vec3, Vec4};
use crate::engine_warn;
use crate::error::{Error, Result};
use crate::math::{normalize, Basis, Matrix};
use super::camera::Camera;
use super::projection::Projection;
use super::viewport::Viewport;

/// Pitch limit (89°)
pub const MAX_PITCH: f32 = 89.0 * PI / 180.0;

/// Construction parameters for a `FlyCamera`
#[derive(Debug, Clone, Copy)]
pub struct FlyCameraDesc {
    pub position: Vec3,
    /// Initial look-at point; must differ from `position`
    pub target: Vec3,
    pub projection: Projection,
}

impl Default for FlyCameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            projection: Projection::default(),
        }
    }
}

/// Free-flying camera with walk / strafe / lift movement and mouse look.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    basis: Basis,
    projection: Projection,
    projection_matrix: Matrix,
}

impl FlyCamera {
    /// Create a camera at `desc.position` looking at `desc.target`.
    ///
    /// # Errors
    ///
    /// - `DegenerateVector` if position and target coincide
    /// - `InvalidArgument` if the projection parameters are invalid
    pub fn new(desc: FlyCameraDesc) -> Result<Self> {
        let projection_matrix = desc.projection.matrix()?;
        let (yaw, pitch) = angles_from_direction(desc.target - desc.position)?;

        let mut camera = Self {
            position: desc.position,
            yaw: 0.0,
            pitch: 0.0,
            basis: Basis::IDENTITY,
            projection: desc.projection,
            projection_matrix,
        };
        camera.set_angles(yaw, pitch);

        crate::engine_debug!(
            "ember3d::FlyCamera",
            "Created at {:?} (yaw {:.3}, pitch {:.3})",
            camera.position, camera.yaw, camera.pitch
        );
        Ok(camera)
    }

    // ===== MOVEMENT =====

    /// Move along the forward direction.
    pub fn walk(&mut self, amount: f32) {
        if Self::reject_non_finite("walk", amount) {
            return;
        }
        self.position += self.basis.forward() * amount;
    }

    /// Move along the right (x) axis.
    pub fn strafe(&mut self, amount: f32) {
        if Self::reject_non_finite("strafe", amount) {
            return;
        }
        self.position += self.basis.x_axis * amount;
    }

    /// Move along the camera up (y) axis.
    pub fn lift(&mut self, amount: f32) {
        if Self::reject_non_finite("lift", amount) {
            return;
        }
        self.position += self.basis.y_axis * amount;
    }

    /// Turn by `dx` radians of yaw and `dy` radians of pitch.
    ///
    /// Pitch is clamped to `±MAX_PITCH`, yaw wraps into `[-π, π)`.
    pub fn update_direction(&mut self, dx: f32, dy: f32) {
        if Self::reject_non_finite("update_direction", dx)
            || Self::reject_non_finite("update_direction", dy)
        {
            return;
        }
        self.set_angles(self.yaw + dx, self.pitch + dy);
    }

    /// Aim at a world-space point.
    ///
    /// # Errors
    ///
    /// `DegenerateVector` if `target` equals the camera position.
    pub fn look_at(&mut self, target: Vec3) -> Result<()> {
        let (yaw, pitch) = angles_from_direction(target - self.position)?;
        self.set_angles(yaw, pitch);
        Ok(())
    }

    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        if !position.is_finite() {
            return Err(Error::InvalidArgument(format!("non-finite camera position {:?}", position)));
        }
        self.position = position;
        Ok(())
    }

    // ===== PROJECTION =====

    pub fn set_projection(&mut self, projection: Projection) -> Result<()> {
        self.projection_matrix = projection.matrix()?;
        self.projection = projection;
        Ok(())
    }

    /// Update the aspect ratio after a framebuffer resize.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a zero-sized framebuffer (minimized window);
    /// the previous projection is kept.
    pub fn set_aspect(&mut self, width: u32, height: u32) -> Result<()> {
        let aspect = Viewport::from_size(width, height).aspect().ok_or_else(|| {
            Error::InvalidArgument(format!("cannot derive aspect from {}x{}", width, height))
        })?;
        self.set_projection(self.projection.with_aspect(aspect))
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn forward(&self) -> Vec3 {
        self.basis.forward()
    }

    pub fn right(&self) -> Vec3 {
        self.basis.x_axis
    }

    pub fn up(&self) -> Vec3 {
        self.basis.y_axis
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    // ===== MATRICES =====

    /// World-to-camera transform built from the basis and the negated position.
    ///
    /// Rows are the x, y, z axes; the translation column is
    /// `-(axis · position)` for each axis.
    pub fn view_matrix(&self) -> Matrix {
        let Basis { x_axis: x, y_axis: y, z_axis: z } = self.basis;
        let p = self.position;
        Matrix::from(Mat4::from_cols(
            Vec4::new(x.x, y.x, z.x, 0.0),
            Vec4::new(x.y, y.y, z.y, 0.0),
            Vec4::new(x.z, y.z, z.z, 0.0),
            Vec4::new(-x.dot(p), -y.dot(p), -z.dot(p), 1.0),
        ))
    }

    pub fn projection_matrix(&self) -> Matrix {
        self.projection_matrix
    }

    /// Full camera transformation `projection * view`.
    pub fn view_projection_matrix(&self) -> Matrix {
        self.projection_matrix.dot(&self.view_matrix())
    }

    /// Passive snapshot for culling and uniform upload.
    pub fn snapshot(&self, viewport: Viewport) -> Camera {
        Camera::from_matrices(self.view_matrix(), self.projection_matrix, viewport)
    }

    // ===== INTERNAL =====

    fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = wrap_angle(yaw);
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self.basis = basis_from_angles(self.yaw, self.pitch);
    }

    fn reject_non_finite(operation: &str, value: f32) -> bool {
        if value.is_finite() {
            return false;
        }
        engine_warn!("ember3d::FlyCamera", "Ignoring non-finite {} input: {}", operation, value);
        true
    }
}

/// Forward direction for the given angles.
fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(cos_pitch * sin_yaw, sin_pitch, -cos_pitch * cos_yaw)
}

/// Yaw/pitch of a direction. Pitch is not clamped here.
fn angles_from_direction(direction: Vec3) -> Result<(f32, f32)> {
    let d = normalize(direction)?;
    let pitch = d.y.clamp(-1.0, 1.0).asin();
    let yaw = d.x.atan2(-d.z);
    Ok((yaw, pitch))
}

/// Orthonormal basis for clamped angles.
///
/// `right = forward × Y` reduces to `(cos yaw, 0, sin yaw)` once normalized,
/// which is always defined because `|pitch| < 90°`.
fn basis_from_angles(yaw: f32, pitch: f32) -> Basis {
    let forward = direction_from_angles(yaw, pitch);
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let right = Vec3::new(cos_yaw, 0.0, sin_yaw);
    let up = right.cross(forward);
    Basis {
        x_axis: right,
        y_axis: up,
        z_axis: -forward,
    }
}

fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
