/// Camera - per-frame passive snapshot handed to the scene.
///
/// The Camera computes nothing on its own. It is produced by
/// `FlyCamera::snapshot()` (or filled by hand) and consumed by
/// `Scene::cull()`, `Scene::draw_list()` and `Scene::frame_uniforms()`.

use crate::math::Matrix;
use super::frustum::Frustum;
use super::viewport::{Viewport, Rect2D};

/// A passive data container: view, projection, frustum, viewport, scissor.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Matrix,
    projection_matrix: Matrix,
    frustum: Frustum,
    viewport: Viewport,
    scissor: Option<Rect2D>,
}

impl Camera {
    /// Create a new camera with the given parameters.
    ///
    /// The scissor defaults to `None` (same as viewport).
    pub fn new(view: Matrix, projection: Matrix, frustum: Frustum, viewport: Viewport) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            frustum,
            viewport,
            scissor: None,
        }
    }

    /// Build a camera whose frustum is extracted from `projection * view`.
    pub fn from_matrices(view: Matrix, projection: Matrix, viewport: Viewport) -> Self {
        let frustum = Frustum::from_view_projection(&projection.dot(&view));
        Self::new(view, projection, frustum, viewport)
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Matrix {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Matrix {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Matrix {
        self.projection_matrix.dot(&self.view_matrix)
    }

    /// Frustum planes for culling.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Viewport dimensions and depth range.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Scissor rectangle, if set.
    pub fn scissor(&self) -> Option<&Rect2D> {
        self.scissor.as_ref()
    }

    /// Effective scissor: explicit scissor or viewport bounds as Rect2D.
    pub fn effective_scissor(&self) -> Rect2D {
        self.scissor.unwrap_or(Rect2D {
            x: self.viewport.x as i32,
            y: self.viewport.y as i32,
            width: self.viewport.width as u32,
            height: self.viewport.height as u32,
        })
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Matrix) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Matrix) {
        self.projection_matrix = matrix;
    }

    pub fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the scissor rectangle. `None` means same as viewport.
    pub fn set_scissor(&mut self, scissor: Option<Rect2D>) {
        self.scissor = scissor;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
