/// RenderView - result of frustum culling.
///
/// Created by `Scene::cull()`. Contains a snapshot of the camera at culling
/// time and the keys of visible models. Lives for one frame.

use crate::scene::ModelKey;
use super::camera::Camera;

/// Result of frustum culling. Lives for one frame.
#[derive(Debug, Clone)]
pub struct RenderView {
    camera: Camera,
    visible_models: Vec<ModelKey>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only Scene::cull creates these).
    pub(crate) fn new(camera: Camera, visible_models: Vec<ModelKey>) -> Self {
        Self {
            camera,
            visible_models,
        }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Keys of visible models in the Scene.
    pub fn visible_models(&self) -> &[ModelKey] {
        &self.visible_models
    }

    pub fn visible_count(&self) -> usize {
        self.visible_models.len()
    }
}
