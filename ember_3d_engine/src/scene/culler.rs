/// Camera culling strategies.
///
/// A CameraCuller determines which models are visible from a given
/// camera. Hidden models (`visible == false`) are never returned.

use crate::camera::{Camera, RenderView};
use super::model::ModelKey;
use super::scene::Scene;

/// Strategy for determining visible models from a camera.
///
/// Called once per frame before drawing. The returned RenderView
/// is ephemeral and consumed by `Scene::draw_list`.
pub trait CameraCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView;
}

/// Returns every visible model (no frustum test).
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView {
        let visible: Vec<ModelKey> = scene.models()
            .filter(|(_, model)| model.visible)
            .map(|(key, _)| key)
            .collect();
        RenderView::new(camera.clone(), visible)
    }
}

/// Tests world-space model AABBs against the camera frustum.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView {
        let frustum = camera.frustum();
        let visible: Vec<ModelKey> = scene.models()
            .filter(|(_, model)| model.visible && frustum.intersects_aabb(&model.world_bounds()))
            .map(|(key, _)| key)
            .collect();
        RenderView::new(camera.clone(), visible)
    }
}
