/// Draw list construction.
///
/// Turns a RenderView into an ordered list of draws. Items are grouped by
/// shader so a backend binds each program once, then ordered by key for a
/// stable frame-to-frame order.

use crate::camera::RenderView;
use crate::math::Matrix;
use super::model::{Model, ModelKey};
use super::scene::Scene;

/// Everything needed to issue one draw.
#[derive(Debug, Clone)]
pub struct DrawItem<'a> {
    pub key: ModelKey,
    pub model: &'a Model,
    /// Model (world) matrix
    pub model_matrix: Matrix,
    /// Inverse-transpose of the model matrix, for normals
    pub normal_matrix: Matrix,
    /// projection * view * model
    pub mvp: Matrix,
}

impl<'a> DrawItem<'a> {
    pub fn shader(&self) -> &'a str {
        &self.model.shader
    }
}

pub(crate) fn build_draw_list<'a>(scene: &'a Scene, view: &RenderView) -> Vec<DrawItem<'a>> {
    let view_projection = view.camera().view_projection_matrix();

    let mut items: Vec<DrawItem<'a>> = view.visible_models()
        .iter()
        // removed between cull and draw
        .filter_map(|&key| scene.model(key).map(|model| (key, model)))
        .map(|(key, model)| {
            let model_matrix = model.world_matrix();
            DrawItem {
                key,
                model,
                model_matrix,
                normal_matrix: Matrix::from(model.transform.normal_matrix()),
                mvp: view_projection.dot(&model_matrix),
            }
        })
        .collect();

    items.sort_by(|a, b| a.shader().cmp(b.shader()).then(a.key.cmp(&b.key)));
    items
}
