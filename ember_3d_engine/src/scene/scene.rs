/// Scene - models and lights for rendering.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Model names are
/// unique and can be used to look keys up.

use rustc_hash::FxHashMap;
use slotmap::{SecondaryMap, SlotMap};
use glam::Vec3;
use crate::{engine_debug, engine_error};
use crate::camera::{Camera, RenderView};
use crate::error::{Error, Result};
use crate::light::{Light, LightsUniform, MAX_LIGHTS};
use super::culler::{CameraCuller, FrustumCuller};
use super::drawer::{build_draw_list, DrawItem};
use super::model::{Model, ModelKey};
use super::uniforms::FrameUniforms;

/// Default ambient light color
pub const DEFAULT_AMBIENT: Vec3 = Vec3::splat(0.1);

/// A renderable scene containing models and lights.
///
/// Keys remain valid even after other models are removed.
#[derive(Debug)]
pub struct Scene {
    models: SlotMap<ModelKey, Model>,
    names: FxHashMap<String, ModelKey>,
    key_names: SecondaryMap<ModelKey, String>,
    lights: Vec<Light>,
    ambient: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            models: SlotMap::with_key(),
            names: FxHashMap::default(),
            key_names: SecondaryMap::new(),
            lights: Vec::new(),
            ambient: DEFAULT_AMBIENT,
        }
    }

    // ===== MODELS =====

    /// Add a model under a unique name.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if a model with this name already exists.
    pub fn add_model(&mut self, name: &str, model: Model) -> Result<ModelKey> {
        if self.names.contains_key(name) {
            engine_error!("ember3d::Scene", "Model '{}' already exists", name);
            return Err(Error::InvalidResource(format!("duplicate model name '{}'", name)));
        }

        let key = self.models.insert(model);
        self.names.insert(name.to_string(), key);
        self.key_names.insert(key, name.to_string());
        engine_debug!("ember3d::Scene", "Added model '{}'", name);
        Ok(key)
    }

    /// Remove a model, returning it. `None` if the key is stale.
    pub fn remove_model(&mut self, key: ModelKey) -> Option<Model> {
        let model = self.models.remove(key)?;
        if let Some(name) = self.key_names.remove(key) {
            self.names.remove(&name);
        }
        Some(model)
    }

    pub fn model(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    pub fn model_mut(&mut self, key: ModelKey) -> Option<&mut Model> {
        self.models.get_mut(key)
    }

    /// Look a key up by model name
    pub fn model_key(&self, name: &str) -> Option<ModelKey> {
        self.names.get(name).copied()
    }

    pub fn model_name(&self, key: ModelKey) -> Option<&str> {
        self.key_names.get(key).map(String::as_str)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Iterate over all models (key, model)
    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &Model)> {
        self.models.iter()
    }

    // ===== LIGHTS =====

    /// Add a light, returning its index.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the scene already holds `MAX_LIGHTS` lights
    /// - the light's validation error
    pub fn add_light(&mut self, light: Light) -> Result<usize> {
        if self.lights.len() >= MAX_LIGHTS {
            engine_error!("ember3d::Scene", "Cannot add light: limit of {} reached", MAX_LIGHTS);
            return Err(Error::InvalidResource(format!("scene already has {} lights", MAX_LIGHTS)));
        }
        light.validate()?;
        self.lights.push(light);
        Ok(self.lights.len() - 1)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn clear_lights(&mut self) {
        self.lights.clear();
    }

    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    pub fn set_ambient(&mut self, color: Vec3) {
        self.ambient = color;
    }

    // ===== FRAME =====

    /// Advance every mesh's linear motion by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for model in self.models.values_mut() {
            model.mesh.update(dt);
        }
    }

    /// Frustum-cull the scene against a camera snapshot.
    pub fn cull(&self, camera: &Camera) -> RenderView {
        FrustumCuller::new().cull(self, camera)
    }

    /// Ordered draws for a culled view: grouped by shader, then by key.
    pub fn draw_list(&self, view: &RenderView) -> Vec<DrawItem<'_>> {
        build_draw_list(self, view)
    }

    pub fn frame_uniforms(&self, camera: &Camera, position: Vec3) -> FrameUniforms {
        FrameUniforms::new(camera, position)
    }

    pub fn lights_uniform(&self) -> Result<LightsUniform> {
        LightsUniform::from_lights(self.ambient, &self.lights)
    }

    /// Remove all models and lights
    pub fn clear(&mut self) {
        self.models.clear();
        self.names.clear();
        self.key_names.clear();
        self.lights.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
