/// Light sources and their GPU uniform layout.
///
/// Lights are plain values owned by the scene. Each frame they are packed
/// into a `LightsUniform`; every `LightUniform` entry is 64 bytes (four
/// 16-byte rows), so the array can be bound as std140/std430 without
/// per-field padding.

use std::f32::consts::FRAC_PI_2;
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::{engine_bail, engine_error};
use crate::error::{Error, Result};
use crate::math::normalize;

/// Maximum number of lights in a `LightsUniform`
pub const MAX_LIGHTS: usize = 8;

/// `LightUniform::light_type` values
pub const LIGHT_TYPE_DIRECTIONAL: u32 = 0;
pub const LIGHT_TYPE_POINT: u32 = 1;
pub const LIGHT_TYPE_SPOT: u32 = 2;

/// A light source. Colors are linear RGB, cone angles are half angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Infinitely far light shining along `direction`
    Directional {
        direction: Vec3,
        color: Vec3,
        intensity: f32,
    },
    /// Omni light with a finite range
    Point {
        position: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
    },
    /// Cone light: full intensity inside `inner_cone`, fading to zero at `outer_cone`
    Spot {
        position: Vec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
    },
}

impl Light {
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Light::Directional { direction, color, intensity }
    }

    pub fn point(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Light::Point { position, color, intensity, range }
    }

    pub fn spot(
        position: Vec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
    ) -> Self {
        Light::Spot { position, direction, color, intensity, range, inner_cone, outer_cone }
    }

    pub fn color(&self) -> Vec3 {
        match *self {
            Light::Directional { color, .. }
            | Light::Point { color, .. }
            | Light::Spot { color, .. } => color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Directional { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => intensity,
        }
    }

    pub fn light_type(&self) -> u32 {
        match self {
            Light::Directional { .. } => LIGHT_TYPE_DIRECTIONAL,
            Light::Point { .. } => LIGHT_TYPE_POINT,
            Light::Spot { .. } => LIGHT_TYPE_SPOT,
        }
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// - `DegenerateVector` for a zero direction
    /// - `InvalidArgument` for negative/non-finite color or intensity,
    ///   non-positive range, or cone angles outside `0 <= inner <= outer < π/2`
    pub fn validate(&self) -> Result<()> {
        let color = self.color();
        if !color.is_finite() || color.min_element() < 0.0 {
            engine_bail!("ember3d::Light", "light color must be finite and >= 0, got {:?}", color);
        }
        let intensity = self.intensity();
        if !intensity.is_finite() || intensity < 0.0 {
            engine_bail!("ember3d::Light", "light intensity must be finite and >= 0, got {}", intensity);
        }

        match *self {
            Light::Directional { direction, .. } => {
                normalize(direction)?;
            }
            Light::Point { position, range, .. } => {
                check_position(position)?;
                check_range(range)?;
            }
            Light::Spot { position, direction, range, inner_cone, outer_cone, .. } => {
                check_position(position)?;
                normalize(direction)?;
                check_range(range)?;
                if !(0.0 <= inner_cone && inner_cone <= outer_cone && outer_cone < FRAC_PI_2) {
                    engine_bail!(
                        "ember3d::Light",
                        "spot cone angles must satisfy 0 <= inner <= outer < pi/2, got {} / {}",
                        inner_cone, outer_cone
                    );
                }
            }
        }
        Ok(())
    }

    /// Validate and pack into the GPU layout. Directions are normalized.
    pub fn to_uniform(&self) -> Result<LightUniform> {
        self.validate()?;

        let mut uniform = LightUniform {
            color: self.color(),
            intensity: self.intensity(),
            light_type: self.light_type(),
            ..LightUniform::zeroed()
        };
        match *self {
            Light::Directional { direction, .. } => {
                uniform.direction = normalize(direction)?;
            }
            Light::Point { position, range, .. } => {
                uniform.position = position;
                uniform.range = range;
            }
            Light::Spot { position, direction, range, inner_cone, outer_cone, .. } => {
                uniform.position = position;
                uniform.direction = normalize(direction)?;
                uniform.range = range;
                uniform.inner_cone_cos = inner_cone.cos();
                uniform.outer_cone_cos = outer_cone.cos();
            }
        }
        Ok(uniform)
    }
}

fn check_position(position: Vec3) -> Result<()> {
    if !position.is_finite() {
        engine_bail!("ember3d::Light", "light position must be finite, got {:?}", position);
    }
    Ok(())
}

fn check_range(range: f32) -> Result<()> {
    if !(range > 0.0) || !range.is_finite() {
        engine_bail!("ember3d::Light", "light range must be > 0, got {}", range);
    }
    Ok(())
}

/// One light as seen by shaders (64 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub color: Vec3,
    pub intensity: f32,

    pub position: Vec3,
    pub range: f32,

    pub direction: Vec3,
    pub light_type: u32,

    pub inner_cone_cos: f32,
    pub outer_cone_cos: f32,
    pub _padding: [f32; 2],
}

/// Ambient color plus up to `MAX_LIGHTS` lights
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightsUniform {
    /// rgb = ambient color, a unused
    pub ambient: Vec4,
    pub count: u32,
    pub _padding: [u32; 3],
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl LightsUniform {
    /// Pack `lights` after validating each of them.
    ///
    /// # Errors
    ///
    /// `InvalidResource` for more than `MAX_LIGHTS` lights, or the first
    /// validation error.
    pub fn from_lights(ambient: Vec3, lights: &[Light]) -> Result<Self> {
        if lights.len() > MAX_LIGHTS {
            engine_error!("ember3d::Light", "{} lights given, at most {} supported", lights.len(), MAX_LIGHTS);
            return Err(Error::InvalidResource(format!(
                "{} lights exceed MAX_LIGHTS ({})", lights.len(), MAX_LIGHTS
            )));
        }

        let mut uniform = LightsUniform {
            ambient: ambient.extend(1.0),
            count: lights.len() as u32,
            ..LightsUniform::zeroed()
        };
        for (slot, light) in uniform.lights.iter_mut().zip(lights) {
            *slot = light.to_uniform()?;
        }
        Ok(uniform)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
