/// Vector helpers and the orthonormal basis used by cameras.

use glam::Vec3;
use crate::error::{Error, Result};

/// Vectors shorter than this cannot be normalized
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Normalize a vector, refusing zero-length and non-finite input.
///
/// `glam::Vec3::normalize` silently returns NaN for a zero vector; this
/// returns `Error::DegenerateVector` instead.
pub fn normalize(v: Vec3) -> Result<Vec3> {
    let length = v.length();
    if !length.is_finite() || length <= NORMALIZE_EPSILON {
        return Err(Error::DegenerateVector(format!(
            "cannot normalize {:?} (length {})", v, length
        )));
    }
    Ok(v / length)
}

/// Orthonormal right-handed basis.
///
/// - `x_axis`: right
/// - `y_axis`: up
/// - `z_axis`: backward (the forward direction is `-z_axis`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Basis {
    /// World-aligned basis looking down -Z
    pub const IDENTITY: Self = Self {
        x_axis: Vec3::X,
        y_axis: Vec3::Y,
        z_axis: Vec3::Z,
    };

    /// Derive a basis from a forward direction and a world up reference.
    ///
    /// `right = forward × world_up`, `up = right × forward`, `z = -forward`.
    ///
    /// # Errors
    ///
    /// `DegenerateVector` if `forward` is zero or parallel to `world_up`.
    pub fn from_forward(forward: Vec3, world_up: Vec3) -> Result<Self> {
        let forward = normalize(forward)?;
        let right = normalize(forward.cross(world_up)).map_err(|_| {
            Error::DegenerateVector(format!(
                "forward {:?} is parallel to up {:?}", forward, world_up
            ))
        })?;
        let up = right.cross(forward);

        Ok(Self {
            x_axis: right,
            y_axis: up,
            z_axis: -forward,
        })
    }

    /// Forward direction (`-z_axis`)
    pub fn forward(&self) -> Vec3 {
        -self.z_axis
    }

    /// Check unit length and mutual orthogonality within `epsilon`.
    pub fn is_orthonormal(&self, epsilon: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= epsilon;
        unit(self.x_axis)
            && unit(self.y_axis)
            && unit(self.z_axis)
            && self.x_axis.dot(self.y_axis).abs() <= epsilon
            && self.y_axis.dot(self.z_axis).abs() <= epsilon
            && self.z_axis.dot(self.x_axis).abs() <= epsilon
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
