/// Projection parameters for `FlyCamera`.

use crate::engine_bail;
use crate::error::Result;
use crate::math::Matrix;

/// Perspective or orthographic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view, radians
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        /// Visible height in world units; width is `height * aspect`
        height: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    /// 45° perspective, given aspect, near 0.1, far 100
    pub fn perspective(aspect: f32) -> Self {
        Projection::Perspective {
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        match *self {
            Projection::Perspective { aspect, .. } | Projection::Orthographic { aspect, .. } => aspect,
        }
    }

    /// Same projection with another aspect ratio (window resize).
    pub fn with_aspect(self, new_aspect: f32) -> Self {
        match self {
            Projection::Perspective { fov_y, near, far, .. } => {
                Projection::Perspective { fov_y, aspect: new_aspect, near, far }
            }
            Projection::Orthographic { height, near, far, .. } => {
                Projection::Orthographic { height, aspect: new_aspect, near, far }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.matrix().map(|_| ())
    }

    /// Build the projection matrix.
    pub fn matrix(&self) -> Result<Matrix> {
        match *self {
            Projection::Perspective { fov_y, aspect, near, far } => {
                Matrix::perspective(fov_y, aspect, near, far)
            }
            Projection::Orthographic { height, aspect, near, far } => {
                if !(height > 0.0 && aspect > 0.0) {
                    engine_bail!(
                        "ember3d::Projection",
                        "orthographic height and aspect must be positive, got height={} aspect={}",
                        height, aspect
                    );
                }
                let half_h = height * 0.5;
                let half_w = half_h * aspect;
                Matrix::orthographic(-half_w, half_w, -half_h, half_h, near, far)
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::perspective(4.0 / 3.0)
    }
}
