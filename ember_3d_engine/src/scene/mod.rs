//! Scene module
//!
//! Models, lights, culling and draw-list construction.

mod culler;
mod drawer;
mod model;
mod scene;
mod uniforms;

pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
pub use drawer::DrawItem;
pub use model::{Model, ModelKey, DEFAULT_SHADER};
pub use scene::{Scene, DEFAULT_AMBIENT};
pub use uniforms::FrameUniforms;
