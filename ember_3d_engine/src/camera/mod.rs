//! Camera module - fly camera, projections, frustum, and per-frame snapshots.
//!
//! `FlyCamera` owns position and orientation and is driven by the
//! application (directly or through `FlyCameraController`). Each frame it
//! produces a passive `Camera` snapshot that the scene culls against.

mod camera;
mod controller;
mod fly_camera;
mod frustum;
mod projection;
mod render_view;
mod viewport;

pub use camera::Camera;
pub use controller::{Button, InputState, FlyCameraController};
pub use fly_camera::{FlyCamera, FlyCameraDesc, MAX_PITCH};
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use projection::Projection;
pub use render_view::RenderView;
pub use viewport::{Viewport, Rect2D};
