//! Math module - vectors, 4x4 matrices, transforms and bounding boxes.
//!
//! One convention everywhere: column-major storage, column vectors,
//! right-handed, depth in `[0, 1]`. `a.dot(b)` is `a * b` and applies `b`
//! first. A model-view-projection chain is `projection * view * model`.

mod vector;
mod matrix;
mod transform;
mod aabb;

pub use vector::{normalize, Basis, NORMALIZE_EPSILON};
pub use matrix::{Matrix, HOMOGENEOUS_EPSILON};
pub use transform::Transform;
pub use aabb::AABB;
