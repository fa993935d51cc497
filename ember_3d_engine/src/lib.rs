/*!
# Ember3D Engine

CPU-side core of the Ember3D rendering engine: math, cameras, meshes,
lights and scenes.

Everything here is backend-agnostic. The engine produces packed vertex
arrays, ordered draw lists with their MVP matrices, and `Pod` uniform
blocks; uploading them to a graphics API is left to the application.

## Architecture

- **Math**: `Matrix` (4x4, column vectors), `Transform`, `AABB`, checked `normalize`
- **Camera**: `FlyCamera` (walk / strafe / lift / mouse look), `Projection`,
  `Frustum`, per-frame `Camera` snapshots
- **Mesh**: `MeshBuilder` primitives, `Mesh` linear motion, `VertexArray` packing
- **Light**: directional / point / spot lights and their uniform layout
- **Scene**: models and lights, culling, draw lists
- **Frame**: `FrameClock` and `FixedStep` timing helpers
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod mesh;
pub mod light;
pub mod scene;
pub mod frame;

// Main ember3d namespace module
pub mod ember3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod math {
        pub use crate::math::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod mesh {
        pub use crate::mesh::*;
    }

    pub mod light {
        pub use crate::light::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod frame {
        pub use crate::frame::*;
    }
}

// Re-export math library at crate root
pub use glam;
