/*!
# Galaxy 3D Render Core

Per-frame visibility and draw submission for the Galaxy3D renderer.

- **Frustum**: six clip planes extracted from a camera's view/projection
  matrices, sphere/AABB visibility tests, and on-screen size estimates.
- **BatchAccumulator**: collects render batches (and nested accumulators)
  during scene traversal, optionally sorts them, and dispatches them to a
  `GraphicsDevice` with the right render-mode transitions.

The device and the batches themselves are collaborator traits implemented
by the backend; this crate owns neither.

## Frame flow

```no_run
use galaxy_3d_render_core::galaxy3d::camera::Frustum;
use galaxy_3d_render_core::galaxy3d::batch::{BatchAccumulator, sort};
# use galaxy_3d_render_core::glam::Mat4;
# fn frame(view: Mat4, proj: Mat4,
#          device: &mut dyn galaxy_3d_render_core::galaxy3d::device::GraphicsDevice)
#          -> galaxy_3d_render_core::galaxy3d::Result<()> {
let mut frustum = Frustum::new();
let mut transparent = BatchAccumulator::with_sort(sort::back_to_front);

frustum.initialize(&view, &proj, 1920.0, None, None);
// scene traversal: cull with frustum.is_sphere_visible(..), commit batches
transparent.render(device)?;
transparent.clear();
# Ok(())
# }
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod graphics_device;
pub mod batch;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Frustum and plane indices
    pub mod camera {
        pub use crate::camera::*;
    }

    // Device-side contract: GraphicsDevice, RenderMode, PerObjectData
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Batches, accumulator, comparators
    pub mod batch {
        pub use crate::batch::*;
    }
}

// Re-export math library at crate root
pub use glam;
