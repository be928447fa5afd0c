/*!
# Frame3D

Coordinate frames and the homogeneous matrices a renderer consumes.

A `Frame` is a rigid-body pose: an origin point plus a right-handed
orthonormal basis. This crate turns frames into column-major 4x4 matrices
and builds camera frames from an eye point, a focal point and an up
direction.

## Architecture

- **math**: `Point`, `Vector`, `Direction`, `Frame` (f64 value types on glam)
- **transform**: `model_matrix`, `view_matrix`, `model_view_matrix` (f32 `Mat4`)
- **look_at**: camera frame construction with a total fallback chain

Frames are composed in double precision and narrowed to `Mat4` once, so
`model_view_matrix` is more accurate than multiplying a view and a model
matrix.

```
use frame_3d::frame3d::{look_at, view_matrix, Direction, Point};

let camera = look_at(Point::ORIGIN, Point::new(0.0, 0.0, 5.0), Direction::Y);
let view = view_matrix(&camera);
assert_eq!(view.w_axis.z, -5.0);
```
*/

// Internal modules
mod config;
mod error;
mod look_at;
mod transform;
pub mod log;
pub mod math;

// Main frame3d namespace module
pub mod frame3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::Tolerance;

    // Value types
    pub use crate::math::{Direction, Frame, Point, Vector};

    // Frame-to-matrix conversion
    pub use crate::transform::{
        model_matrix, view_matrix, model_view_matrix,
        model_matrix_f64, view_matrix_f64, model_view_matrix_f64,
        FrameUniforms,
    };

    // Look-at builder
    pub use crate::look_at::{look_at, look_at_with, resolve_look_at, LookAt};

    // Logging sub-module (types and registry, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }
}

// Re-export math library at crate root
pub use glam;
