#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod camera;
pub mod config;
pub mod footprint;
pub mod gesture;
pub mod image;
pub mod mask;
pub mod pose;
pub mod session;
pub mod types;

// Estimators and helpers – public, but considered unstable internals.
pub mod angle;
pub mod depth;
pub mod tilt;

// --- High-level re-exports -------------------------------------------------

// Main entry points: session + artifacts.
pub use crate::camera::CameraModel;
pub use crate::session::{PlacementSession, SessionParams};
pub use crate::types::{Capture, Dimensions, Pose};

// Gesture surface used by every embedding.
pub use crate::gesture::{GestureFrame, GestureInterpreter, PointerSample, PoseDelta};

// Projection + rasterization helpers for callers that drive the pieces
// themselves instead of going through a session.
pub use crate::footprint::{footprint_corners, project_footprint, ProjectedFootprint};
pub use crate::mask::rasterize_mask;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use placement_engine::prelude::*;
///
/// let mut session = PlacementSession::new(SessionParams::default());
/// session.handle_gesture(&GestureFrame {
///     pointers: vec![PointerSample { id: 0, x: 960.0, y: 540.0 }],
///     timestamp_ms: 0.0,
/// });
/// let capture = session.commit();
/// println!("scale={:.2} mask={}x{}", capture.pose.scale, capture.mask.width(), capture.mask.height());
/// ```
pub mod prelude {
    pub use crate::camera::CameraModel;
    pub use crate::gesture::{GestureFrame, PointerSample};
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::session::{PlacementSession, SessionParams};
    pub use crate::types::{Capture, Dimensions, Pose};
}
