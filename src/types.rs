use serde::{Deserialize, Serialize};

use crate::image::io::GrayImageU8;

/// Placement state of the virtual object.
///
/// `x`/`z` are ground-plane offsets in metres from the camera's nominal
/// look-at point; vertical placement is derived (the base sits on y=0).
/// `rotation_deg` is the yaw about the vertical axis in `[0, 360)`,
/// `scale` a positive multiplier on the nominal footprint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    pub x: f32,
    pub z: f32,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: 0.0,
            z: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

/// Real-world footprint of the catalog item, in metres. Supplied by the
/// catalog collaborator and never mutated here.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Dimensions {
    pub length_m: f32,
    pub width_m: f32,
    pub height_m: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            length_m: 8.0,
            width_m: 4.0,
            height_m: 3.0,
        }
    }
}

/// Artifact pair produced by a commit: the pose snapshot and the binary
/// footprint mask, sized identically to the base photo. The caller bundles
/// these with the base photo into the downstream generation request.
#[derive(Clone, Debug)]
pub struct Capture {
    pub pose: Pose,
    pub mask: GrayImageU8,
}
