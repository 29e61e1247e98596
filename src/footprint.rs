//! Ground-plane footprint construction and projection.
//!
//! The object's footprint is a `length × width` rectangle on y=0, centred
//! at `(pose.x, 0, pose.z)`, scaled by `pose.scale` and rotated by
//! `pose.rotation_deg` about the vertical axis. Projection funnels every
//! corner through [`CameraModel::project`]; a centroid behind the camera
//! means the object is not visible this frame and yields no polygon at
//! all, while individual off-frustum corners are skipped rather than
//! treated as fatal.

use nalgebra::{Point2, Vector3};

use crate::angle::deg_to_rad;
use crate::camera::CameraModel;
use crate::types::{Dimensions, Pose};

/// Image-space projection of the footprint.
#[derive(Clone, Debug)]
pub struct ProjectedFootprint {
    /// Projected footprint centre.
    pub center: Point2<f32>,
    /// Projected corners in footprint winding order; corners behind the
    /// camera are dropped, so fewer than four may survive.
    pub corners: Vec<Point2<f32>>,
    /// Rotation carried through for rasterizers that redraw from centre
    /// plus extents instead of the polygon.
    pub rotation_deg: f32,
}

impl ProjectedFootprint {
    /// True when enough corners survived to enclose an area.
    pub fn is_drawable(&self) -> bool {
        self.corners.len() >= 3
    }
}

/// World-space corners of the scaled, rotated ground rectangle.
pub fn footprint_corners(pose: &Pose, dims: &Dimensions) -> [Vector3<f32>; 4] {
    let half_l = dims.length_m * pose.scale * 0.5;
    let half_w = dims.width_m * pose.scale * 0.5;
    let yaw = deg_to_rad(pose.rotation_deg);
    let (sin_y, cos_y) = yaw.sin_cos();

    // Local rectangle corners (x along length, z along width), rotated
    // about +y and translated to the pose anchor.
    let local = [
        (-half_l, -half_w),
        (half_l, -half_w),
        (half_l, half_w),
        (-half_l, half_w),
    ];
    local.map(|(lx, lz)| {
        Vector3::new(
            pose.x + lx * cos_y - lz * sin_y,
            0.0,
            pose.z + lx * sin_y + lz * cos_y,
        )
    })
}

/// Project the footprint into image space.
///
/// Returns `None` when the footprint centroid projects behind the camera
/// ("object not currently visible; no mask to draw").
pub fn project_footprint(
    pose: &Pose,
    dims: &Dimensions,
    camera: &CameraModel,
) -> Option<ProjectedFootprint> {
    let center = camera.project(Vector3::new(pose.x, 0.0, pose.z))?;
    let corners = footprint_corners(pose, dims)
        .iter()
        .filter_map(|&corner| camera.project(corner))
        .collect();
    Some(ProjectedFootprint {
        center,
        corners,
        rotation_deg: pose.rotation_deg,
    })
}
