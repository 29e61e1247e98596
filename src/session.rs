//! Placement session facade.
//!
//! One [`PlacementSession`] owns exactly one pose/camera pair and wires
//! the gesture interpreter, tilt estimator, and depth auto-scaler
//! together. Everything runs synchronously on the caller's event thread:
//! gesture frames mutate the pose in arrival order, auxiliary signals
//! retune the camera or suggest a scale, and `commit` snapshots the pose
//! and rasterizes a fresh mask.

use log::debug;
use nalgebra::Vector3;

use crate::camera::CameraModel;
use crate::depth::{DepthAutoScaler, DepthScaleOptions};
use crate::footprint::project_footprint;
use crate::gesture::{GestureFrame, GestureInterpreter, GestureOptions};
use crate::image::{GrayImageU8, ImageU8};
use crate::mask::rasterize_mask;
use crate::pose::PoseLimits;
use crate::tilt::{OrientationSample, TiltEstimator, TiltOptions};
use crate::types::{Capture, Dimensions, Pose};

/// Everything a session needs up front. Collaborators supply the catalog
/// dimensions and the camera (sized to the base photo); the rest defaults.
#[derive(Clone, Debug)]
pub struct SessionParams {
    pub dimensions: Dimensions,
    pub camera: CameraModel,
    pub limits: PoseLimits,
    pub gesture: GestureOptions,
    pub tilt: TiltOptions,
    pub depth: DepthScaleOptions,
    /// Start with depth-driven auto-scale active (it still needs a depth
    /// map before it produces suggestions).
    pub auto_scale: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            camera: CameraModel::default(),
            limits: PoseLimits::default(),
            gesture: GestureOptions::default(),
            tilt: TiltOptions::default(),
            depth: DepthScaleOptions::default(),
            auto_scale: true,
        }
    }
}

/// Camera-relative placement engine for a single object.
pub struct PlacementSession {
    dimensions: Dimensions,
    camera: CameraModel,
    limits: PoseLimits,
    pose: Pose,
    interpreter: GestureInterpreter,
    tilt: TiltEstimator,
    auto_scaler: DepthAutoScaler,
}

impl PlacementSession {
    pub fn new(params: SessionParams) -> Self {
        let mut auto_scaler = DepthAutoScaler::new(params.depth);
        auto_scaler.set_enabled(params.auto_scale);
        Self {
            dimensions: params.dimensions,
            camera: params.camera,
            limits: params.limits,
            pose: Pose::default(),
            interpreter: GestureInterpreter::new(params.gesture),
            tilt: TiltEstimator::new(params.tilt),
            auto_scaler,
        }
    }

    /// Latest committed pose snapshot.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Camera currently used for projection (pitch may have been retuned).
    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Install a precomputed depth map for auto-scaling.
    pub fn set_depth_map(&mut self, depth: GrayImageU8) {
        self.auto_scaler.set_depth_map(depth);
    }

    /// Re-enable depth-driven auto-scale after a manual override.
    pub fn enable_auto_scale(&mut self) {
        self.auto_scaler.set_enabled(true);
    }

    /// Rotate the object about the vertical axis by `ddeg` degrees (an
    /// explicit control; rotation has no gesture mapping).
    pub fn rotate_by(&mut self, ddeg: f32) {
        self.pose = self.pose.rotate_by(ddeg);
    }

    /// Explicit scale control. Manual input always wins: the value goes
    /// through the normal clamping path and auto-scale is disabled until
    /// re-enabled.
    pub fn set_scale(&mut self, scale: f32) {
        self.auto_scaler.set_enabled(false);
        self.pose = self.pose.set_scale(scale, &self.limits);
    }

    /// Feed one gesture frame. Deltas apply immediately and in arrival
    /// order; a pinch counts as a manual scale override and disables
    /// auto-scale.
    pub fn handle_gesture(&mut self, frame: &GestureFrame) {
        let delta = self.interpreter.interpret(frame);
        if delta.dscale != 0.0 {
            self.auto_scaler.set_enabled(false);
            self.pose = self.pose.scale_by(delta.dscale, &self.limits);
        }
        if delta.dx != 0.0 || delta.dz != 0.0 {
            self.pose = self.pose.translate_by(delta.dx, delta.dz, &self.limits);
            self.apply_auto_scale();
        }
    }

    /// Device-orientation sample; retunes the camera pitch when the fusion
    /// policy yields an estimate.
    pub fn push_orientation(&mut self, sample: OrientationSample) {
        self.tilt.push_orientation(sample);
        self.retune_pitch();
    }

    /// Live video frame for the horizon heuristic; rate-limited inside the
    /// estimator.
    pub fn push_video_frame(&mut self, frame: &ImageU8<'_>, now_ms: f64) {
        self.tilt.push_frame(frame, now_ms);
        self.retune_pitch();
    }

    /// Snapshot the pose and rasterize a fresh mask. An off-frustum pose
    /// yields an all-black mask of full raster size.
    pub fn commit(&self) -> Capture {
        let footprint = project_footprint(&self.pose, &self.dimensions, &self.camera);
        debug!(
            "commit: pose=({:.2}, {:.2}) rot={:.1}° scale={:.2} visible={}",
            self.pose.x,
            self.pose.z,
            self.pose.rotation_deg,
            self.pose.scale,
            footprint.is_some()
        );
        let mask = rasterize_mask(
            footprint.as_ref(),
            self.camera.image_width(),
            self.camera.image_height(),
        );
        Capture {
            pose: self.pose,
            mask,
        }
    }

    fn retune_pitch(&mut self) {
        if let Some(pitch) = self.tilt.current_pitch() {
            self.camera = self.camera.with_pitch(pitch);
        }
    }

    /// Sample the depth map at the pose anchor's screen position and feed
    /// the suggestion through the normal clamping path. The anchor is the
    /// projected footprint centre normalized by the image dimensions,
    /// clamped so slightly off-screen anchors still sample an edge pixel.
    fn apply_auto_scale(&mut self) {
        let Some(anchor) = self
            .camera
            .project(Vector3::new(self.pose.x, 0.0, self.pose.z))
        else {
            return;
        };
        let u = anchor.x / self.camera.image_width() as f32;
        let v = anchor.y / self.camera.image_height() as f32;
        if let Some(scale) = self.auto_scaler.suggest(u, v) {
            debug!("auto-scale: anchor=({u:.3}, {v:.3}) scale={scale:.3}");
            self.pose = self.pose.set_scale(scale, &self.limits);
        }
    }
}
