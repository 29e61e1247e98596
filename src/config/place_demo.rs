use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::camera::CameraModel;
use crate::depth::DepthScaleOptions;
use crate::gesture::{GestureFrame, GestureOptions};
use crate::pose::PoseLimits;
use crate::tilt::TiltOptions;
use crate::types::Dimensions;

#[derive(Debug, Deserialize)]
pub struct PlaceDemoConfig {
    /// Pixel dimensions of the base photo; the camera and mask match them.
    pub photo: PhotoConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub limits: PoseLimits,
    #[serde(default)]
    pub gesture: GestureOptions,
    #[serde(default)]
    pub tilt: TiltOptions,
    #[serde(default)]
    pub depth: DepthScaleOptions,
    /// Optional precomputed depth-map image for auto-scaling.
    #[serde(default)]
    pub depth_map: Option<PathBuf>,
    #[serde(default = "default_auto_scale")]
    pub auto_scale: bool,
    /// Scripted gesture frames replayed in order.
    #[serde(default)]
    pub gestures: Vec<GestureFrame>,
    pub output: PlaceDemoOutput,
}

fn default_auto_scale() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PhotoConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub pitch_rad: f32,
    pub fov_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.8, 3.0],
            pitch_rad: -0.3,
            fov_deg: 70.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self, image_w: usize, image_h: usize) -> CameraModel {
        CameraModel::new(
            self.eye.into(),
            self.pitch_rad,
            self.fov_deg.to_radians(),
            image_w,
            image_h,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceDemoOutput {
    pub pose_json: PathBuf,
    pub mask_png: PathBuf,
}

pub fn load_config(path: &Path) -> Result<PlaceDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let json = r#"{
            "photo": { "width": 1280, "height": 720 },
            "output": { "pose_json": "out/pose.json", "mask_png": "out/mask.png" }
        }"#;
        let cfg: PlaceDemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.photo.width, 1280);
        assert!(cfg.auto_scale);
        assert!(cfg.gestures.is_empty());
        assert!(cfg.depth_map.is_none());
        let cam = cfg.camera.to_camera(cfg.photo.width, cfg.photo.height);
        assert_eq!(cam.image_width(), 1280);
    }

    #[test]
    fn gesture_script_parses() {
        let json = r#"{
            "photo": { "width": 640, "height": 480 },
            "gestures": [
                { "pointers": [ { "id": 0, "x": 320.0, "y": 240.0 } ], "timestamp_ms": 0 },
                { "pointers": [], "timestamp_ms": 16 }
            ],
            "output": { "pose_json": "p.json", "mask_png": "m.png" }
        }"#;
        let cfg: PlaceDemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.gestures.len(), 2);
        assert_eq!(cfg.gestures[0].pointers.len(), 1);
        assert!(cfg.gestures[1].pointers.is_empty());
    }
}
