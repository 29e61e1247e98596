//! Depth-map driven scale suggestion.
//!
//! A precomputed single-channel depth image (higher intensity = closer to
//! the camera) is sampled at the pose anchor; the intensity maps linearly
//! into a suggested scale, so nearby anchors get a larger apparent object.
//! The floor/ceiling of that mapping are empirically chosen tunables, not
//! physical constants.
//!
//! The scaler is inert until a depth map is loaded, and a manual scale
//! override disables it until explicitly re-enabled: manual input always
//! wins.

use log::debug;
use serde::Deserialize;

use crate::image::GrayImageU8;

/// Linear intensity→scale mapping bounds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DepthScaleOptions {
    pub scale_floor: f32,
    pub scale_ceiling: f32,
}

impl Default for DepthScaleOptions {
    fn default() -> Self {
        Self {
            scale_floor: 0.2,
            scale_ceiling: 1.5,
        }
    }
}

/// Samples a preloaded depth map at a normalized anchor and suggests a
/// scale. Runs synchronously on every drag sample while enabled.
#[derive(Clone, Debug, Default)]
pub struct DepthAutoScaler {
    options: DepthScaleOptions,
    depth: Option<GrayImageU8>,
    disabled: bool,
}

impl DepthAutoScaler {
    pub fn new(options: DepthScaleOptions) -> Self {
        Self {
            options,
            depth: None,
            disabled: false,
        }
    }

    /// Install (or replace) the depth map. Resolution may differ from the
    /// base photo; anchors are rescaled at sample time.
    pub fn set_depth_map(&mut self, depth: GrayImageU8) {
        debug!(
            "depth: loaded {}x{} depth map",
            depth.width(),
            depth.height()
        );
        self.depth = Some(depth);
    }

    /// Enable or disable the scaler. Disabling is what a manual scale
    /// override does; suggestions stop until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Sample the depth map at normalized `(u, v)` (fractions of the base
    /// photo's width/height) and map the intensity to a scale.
    ///
    /// Returns `None` while disabled or while no depth map is loaded;
    /// out-of-range anchors clamp to the nearest edge pixel.
    pub fn suggest(&self, u: f32, v: f32) -> Option<f32> {
        if self.disabled {
            return None;
        }
        let depth = self.depth.as_ref()?;
        if depth.width() == 0 || depth.height() == 0 {
            return None;
        }
        let x = ((u.clamp(0.0, 1.0) * depth.width() as f32) as usize).min(depth.width() - 1);
        let y = ((v.clamp(0.0, 1.0) * depth.height() as f32) as usize).min(depth.height() - 1);
        let intensity = depth.get(x, y);
        let t = f32::from(intensity) / 255.0;
        Some(self.options.scale_floor + t * (self.options.scale_ceiling - self.options.scale_floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_ramp(w: usize, h: usize) -> GrayImageU8 {
        // Intensity grows toward the bottom of the map.
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            let v = ((y * 255) / (h - 1)) as u8;
            for x in 0..w {
                data[y * w + x] = v;
            }
        }
        GrayImageU8::new(w, h, data)
    }

    #[test]
    fn no_depth_map_means_no_suggestion() {
        let scaler = DepthAutoScaler::default();
        assert_eq!(scaler.suggest(0.5, 0.5), None);
    }

    #[test]
    fn suggestion_is_monotonic_in_intensity() {
        let mut scaler = DepthAutoScaler::default();
        scaler.set_depth_map(vertical_ramp(16, 64));
        let mut prev = f32::NEG_INFINITY;
        for step in 0..=10 {
            let v = step as f32 / 10.0;
            let s = scaler.suggest(0.5, v).unwrap();
            assert!(
                s >= prev,
                "scale must not decrease with intensity: {s} < {prev} at v={v}"
            );
            prev = s;
        }
    }

    #[test]
    fn mapping_spans_floor_to_ceiling() {
        let mut scaler = DepthAutoScaler::new(DepthScaleOptions {
            scale_floor: 0.2,
            scale_ceiling: 1.5,
        });
        scaler.set_depth_map(vertical_ramp(8, 32));
        let near = scaler.suggest(0.5, 1.0).unwrap();
        let far = scaler.suggest(0.5, 0.0).unwrap();
        assert!((far - 0.2).abs() < 1e-6, "far={far}");
        assert!((near - 1.5).abs() < 1e-6, "near={near}");
    }

    #[test]
    fn out_of_range_anchor_clamps_to_edges() {
        let mut scaler = DepthAutoScaler::default();
        scaler.set_depth_map(vertical_ramp(8, 32));
        assert_eq!(scaler.suggest(-2.0, -2.0), scaler.suggest(0.0, 0.0));
        assert_eq!(scaler.suggest(3.0, 3.0), scaler.suggest(1.0, 1.0));
    }

    #[test]
    fn manual_override_disables_suggestions() {
        let mut scaler = DepthAutoScaler::default();
        scaler.set_depth_map(vertical_ramp(8, 8));
        assert!(scaler.suggest(0.5, 0.5).is_some());
        scaler.set_enabled(false);
        assert_eq!(scaler.suggest(0.5, 0.5), None);
        scaler.set_enabled(true);
        assert!(scaler.suggest(0.5, 0.5).is_some());
    }
}
