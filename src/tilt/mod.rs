//! Camera tilt estimation from device orientation and/or video frames.
//!
//! Two independent sources feed one pitch estimate:
//! - device orientation samples (sensor beta, front/back tilt);
//! - the horizon-row heuristic in [`horizon`], rate-limited to a low scan
//!   cadence.
//!
//! How the two combine is a configurable [`TiltFusion`] policy rather than
//! a hard-coded precedence. The default prefers the sensor but treats
//! near-zero readings (inside a small deadband) as "no signal" and falls
//! through to the horizon estimate, which keeps noisy idle sensors from
//! thrashing the camera pitch. The estimator never blocks and never fails:
//! without a usable source, `current_pitch` is simply `None` and the
//! camera keeps its prior pitch.

pub mod horizon;

pub use horizon::{detect_horizon_pitch, scan_horizon_row};

use log::debug;
use serde::Deserialize;

use crate::angle::deg_to_rad;
use crate::image::ImageU8;

/// One device-orientation sample, in degrees.
///
/// `beta` is front/back tilt (the pitch candidate); `gamma` is left/right
/// tilt, carried for completeness of the sensor interface but not used by
/// the pitch estimate.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct OrientationSample {
    pub beta_deg: f32,
    pub gamma_deg: f32,
}

/// Policy combining the sensor and horizon sources.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TiltFusion {
    /// No tilt estimation; the camera pitch is never adjusted.
    Disabled,
    /// Only the device-orientation sensor is consulted.
    SensorOnly,
    /// Only the horizon heuristic is consulted.
    HorizonOnly,
    /// Sensor wins while it reports a pitch outside the deadband;
    /// otherwise fall back to the horizon estimate.
    SensorPreferred { deadband_deg: f32 },
}

/// Tilt estimator knobs.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct TiltOptions {
    pub fusion: TiltFusion,
    /// Horizon estimates are bounded to `±max_pitch_rad`.
    pub max_pitch_rad: f32,
    /// Minimum interval between horizon scans, in milliseconds.
    pub min_scan_interval_ms: f64,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            fusion: TiltFusion::SensorPreferred { deadband_deg: 0.5 },
            max_pitch_rad: std::f32::consts::FRAC_PI_6,
            min_scan_interval_ms: 500.0,
        }
    }
}

/// Fuses orientation samples and horizon scans into a camera pitch.
#[derive(Clone, Debug)]
pub struct TiltEstimator {
    options: TiltOptions,
    sensor_pitch_rad: Option<f32>,
    horizon_pitch_rad: Option<f32>,
    last_scan_ms: Option<f64>,
}

impl TiltEstimator {
    pub fn new(options: TiltOptions) -> Self {
        Self {
            options,
            sensor_pitch_rad: None,
            horizon_pitch_rad: None,
            last_scan_ms: None,
        }
    }

    /// Record a device-orientation sample.
    pub fn push_orientation(&mut self, sample: OrientationSample) {
        self.sensor_pitch_rad = Some(deg_to_rad(sample.beta_deg));
    }

    /// Offer a video frame to the horizon heuristic.
    ///
    /// Frames arriving faster than the configured scan interval are
    /// dropped; a frame without gradient evidence leaves the previous
    /// horizon estimate in place.
    pub fn push_frame(&mut self, frame: &ImageU8<'_>, now_ms: f64) {
        match self.options.fusion {
            TiltFusion::Disabled | TiltFusion::SensorOnly => return,
            TiltFusion::HorizonOnly | TiltFusion::SensorPreferred { .. } => {}
        }
        if let Some(last) = self.last_scan_ms {
            if now_ms - last < self.options.min_scan_interval_ms {
                return;
            }
        }
        self.last_scan_ms = Some(now_ms);
        if let Some(pitch) = detect_horizon_pitch(frame, self.options.max_pitch_rad) {
            debug!("tilt: horizon scan pitch={pitch:.4} rad at t={now_ms:.0} ms");
            self.horizon_pitch_rad = Some(pitch);
        } else {
            debug!("tilt: horizon scan found no edge evidence at t={now_ms:.0} ms");
        }
    }

    /// The fused pitch estimate under the configured policy, if any.
    pub fn current_pitch(&self) -> Option<f32> {
        match self.options.fusion {
            TiltFusion::Disabled => None,
            TiltFusion::SensorOnly => self.sensor_pitch_rad,
            TiltFusion::HorizonOnly => self.horizon_pitch_rad,
            TiltFusion::SensorPreferred { deadband_deg } => {
                let deadband = deg_to_rad(deadband_deg.abs());
                self.sensor_pitch_rad
                    .filter(|p| p.abs() > deadband)
                    .or(self.horizon_pitch_rad)
            }
        }
    }
}

impl Default for TiltEstimator {
    fn default() -> Self {
        Self::new(TiltOptions::default())
    }
}
