//! Pose mutators and clamping limits.
//!
//! The pose is a plain value snapshot ([`Pose`]); every mutator is a pure
//! function of the previous snapshot plus a delta. Inputs are sanitized by
//! clamping or wrapping, never rejected: scale stays in
//! `[scale_min, scale_max]`, rotation wraps into `[0, 360)`, and the ground
//! offsets are held inside `±offset_bound_m` so the object stays
//! projectable for most camera setups.

use serde::Deserialize;

use crate::angle::wrap_deg;
use crate::types::Pose;

/// Bounds applied by every pose mutator.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PoseLimits {
    pub scale_min: f32,
    pub scale_max: f32,
    /// Ground-plane offsets are clamped to `±offset_bound_m` metres.
    pub offset_bound_m: f32,
}

impl Default for PoseLimits {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 3.0,
            offset_bound_m: 5.0,
        }
    }
}

impl Pose {
    /// Offset the ground-plane position by `(dx, dz)` metres.
    pub fn translate_by(self, dx: f32, dz: f32, limits: &PoseLimits) -> Self {
        let bound = limits.offset_bound_m.abs();
        Self {
            x: (self.x + dx).clamp(-bound, bound),
            z: (self.z + dz).clamp(-bound, bound),
            ..self
        }
    }

    /// Rotate about the vertical axis by `ddeg` degrees, wrapping into [0, 360).
    pub fn rotate_by(self, ddeg: f32) -> Self {
        Self {
            rotation_deg: wrap_deg(self.rotation_deg + ddeg),
            ..self
        }
    }

    /// Replace the scale, clamped to the configured range.
    pub fn set_scale(self, scale: f32, limits: &PoseLimits) -> Self {
        Self {
            scale: scale.clamp(limits.scale_min, limits.scale_max),
            ..self
        }
    }

    /// Adjust the scale by `dscale`, clamped to the configured range.
    pub fn scale_by(self, dscale: f32, limits: &PoseLimits) -> Self {
        self.set_scale(self.scale + dscale, limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn scale_by_clamps_to_limits() {
        let limits = PoseLimits::default();
        let pose = Pose::default();
        assert!(approx_eq(pose.scale_by(0.7, &limits).scale, 1.7));
        assert!(approx_eq(pose.scale_by(10.0, &limits).scale, limits.scale_max));
        assert!(approx_eq(pose.scale_by(-10.0, &limits).scale, limits.scale_min));
        // clamp(s1 + s2) regardless of how the deltas are split
        let a = pose.scale_by(1.5, &limits).scale_by(1.5, &limits);
        let b = pose.scale_by(3.0, &limits);
        assert!(approx_eq(a.scale, b.scale));
    }

    #[test]
    fn rotate_by_wraps_modulo_360() {
        let pose = Pose {
            rotation_deg: 350.0,
            ..Pose::default()
        };
        assert!(approx_eq(pose.rotate_by(20.0).rotation_deg, 10.0));
        assert!(approx_eq(pose.rotate_by(-360.0).rotation_deg, 350.0));

        // rotate_by(d) then rotate_by(360 - d) restores the original angle
        let d = 137.0;
        let back = pose.rotate_by(d).rotate_by(360.0 - d);
        assert!(approx_eq(back.rotation_deg, pose.rotation_deg));
    }

    #[test]
    fn translate_by_stays_within_bound() {
        let limits = PoseLimits::default();
        let pose = Pose::default().translate_by(3.0, -2.0, &limits);
        assert!(approx_eq(pose.x, 3.0));
        assert!(approx_eq(pose.z, -2.0));
        let far = pose.translate_by(100.0, -100.0, &limits);
        assert!(approx_eq(far.x, limits.offset_bound_m));
        assert!(approx_eq(far.z, -limits.offset_bound_m));
    }
}
