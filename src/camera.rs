//! Pinhole camera model used for every world-to-image projection.
//!
//! All callers funnel through [`CameraModel::project`]; nothing else in the
//! crate re-derives the perspective formula. The projection is exact:
//! translate into camera-relative coordinates, rotate by the camera pitch
//! about the lateral axis, reject points at or behind the camera plane,
//! then perspective-divide with the focal length implied by the vertical
//! field of view.
//!
//! Axis convention: world y is up, the camera looks along -z at zero
//! pitch, negative pitch tilts the view downward. Screen origin is the
//! top-left corner of the image.

use nalgebra::{Point2, Vector3};

/// Minimum camera-space depth accepted before the perspective divide.
const NEAR_EPSILON: f32 = 1e-4;

/// Immutable perspective camera: eye position, pitch, vertical field of
/// view, and the pixel dimensions of the target image.
#[derive(Clone, Copy, Debug)]
pub struct CameraModel {
    eye: Vector3<f32>,
    pitch_rad: f32,
    fov_rad: f32,
    image_w: usize,
    image_h: usize,
}

impl CameraModel {
    /// Build a camera, sanitizing invalid inputs: `fov_rad` is clamped into
    /// (0, π) and the eye is kept strictly above the ground plane.
    pub fn new(
        eye: Vector3<f32>,
        pitch_rad: f32,
        fov_rad: f32,
        image_w: usize,
        image_h: usize,
    ) -> Self {
        let fov_rad = fov_rad.clamp(1e-3, std::f32::consts::PI - 1e-3);
        let mut eye = eye;
        if eye.y <= 0.0 {
            eye.y = NEAR_EPSILON;
        }
        Self {
            eye,
            pitch_rad,
            fov_rad,
            image_w,
            image_h,
        }
    }

    /// Same camera with a replaced pitch (used by tilt retuning).
    pub fn with_pitch(self, pitch_rad: f32) -> Self {
        Self { pitch_rad, ..self }
    }

    pub fn eye(&self) -> Vector3<f32> {
        self.eye
    }

    pub fn pitch_rad(&self) -> f32 {
        self.pitch_rad
    }

    pub fn fov_rad(&self) -> f32 {
        self.fov_rad
    }

    pub fn image_width(&self) -> usize {
        self.image_w
    }

    pub fn image_height(&self) -> usize {
        self.image_h
    }

    /// Focal length in pixels implied by the vertical field of view.
    #[inline]
    pub fn focal_length(&self) -> f32 {
        self.image_h as f32 / (2.0 * (self.fov_rad * 0.5).tan())
    }

    /// Project a world point into image coordinates.
    ///
    /// Returns `None` when the point lies at or behind the camera plane
    /// after the pitch rotation; callers treat that as "not visible" and
    /// must not divide by the depth themselves.
    pub fn project(&self, world: Vector3<f32>) -> Option<Point2<f32>> {
        let rel = world - self.eye;
        // Looking along -z: in-front points have positive camera depth.
        let forward = -rel.z;
        let (sin_p, cos_p) = self.pitch_rad.sin_cos();
        let rotated_y = rel.y * cos_p - forward * sin_p;
        let rotated_z = rel.y * sin_p + forward * cos_p;
        if rotated_z <= NEAR_EPSILON {
            return None;
        }
        let f = self.focal_length();
        let sx = (rel.x / rotated_z) * f + self.image_w as f32 * 0.5;
        let sy = (-rotated_y / rotated_z) * f + self.image_h as f32 * 0.5;
        Some(Point2::new(sx, sy))
    }
}

impl Default for CameraModel {
    /// Static-preview camera: eye slightly above head height, looking
    /// gently downward, 70° vertical field of view at 1920×1080.
    fn default() -> Self {
        Self::new(
            Vector3::new(0.0, 1.8, 3.0),
            -0.3,
            70f32.to_radians(),
            1920,
            1080,
        )
    }
}
