use serde::Deserialize;

/// Sensitivity constants mapping screen-space deltas to pose deltas.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GestureOptions {
    /// Metres of ground-plane motion per pixel of single-pointer drag.
    pub drag_sensitivity: f32,
    /// Scale delta per pixel of pinch-distance change.
    pub pinch_sensitivity: f32,
    /// Flips the drag-to-depth direction. With the default (`false`),
    /// dragging the pointer downward moves the object away from the
    /// viewer, i.e. deeper into the scene.
    pub invert_z: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.015,
            pinch_sensitivity: 0.01,
            invert_z: false,
        }
    }
}
