//! Pointer/touch stream → pose delta interpretation.
//!
//! The interpreter is a synchronous reducer over gesture frames with an
//! explicit three-state machine (`Idle → Dragging → Idle`,
//! `Idle → Pinching → Idle`) instead of ad hoc last-sample refs. Frames
//! must be fed in arrival order; cumulative drag tracking is
//! order-sensitive, so the resulting delta has to be applied before the
//! next frame is interpreted.
//!
//! Edge cases the state machine covers explicitly:
//! - the first sample of a new drag or pinch only seeds the baseline and
//!   yields a zero delta (no jump on gesture start);
//! - a release (zero pointers) resets tracking so the next gesture starts
//!   clean, without rolling back already-applied deltas;
//! - pointer-count transitions (drag↔pinch) re-seed the baseline.

mod options;

pub use options::GestureOptions;

use nalgebra::Point2;
use serde::Deserialize;

/// One active pointer in a gesture frame.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct PointerSample {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// A snapshot of all active pointers at one instant.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GestureFrame {
    #[serde(default)]
    pub pointers: Vec<PointerSample>,
    #[serde(default)]
    pub timestamp_ms: f64,
}

/// Pose-space delta produced from a single gesture frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseDelta {
    pub dx: f32,
    pub dz: f32,
    pub dscale: f32,
}

impl PoseDelta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dz == 0.0 && self.dscale == 0.0
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Dragging { last: Point2<f32> },
    Pinching { last_distance: f32 },
}

/// Stateful gesture reducer. One instance per placement session.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    options: GestureOptions,
    phase: Phase,
}

impl GestureInterpreter {
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            phase: Phase::Idle,
        }
    }

    /// Drop any in-progress tracking; the next frame starts a new gesture.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// True while a pinch gesture is in progress.
    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, Phase::Pinching { .. })
    }

    /// Reduce one frame to a pose delta, updating tracking state.
    pub fn interpret(&mut self, frame: &GestureFrame) -> PoseDelta {
        match frame.pointers.len() {
            0 => {
                self.phase = Phase::Idle;
                PoseDelta::default()
            }
            1 => self.interpret_drag(&frame.pointers[0]),
            _ => self.interpret_pinch(&frame.pointers[0], &frame.pointers[1]),
        }
    }

    fn interpret_drag(&mut self, p: &PointerSample) -> PoseDelta {
        let pos = Point2::new(p.x, p.y);
        match self.phase {
            Phase::Dragging { last } => {
                self.phase = Phase::Dragging { last: pos };
                let k = self.options.drag_sensitivity;
                // Screen-down maps to away-from-viewer (decreasing world z
                // toward the scene) unless inverted.
                let z_sign = if self.options.invert_z { 1.0 } else { -1.0 };
                PoseDelta {
                    dx: (pos.x - last.x) * k,
                    dz: (pos.y - last.y) * k * z_sign,
                    dscale: 0.0,
                }
            }
            _ => {
                // First sample of a drag (or a pinch collapsing to one
                // pointer): seed only.
                self.phase = Phase::Dragging { last: pos };
                PoseDelta::default()
            }
        }
    }

    fn interpret_pinch(&mut self, a: &PointerSample, b: &PointerSample) -> PoseDelta {
        let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        match self.phase {
            Phase::Pinching { last_distance } => {
                self.phase = Phase::Pinching {
                    last_distance: distance,
                };
                PoseDelta {
                    dx: 0.0,
                    dz: 0.0,
                    dscale: (distance - last_distance) * self.options.pinch_sensitivity,
                }
            }
            _ => {
                self.phase = Phase::Pinching {
                    last_distance: distance,
                };
                PoseDelta::default()
            }
        }
    }
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}
