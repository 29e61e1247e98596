//! Horizon-row heuristic over live video frames.
//!
//! Scans the middle third of a frame for the row with the strongest summed
//! horizontal gradient magnitude. A long high-contrast horizontal feature
//! (usually the horizon) dominates that score; its vertical offset from
//! frame centre maps linearly to a camera pitch estimate. The scan is
//! O(W·H/3) and the caller rate-limits it, since it is too noisy and too
//! expensive to run every frame.

use rayon::prelude::*;

use crate::image::{ImageU8, ImageView};

/// Summed |dI/dx| over one row.
#[inline]
fn row_gradient_score(row: &[u8]) -> u64 {
    row.windows(2)
        .map(|w| u64::from(w[0].abs_diff(w[1])))
        .sum()
}

/// Find the strongest-gradient row within the middle third of the frame.
///
/// Returns `None` for frames too small to scan or with no gradient
/// evidence at all (e.g. a flat test card).
pub fn scan_horizon_row(frame: &ImageU8<'_>) -> Option<usize> {
    let h = frame.height();
    if h < 3 || frame.width() < 2 {
        return None;
    }
    let y0 = h / 3;
    let y1 = (2 * h) / 3;

    let scores: Vec<u64> = (y0..y1)
        .into_par_iter()
        .map(|y| row_gradient_score(frame.row(y)))
        .collect();

    // Sequential argmax keeps the result deterministic on ties.
    let (best_idx, best_score) = scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
    if *best_score == 0 {
        return None;
    }
    Some(y0 + best_idx)
}

/// Estimate camera pitch from the horizon row position.
///
/// The row's normalized offset from frame centre (in [-0.5, 0.5], negative
/// above centre) maps linearly into `±max_pitch_rad`. A horizon sitting
/// high in the frame means the camera is tilted downward, i.e. a negative
/// pitch.
pub fn detect_horizon_pitch(frame: &ImageU8<'_>, max_pitch_rad: f32) -> Option<f32> {
    let row = scan_horizon_row(frame)?;
    let h = frame.height() as f32;
    let offset = (row as f32 + 0.5) / h - 0.5;
    Some((offset * 2.0 * max_pitch_rad).clamp(-max_pitch_rad, max_pitch_rad))
}
