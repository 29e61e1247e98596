//! Footprint mask rasterization.
//!
//! The terminal operation of the engine: draw the projected footprint
//! polygon in full white on a black canvas matching the base photo's pixel
//! dimensions. The fill is an even-odd scanline pass over the polygon's
//! vertical extent. A missing or degenerate footprint (object off-frustum)
//! produces an all-black raster of full size, never a partial one.

use nalgebra::Point2;

use crate::footprint::ProjectedFootprint;
use crate::image::GrayImageU8;

const MASK_FOREGROUND: u8 = 255;

/// Rasterize the projected footprint onto a `width × height` mask.
pub fn rasterize_mask(
    footprint: Option<&ProjectedFootprint>,
    width: usize,
    height: usize,
) -> GrayImageU8 {
    let mut canvas = GrayImageU8::zeros(width, height);
    let polygon = match footprint {
        Some(fp) if fp.is_drawable() => &fp.corners,
        _ => return canvas,
    };
    fill_polygon(&mut canvas, polygon);
    canvas
}

/// Even-odd scanline fill of a closed polygon.
fn fill_polygon(canvas: &mut GrayImageU8, polygon: &[Point2<f32>]) {
    let height = canvas.height();
    let width = canvas.width();
    if width == 0 || height == 0 {
        return;
    }

    let y_min = polygon.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let y_max = polygon
        .iter()
        .map(|p| p.y)
        .fold(f32::NEG_INFINITY, f32::max);
    let row_start = (y_min.floor().max(0.0)) as usize;
    let row_end = (y_max.ceil().min(height as f32).max(0.0)) as usize;

    let mut crossings: Vec<f32> = Vec::with_capacity(polygon.len());
    for y in row_start..row_end {
        let scan_y = y as f32 + 0.5;
        crossings.clear();
        for i in 0..polygon.len() {
            let a = polygon[i];
            let b = polygon[(i + 1) % polygon.len()];
            // Half-open span test keeps shared vertices from double counting.
            if (a.y <= scan_y) != (b.y <= scan_y) {
                let t = (scan_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        if crossings.len() < 2 {
            continue;
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        let row = canvas.row_mut(y);
        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].round().max(0.0) as usize;
            let x1 = (pair[1].round().max(0.0) as usize).min(width);
            if x0 < x1 {
                row[x0..x1].fill(MASK_FOREGROUND);
            }
        }
    }
}
