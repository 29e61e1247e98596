use placement_engine::image::GrayImageU8;

/// Depth map whose intensity grows linearly toward the bottom edge
/// (bottom of the photo reads as closest to the camera).
pub fn depth_ramp_u8(width: usize, height: usize) -> GrayImageU8 {
    assert!(width > 0 && height > 1, "image dimensions must be positive");
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        let v = ((y * 255) / (height - 1)) as u8;
        for x in 0..width {
            data[y * width + x] = v;
        }
    }
    GrayImageU8::new(width, height, data)
}

/// Video frame with a flat bright sky and a textured ground starting at
/// `horizon_row`, giving the horizon scan a clear strongest row.
pub fn horizon_frame_u8(width: usize, height: usize, horizon_row: usize) -> Vec<u8> {
    assert!(horizon_row < height, "horizon must lie inside the frame");
    let mut data = vec![210u8; width * height];
    for y in horizon_row..height {
        for x in 0..width {
            data[y * width + x] = if x % 2 == 0 { 25 } else { 95 };
        }
    }
    data
}
