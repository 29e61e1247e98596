use placement_engine::image::io::load_grayscale_image;
use placement_engine::tilt::{detect_horizon_pitch, scan_horizon_row};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let image_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: horizon_demo <image>".to_string())?;
    let max_pitch_rad = env::args()
        .nth(2)
        .map(|s| s.parse::<f32>().map_err(|e| format!("bad max pitch: {e}")))
        .transpose()?
        .unwrap_or(std::f32::consts::FRAC_PI_6);

    let frame = load_grayscale_image(Path::new(&image_path))?;
    let view = frame.as_view();
    match scan_horizon_row(&view) {
        Some(row) => {
            let pitch = detect_horizon_pitch(&view, max_pitch_rad)
                .ok_or_else(|| "horizon row found but pitch mapping failed".to_string())?;
            println!(
                "horizon: row={row}/{} pitch={:.4} rad ({:.2} deg)",
                frame.height(),
                pitch,
                pitch.to_degrees()
            );
        }
        None => println!("horizon: no gradient evidence in the middle third"),
    }
    Ok(())
}
