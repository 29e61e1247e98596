use placement_engine::config::place_demo::load_config;
use placement_engine::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use placement_engine::session::{PlacementSession, SessionParams};
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
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let camera = config
        .camera
        .to_camera(config.photo.width, config.photo.height);
    let mut session = PlacementSession::new(SessionParams {
        dimensions: config.dimensions,
        camera,
        limits: config.limits,
        gesture: config.gesture,
        tilt: config.tilt,
        depth: config.depth,
        auto_scale: config.auto_scale,
    });

    if let Some(path) = &config.depth_map {
        session.set_depth_map(load_grayscale_image(path)?);
    }

    for frame in &config.gestures {
        session.handle_gesture(frame);
    }

    let capture = session.commit();
    write_json_file(&config.output.pose_json, &capture.pose)?;
    save_grayscale_u8(&capture.mask, &config.output.mask_png)?;

    println!(
        "pose: x={:.3} z={:.3} rot={:.1} scale={:.3}",
        capture.pose.x, capture.pose.z, capture.pose.rotation_deg, capture.pose.scale
    );
    println!(
        "mask: {}x{} -> {}",
        capture.mask.width(),
        capture.mask.height(),
        config.output.mask_png.display()
    );
    Ok(())
}

fn usage() -> String {
    "usage: place_demo <config.json>".to_string()
}
