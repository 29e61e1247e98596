mod common;

use common::synthetic_image::{depth_ramp_u8, horizon_frame_u8};
use placement_engine::gesture::{GestureFrame, PointerSample};
use placement_engine::image::ImageU8;
use placement_engine::session::{PlacementSession, SessionParams};
use placement_engine::tilt::OrientationSample;

fn drag_frame(x: f32, y: f32, t: f64) -> GestureFrame {
    GestureFrame {
        pointers: vec![PointerSample { id: 0, x, y }],
        timestamp_ms: t,
    }
}

fn release_frame(t: f64) -> GestureFrame {
    GestureFrame {
        pointers: vec![],
        timestamp_ms: t,
    }
}

fn pinch_frame(spread: f32, t: f64) -> GestureFrame {
    GestureFrame {
        pointers: vec![
            PointerSample {
                id: 0,
                x: 960.0 - spread,
                y: 540.0,
            },
            PointerSample {
                id: 1,
                x: 960.0 + spread,
                y: 540.0,
            },
        ],
        timestamp_ms: t,
    }
}

#[test]
fn drag_release_drag_does_not_leak_stale_baseline() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = PlacementSession::new(SessionParams {
        auto_scale: false,
        ..SessionParams::default()
    });

    session.handle_gesture(&drag_frame(800.0, 500.0, 0.0));
    session.handle_gesture(&drag_frame(850.0, 500.0, 16.0));
    let after_first = session.pose();
    session.handle_gesture(&release_frame(32.0));

    // A fresh drag starting far away must seed without jumping the pose.
    session.handle_gesture(&drag_frame(100.0, 900.0, 200.0));
    assert_eq!(session.pose(), after_first, "seed sample moved the pose");

    session.handle_gesture(&drag_frame(110.0, 900.0, 216.0));
    assert!(session.pose().x > after_first.x);
}

#[test]
fn pinch_start_does_not_jump_scale() {
    let mut session = PlacementSession::new(SessionParams::default());
    let initial = session.pose().scale;

    session.handle_gesture(&pinch_frame(50.0, 0.0));
    // Unchanged spread on the next frame: still no scale change.
    session.handle_gesture(&pinch_frame(50.0, 16.0));
    assert_eq!(session.pose().scale, initial);

    session.handle_gesture(&pinch_frame(70.0, 32.0));
    assert!(session.pose().scale > initial);
}

#[test]
fn depth_map_drives_scale_until_manual_override() {
    let mut session = PlacementSession::new(SessionParams::default());
    session.set_depth_map(depth_ramp_u8(96, 96));

    session.handle_gesture(&drag_frame(960.0, 540.0, 0.0));
    session.handle_gesture(&drag_frame(960.0, 520.0, 16.0));
    let auto_scaled = session.pose().scale;
    assert_ne!(auto_scaled, 1.0, "depth suggestion should have applied");

    session.set_scale(2.5);
    session.handle_gesture(&drag_frame(960.0, 500.0, 32.0));
    session.handle_gesture(&drag_frame(960.0, 480.0, 48.0));
    assert_eq!(session.pose().scale, 2.5, "manual override must win");

    session.enable_auto_scale();
    session.handle_gesture(&drag_frame(960.0, 460.0, 64.0));
    session.handle_gesture(&drag_frame(960.0, 440.0, 80.0));
    assert_ne!(session.pose().scale, 2.5, "re-enabled auto-scale resumes");
}

#[test]
fn video_horizon_retunes_camera_when_sensor_is_quiet() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = PlacementSession::new(SessionParams::default());
    let pitch_before = session.camera().pitch_rad();

    // Sensor reports noise inside the deadband: no retune yet.
    session.push_orientation(OrientationSample {
        beta_deg: 0.1,
        gamma_deg: -0.2,
    });
    assert_eq!(session.camera().pitch_rad(), pitch_before);

    // Horizon high in the frame: downward pitch.
    let (w, h) = (120usize, 90usize);
    let buffer = horizon_frame_u8(w, h, 33);
    let frame = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };
    session.push_video_frame(&frame, 0.0);
    let pitch_after = session.camera().pitch_rad();
    assert_ne!(pitch_after, pitch_before);
    assert!(pitch_after < 0.0, "pitch={pitch_after}");
}

#[test]
fn commit_after_gestures_produces_consistent_artifacts() {
    let mut session = PlacementSession::new(SessionParams {
        auto_scale: false,
        ..SessionParams::default()
    });
    session.handle_gesture(&drag_frame(960.0, 540.0, 0.0));
    session.handle_gesture(&drag_frame(1000.0, 560.0, 16.0));
    session.handle_gesture(&release_frame(32.0));

    let capture = session.commit();
    assert_eq!(capture.pose, session.pose());
    assert_eq!(capture.mask.width(), session.camera().image_width());
    assert_eq!(capture.mask.height(), session.camera().image_height());

    let any_white = (0..capture.mask.height())
        .any(|y| (0..capture.mask.width()).any(|x| capture.mask.get(x, y) != 0));
    assert!(any_white, "visible pose must produce a non-empty mask");
}
