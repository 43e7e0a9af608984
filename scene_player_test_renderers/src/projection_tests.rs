use super::*;
use glam::Mat4;
use scene_player::sp::render::SoftwareGraphics;

#[test]
fn test_default_projection() {
    let projection = Projection::default();
    assert_eq!(projection.fovy_degrees, 45.0);
    assert_eq!(projection.near, 0.1);
    assert_eq!(projection.far, 100.0);
}

#[test]
fn test_apply_loads_perspective() {
    let mut gfx = SoftwareGraphics::new();
    assert!(Projection::default().apply(&mut gfx, 800, 600));

    assert_eq!(gfx.matrix_mode_state(), MatrixMode::Projection);
    assert_eq!(
        *gfx.projection(),
        Mat4::perspective_rh_gl(45.0_f32.to_radians(), 800.0 / 600.0, 0.1, 100.0)
    );
}

#[test]
fn test_apply_replaces_previous_projection() {
    let mut gfx = SoftwareGraphics::new();
    let projection = Projection::default();
    projection.apply(&mut gfx, 800, 600);
    projection.apply(&mut gfx, 1920, 1080);

    assert_eq!(
        *gfx.projection(),
        Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1920.0 / 1080.0, 0.1, 100.0)
    );
}

#[test]
fn test_zero_dimension_is_skipped() {
    let mut gfx = SoftwareGraphics::new();

    assert!(!Projection::default().apply(&mut gfx, 0, 0));
    assert!(!Projection::default().apply(&mut gfx, 640, 0));
    assert!(!Projection::default().apply(&mut gfx, 0, 480));

    assert!(gfx.is_untouched());
    assert_eq!(*gfx.projection(), Mat4::IDENTITY);
    assert_eq!(gfx.stats().rejected_calls, 0);
}
