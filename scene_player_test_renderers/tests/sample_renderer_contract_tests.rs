//! Contract tests for the sample renderers behind a RendererHost
//!
//! Each renderer is driven through the guarded lifecycle the way the player
//! drives it. No window or GPU required.
//!
//! Run with: cargo test --test sample_renderer_contract_tests

use scene_player::sp::player::{RendererHost, RendererState};
use scene_player::sp::render::SoftwareGraphics;
use scene_player::sp::scene::SceneType;
use scene_player::sp::{RendererResult, RenderParams};
use scene_player_test_renderers::{sample_renderers, TestRenderer, TestRenderer1, TestRenderer2};
use winit::window::WindowId;

fn activated(renderer: Box<dyn scene_player::sp::Renderer>, scene: SceneType) -> RendererHost {
    let mut host = RendererHost::new(renderer);
    host.initialize(WindowId::from(1u64)).unwrap();
    host.initialize_scene(scene).unwrap();
    host
}

/// Render until a terminal result, returning (Success count, terminal result)
fn play_out(host: &mut RendererHost, scene: SceneType, frame_us: u64) -> (u64, RendererResult) {
    let mut gfx = SoftwareGraphics::new();
    let mut frame = 0;
    loop {
        let params = RenderParams::new(scene, frame, frame * frame_us);
        let result = host.render(&mut gfx, &params).unwrap();
        if result.is_terminal() {
            return (frame, result);
        }
        frame += 1;
    }
}

// ============================================================================
// NAMES
// ============================================================================

#[test]
fn test_sample_renderer_names() {
    let names: Vec<&str> = sample_renderers().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["TestRenderer", "TestRenderer1", "TestRenderer2"]);
}

// ============================================================================
// FRAME BUDGET
// ============================================================================

#[test]
fn test_test0_renderers_draw_999_frames() {
    for renderer in [
        Box::new(TestRenderer::new()) as Box<dyn scene_player::sp::Renderer>,
        Box::new(TestRenderer1::new()),
    ] {
        let mut host = activated(renderer, SceneType::TEST0);
        let (drawn, result) = play_out(&mut host, SceneType::TEST0, 16_667);

        assert_eq!(drawn, 999);
        assert_eq!(result, RendererResult::Finished);
        assert_eq!(host.frames_rendered(), 999);
        assert_eq!(host.state(), RendererState::SceneActive { scene: SceneType::TEST0, done: true });
    }
}

#[test]
fn test_test0_second_activation_gets_full_budget() {
    let mut host = activated(Box::new(TestRenderer::new()), SceneType::TEST0);
    play_out(&mut host, SceneType::TEST0, 16_667);
    host.uninitialize_scene(SceneType::TEST0).unwrap();

    host.initialize_scene(SceneType::TEST0).unwrap();
    let (drawn, _) = play_out(&mut host, SceneType::TEST0, 16_667);

    assert_eq!(drawn, 999);
}

#[test]
fn test_test0_renderer_on_test1_finishes_immediately() {
    let mut host = activated(Box::new(TestRenderer::new()), SceneType::TEST1);
    let (drawn, result) = play_out(&mut host, SceneType::TEST1, 16_667);

    assert_eq!(drawn, 0);
    assert_eq!(result, RendererResult::Finished);
}

// ============================================================================
// ELAPSED TIME
// ============================================================================

#[test]
fn test_test1_renderer_finishes_at_five_seconds() {
    let mut host = activated(Box::new(TestRenderer2::new()), SceneType::TEST1);
    let mut gfx = SoftwareGraphics::new();

    let last_frame = RenderParams::new(SceneType::TEST1, 0, 4_999_999);
    let deadline = RenderParams::new(SceneType::TEST1, 1, 5_000_000);

    assert_eq!(host.render(&mut gfx, &last_frame).unwrap(), RendererResult::Success);
    assert_eq!(host.render(&mut gfx, &deadline).unwrap(), RendererResult::Finished);
    assert!(host.render(&mut gfx, &RenderParams::new(SceneType::TEST1, 2, 5_000_001)).is_err());
}

#[test]
fn test_test1_renderer_at_60_fps() {
    let mut host = activated(Box::new(TestRenderer2::new()), SceneType::TEST1);
    let (drawn, result) = play_out(&mut host, SceneType::TEST1, 16_667);

    assert_eq!(drawn, 300);
    assert_eq!(result, RendererResult::Finished);
}

// ============================================================================
// RESIZE
// ============================================================================

#[test]
fn test_zero_resize_is_harmless_for_every_renderer() {
    for renderer in sample_renderers() {
        let name = renderer.name();
        let mut host = RendererHost::new(renderer);
        let mut gfx = SoftwareGraphics::new();
        host.initialize(WindowId::from(1u64)).unwrap();

        host.on_resize(&mut gfx, 0, 0).unwrap();

        assert!(gfx.is_untouched(), "{} touched the context", name);
        assert_eq!(gfx.stats().rejected_calls, 0);
    }
}
