//! Scene Player demo
//!
//! Plays the sample renderers headless: TEST0 with TestRenderer then
//! TestRenderer1, then TEST1 with TestRenderer2, on a simulated 60 Hz clock
//! against the software graphics context.

use std::time::Duration;

use scene_player::sp::player::{PlayerConfig, PlayerStatus, ScenePlayer};
use scene_player::sp::render::SoftwareGraphics;
use scene_player::sp::scene::SceneType;
use scene_player::sp::{RendererResult, Result};
use scene_player::{sp_info, sp_warn};
use scene_player_test_renderers::{TestRenderer, TestRenderer1, TestRenderer2};
use winit::window::WindowId;

const SOURCE: &str = "sp::Demo";

/// Simulated time between two frames
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Frames between two progress lines
const REPORT_EVERY: u64 = 250;

fn main() -> Result<()> {
    let config = PlayerConfig {
        app_name: "Scene Player Demo".to_string(),
        ..PlayerConfig::default()
    };
    let (width, height) = config.surface_size;

    let mut player = ScenePlayer::new(config);
    let first = player.add_renderer(TestRenderer::new());
    let second = player.add_renderer(TestRenderer1::new());
    let timed = player.add_renderer(TestRenderer2::new());
    player.schedule(SceneType::TEST0, &[first, second])?;
    player.schedule(SceneType::TEST1, &[timed])?;

    // No real window: the id only identifies the drawing target
    player.initialize(WindowId::from(0u64))?;

    let mut gfx = SoftwareGraphics::new();
    player.resize(&mut gfx, width, height);

    let mut now = Duration::ZERO;
    let mut triangles = 0u64;
    loop {
        gfx.begin_frame();
        match player.step(&mut gfx, now)? {
            PlayerStatus::Complete => break,
            PlayerStatus::Rendering { scene, renderer, frame_id, result } => {
                let stats = gfx.stats();
                triangles += u64::from(stats.triangles);
                if stats.rejected_calls > 0 {
                    sp_warn!(SOURCE, "{} rejected {} calls on frame {}", renderer, stats.rejected_calls, frame_id);
                }
                if result == RendererResult::Success && frame_id % REPORT_EVERY == 0 {
                    sp_info!(SOURCE, "{} '{}' frame {} at {:.2}s ({} vertices)",
                        scene, renderer, frame_id, now.as_secs_f64(), stats.vertices);
                }
            }
        }
        now += FRAME_INTERVAL;
    }

    for report in player.reports() {
        sp_info!(SOURCE, "{} '{}': {} frames, {:?}", report.scene, report.renderer, report.frames, report.outcome);
    }
    sp_info!(SOURCE, "Played {:.2}s of scene time, {} triangles submitted", now.as_secs_f64(), triangles);

    player.shutdown();
    Ok(())
}
