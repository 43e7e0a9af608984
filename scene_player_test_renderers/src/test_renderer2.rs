/// TestRenderer2 - yellow pyramid on TEST1
///
/// Draws for five seconds of scene time. The deadline is exclusive: a frame
/// issued at exactly 5 000 000 us answers `Finished`.

use winit::window::WindowId;
use scene_player::sp::{Renderer, RendererResult, RenderParams, Result};
use scene_player::sp::render::GraphicsContext;
use scene_player::sp::scene::{SceneCompletion, SceneType};

use crate::{draw_pyramid, Projection, DEGREES_PER_FRAME, TEST1_DURATION_US, YELLOW};

const SOURCE: &str = "sp::TestRenderer2";

pub struct TestRenderer2 {
    completion: SceneCompletion,
    projection: Projection,
}

impl TestRenderer2 {
    pub fn new() -> Self {
        Self {
            completion: SceneCompletion::elapsed_time(SceneType::TEST1, TEST1_DURATION_US),
            projection: Projection::default(),
        }
    }

    pub fn completion(&self) -> &SceneCompletion {
        &self.completion
    }
}

impl Default for TestRenderer2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TestRenderer2 {
    fn name(&self) -> &'static str {
        "TestRenderer2"
    }

    fn initialize(&mut self, window: WindowId) -> Result<()> {
        scene_player::sp_debug!(SOURCE, "Attached to window {:?}", window);
        Ok(())
    }

    fn uninitialize(&mut self) {}

    fn initialize_scene(&mut self, scene: SceneType) -> Result<()> {
        self.completion.begin_activation(scene);
        Ok(())
    }

    fn uninitialize_scene(&mut self, _scene: SceneType) {}

    fn render(&mut self, gfx: &mut dyn GraphicsContext, params: &RenderParams) -> RendererResult {
        let result = self.completion.advance(params);
        if result == RendererResult::Success {
            let degrees = DEGREES_PER_FRAME * params.frame_id_from_scene_start as f32;
            draw_pyramid(gfx, degrees, Some(YELLOW));
        }
        result
    }

    fn on_resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) {
        self.projection.apply(gfx, width, height);
    }
}

#[cfg(test)]
#[path = "test_renderer2_tests.rs"]
mod tests;
