/// TestRenderer - multi-colour pyramid turning counter-clockwise on TEST0
///
/// Draws 999 frames per activation and answers `Finished` on the 1000th
/// render call.

use winit::window::WindowId;
use scene_player::sp::{Renderer, RendererResult, RenderParams, Result};
use scene_player::sp::render::GraphicsContext;
use scene_player::sp::scene::{SceneCompletion, SceneType};

use crate::{draw_pyramid, Projection, DEGREES_PER_FRAME, TEST0_FRAME_BUDGET};

const SOURCE: &str = "sp::TestRenderer";

pub struct TestRenderer {
    completion: SceneCompletion,
    projection: Projection,
}

impl TestRenderer {
    pub fn new() -> Self {
        Self {
            completion: SceneCompletion::frame_budget(SceneType::TEST0, TEST0_FRAME_BUDGET),
            projection: Projection::default(),
        }
    }

    pub fn completion(&self) -> &SceneCompletion {
        &self.completion
    }
}

impl Default for TestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TestRenderer {
    fn name(&self) -> &'static str {
        "TestRenderer"
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
            draw_pyramid(gfx, degrees, None);
        }
        result
    }

    fn on_resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) {
        self.projection.apply(gfx, width, height);
    }
}

#[cfg(test)]
#[path = "test_renderer_tests.rs"]
mod tests;
