/*!
# Scene Player - Sample Renderers

Three renderers drawing a lit pyramid through the scene player's
[`GraphicsContext`](scene_player::sp::render::GraphicsContext):

| Renderer | Scene | Ends after |
|---|---|---|
| [`TestRenderer`] | `TEST0` | 1000 render calls |
| [`TestRenderer1`] | `TEST0` | 1000 render calls |
| [`TestRenderer2`] | `TEST1` | 5 seconds |

Each renderer is an independent type; the pyramid table and the projection
setup are shared.
*/

mod pyramid;
mod projection;
mod test_renderer;
mod test_renderer1;
mod test_renderer2;

pub use pyramid::{draw_pyramid, PyramidFace, PYRAMID_FACES, PYRAMID_VERTICES, YELLOW};
pub use projection::Projection;
pub use test_renderer::TestRenderer;
pub use test_renderer1::TestRenderer1;
pub use test_renderer2::TestRenderer2;

use scene_player::sp::Renderer;

/// Render calls granted to each `TEST0` renderer per activation
pub const TEST0_FRAME_BUDGET: u32 = 1000;

/// Wall time granted to `TestRenderer2` per activation (microseconds)
pub const TEST1_DURATION_US: u64 = 5_000_000;

/// Rotation speed about Y, in degrees per frame
pub const DEGREES_PER_FRAME: f32 = 0.1;

/// All sample renderers, boxed, in play order
pub fn sample_renderers() -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(TestRenderer::new()),
        Box::new(TestRenderer1::new()),
        Box::new(TestRenderer2::new()),
    ]
}
