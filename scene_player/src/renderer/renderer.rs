/// Renderer trait - the lifecycle every pluggable renderer implements

use std::time::Duration;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::error::Result;
use crate::renderer::GraphicsContext;
use crate::scene::SceneType;

// ============================================================================
// Common types
// ============================================================================

/// Outcome of one `render` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererResult {
    /// Frame built, keep calling
    Success,
    /// Frame build failed; recovery is up to the host
    Error,
    /// This renderer will not draw this scene activation again
    Finished,
}

impl RendererResult {
    /// True for `Error` and `Finished`: the host stops calling `render`
    pub fn is_terminal(self) -> bool {
        !matches!(self, RendererResult::Success)
    }
}

/// Per-frame parameters pushed by the host into `render`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    /// Currently active scene
    pub scene: SceneType,
    /// Frame counter, 0 for the first frame of an activation
    pub frame_id_from_scene_start: u64,
    /// Microseconds since the activation started
    pub elapsed_from_scene_start: u64,
}

impl RenderParams {
    pub fn new(scene: SceneType, frame_id_from_scene_start: u64, elapsed_from_scene_start: u64) -> Self {
        Self {
            scene,
            frame_id_from_scene_start,
            elapsed_from_scene_start,
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_from_scene_start)
    }
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// The host issues calls in this order, one at a time:
///
/// ```text
/// initialize -> { initialize_scene -> render* -> uninitialize_scene }* -> uninitialize
/// ```
///
/// `on_resize` and `on_message` may arrive between any two calls once the
/// renderer is initialized. Calls without a result channel must absorb their
/// own failures.
pub trait Renderer {
    /// Stable, non-empty label used for diagnostics and selection
    fn name(&self) -> &'static str;

    /// One-time setup bound to a drawing target
    ///
    /// On error the host never proceeds to scene calls for this renderer.
    fn initialize(&mut self, window: WindowId) -> Result<()>;

    /// One-time teardown, after every scene has been uninitialized
    fn uninitialize(&mut self);

    /// Scene-scoped setup, once per activation
    ///
    /// On error the host neither renders nor uninitializes this activation.
    fn initialize_scene(&mut self, scene: SceneType) -> Result<()>;

    /// Scene-scoped teardown, matched 1:1 with a successful `initialize_scene`
    fn uninitialize_scene(&mut self, scene: SceneType);

    /// Build one frame for `params.scene`
    ///
    /// # Arguments
    ///
    /// * `gfx` - Graphics context owned by the host
    /// * `params` - Scene and counters for this frame
    fn render(&mut self, gfx: &mut dyn GraphicsContext, params: &RenderParams) -> RendererResult;

    /// Best-effort notification of a window message
    fn on_message(&mut self, _message: &WindowEvent) {}

    /// Drawing target dimensions changed
    ///
    /// Zero dimensions are legal and must not fault.
    fn on_resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32);
}
