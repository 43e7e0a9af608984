/// Mock Renderer for unit tests (no window, no GPU)
///
/// Records every lifecycle call in a shared log so tests can inspect the
/// sequence after the renderer has been boxed and handed to a host.
/// Failures and panics are switched on per call.

use std::sync::{Arc, Mutex};

use glam::Vec3;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::error::{Error, Result};
use crate::renderer::{GraphicsContext, Renderer, RendererResult, RenderParams};
use crate::scene::{SceneCompletion, SceneType};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct MockRenderer {
    pub name: &'static str,
    pub completion: SceneCompletion,
    pub fail_initialize: bool,
    pub fail_scene: Option<SceneType>,
    pub error_on_frame: Option<u64>,
    pub panic_on_teardown: bool,
    calls: CallLog,
}

impl MockRenderer {
    /// Mock drawing `scene` for `frames - 1` frames
    pub fn new(name: &'static str, scene: SceneType, frames: u32) -> Self {
        Self::with_completion(name, SceneCompletion::frame_budget(scene, frames))
    }

    pub fn with_completion(name: &'static str, completion: SceneCompletion) -> Self {
        Self {
            name,
            completion,
            fail_initialize: false,
            fail_scene: None,
            error_on_frame: None,
            panic_on_teardown: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_initialize(mut self) -> Self {
        self.fail_initialize = true;
        self
    }

    pub fn failing_scene(mut self, scene: SceneType) -> Self {
        self.fail_scene = Some(scene);
        self
    }

    pub fn erroring_on_frame(mut self, frame: u64) -> Self {
        self.error_on_frame = Some(frame);
        self
    }

    pub fn panicking_on_teardown(mut self) -> Self {
        self.panic_on_teardown = true;
        self
    }

    /// Shared handle on the call log
    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Renderer for MockRenderer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn initialize(&mut self, _window: WindowId) -> Result<()> {
        self.record("initialize".to_string());
        if self.fail_initialize {
            return Err(Error::InitializationFailed("mock initialize failure".to_string()));
        }
        Ok(())
    }

    fn uninitialize(&mut self) {
        self.record("uninitialize".to_string());
        if self.panic_on_teardown {
            panic!("mock uninitialize panic");
        }
    }

    fn initialize_scene(&mut self, scene: SceneType) -> Result<()> {
        self.record(format!("initialize_scene:{}", scene.id()));
        if self.fail_scene == Some(scene) {
            return Err(Error::InitializationFailed("mock scene failure".to_string()));
        }
        self.completion.begin_activation(scene);
        Ok(())
    }

    fn uninitialize_scene(&mut self, scene: SceneType) {
        self.record(format!("uninitialize_scene:{}", scene.id()));
        if self.panic_on_teardown {
            panic!("mock uninitialize_scene panic");
        }
    }

    fn render(&mut self, gfx: &mut dyn GraphicsContext, params: &RenderParams) -> RendererResult {
        self.record(format!("render:{}", params.frame_id_from_scene_start));
        if self.error_on_frame == Some(params.frame_id_from_scene_start) {
            return RendererResult::Error;
        }

        let result = self.completion.advance(params);
        if result == RendererResult::Success {
            gfx.begin_triangles();
            gfx.vertex(Vec3::new(0.0, 1.0, 0.0));
            gfx.vertex(Vec3::new(-1.0, -1.0, 0.0));
            gfx.vertex(Vec3::new(1.0, -1.0, 0.0));
            gfx.end_triangles();
        }
        result
    }

    fn on_message(&mut self, message: &WindowEvent) {
        self.record(format!("on_message:{:?}", message));
        if self.panic_on_teardown {
            panic!("mock on_message panic");
        }
    }

    fn on_resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) {
        self.record(format!("on_resize:{}x{}", width, height));
        if width == 0 || height == 0 {
            return;
        }
        gfx.perspective(45.0, width as f32 / height as f32, 0.1, 100.0);
    }
}
