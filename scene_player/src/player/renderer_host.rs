/// Renderer host - call-order guard around one renderer.
///
/// Tracks the renderer's lifecycle state and refuses any call the contract
/// does not allow in that state, before it reaches the renderer:
///
/// ```text
/// Uninitialized --initialize--> Initialized --initialize_scene--> SceneActive
///       ^                           |  ^                               |
///       +-------uninitialize--------+  +------uninitialize_scene-------+
/// ```
///
/// A failed `initialize` stays `Uninitialized`; a failed `initialize_scene`
/// stays `Initialized` and needs no matching `uninitialize_scene`.
/// Calls without a result channel on the renderer side are run under
/// `catch_unwind`: a panicking renderer is logged, never propagated.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::error::Result;
use crate::renderer::{GraphicsContext, Renderer, RendererResult, RenderParams};
use crate::scene::SceneType;
use crate::{sp_bail, sp_err};

const SOURCE: &str = "sp::RendererHost";

/// Lifecycle state of one renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Initialized,
    SceneActive {
        scene: SceneType,
        /// `render` returned `Finished` or `Error` for this activation
        done: bool,
    },
}

pub struct RendererHost {
    renderer: Box<dyn Renderer>,
    state: RendererState,
    last_params: Option<RenderParams>,
    frames_rendered: u64,
}

impl RendererHost {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            renderer,
            state: RendererState::Uninitialized,
            last_params: None,
            frames_rendered: 0,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Initialized, with or without an active scene
    pub fn is_initialized(&self) -> bool {
        self.state != RendererState::Uninitialized
    }

    pub fn active_scene(&self) -> Option<SceneType> {
        match self.state {
            RendererState::SceneActive { scene, .. } => Some(scene),
            _ => None,
        }
    }

    /// Frames that returned `Success` in the current (or last) activation
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    // ===== LIFECYCLE =====

    pub fn initialize(&mut self, window: WindowId) -> Result<()> {
        if self.state != RendererState::Uninitialized {
            sp_bail!(ContractViolation, SOURCE,
                "initialize called on '{}' in state {:?}", self.name(), self.state);
        }

        if let Err(e) = self.renderer.initialize(window) {
            return Err(sp_err!(InitializationFailed, SOURCE,
                "Renderer '{}' failed to initialize: {}", self.name(), e));
        }

        self.state = RendererState::Initialized;
        crate::sp_info!(SOURCE, "Renderer '{}' initialized", self.name());
        Ok(())
    }

    pub fn uninitialize(&mut self) -> Result<()> {
        if self.state != RendererState::Initialized {
            sp_bail!(ContractViolation, SOURCE,
                "uninitialize called on '{}' in state {:?}", self.name(), self.state);
        }

        self.absorb("uninitialize", |renderer| renderer.uninitialize());
        self.state = RendererState::Uninitialized;
        crate::sp_info!(SOURCE, "Renderer '{}' uninitialized", self.name());
        Ok(())
    }

    pub fn initialize_scene(&mut self, scene: SceneType) -> Result<()> {
        if self.state != RendererState::Initialized {
            sp_bail!(ContractViolation, SOURCE,
                "initialize_scene({}) called on '{}' in state {:?}", scene, self.name(), self.state);
        }

        if let Err(e) = self.renderer.initialize_scene(scene) {
            return Err(sp_err!(InitializationFailed, SOURCE,
                "Renderer '{}' failed to initialize {}: {}", self.name(), scene, e));
        }

        self.state = RendererState::SceneActive { scene, done: false };
        self.last_params = None;
        self.frames_rendered = 0;
        crate::sp_debug!(SOURCE, "Renderer '{}' activated {}", self.name(), scene);
        Ok(())
    }

    pub fn uninitialize_scene(&mut self, scene: SceneType) -> Result<()> {
        match self.state {
            RendererState::SceneActive { scene: active, .. } if active == scene => {}
            _ => sp_bail!(ContractViolation, SOURCE,
                "uninitialize_scene({}) called on '{}' in state {:?}", scene, self.name(), self.state),
        }

        self.absorb("uninitialize_scene", |renderer| renderer.uninitialize_scene(scene));
        self.state = RendererState::Initialized;
        self.last_params = None;
        crate::sp_debug!(SOURCE, "Renderer '{}' released {} after {} frames",
            self.name(), scene, self.frames_rendered);
        Ok(())
    }

    /// Forward one frame to the renderer.
    ///
    /// # Errors
    ///
    /// `ContractViolation` if no scene is active, `params.scene` is not the
    /// active scene, the activation already ended, or the counters went
    /// backwards. The renderer is not called in those cases.
    pub fn render(&mut self, gfx: &mut dyn GraphicsContext, params: &RenderParams) -> Result<RendererResult> {
        let scene = match self.state {
            RendererState::SceneActive { scene, done: false } => scene,
            RendererState::SceneActive { scene, done: true } => sp_bail!(ContractViolation, SOURCE,
                "render called on '{}' after it ended {}", self.name(), scene),
            _ => sp_bail!(ContractViolation, SOURCE,
                "render called on '{}' without an active scene (state {:?})", self.name(), self.state),
        };

        if params.scene != scene {
            sp_bail!(ContractViolation, SOURCE,
                "render for {} called on '{}' while {} is active", params.scene, self.name(), scene);
        }

        if let Some(last) = &self.last_params {
            if params.frame_id_from_scene_start < last.frame_id_from_scene_start
                || params.elapsed_from_scene_start < last.elapsed_from_scene_start
            {
                sp_bail!(ContractViolation, SOURCE,
                    "render counters went backwards on '{}' (frame {} -> {}, elapsed {}us -> {}us)",
                    self.name(),
                    last.frame_id_from_scene_start, params.frame_id_from_scene_start,
                    last.elapsed_from_scene_start, params.elapsed_from_scene_start);
            }
        }

        let result = self.renderer.render(gfx, params);
        self.last_params = Some(*params);

        match result {
            RendererResult::Success => self.frames_rendered += 1,
            RendererResult::Error => {
                crate::sp_warn!(SOURCE, "Renderer '{}' failed frame {} of {}",
                    self.name(), params.frame_id_from_scene_start, scene);
            }
            RendererResult::Finished => {}
        }

        if result.is_terminal() {
            self.state = RendererState::SceneActive { scene, done: true };
        }
        Ok(result)
    }

    // ===== NOTIFICATIONS =====

    pub fn on_resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) -> Result<()> {
        if !self.is_initialized() {
            sp_bail!(ContractViolation, SOURCE,
                "on_resize called on uninitialized renderer '{}'", self.name());
        }

        self.absorb("on_resize", |renderer| renderer.on_resize(gfx, width, height));
        Ok(())
    }

    pub fn on_message(&mut self, message: &WindowEvent) -> Result<()> {
        if !self.is_initialized() {
            sp_bail!(ContractViolation, SOURCE,
                "on_message called on uninitialized renderer '{}'", self.name());
        }

        self.absorb("on_message", |renderer| renderer.on_message(message));
        Ok(())
    }

    /// Run a call that has no error channel, turning a panic into a log entry
    fn absorb<F>(&mut self, call: &str, f: F)
    where
        F: FnOnce(&mut Box<dyn Renderer>),
    {
        let name = self.renderer.name();
        let renderer = &mut self.renderer;
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| f(renderer))) {
            crate::sp_error!(SOURCE, "Renderer '{}' faulted in {}: {}", name, call, panic_message(&*payload));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "renderer_host_tests.rs"]
mod tests;
