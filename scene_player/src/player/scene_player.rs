/// Scene player - sequences scenes across renderers.
///
/// Each scheduled scene lists the renderers eligible to draw it, in order.
/// The player activates one renderer at a time, feeds it frames until it
/// answers `Finished` (or `Error`), tears the activation down and moves to
/// the next eligible renderer, then to the next scene.
///
/// Renderers are owned by the player and addressed through [`RendererKey`]
/// handles.

use std::time::Duration;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::error::Result;
use crate::renderer::{GraphicsContext, Renderer, RendererResult};
use crate::scene::SceneType;
use crate::player::{FrameClock, PlayerConfig, RendererHost};
use crate::sp_bail;

const SOURCE: &str = "sp::ScenePlayer";

new_key_type! {
    /// Handle to a renderer owned by a [`ScenePlayer`]
    pub struct RendererKey;
}

/// How an activation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Renderer returned `Finished`
    Finished,
    /// Renderer returned `Error`
    Error,
    /// `initialize_scene` failed, nothing was rendered
    SetupFailed,
    /// `max_frames_per_activation` reached
    FrameCapReached,
    /// Player shut down mid-activation
    Aborted,
}

/// Record of one renderer activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReport {
    pub scene: SceneType,
    pub renderer: &'static str,
    /// Frames that returned `Success`
    pub frames: u64,
    pub outcome: ActivationOutcome,
}

/// Result of one `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// A frame was issued to the active renderer
    Rendering {
        scene: SceneType,
        renderer: &'static str,
        frame_id: u64,
        result: RendererResult,
    },
    /// Every scheduled scene has been played
    Complete,
}

struct ScenePlan {
    scene: SceneType,
    renderers: Vec<RendererKey>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    scene: usize,
    renderer: usize,
}

struct Activation {
    key: RendererKey,
    clock: FrameClock,
}

pub struct ScenePlayer {
    config: PlayerConfig,
    renderers: SlotMap<RendererKey, RendererHost>,
    plan: Vec<ScenePlan>,
    cursor: Cursor,
    active: Option<Activation>,
    window: Option<WindowId>,
    surface_size: (u32, u32),
    reports: Vec<ActivationReport>,
    frames_per_scene: FxHashMap<SceneType, u64>,
    laps: u32,
    complete: bool,
}

impl ScenePlayer {
    pub fn new(config: PlayerConfig) -> Self {
        let surface_size = config.surface_size;
        Self {
            config,
            renderers: SlotMap::with_key(),
            plan: Vec::new(),
            cursor: Cursor::default(),
            active: None,
            window: None,
            surface_size,
            reports: Vec::new(),
            frames_per_scene: FxHashMap::default(),
            laps: 0,
            complete: false,
        }
    }

    // ===== SETUP =====

    /// Take ownership of a renderer.
    ///
    /// If the player is already initialized, the renderer is initialized
    /// right away; a failure is logged and the renderer is skipped.
    pub fn add_renderer<R: Renderer + 'static>(&mut self, renderer: R) -> RendererKey {
        self.add_boxed_renderer(Box::new(renderer))
    }

    pub fn add_boxed_renderer(&mut self, renderer: Box<dyn Renderer>) -> RendererKey {
        let mut host = RendererHost::new(renderer);
        if let Some(window) = self.window {
            // Error already logged by the host
            let _ = host.initialize(window);
        }
        self.renderers.insert(host)
    }

    /// Append `scene`, drawn by `renderers` in order
    ///
    /// # Errors
    ///
    /// `InvalidRenderer` if a key does not belong to this player.
    pub fn schedule(&mut self, scene: SceneType, renderers: &[RendererKey]) -> Result<()> {
        if let Some(missing) = renderers.iter().find(|key| !self.renderers.contains_key(**key)) {
            sp_bail!(InvalidRenderer, SOURCE, "Cannot schedule {}: unknown renderer {:?}", scene, missing);
        }

        self.plan.push(ScenePlan {
            scene,
            renderers: renderers.to_vec(),
        });
        self.complete = false;
        Ok(())
    }

    /// Initialize every renderer against `window`.
    ///
    /// Renderers that fail are logged and skipped for the rest of the run.
    /// Returns the number of renderers ready to play.
    pub fn initialize(&mut self, window: WindowId) -> Result<usize> {
        if self.window.is_some() {
            sp_bail!(ContractViolation, SOURCE, "'{}' is already initialized", self.config.app_name);
        }
        self.window = Some(window);

        let mut ready = 0;
        for host in self.renderers.values_mut() {
            if host.initialize(window).is_ok() {
                ready += 1;
            }
        }

        crate::sp_info!(SOURCE, "'{}' initialized {}/{} renderers, {} scenes scheduled",
            self.config.app_name, ready, self.renderers.len(), self.plan.len());
        Ok(ready)
    }

    // ===== FRAME LOOP =====

    /// Play one frame at host time `now`.
    ///
    /// Activates the next eligible renderer when none is active, renders,
    /// and ends the activation if the renderer is done.
    pub fn step(&mut self, gfx: &mut dyn GraphicsContext, now: Duration) -> Result<PlayerStatus> {
        if self.window.is_none() {
            sp_bail!(ContractViolation, SOURCE, "step called before initialize");
        }
        if self.complete {
            return Ok(PlayerStatus::Complete);
        }

        if self.active.is_none() && !self.activate_next(gfx, now) {
            self.complete = true;
            crate::sp_info!(SOURCE, "'{}' played all scenes ({} activations)",
                self.config.app_name, self.reports.len());
            return Ok(PlayerStatus::Complete);
        }

        let Some(activation) = self.active.as_mut() else {
            return Ok(PlayerStatus::Complete);
        };
        let Some(host) = self.renderers.get_mut(activation.key) else {
            sp_bail!(InvalidRenderer, SOURCE, "Active renderer disappeared");
        };

        let params = activation.clock.tick(now);
        let result = host.render(gfx, &params)?;
        let renderer = host.name();
        let frames = host.frames_rendered();

        if result == RendererResult::Success {
            *self.frames_per_scene.entry(params.scene).or_insert(0) += 1;
        }

        match result {
            RendererResult::Finished => self.end_activation(ActivationOutcome::Finished),
            RendererResult::Error => self.end_activation(ActivationOutcome::Error),
            RendererResult::Success => {
                if self.config.max_frames_per_activation.is_some_and(|cap| frames >= cap) {
                    crate::sp_warn!(SOURCE, "Renderer '{}' hit the frame cap on {}, moving on",
                        renderer, params.scene);
                    self.end_activation(ActivationOutcome::FrameCapReached);
                }
            }
        }

        Ok(PlayerStatus::Rendering {
            scene: params.scene,
            renderer,
            frame_id: params.frame_id_from_scene_start,
            result,
        })
    }

    /// Find and activate the next renderer. Returns false when nothing is left.
    fn activate_next(&mut self, gfx: &mut dyn GraphicsContext, now: Duration) -> bool {
        let mut wrapped = false;
        loop {
            if self.cursor.scene >= self.plan.len() {
                if !self.config.loop_scenes || wrapped || self.plan.is_empty() {
                    return false;
                }
                wrapped = true;
                self.cursor = Cursor::default();
                self.laps += 1;
                crate::sp_debug!(SOURCE, "Starting lap {}", self.laps);
            }

            let plan = &self.plan[self.cursor.scene];
            let scene = plan.scene;
            let Some(&key) = plan.renderers.get(self.cursor.renderer) else {
                self.cursor.scene += 1;
                self.cursor.renderer = 0;
                continue;
            };
            self.cursor.renderer += 1;

            let Some(host) = self.renderers.get_mut(key) else {
                continue;
            };
            if !host.is_initialized() {
                crate::sp_debug!(SOURCE, "Skipping uninitialized renderer '{}' for {}", host.name(), scene);
                continue;
            }

            if host.initialize_scene(scene).is_err() {
                self.reports.push(ActivationReport {
                    scene,
                    renderer: host.name(),
                    frames: 0,
                    outcome: ActivationOutcome::SetupFailed,
                });
                continue;
            }

            let (width, height) = self.surface_size;
            // Only fails for uninitialized renderers, checked above
            let _ = host.on_resize(gfx, width, height);

            crate::sp_info!(SOURCE, "{} -> '{}'", scene, host.name());
            self.active = Some(Activation {
                key,
                clock: FrameClock::start(scene, now),
            });
            return true;
        }
    }

    fn end_activation(&mut self, outcome: ActivationOutcome) {
        let Some(activation) = self.active.take() else {
            return;
        };
        let scene = activation.clock.scene();
        let Some(host) = self.renderers.get_mut(activation.key) else {
            return;
        };

        // Host state guarantees this activation is the live one
        let _ = host.uninitialize_scene(scene);

        self.reports.push(ActivationReport {
            scene,
            renderer: host.name(),
            frames: host.frames_rendered(),
            outcome,
        });
    }

    // ===== HOST EVENTS =====

    /// Record the new drawing target size and tell the active renderer
    pub fn resize(&mut self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) {
        self.surface_size = (width, height);
        if let Some(host) = self.active_host_mut() {
            let _ = host.on_resize(gfx, width, height);
        }
    }

    /// Forward a window message to the active renderer, if any
    pub fn dispatch_message(&mut self, message: &WindowEvent) {
        if let Some(host) = self.active_host_mut() {
            let _ = host.on_message(message);
        }
    }

    /// End the active scene and uninitialize every renderer. Idempotent.
    pub fn shutdown(&mut self) {
        self.end_activation(ActivationOutcome::Aborted);

        for host in self.renderers.values_mut() {
            if host.is_initialized() {
                let _ = host.uninitialize();
            }
        }

        if self.window.take().is_some() {
            crate::sp_info!(SOURCE, "'{}' shut down", self.config.app_name);
        }
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn renderer(&self, key: RendererKey) -> Option<&RendererHost> {
        self.renderers.get(key)
    }

    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    pub fn active_scene(&self) -> Option<SceneType> {
        self.active.as_ref().map(|activation| activation.clock.scene())
    }

    pub fn active_renderer(&self) -> Option<&RendererHost> {
        self.active.as_ref().and_then(|activation| self.renderers.get(activation.key))
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Completed passes over the schedule when looping
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Finished activations, oldest first
    pub fn reports(&self) -> &[ActivationReport] {
        &self.reports
    }

    /// Successful frames drawn for `scene` over the whole run
    pub fn frames_for(&self, scene: SceneType) -> u64 {
        self.frames_per_scene.get(&scene).copied().unwrap_or(0)
    }

    fn active_host_mut(&mut self) -> Option<&mut RendererHost> {
        let key = self.active.as_ref()?.key;
        self.renderers.get_mut(key)
    }
}

impl Drop for ScenePlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "scene_player_tests.rs"]
mod tests;
