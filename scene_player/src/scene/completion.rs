/// Scene completion policies.
///
/// Every renderer decides, frame by frame, whether it keeps drawing its scene
/// or declares it finished. Two strategies exist:
///
/// - [`FrameBudget`]: a fixed number of frames per activation
/// - [`ElapsedLimit`]: a fixed duration since the scene started
///
/// [`SceneCompletion`] binds one of them to the renderer's target scene.
/// Calls for any other scene always answer `Finished`.

use crate::renderer::{RenderParams, RendererResult};
use super::SceneType;

// ============================================================================
// FrameBudget
// ============================================================================

/// Remaining-frame counter, decremented before it is compared.
///
/// A budget of N grants N-1 frames: the Nth call brings the counter to zero
/// and finishes the scene without drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBudget {
    initial: u32,
    remaining: u32,
}

impl FrameBudget {
    pub fn new(frames: u32) -> Self {
        Self {
            initial: frames,
            remaining: frames,
        }
    }

    /// Restore the full budget (start of a new activation)
    pub fn rearm(&mut self) {
        self.remaining = self.initial;
    }

    /// Consume one frame. Returns true if that frame may be drawn.
    ///
    /// Saturates at zero: an exhausted budget keeps refusing.
    pub fn consume(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

// ============================================================================
// ElapsedLimit
// ============================================================================

/// Duration threshold in microseconds since scene start (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedLimit {
    threshold_us: u64,
}

impl ElapsedLimit {
    pub fn from_micros(threshold_us: u64) -> Self {
        Self { threshold_us }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::from_micros(secs.saturating_mul(1_000_000))
    }

    pub fn threshold_us(&self) -> u64 {
        self.threshold_us
    }

    /// True while `elapsed_us` is strictly below the threshold
    pub fn admits(&self, elapsed_us: u64) -> bool {
        elapsed_us < self.threshold_us
    }
}

// ============================================================================
// SceneCompletion
// ============================================================================

/// Termination strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    FrameBudget(FrameBudget),
    ElapsedTime(ElapsedLimit),
}

/// A renderer's target scene plus the policy that ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneCompletion {
    scene: SceneType,
    policy: CompletionPolicy,
}

impl SceneCompletion {
    /// Finish `scene` after `frames` render calls (`frames - 1` drawn)
    pub fn frame_budget(scene: SceneType, frames: u32) -> Self {
        Self {
            scene,
            policy: CompletionPolicy::FrameBudget(FrameBudget::new(frames)),
        }
    }

    /// Finish `scene` once `threshold_us` microseconds have elapsed
    pub fn elapsed_time(scene: SceneType, threshold_us: u64) -> Self {
        Self {
            scene,
            policy: CompletionPolicy::ElapsedTime(ElapsedLimit::from_micros(threshold_us)),
        }
    }

    pub fn scene(&self) -> SceneType {
        self.scene
    }

    pub fn policy(&self) -> &CompletionPolicy {
        &self.policy
    }

    pub fn owns(&self, scene: SceneType) -> bool {
        self.scene == scene
    }

    /// Reset per-activation state. Called from `initialize_scene`.
    ///
    /// Activating a scene this renderer does not own leaves the budget alone.
    pub fn begin_activation(&mut self, scene: SceneType) {
        if !self.owns(scene) {
            return;
        }
        if let CompletionPolicy::FrameBudget(budget) = &mut self.policy {
            budget.rearm();
        }
    }

    /// Decide whether the frame described by `params` should be drawn.
    ///
    /// Returns `Success` when the caller must draw, `Finished` otherwise.
    /// A mismatched scene never consumes budget and never yields `Error`.
    pub fn advance(&mut self, params: &RenderParams) -> RendererResult {
        if !self.owns(params.scene) {
            return RendererResult::Finished;
        }

        let draw = match &mut self.policy {
            CompletionPolicy::FrameBudget(budget) => budget.consume(),
            CompletionPolicy::ElapsedTime(limit) => limit.admits(params.elapsed_from_scene_start),
        };

        if draw {
            RendererResult::Success
        } else {
            RendererResult::Finished
        }
    }
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
