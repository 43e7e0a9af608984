/// Frame clock - builds RenderParams for one scene activation.
///
/// The host passes timestamps on its own timeline (a `Duration` since any
/// fixed origin: process start for real time, a frame counter times an
/// interval for simulated time). Frame ids start at 0; elapsed time is
/// measured from the activation start and never goes backwards, even if the
/// host timeline does.

use std::time::Duration;

use crate::renderer::RenderParams;
use crate::scene::SceneType;

#[derive(Debug, Clone)]
pub struct FrameClock {
    scene: SceneType,
    start: Duration,
    next_frame: u64,
    last_elapsed_us: u64,
}

impl FrameClock {
    /// Start counting for an activation of `scene` beginning at `now`
    pub fn start(scene: SceneType, now: Duration) -> Self {
        Self {
            scene,
            start: now,
            next_frame: 0,
            last_elapsed_us: 0,
        }
    }

    /// Parameters for the next frame at host time `now`
    pub fn tick(&mut self, now: Duration) -> RenderParams {
        let elapsed = now.saturating_sub(self.start).as_micros();
        let elapsed_us = u64::try_from(elapsed).unwrap_or(u64::MAX).max(self.last_elapsed_us);

        let params = RenderParams::new(self.scene, self.next_frame, elapsed_us);
        self.next_frame += 1;
        self.last_elapsed_us = elapsed_us;
        params
    }

    pub fn scene(&self) -> SceneType {
        self.scene
    }

    /// Number of RenderParams issued so far
    pub fn frames_issued(&self) -> u64 {
        self.next_frame
    }
}

#[cfg(test)]
#[path = "frame_clock_tests.rs"]
mod tests;
