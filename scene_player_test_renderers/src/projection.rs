/// Perspective projection applied on resize
use scene_player::sp::render::{GraphicsContext, MatrixMode};

const SOURCE: &str = "sp::Projection";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Load this projection for a `width` x `height` target.
    ///
    /// A zero dimension has no aspect ratio; the current projection is kept.
    /// Returns whether the projection was applied.
    pub fn apply(&self, gfx: &mut dyn GraphicsContext, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            scene_player::sp_debug!(SOURCE, "Skipping projection for {}x{} surface", width, height);
            return false;
        }

        gfx.matrix_mode(MatrixMode::Projection);
        gfx.load_identity();
        gfx.perspective(self.fovy_degrees, width as f32 / height as f32, self.near, self.far);
        true
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
