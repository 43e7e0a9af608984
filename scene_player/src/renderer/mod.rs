/// Renderer module - renderer contract and graphics collaborator

// Module declarations
pub mod renderer;
pub mod graphics;
pub mod software_graphics;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use graphics::*;
pub use software_graphics::*;

#[cfg(test)]
pub mod mock_renderer;
