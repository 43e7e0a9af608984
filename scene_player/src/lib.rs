/*!
# Scene Player

Host-side contract for pluggable renderers driven frame by frame through a
sequence of scenes.

Renderers implement one trait and never know about each other. The host
owns the graphics context, activates one renderer at a time for a scene, and
moves on when the renderer reports that the scene is finished.

## Architecture

- **Renderer**: lifecycle trait every renderer implements
- **GraphicsContext**: fixed-function graphics state the renderers draw through
- **SceneCompletion**: frame-budget / elapsed-time termination policies
- **RendererHost**: call-order guard around one renderer
- **ScenePlayer**: scene sequencer consuming renderer results
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod renderer;
pub mod scene;
pub mod player;

// Main namespace module
pub mod sp {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::diagnostics::Diagnostics;

    // Renderer contract
    pub use crate::renderer::{Renderer, RendererResult, RenderParams};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Renderer contract and graphics collaborator
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scenes and completion policies
    pub mod scene {
        pub use crate::scene::*;
    }

    // Host side
    pub mod player {
        pub use crate::player::*;
    }
}

// Re-export math and window crates at crate root
pub use glam;
pub use winit;
