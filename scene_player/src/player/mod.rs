//! Player module - host side of the renderer contract.
//!
//! The player owns the renderers and the frame loop. Renderers never see
//! each other; the player activates them one at a time.

mod config;
mod frame_clock;
mod renderer_host;
mod scene_player;

pub use config::PlayerConfig;
pub use frame_clock::FrameClock;
pub use renderer_host::{RendererHost, RendererState};
pub use scene_player::{
    ScenePlayer, RendererKey, PlayerStatus, ActivationReport, ActivationOutcome,
};
