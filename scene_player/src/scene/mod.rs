//! Scene module - scene identifiers and completion policies.

mod scene_type;
mod completion;

pub use scene_type::SceneType;
pub use completion::{CompletionPolicy, ElapsedLimit, FrameBudget, SceneCompletion};
