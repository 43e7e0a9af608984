/// Scene player configuration
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Application name (diagnostics only)
    pub app_name: String,
    /// Drawing target size announced to each renderer on activation
    pub surface_size: (u32, u32),
    /// Restart from the first scene after the last one finishes
    pub loop_scenes: bool,
    /// Force an activation to end after this many drawn frames
    pub max_frames_per_activation: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            app_name: "Scene Player".to_string(),
            surface_size: (800, 600),
            loop_scenes: false,
            max_frames_per_activation: None,
        }
    }
}
