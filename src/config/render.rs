use std::path::PathBuf;

/// Scene loaded when no positional argument is given.
pub const DEFAULT_SCENE: &str = "scene.ply";

/// Everything the renderer needs to start. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfiguration {
    pub validation_layers_enabled: bool,
    /// `None` lets the renderer pick a device.
    pub physical_device_id: Option<u8>,
    pub immediate_swapchain_enabled: bool,
    pub gui_enabled: bool,
    pub scene_path: PathBuf,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            validation_layers_enabled: false,
            physical_device_id: None,
            immediate_swapchain_enabled: false,
            gui_enabled: true,
            scene_path: PathBuf::from(DEFAULT_SCENE),
        }
    }
}
