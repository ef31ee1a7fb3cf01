/// The renderer contract the launcher drives.
use crate::config::RenderConfiguration;

/// A rendering engine: constructed from a configuration, then initialized and run.
pub trait Renderer {
    /// Acquire devices, build pipelines, load the scene.
    ///
    /// # Errors
    ///
    /// Any failure that prevents rendering from starting.
    fn initialize(&mut self) -> anyhow::Result<()>;

    /// Render until the user quits. Blocks.
    ///
    /// # Errors
    ///
    /// Any failure that aborts rendering.
    fn run(&mut self) -> anyhow::Result<()>;
}

/// Backend used when no GPU renderer is linked into the binary.
///
/// Logs the configuration it receives and returns immediately.
#[derive(Debug)]
pub struct StubRenderer {
    config: RenderConfiguration,
}

impl StubRenderer {
    /// # Errors
    ///
    /// Never fails; the signature matches the renderer factory contract.
    #[allow(clippy::unnecessary_wraps)]
    pub fn new(config: RenderConfiguration) -> anyhow::Result<Self> {
        Ok(Self { config })
    }
}

impl Renderer for StubRenderer {
    fn initialize(&mut self) -> anyhow::Result<()> {
        let device = self
            .config
            .physical_device_id
            .map_or_else(|| "auto".to_owned(), |id| id.to_string());
        log::info!(
            "Renderer backend not linked; scene {} (device {device}, validation {}, immediate swapchain {}, gui {})",
            self.config.scene_path.display(),
            self.config.validation_layers_enabled,
            self.config.immediate_swapchain_enabled,
            self.config.gui_enabled,
        );
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        log::info!("Nothing to render, exiting");
        Ok(())
    }
}
