/// Merge argument and environment snapshots over the built-in defaults.
use std::path::PathBuf;

use super::render::RenderConfiguration;
use super::source::{Source, layer};
use crate::cli::ArgumentSnapshot;
use crate::env::{
    EnvError, EnvSchema, EnvSnapshot, IMMEDIATE_SWAPCHAIN, PHYSICAL_DEVICE, VALIDATION_LAYERS,
};

/// A configuration that remembers which layer supplied each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub validation_layers_enabled: Source<bool>,
    pub physical_device_id: Source<Option<u8>>,
    pub immediate_swapchain_enabled: Source<bool>,
    pub gui_enabled: Source<bool>,
    pub scene_path: Source<PathBuf>,
}

/// Resolve every field independently: argument, then environment, then default.
///
/// GUI and scene path have no environment variable; only the command line
/// can change them.
#[must_use]
pub fn resolve(args: &ArgumentSnapshot, env: &EnvSnapshot) -> ResolvedConfig {
    let defaults = RenderConfiguration::default();

    ResolvedConfig {
        validation_layers_enabled: layer(
            defaults.validation_layers_enabled,
            env.get_bool(VALIDATION_LAYERS),
            args.validation,
        ),
        physical_device_id: layer(
            defaults.physical_device_id,
            env.get_u8(PHYSICAL_DEVICE).map(Some),
            args.device.map(Some),
        ),
        immediate_swapchain_enabled: layer(
            defaults.immediate_swapchain_enabled,
            env.get_bool(IMMEDIATE_SWAPCHAIN),
            args.immediate_swapchain,
        ),
        gui_enabled: layer(defaults.gui_enabled, None, args.no_gui.then_some(false)),
        scene_path: layer(defaults.scene_path, None, args.scene.clone()),
    }
}

/// Validate the environment against `schema`, then resolve.
///
/// Unrecognized prefixed variables are logged as warnings.
///
/// # Errors
///
/// Returns `EnvError` if any declared variable fails validation.
pub fn load<I>(
    args: &ArgumentSnapshot,
    schema: &EnvSchema,
    vars: I,
) -> Result<ResolvedConfig, EnvError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env = schema.parse(vars)?;
    for unknown in env.unrecognized() {
        match &unknown.suggestion {
            Some(declared) => log::warn!(
                "Ignoring unknown variable {} (did you mean {declared}?)",
                unknown.name
            ),
            None => log::warn!("Ignoring unknown variable {}", unknown.name),
        }
    }
    Ok(resolve(args, &env))
}

impl ResolvedConfig {
    /// One `field = value (origin)` line per field, for debug logging.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let device = match self.physical_device_id.value() {
            Some(id) => id.to_string(),
            None => "auto".to_owned(),
        };
        vec![
            format!(
                "validation_layers = {} ({})",
                self.validation_layers_enabled.value(),
                self.validation_layers_enabled.origin()
            ),
            format!(
                "physical_device = {device} ({})",
                self.physical_device_id.origin()
            ),
            format!(
                "immediate_swapchain = {} ({})",
                self.immediate_swapchain_enabled.value(),
                self.immediate_swapchain_enabled.origin()
            ),
            format!(
                "gui = {} ({})",
                self.gui_enabled.value(),
                self.gui_enabled.origin()
            ),
            format!(
                "scene = {} ({})",
                self.scene_path.value().display(),
                self.scene_path.origin()
            ),
        ]
    }

    /// Drop the provenance and keep the values.
    #[must_use]
    pub fn into_configuration(self) -> RenderConfiguration {
        RenderConfiguration {
            validation_layers_enabled: self.validation_layers_enabled.into_value(),
            physical_device_id: self.physical_device_id.into_value(),
            immediate_swapchain_enabled: self.immediate_swapchain_enabled.into_value(),
            gui_enabled: self.gui_enabled.into_value(),
            scene_path: self.scene_path.into_value(),
        }
    }
}
