/// Drive a resolved configuration through validation into the renderer.
use std::fmt;
use std::path::Path;

use anyhow::Context;

use super::boundary::FailureBoundary;
use super::errors::LaunchError;
use super::renderer::Renderer;
use crate::config::RenderConfiguration;

/// Bootstrap progress. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Unvalidated,
    Validated,
    Running,
    Succeeded,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unvalidated => "unvalidated",
            Self::Validated => "validated",
            Self::Running => "running",
            Self::Succeeded => "terminated (success)",
            Self::Failed => "terminated (failure)",
        })
    }
}

impl Stage {
    fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Unvalidated, Self::Validated | Self::Failed)
                | (Self::Validated, Self::Running | Self::Failed)
                | (Self::Running, Self::Succeeded | Self::Failed)
        )
    }
}

/// Check that `path` names an existing regular file.
///
/// # Errors
///
/// `SceneNotFound` if nothing exists at `path`, `SceneNotAFile` if it is a
/// directory or other non-file.
pub fn validate_scene(path: &Path) -> Result<(), LaunchError> {
    match path.metadata() {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(LaunchError::SceneNotAFile {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(LaunchError::SceneNotFound {
            path: path.to_path_buf(),
        }),
    }
}

/// Owns the configuration until it is handed to the renderer.
#[derive(Debug)]
pub struct Bootstrapper {
    config: RenderConfiguration,
    boundary: FailureBoundary,
    stage: Stage,
}

impl Bootstrapper {
    #[must_use]
    pub fn new(config: RenderConfiguration, boundary: FailureBoundary) -> Self {
        Self {
            config,
            boundary,
            stage: Stage::Unvalidated,
        }
    }

    /// Validate the scene, then construct, initialize and run the renderer.
    ///
    /// The factory is not called when validation fails. Under
    /// [`FailureBoundary::Propagate`] renderer errors panic instead of
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError` for a missing scene or any renderer failure.
    pub fn run<R, F>(mut self, factory: F) -> Result<(), LaunchError>
    where
        R: Renderer,
        F: FnOnce(RenderConfiguration) -> anyhow::Result<R>,
    {
        if let Err(err) = validate_scene(&self.config.scene_path) {
            self.advance(Stage::Failed);
            return Err(err);
        }
        self.advance(Stage::Validated);

        self.advance(Stage::Running);
        let Self {
            config, boundary, ..
        } = self;
        let outcome = boundary.guard(move || {
            let mut renderer = factory(config).context("constructing renderer")?;
            renderer.initialize().context("initializing renderer")?;
            renderer.run().context("running renderer")
        });

        match outcome {
            Ok(()) => {
                log_transition(Stage::Running, Stage::Succeeded);
                Ok(())
            }
            Err(err) => {
                log_transition(Stage::Running, Stage::Failed);
                Err(LaunchError::Engine(err))
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        log_transition(self.stage, next);
        self.stage = next;
    }
}

fn log_transition(from: Stage, to: Stage) {
    debug_assert!(from.can_advance_to(to), "illegal transition {from} -> {to}");
    log::debug!("bootstrap: {from} -> {to}");
}
