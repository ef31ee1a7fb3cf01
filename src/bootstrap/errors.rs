/// Errors that end the launcher.
use std::path::PathBuf;

use thiserror::Error;

use crate::env::EnvError;

/// Every way startup can fail. All are terminal.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Malformed command line.
    #[error("{message}")]
    Parse {
        /// clap's rendered message.
        message: String,
        /// Usage text printed after the message.
        usage: String,
    },

    /// A declared `VKGS_` variable holds text of the wrong type.
    #[error(transparent)]
    Validation(#[from] EnvError),

    /// The scene path names nothing on disk.
    #[error("File does not exist: {}", path.display())]
    SceneNotFound {
        /// The resolved scene path.
        path: PathBuf,
    },

    /// The scene path exists but is not a regular file.
    #[error("Scene is not a regular file: {}", path.display())]
    SceneNotAFile {
        /// The resolved scene path.
        path: PathBuf,
    },

    /// The renderer failed to construct, initialize or run.
    #[error("{0:#}")]
    Engine(anyhow::Error),
}

/// Exit code mapping for `LaunchError` variants.
impl LaunchError {
    /// Return the process exit code for this error.
    ///
    /// A missing scene and a contained renderer failure exit 0, like a
    /// clean run; only bad input from the user is a non-zero exit.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse { .. } => 1,
            Self::Validation(_) => 2,
            Self::SceneNotFound { .. } | Self::SceneNotAFile { .. } | Self::Engine(_) => 0,
        }
    }
}
