/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// vkgs — Vulkan Gaussian splatting viewer.
#[derive(Debug, Parser)]
#[command(name = "vkgs", about = "Vulkan Splatting", version)]
pub struct Cli {
    /// Enable Vulkan validation layers.
    #[arg(long = "validation")]
    pub validation: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Select physical device by index.
    #[arg(short = 'd', long = "device", value_name = "INDEX")]
    pub device: Option<u8>,

    /// Set swapchain mode to immediate (`VK_PRESENT_MODE_IMMEDIATE_KHR`).
    #[arg(short, long)]
    pub immediate_swapchain: bool,

    /// Disable GUI.
    #[arg(long)]
    pub no_gui: bool,

    /// Path to scene file [default: scene.ply].
    #[arg(value_name = "SCENE")]
    pub scene: Option<PathBuf>,

    /// Print the flags starting with PREFIX, one per line (shell completion).
    #[arg(long, hide = true, value_name = "PREFIX", allow_hyphen_values = true)]
    pub complete: Option<String>,
}

/// What the user actually typed, with "not supplied" kept distinct from defaults.
///
/// Boolean flags can only be switched on from the command line, so an
/// untyped flag is `None` rather than `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSnapshot {
    pub validation: Option<bool>,
    pub device: Option<u8>,
    pub immediate_swapchain: Option<bool>,
    pub no_gui: bool,
    pub verbose: bool,
    pub scene: Option<PathBuf>,
}

impl From<Cli> for ArgumentSnapshot {
    fn from(cli: Cli) -> Self {
        Self {
            validation: cli.validation.then_some(true),
            device: cli.device,
            immediate_swapchain: cli.immediate_swapchain.then_some(true),
            no_gui: cli.no_gui,
            verbose: cli.verbose,
            scene: cli.scene,
        }
    }
}

/// Result of parsing the raw process arguments.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Arguments were well-formed.
    Parsed(ArgumentSnapshot),
    /// `--help` or `--version` was requested; print the text and exit 0.
    Help(String),
    /// `--complete` was requested; print the candidates and exit 0.
    Completion(String),
    /// Arguments were rejected.
    Malformed {
        /// clap's rendered error message.
        message: String,
        /// Full usage text to show after the message.
        usage: String,
    },
}

/// Parse raw process arguments (including the binary name).
#[must_use]
pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(mut cli) => match cli.complete.take() {
            Some(prefix) => ParseOutcome::Completion(completions(&prefix)),
            None => ParseOutcome::Parsed(cli.into()),
        },
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                ParseOutcome::Help(err.render().to_string())
            }
            _ => ParseOutcome::Malformed {
                message: err.render().to_string(),
                usage: Cli::command().render_help().to_string(),
            },
        },
    }
}

/// Every visible flag spelling that starts with `prefix`, sorted, newline-terminated.
fn completions(prefix: &str) -> String {
    let mut cmd = Cli::command();
    cmd.build();

    let mut spellings: Vec<String> = cmd
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .flat_map(|arg| {
            let long = arg.get_long().map(|l| format!("--{l}"));
            let short = arg.get_short().map(|s| format!("-{s}"));
            long.into_iter().chain(short)
        })
        .filter(|spelling| spelling.starts_with(prefix))
        .collect();
    spellings.sort();

    spellings.into_iter().map(|s| s + "\n").collect()
}
