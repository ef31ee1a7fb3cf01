#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! vkgs — resolve renderer options from defaults, `VKGS_*` variables and
//! flags, then start the Gaussian splatting renderer.

mod bootstrap;
mod cli;
mod config;
mod env;
mod logging;

use std::io::Write;

use bootstrap::{Bootstrapper, FailureBoundary, LaunchError, StubRenderer};
use cli::{ArgumentSnapshot, ParseOutcome, write_error};
use env::EnvSchema;

fn main() {
    let args = match cli::parse_args(std::env::args_os()) {
        ParseOutcome::Parsed(args) => args,
        ParseOutcome::Help(text) | ParseOutcome::Completion(text) => {
            print!("{text}");
            return;
        }
        ParseOutcome::Malformed { message, usage } => {
            fail(&LaunchError::Parse { message, usage });
        }
    };

    logging::init_logging(args.verbose);

    if let Err(err) = launch(&args) {
        fail(&err);
    }
}

fn launch(args: &ArgumentSnapshot) -> Result<(), LaunchError> {
    let resolved = config::load(args, &EnvSchema::vkgs(), env::process_vars())?;
    for line in resolved.describe() {
        log::debug!("config: {line}");
    }

    let boundary = FailureBoundary::for_build();
    log::debug!("failure boundary: {boundary:?}");

    Bootstrapper::new(resolved.into_configuration(), boundary).run(StubRenderer::new)
}

/// Report `err` to `out` and return the exit code for it.
fn conclude<W: Write>(out: &mut W, err: &LaunchError) -> i32 {
    write_error(out, err);
    err.exit_code()
}

fn fail(err: &LaunchError) -> ! {
    let stderr = std::io::stderr();
    let code = conclude(&mut stderr.lock(), err);
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn concluded(err: &LaunchError) -> (i32, String) {
        let mut out = Vec::new();
        let code = conclude(&mut out, err);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_malformed_arguments_exit_one_with_usage() {
        let err = match cli::parse_args(["vkgs", "--fullscreen"]) {
            ParseOutcome::Malformed { message, usage } => LaunchError::Parse { message, usage },
            other => panic!("expected Malformed, got {other:?}"),
        };
        let (code, text) = concluded(&err);
        assert_eq!(code, 1);
        assert!(text.contains("--fullscreen"));
        assert!(text.contains("Usage"));
    }

    #[test]
    fn test_missing_scene_exits_zero_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let args = ArgumentSnapshot {
            scene: Some(dir.path().join("nope.ply")),
            ..ArgumentSnapshot::default()
        };
        let err = launch(&args).unwrap_err();
        let (code, text) = concluded(&err);
        assert_eq!(code, 0);
        assert!(text.starts_with("Error: File does not exist: "));
        assert!(text.contains("nope.ply"));
    }

    #[test]
    fn test_contained_engine_failure_exits_zero_with_message() {
        let (code, text) = concluded(&LaunchError::Engine(anyhow::anyhow!("device lost")));
        assert_eq!(code, 0);
        assert_eq!(text, "Error: device lost\n");
    }

    #[test]
    fn test_invalid_environment_exits_two_with_message() {
        let vars = vec![("VKGS_PHYSICAL_DEVICE".to_owned(), "x".to_owned())];
        let err: LaunchError = config::load(&ArgumentSnapshot::default(), &EnvSchema::vkgs(), vars)
            .unwrap_err()
            .into();
        let (code, text) = concluded(&err);
        assert_eq!(code, 2);
        assert!(text.contains("VKGS_PHYSICAL_DEVICE=\"x\""));
    }

    #[test]
    fn test_launch_runs_stub_renderer() {
        let scene = tempfile::NamedTempFile::new().unwrap();
        let args = ArgumentSnapshot {
            scene: Some(PathBuf::from(scene.path())),
            ..ArgumentSnapshot::default()
        };
        assert!(launch(&args).is_ok());
    }
}
