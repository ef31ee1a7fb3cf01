/// User-facing failure reporting.
use std::io::Write;

use crate::bootstrap::LaunchError;

/// Report a terminal error: write it to `out` (stderr in production), then log it.
///
/// Malformed arguments are followed by the usage text and are not logged,
/// since the logger is not configured yet at that point. Everything else is
/// written even when logging is filtered off, and also logged as an error.
pub fn write_error<W: Write>(out: &mut W, err: &LaunchError) {
    match err {
        LaunchError::Parse { message, usage } => {
            let _ = write!(out, "{message}");
            if !message.ends_with('\n') {
                let _ = writeln!(out);
            }
            let _ = write!(out, "{usage}");
        }
        _ => {
            let _ = writeln!(out, "Error: {err}");
            log::error!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn reported(err: &LaunchError) -> String {
        let mut out = Vec::new();
        write_error(&mut out, err);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_missing_scene_reaches_writer_without_logger() {
        let text = reported(&LaunchError::SceneNotFound {
            path: PathBuf::from("nope.ply"),
        });
        assert_eq!(text, "Error: File does not exist: nope.ply\n");
    }

    #[test]
    fn test_engine_failure_reaches_writer() {
        let text = reported(&LaunchError::Engine(
            anyhow::anyhow!("device lost").context("running renderer"),
        ));
        assert_eq!(text, "Error: running renderer: device lost\n");
    }

    #[test]
    fn test_parse_error_is_followed_by_usage() {
        let text = reported(&LaunchError::Parse {
            message: "error: unexpected argument '--fullscreen' found".to_owned(),
            usage: "Usage: vkgs [OPTIONS] [SCENE]\n".to_owned(),
        });
        assert_eq!(
            text,
            "error: unexpected argument '--fullscreen' found\nUsage: vkgs [OPTIONS] [SCENE]\n"
        );
    }
}
