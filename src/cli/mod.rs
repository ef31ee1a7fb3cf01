/// CLI layer: argument parsing and user-facing error output.
pub mod args;
pub mod output;

pub use args::{ArgumentSnapshot, ParseOutcome, parse_args};
pub use output::write_error;
