//! Logger setup.
//!
//! Lines look like `[14:03:27] [I] message`: local time of day, one letter
//! per level.
use std::io::Write;

use chrono::{Local, NaiveTime};
use log::{Level, LevelFilter};

/// Level used when neither `--verbose` nor `RUST_LOG` says otherwise.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initializes the global logger.
///
/// `verbose` raises the level to debug; `RUST_LOG`, when set, overrides
/// both. Subsequent calls are ignored.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level_for(verbose));
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] [{}] {}",
            clock(Local::now().time()),
            level_letter(record.level()),
            record.args()
        )
    });

    if builder.try_init().is_ok() {
        log::debug!("logging initialized");
    }
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LEVEL
    }
}

fn clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

fn level_letter(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}
