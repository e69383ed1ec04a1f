//! Log subscriber setup
//!
//! The level comes from the `-v` count only. Events go to stderr, or to a
//! file when the terminal is busy drawing the window.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Maps a `-v` count to a level: warn, info, debug, then trace
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter for a `-v` count
#[must_use]
pub fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::default().add_directive(level_for(verbosity).into())
}

/// Installs the global subscriber
pub fn init(verbosity: u8, log_file: Option<&Path>) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| AppError::logging(e.to_string()))
}
