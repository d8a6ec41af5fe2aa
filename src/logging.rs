//! File logging for the terminal binary.
//!
//! The game owns the screen, so log output can only go to a file.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Build the log4rs config: one file appender filtered at `level`
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(file)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid logging config")
}

/// Route the `log` facade to `path`. Call at most once per process.
pub fn init(path: &Path, level: LevelFilter) -> Result<Handle> {
    let config = file_config(path, level)?;
    log4rs::init_config(config).context("logger already initialised")
}
