//! Command line arguments and config file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::core::{EngineConfig, StdRandom};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// JSON engine config; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for piece selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (no logging without it)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Engine config from `--config`, or the default game
    pub fn engine_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(EngineConfig::default()),
        }
    }

    pub fn random_source(&self) -> StdRandom {
        match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        }
    }
}

/// Read and validate a JSON config file
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<EngineConfig> {
    let config: EngineConfig = serde_json::from_str(text).context("malformed JSON")?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["blockfall"]);
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level, LevelFilter::Info);
        assert_eq!(args.engine_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "blockfall",
            "--config",
            "game.json",
            "--seed",
            "42",
            "--log-file",
            "blockfall.log",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("game.json")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_file, Some(PathBuf::from("blockfall.log")));
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        assert!(Args::try_parse_from(["blockfall", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_parse_config_validates() {
        let config = parse_config(r#"{"rows": 16, "cols": 8}"#).unwrap();
        assert_eq!((config.rows, config.cols), (16, 8));

        let err = parse_config(r#"{"cols": 0}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::EmptyGrid { rows: 20, cols: 0 })
        ));
        assert!(parse_config("{not json").is_err());
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let err = load_config(Path::new("/nonexistent/blockfall.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/blockfall.json"));
    }
}
