//! # Configuration
//!
//! dirhub configuration is managed by [`confique`], which handles layered loading
//! from environment variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `DIRHUB_SIMULATE_LATENCY`, `DIRHUB_WRITE_MODE`, etc.
//! 2. **Config file**: `dirhub.toml`, either passed explicitly or found in the
//!    OS config directory by the CLI. The file is always read as TOML, whatever
//!    its extension.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `simulate_latency` | `DIRHUB_SIMULATE_LATENCY` | `true` | Delay each service call |
//! | `latency_scale` | `DIRHUB_LATENCY_SCALE` | `1.0` | Multiplier for every delay |
//! | `write_mode` | `DIRHUB_WRITE_MODE` | `discard` | `discard` or `in-memory` |
//! | `fixtures_dir` | `DIRHUB_FIXTURES_DIR` | unset | Directory with the three fixture files |

use crate::error::{DirhubError, Result};
use crate::store::WriteMode;
use confique::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "dirhub.toml";

fn parse_write_mode(value: &str) -> Result<WriteMode> {
    value.parse().map_err(DirhubError::Config)
}

/// Configuration for dirhub, stored in `dirhub.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirhubConfig {
    /// Suspend every service call for its simulated latency.
    #[config(env = "DIRHUB_SIMULATE_LATENCY", default = true)]
    pub simulate_latency: bool,

    /// Factor applied to every simulated delay.
    #[config(env = "DIRHUB_LATENCY_SCALE", default = 1.0)]
    pub latency_scale: f64,

    /// What happens to directory writes ("discard" or "in-memory").
    #[config(env = "DIRHUB_WRITE_MODE", parse_env = parse_write_mode, default = "discard")]
    pub write_mode: WriteMode,

    /// Directory holding directories.json, categories.json and items.json.
    /// When absent the embedded fixtures are used.
    #[config(env = "DIRHUB_FIXTURES_DIR")]
    pub fixtures_dir: Option<PathBuf>,
}

impl Default for DirhubConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            latency_scale: 1.0,
            write_mode: WriteMode::Discard,
            fixtures_dir: None,
        }
    }
}

impl DirhubConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.latency_scale.is_finite() || self.latency_scale < 0.0 {
            return Err(DirhubError::Config(format!(
                "latency_scale must be a non-negative number, got {}",
                self.latency_scale
            )));
        }
        Ok(())
    }
}

/// Load configuration from the environment, then `file` when given, then defaults.
///
/// An explicitly named file must exist.
pub fn load_config(file: Option<&Path>) -> Result<DirhubConfig> {
    let mut builder = DirhubConfig::builder().env();
    if let Some(path) = file {
        if !path.is_file() {
            return Err(DirhubError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let layer = File::with_format(path, FileFormat::Toml).required().load()?;
        builder = builder.preloaded(layer);
    }
    let config = builder.load()?;
    config.validate()?;
    debug!(
        simulate_latency = config.simulate_latency,
        latency_scale = config.latency_scale,
        write_mode = %config.write_mode,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DirhubConfig::default();
        assert!(config.simulate_latency);
        assert_eq!(config.latency_scale, 1.0);
        assert_eq!(config.write_mode, WriteMode::Discard);
        assert!(config.fixtures_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_scale_rejected() {
        let config = DirhubConfig {
            latency_scale: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DirhubError::Config(_))));
    }

    #[test]
    fn test_infinite_scale_rejected() {
        let config = DirhubConfig {
            latency_scale: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_values_are_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "simulate_latency = false\nlatency_scale = 0.25\nwrite_mode = \"in-memory\""
        )
        .unwrap();

        let config = DirhubConfig::builder().file(file.path()).load().unwrap();
        assert!(!config.simulate_latency);
        assert_eq!(config.latency_scale, 0.25);
        assert_eq!(config.write_mode, WriteMode::InMemory);
    }

    #[test]
    fn test_file_without_extension_is_read_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("myconf");
        fs::write(&path, "latency_scale = 0.5\nwrite_mode = \"memory\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.latency_scale, 0.5);
        assert_eq!(config.write_mode, WriteMode::InMemory);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE_NAME);
        match load_config(Some(&missing)) {
            Err(DirhubError::Config(msg)) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_write_mode_from_env_text() {
        assert_eq!(parse_write_mode("in-memory").unwrap(), WriteMode::InMemory);
        assert!(parse_write_mode("sqlite").is_err());
    }
}
