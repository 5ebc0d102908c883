//! Host configuration, read from a JSON file named by `TURF_CONFIG`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use turf_core::constants::TICK_RATE;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TURF_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frames per second of the game loop.
    pub tick_rate: u32,
    pub seed: u64,
    pub save_path: PathBuf,
    /// Seconds between autosaves. 0 disables autosave.
    pub autosave_interval_secs: u64,
    /// Emit a snapshot every N ticks.
    pub snapshot_every_ticks: u32,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            seed: 42,
            save_path: PathBuf::from("saves/turf.json"),
            autosave_interval_secs: 60,
            snapshot_every_ticks: 1,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 || self.tick_rate > 240 {
            return Err(ConfigError::Invalid(format!("tick_rate {} outside 1..=240", self.tick_rate)));
        }
        if self.snapshot_every_ticks == 0 {
            return Err(ConfigError::Invalid("snapshot_every_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// Autosave period in ticks, `None` when disabled.
    pub fn autosave_every_ticks(&self) -> Option<u64> {
        (self.autosave_interval_secs > 0).then(|| self.autosave_interval_secs * self.tick_rate as u64)
    }

    /// Load from the file named by `TURF_CONFIG`. Unset means defaults. A
    /// broken file also yields defaults, with the error handed back so the
    /// caller can log it once logging is up.
    pub fn from_env() -> (Self, Option<ConfigError>) {
        match std::env::var_os(CONFIG_ENV) {
            None => (Self::default(), None),
            Some(path) => match Self::from_file(Path::new(&path)) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = AppConfig::from_json_str(r#"{"seed": 7, "log_filter": "debug"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.snapshot_every_ticks, 1);
    }

    #[test]
    fn autosave_period() {
        let config = AppConfig::default();
        assert_eq!(config.autosave_every_ticks(), Some(60 * TICK_RATE as u64));
        let off = AppConfig {
            autosave_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(off.autosave_every_ticks(), None);
    }

    #[test]
    fn file_errors_carry_the_path() {
        let dir = std::env::temp_dir().join("turf_test_config");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        let err = AppConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref path, .. } if path == &missing));

        let broken = dir.join("broken.json");
        fs::write(&broken, "{ tick_rate: ").unwrap();
        assert!(matches!(AppConfig::from_file(&broken), Err(ConfigError::Parse { .. })));

        let zero = dir.join("zero.json");
        fs::write(&zero, r#"{"tick_rate": 0}"#).unwrap();
        assert!(matches!(AppConfig::from_file(&zero), Err(ConfigError::Invalid(_))));

        let good = dir.join("good.json");
        fs::write(&good, r#"{"tick_rate": 60}"#).unwrap();
        assert_eq!(AppConfig::from_file(&good).unwrap().tick_rate, 60);

        let _ = fs::remove_dir_all(&dir);
    }
}
