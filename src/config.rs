//! Startup configuration.
//!
//! Read once from `$MEMORY_MATCH_CONFIG` or
//! `<user config dir>/memory-match/config.json`. A missing file means
//! defaults; the game never writes it.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

use crate::color::Rgb;

pub const CONFIG_ENV: &str = "MEMORY_MATCH_CONFIG";
const CONFIG_DIR_NAME: &str = "memory-match";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 860,
            height: 680,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Background shown until the player picks another one in Settings.
    pub background: Rgb,
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    glib::user_config_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
