// Host configuration loading and parsing (draftroom.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "draftroom.toml";

const DEFAULT_LOG_PATH: &str = "logs/draft-room.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Raw deserialization target for the entire draftroom.toml file.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    draft: DraftSection,
    #[serde(default)]
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DraftSection {
    /// Fixed shuffle seed for reproducible drafts. Omit for OS entropy.
    seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LogSection {
    path: Option<String>,
}

/// The assembled host configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            log_path: DEFAULT_LOG_PATH.to_string(),
        }
    }
}

/// Load the config from `draftroom.toml` in the working directory.
///
/// A missing file is not an error; every setting has a default.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Config {
        seed: file.draft.seed,
        log_path: file.log.path.unwrap_or_else(|| DEFAULT_LOG_PATH.to_string()),
    })
}
