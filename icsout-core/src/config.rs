//! Global icsout configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{IcsoutError, IcsoutResult};

/// Configuration at ~/.config/icsout/config.toml
///
/// Every key is optional; a missing file yields the defaults.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct IcsoutConfig {
    /// Calendar used when no `--file` is given.
    pub default_file: Option<PathBuf>,
}

impl IcsoutConfig {
    pub fn config_path() -> IcsoutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsoutError::Config("Could not determine config directory".into()))?
            .join("icsout");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> IcsoutResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> IcsoutResult<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| IcsoutError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| IcsoutError::Config(e.to_string()))
    }

    /// `default_file` with a leading `~` expanded.
    pub fn default_file(&self) -> Option<PathBuf> {
        self.default_file.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        })
    }
}
