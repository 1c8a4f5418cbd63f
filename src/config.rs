//! Configuration file support.
//!
//! Reads `lekcionaro.toml`:
//!
//! ```toml
//! [tables]
//! lectionary = "data/lectionary.json"
//! psalter = "data/psalter.json"
//!
//! [range]
//! days = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::lectionary::Lectionary;
use crate::psalter::Psalter;

pub const FILE_NAME: &str = "lekcionaro.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tables: TableSettings,
    #[serde(default)]
    pub range: RangeSettings,
}

/// Where the data tables live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_lectionary_path")]
    pub lectionary: PathBuf,
    #[serde(default)]
    pub psalter: Option<PathBuf>,
}

/// Defaults for listing a range of dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSettings {
    /// Days listed after the start date when no end date is given
    #[serde(default = "default_range_days")]
    pub days: u32,
}

fn default_lectionary_path() -> PathBuf {
    PathBuf::from("data/lectionary.json")
}

fn default_range_days() -> u32 {
    7
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            lectionary: default_lectionary_path(),
            psalter: None,
        }
    }
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            days: default_range_days(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Relative table paths are taken relative to the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        if let Some(dir) = path.parent() {
            config.tables.rebase(dir);
        }
        debug!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Loads configuration from the first of these that exists:
    ///
    /// 1. `lekcionaro.toml`
    /// 2. `config/lekcionaro.toml`
    /// 3. `../lekcionaro.toml`
    pub fn from_default_location() -> std::result::Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(FILE_NAME),
            Path::new("config").join(FILE_NAME),
            Path::new("..").join(FILE_NAME),
        ];
        search_paths
            .iter()
            .find(|p| p.exists())
            .ok_or(ConfigError::NotFound)
            .and_then(Self::from_file)
    }

    pub fn load_lectionary(&self) -> Result<Lectionary> {
        Ok(Lectionary::from_path(&self.tables.lectionary)?)
    }

    /// `None` when no psalter is configured.
    pub fn load_psalter(&self) -> Result<Option<Psalter>> {
        match &self.tables.psalter {
            Some(path) => Ok(Some(Psalter::from_path(path)?)),
            None => Ok(None),
        }
    }
}

impl TableSettings {
    fn rebase(&mut self, dir: &Path) {
        if self.lectionary.is_relative() {
            self.lectionary = dir.join(&self.lectionary);
        }
        if let Some(psalter) = self.psalter.as_mut().filter(|p| p.is_relative()) {
            *psalter = dir.join(&*psalter);
        }
    }
}
