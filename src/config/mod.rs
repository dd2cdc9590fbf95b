//! Configuration file handling for voice-assets
//!
//! Settings come from three layers, highest priority first:
//! - command line flags (which clap also fills from `VOICE_ASSETS_*` variables)
//! - `voice-assets.yaml` in the working directory, or the file given with `--config`
//! - built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid, config_parse_failed, config_read_failed};
use crate::provision::paths;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "voice-assets.yaml";

/// Environment variable overriding the bundle version
pub const VERSION_ENV: &str = "VOICE_ASSETS_VERSION";

/// Archive used when none is configured
pub const DEFAULT_ARCHIVE: &str = "assistant.zip";

/// Contents of `voice-assets.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Application-private storage root; the bundle lives in `<data_dir>/snips`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Bundle version; changing it forces re-extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Path of the zip archive, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
}

impl FileConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a config file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let mut config = Self::from_yaml(&content).map_err(|e| {
            config_parse_failed(path.display().to_string(), e.to_string())
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.data_dir = config.data_dir.map(|p| base.join(p));
        config.archive = config.archive.map(|p| base.join(p));
        Ok(config)
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub version: Option<String>,
    pub archive: Option<PathBuf>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub version: String,
    pub archive: PathBuf,
}

impl Settings {
    /// Layer overrides over the config file over defaults
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        let file = match &overrides.config {
            Some(path) => FileConfig::load(path)?,
            None if Path::new(CONFIG_FILE).is_file() => FileConfig::load(Path::new(CONFIG_FILE))?,
            None => FileConfig::default(),
        };
        Self::layer(overrides, file)
    }

    fn layer(overrides: &Overrides, file: FileConfig) -> Result<Self> {
        let data_dir = match overrides.data_dir.clone().or(file.data_dir) {
            Some(dir) => dir,
            None => paths::data_dir()?,
        };
        if data_dir.as_os_str().is_empty() {
            return Err(config_invalid("data_dir must not be empty"));
        }

        let version = overrides
            .version
            .clone()
            .or(file.version)
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
        paths::validate_version(&version)?;

        let archive = overrides
            .archive
            .clone()
            .or(file.archive)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE));

        Ok(Self {
            data_dir,
            version,
            archive,
        })
    }

    /// Bundle root, `<data_dir>/snips`
    pub fn bundle_dir(&self) -> PathBuf {
        paths::bundle_dir(&self.data_dir)
    }
}
