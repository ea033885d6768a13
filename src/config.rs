// Configuration file loading

use crate::auth::DEFAULT_SUBMIT_DELAY;
use crate::page::{DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE};
use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CARHUB_CONFIG";
/// Environment variable naming a catalog data file
pub const DATA_ENV: &str = "CARHUB_DATA";

/// Contents of `config.yml`; every field is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub data_path: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub page_delay_ms: Option<u64>,
    pub submit_delay_ms: Option<u64>,
    pub color: Option<bool>,
}

/// Settings after defaults, file and environment are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog document; `None` means the bundled catalog
    pub data_path: Option<PathBuf>,
    pub page_size: usize,
    pub page_delay: Duration,
    pub submit_delay: Duration,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            color: true,
        }
    }
}

impl Config {
    /// Load with precedence: explicit path, then `CARHUB_CONFIG`, then the user config dir.
    ///
    /// A missing file means defaults. A file that exists but cannot be read or parsed is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(default_config_path),
        };

        let file = match path {
            Some(p) => load_config_file(&p)?,
            None => None,
        };

        let mut config = Self::merge(file.unwrap_or_default())?;
        if let Some(data) = std::env::var_os(DATA_ENV) {
            config.data_path = Some(PathBuf::from(data));
        }
        Ok(config)
    }

    /// Apply file values over defaults
    pub fn merge(file: ConfigFile) -> Result<Self> {
        let defaults = Self::default();

        let page_size = file.page_size.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(eyre!("page_size must be at least 1"));
        }

        Ok(Self {
            data_path: file.data_path.or(defaults.data_path),
            page_size,
            page_delay: file.page_delay_ms.map(Duration::from_millis).unwrap_or(defaults.page_delay),
            submit_delay: file
                .submit_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            color: file.color.unwrap_or(defaults.color),
        })
    }
}

/// `<config dir>/carhub/config.yml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carhub").join("config.yml"))
}

/// Read a config file; `Ok(None)` when it does not exist
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        debug!(file = ?path, "No config file, using defaults");
        return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
    if content.trim().is_empty() {
        return Ok(Some(ConfigFile::default()));
    }

    let file: ConfigFile =
        serde_yaml::from_str(&content).with_context(|| format!("Invalid YAML in config file {:?}", path))?;

    debug!(file = ?path, "Loaded config file");
    Ok(Some(file))
}
