use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::metric::Metric;

/// Env var naming an optional JSON config file.
pub const CONFIG_ENV: &str = "HUNGER_COMPARE_CONFIG";
/// Env var overriding the CSV location.
pub const DATA_ENV: &str = "HUNGER_COMPARE_DATA";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file to load, relative to the working directory.
    pub data_path: PathBuf,
    /// Country preselected on the left-hand dropdown.
    pub primary_country: String,
    /// Country preselected on the right-hand dropdown.
    pub compare_country: String,
    pub default_metric: Metric,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/dpeda_data.csv"),
            primary_country: "India".to_string(),
            compare_country: "China".to_string(),
            default_metric: Metric::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the config from the environment.
    ///
    /// A broken config file is logged and replaced by the defaults; the data
    /// path override still applies.
    pub fn from_env() -> Self {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)).unwrap_or_else(|e| {
                log::warn!("Ignoring config file: {e:#}");
                Self::default()
            }),
            None => Self::default(),
        };
        if let Some(path) = std::env::var_os(DATA_ENV) {
            config.data_path = PathBuf::from(path);
        }
        log::debug!("Using config {config:?}");
        config
    }

    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config JSON")
    }
}
