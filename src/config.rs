//! # Configuration
//!
//! Loads defaults for the command line from `prayer-config.toml`: the
//! calculation method, an optional home location and the path of the zip
//! code data file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::zcta::DEFAULT_ZCTA_PATH;

pub const DEFAULT_CONFIG_PATH: &str = "prayer-config.toml";

/// Missing sections and keys take their default values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub calculation: CalculationConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Registry name, e.g. "ISNA" or "Makkah"
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Degrees, used when no location is given on the command line
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Whole hours; the system offset is used when unset
    pub utc_offset: Option<i32>,
    pub zcta_path: PathBuf,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        CalculationConfig {
            method: "ISNA".to_string(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            latitude: None,
            longitude: None,
            utc_offset: None,
            zcta_path: PathBuf::from(DEFAULT_ZCTA_PATH),
        }
    }
}

impl Config {
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(
                        "loaded {} (method {})",
                        path.display(),
                        config.calculation.method
                    );
                    config
                }
                Err(e) => {
                    warn!("invalid config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
