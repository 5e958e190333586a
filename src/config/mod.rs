use crate::errors::{AppError, AppResult};
use crate::models::weights::WeighMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persistent run configuration: party names, classification patterns,
/// weights, and weighing strategy. Any of these can be overridden per run
/// from the command line; the core never reads this struct directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub party_a_name: String,
    pub party_a_pattern: String,
    pub party_b_name: String,
    pub party_b_pattern: String,
    pub weekday_weight: f64,
    pub weekend_weight: f64,
    #[serde(default)]
    pub mode: WeighMode,
    #[serde(default)]
    pub weekend_tally: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            party_a_name: "P.".to_string(),
            party_a_pattern: r"\bp\.?\s+ma\s+deti".to_string(),
            party_b_name: "V.".to_string(),
            party_b_pattern: r"\bv\.?\s+ma\s+deti".to_string(),
            weekday_weight: 1.0,
            weekend_weight: 1.5,
            mode: WeighMode::Fractional,
            weekend_tally: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("caretally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".caretally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("caretally.conf")
    }

    /// Load configuration. An explicit path must exist and parse; the
    /// default path falls back to defaults when the file is missing.
    pub fn load_or_default(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => Self::read_file(path),
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::read_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the given path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the config directory and write a default config file.
    /// In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if !is_test {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}
