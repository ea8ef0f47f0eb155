use crate::core::InvalidRecordPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::WeekStart;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where exports land when `--out` is not given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
    /// Skip records with unusable timestamps instead of failing the load.
    #[serde(default)]
    pub skip_invalid_records: bool,
    #[serde(default)]
    pub week_start: WeekStart,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_export_prefix() -> String {
    "Timeline_".to_string()
}
fn default_pretty_json() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            export_prefix: default_export_prefix(),
            pretty_json: default_pretty_json(),
            skip_invalid_records: false,
            week_start: WeekStart::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeline")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeline.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !is_test {
            if let Some(dir) = path.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }

            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn record_policy(&self) -> InvalidRecordPolicy {
        if self.skip_invalid_records {
            InvalidRecordPolicy::Skip
        } else {
            InvalidRecordPolicy::Abort
        }
    }
}
