use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_shifts_file")]
    pub shifts_file: String,
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
    #[serde(default = "default_break_separator")]
    pub break_separator: String,
    #[serde(default = "default_sales_decimals")]
    pub sales_decimals: u32,
}

fn default_shifts_file() -> String {
    "work_shifts.csv".to_string()
}
fn default_transactions_file() -> String {
    "transactions.csv".to_string()
}
fn default_break_separator() -> String {
    "-".to_string()
}
fn default_sales_decimals() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shifts_file: default_shifts_file(),
            transactions_file: default_transactions_file(),
            break_separator: default_break_separator(),
            sales_decimals: default_sales_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rlabourratio")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rlabourratio")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlabourratio.conf")
    }

    /// Resolve `--config` (if any) against the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.break_separator.is_empty() {
            return Err(AppError::Config("break_separator must not be empty".into()));
        }
        if self.break_separator.contains(':') || self.break_separator.contains('.') {
            return Err(AppError::Config(format!(
                "break_separator {:?} clashes with the time separators ':' and '.'",
                self.break_separator
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
