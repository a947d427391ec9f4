use crate::core::{DEFAULT_LOOKBACK_WINDOW, DEFAULT_READ_LIMIT, DayClosePolicy, DayClosePolicyKind};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_work_duration_to_minutes;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default = "default_lookback_window")]
    pub lookback_window: usize,
    #[serde(default = "default_read_limit")]
    pub read_limit: usize,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    #[serde(default)]
    pub day_close_policy: DayClosePolicyKind,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ledger() -> String {
    Config::ledger_file().to_string_lossy().to_string()
}
fn default_lookback_window() -> usize {
    DEFAULT_LOOKBACK_WINDOW
}
fn default_read_limit() -> usize {
    DEFAULT_READ_LIMIT
}
fn default_daily_target() -> String {
    "8h".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            lookback_window: default_lookback_window(),
            read_limit: default_read_limit(),
            daily_target: default_daily_target(),
            day_close_policy: DayClosePolicyKind::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimeledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeledger.conf")
    }

    /// Return the default path of the ledger file
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("timelog.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    pub fn daily_target_minutes(&self) -> AppResult<i64> {
        parse_work_duration_to_minutes(&self.daily_target)
            .map_err(|_| AppError::Config(format!("invalid daily_target '{}'", self.daily_target)))
    }

    pub fn day_close(&self) -> AppResult<Box<dyn DayClosePolicy>> {
        Ok(self.day_close_policy.build(self.daily_target_minutes()?))
    }
}
