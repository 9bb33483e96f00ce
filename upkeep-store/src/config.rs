//! Configuration loading for the UI state manager.
//!
//! All fields are required. Programmatic callers that never read a file can
//! use the `Default` impls, which carry the stock durations and limits.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use upkeep_core::{NotificationKind, ThemeMode};

pub const CONFIG_ENV_VAR: &str = "UPKEEP_UI_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// JSON file holding persisted preferences.
    pub preferences_path: PathBuf,
    /// Preference key the theme mode is stored under.
    pub theme_key: String,
    /// Theme applied when nothing is stored yet.
    pub fallback_theme: ThemeMode,
    pub log_format: LogFormat,
    pub notifications: NotificationDurations,
    pub comparison: ComparisonConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Display time per notification kind, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationDurations {
    pub success_ms: u64,
    pub error_ms: u64,
    pub warning_ms: u64,
    pub info_ms: u64,
}

impl Default for NotificationDurations {
    fn default() -> Self {
        Self {
            success_ms: 3000,
            error_ms: 5000,
            warning_ms: 4000,
            info_ms: 3000,
        }
    }
}

impl NotificationDurations {
    pub fn for_kind(&self, kind: NotificationKind) -> u64 {
        match kind {
            NotificationKind::Success => self.success_ms,
            NotificationKind::Error => self.error_ms,
            NotificationKind::Warning => self.warning_ms,
            NotificationKind::Info => self.info_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    pub max_items: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self { max_items: 4 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from("upkeep-preferences.json"),
            theme_key: "theme".to_string(),
            fallback_theme: ThemeMode::Light,
            log_format: LogFormat::Pretty,
            notifications: NotificationDurations::default(),
            comparison: ComparisonConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or UPKEEP_UI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl UiConfig {
    /// Resolve the path from `--config` or the environment, then parse and
    /// validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args(std::env::args().skip(1)).or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_path(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preferences_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "preferences_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme_key",
                reason: "must not be empty".to_string(),
            });
        }
        let durations = [
            ("notifications.success_ms", self.notifications.success_ms),
            ("notifications.error_ms", self.notifications.error_ms),
            ("notifications.warning_ms", self.notifications.warning_ms),
            ("notifications.info_ms", self.notifications.info_ms),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be > 0".to_string(),
                });
            }
        }
        if self.comparison.max_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "comparison.max_items",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from)
}

pub fn config_path_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
