use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::theme::Theme;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "telkomaset";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub sync: SyncConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub theme: Theme,
}

/// Favorites API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the TelkomAset web application
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Raw `Cookie` header value of a logged-in session
    pub session_cookie: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            session_cookie: None,
        }
    }
}

/// Background timers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Favorite count poll interval
    pub count_poll_secs: u64,
    /// Full favorites reload interval (also picks up rental status changes)
    pub resync_secs: u64,
    /// Delay between a favorites load and the heart reconcile pass
    pub reconcile_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            count_poll_secs: 30,
            resync_secs: 60,
            reconcile_delay_ms: 300,
        }
    }
}

/// UI customization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays in the status bar
    pub status_ttl_secs: u64,
    /// Prefix for prices, e.g. "Rp"
    pub currency_prefix: String,
    /// Thousands grouping separator for prices
    pub thousands_separator: String,
    /// Show the debug pane on startup
    pub show_debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_ttl_secs: 5,
            currency_prefix: "Rp".to_string(),
            thousands_separator: ".".to_string(),
            show_debug: false,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    /// Log file (empty = `<cache_dir>/telkomaset/telkomaset.log`)
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR_NAME);

        fs::create_dir_all(&config_dir)
            .context("Failed to create config directory")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .context("Failed to read config file")?;

            let mut config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            config.theme = config.theme.resolved();

            Ok(config)
        } else {
            // Create default config and save it
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Resolve the log file location
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(ref file) = self.logging.file {
            if !file.is_empty() {
                return Ok(PathBuf::from(file));
            }
        }

        let cache_dir = dirs::cache_dir()
            .context("Failed to get cache directory")?
            .join(APP_DIR_NAME);
        fs::create_dir_all(&cache_dir)
            .context("Failed to create cache directory")?;

        Ok(cache_dir.join("telkomaset.log"))
    }

    /// Generate example config content for documentation
    pub fn example_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
