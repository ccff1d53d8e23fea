use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Usage limits applied to collected samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_memory_percent")]
    pub memory_percent: f64,
    #[serde(default = "default_disk_percent")]
    pub disk_percent: f64,
}

/// What the collector samples and where it writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    /// Raw string with tilde; expand with `expand_path` at point of use.
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    #[serde(default = "default_launcher_path")]
    pub launcher_path: String,
    #[serde(default = "default_disk_mount")]
    pub disk_mount: String,
}

/// Log discovery settings for report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory the shell starts in, if any.
    #[serde(default)]
    pub default_dir: Option<String>,
}

// --- Defaults ---

const fn default_memory_percent() -> f64 {
    80.0
}

const fn default_disk_percent() -> f64 {
    80.0
}

fn default_services() -> Vec<String> {
    vec![
        "updpi.service".into(),
        "upp.service".into(),
        "upload.service".into(),
        "logtar.service".into(),
        "tnlinfo_proxy.service".into(),
    ]
}

fn default_csv_path() -> String {
    "system_check_report.csv".into()
}

fn default_launcher_path() -> String {
    "open_report.bat".into()
}

fn default_disk_mount() -> String {
    "/".into()
}

fn default_extensions() -> Vec<String> {
    vec![".log".into(), ".log.txt".into()]
}

// --- Default impls ---

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            memory_percent: default_memory_percent(),
            disk_percent: default_disk_percent(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
            csv_path: default_csv_path(),
            launcher_path: default_launcher_path(),
            disk_mount: default_disk_mount(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            default_dir: None,
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        std::fs::write(path, self.to_toml()?).context("Failed to write config file")?;
        Ok(())
    }

    /// Effective configuration rendered as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Default location: `<config dir>/hostcheck/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("hostcheck").join("config.toml"))
    }

    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        expand_path(&self.collector.csv_path)
    }

    #[must_use]
    pub fn launcher_path(&self) -> PathBuf {
        expand_path(&self.collector.launcher_path)
    }

    #[must_use]
    pub fn default_dir(&self) -> Option<PathBuf> {
        self.report.default_dir.as_deref().map(expand_path)
    }
}

/// Expands a leading `~` to the home directory.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        // Clamp percentages to valid range
        Self {
            memory_percent: config.memory_percent.clamp(0.0, 100.0),
            disk_percent: config.disk_percent.clamp(0.0, 100.0),
        }
    }
}
