//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use showcase_protocols::ProjectId;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Project selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project to serve. Overridden by `--project` / `PROJECT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,

    /// Project served when the selection is missing or unknown.
    #[serde(default = "default_project")]
    pub default: String,

    /// Projects registered at startup.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            selected: None,
            default: default_project(),
            enabled: default_enabled(),
        }
    }
}

fn default_project() -> String {
    ProjectId::ProjectOne.as_str().to_string()
}

fn default_enabled() -> Vec<String> {
    ProjectId::ALL.iter().map(|id| id.as_str().to_string()).collect()
}

impl ProjectConfig {
    /// The effective selected name; an explicit override wins over the file.
    pub fn effective_selection<'a>(&'a self, override_name: Option<&'a str>) -> Option<&'a str> {
        override_name.or(self.selected.as_deref())
    }

    /// Enabled projects that parse, in configured order, without duplicates.
    pub fn enabled_ids(&self) -> Vec<ProjectId> {
        let mut ids = Vec::new();
        for id in self.enabled.iter().filter_map(|name| name.parse::<ProjectId>().ok()) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// Weather project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_location")]
    pub location: String,

    /// "celsius" or "fahrenheit" (case-insensitive, "c" / "f" also accepted).
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            unit: default_unit(),
        }
    }
}

fn default_location() -> String {
    "Lisbon".to_string()
}

fn default_unit() -> String {
    "celsius".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Write a rolling log file in addition to the console.
    #[serde(default = "default_true")]
    pub file: bool,

    /// Log directory (default: ~/.showcase/logs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: default_true(),
            dir: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| showcase_dir().join("logs"))
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// The ~/.showcase directory.
pub fn showcase_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".showcase"))
        .unwrap_or_else(|| PathBuf::from(".showcase"))
}
