//! Dashboard configuration file and environment variable handling.
//!
//! Settings come from `dashboard.toml` (every field optional) and are then
//! overridden by environment variables:
//!
//! - `HOST`: bind host (default: 127.0.0.1)
//! - `PORT`: bind port (default: 8056)
//! - `LAUNCH_DATA`: path to the launch CSV (default: spacex_launch_dash.csv)
//! - `PAYLOAD_STEP`: slider granularity in kilograms (default: 1000)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use super::error::{DatasetError, DatasetResult, ErrorContext};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub controls: ControlSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Control and page presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    #[serde(default = "default_payload_step")]
    pub payload_step: u32,
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8056
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

fn default_payload_step() -> u32 {
    1000
}

fn default_page_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            payload_step: default_payload_step(),
            page_title: default_page_title(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("read_config").with_path(path);

        let content = fs::read_to_string(path).map_err(|e| {
            DatasetError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        let config: DashboardConfig = toml::from_str(&content).map_err(|e| {
            DatasetError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                context(),
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Search for `dashboard.toml` in the current directory, `backend/` and
    /// the parent directory.
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from(DEFAULT_CONFIG_FILE),
            PathBuf::from("backend").join(DEFAULT_CONFIG_FILE),
            PathBuf::from("..").join(DEFAULT_CONFIG_FILE),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// File settings (or defaults when no file exists) with environment
    /// overrides applied.
    pub fn load() -> DatasetResult<Self> {
        let mut config = match Self::find_default_file() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `LAUNCH_DATA` and `PAYLOAD_STEP` from the process
    /// environment.
    pub fn apply_env(&mut self) -> DatasetResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> DatasetResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| {
                DatasetError::configuration(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        if let Some(path) = lookup("LAUNCH_DATA") {
            self.data.path = PathBuf::from(path);
        }
        if let Some(step) = lookup("PAYLOAD_STEP") {
            self.controls.payload_step = step.parse().map_err(|_| {
                DatasetError::configuration(format!(
                    "PAYLOAD_STEP must be a positive integer, got '{}'",
                    step
                ))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> DatasetResult<()> {
        if self.controls.payload_step == 0 {
            return Err(DatasetError::configuration(
                "controls.payload_step must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve the bind address.
    pub fn bind_address(&self) -> DatasetResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                DatasetError::configuration(format!(
                    "Invalid bind address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
