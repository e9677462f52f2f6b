// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use slotbook_api::{ApiConfig, ConsultationClient};
use slotbook_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

const SLOTBOOK_CONFIG_ENV: &str = "SLOTBOOK_CONFIG";

/// Loads the configuration.
///
/// Lookup order: `path`, then the `SLOTBOOK_CONFIG` environment variable, then
/// `slotbook/config.toml` in the user config directory. An explicitly given file
/// must exist; a missing default file yields the default configuration.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SLOTBOOK_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Config::default().normalized();
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()?
        .normalized()
}

/// Configuration of the command line.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Booking service; only commands that talk to it need this.
    #[serde(default)]
    pub api: Option<ApiConfig>,

    /// Booking core.
    #[serde(default)]
    pub core: CoreConfig,
}

impl Config {
    /// Creates a client for the booking service.
    pub fn client(&self) -> Result<ConsultationClient, Box<dyn Error>> {
        let api = self.api.clone().ok_or(
            "No booking service configured: add an [api] section with base_url to the config file",
        )?;
        Ok(ConsultationClient::new(api)?)
    }

    fn normalized(mut self) -> Result<Self, Box<dyn Error>> {
        self.core.normalize()?;
        Ok(self)
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
