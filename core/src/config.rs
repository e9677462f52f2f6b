// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::Zoned;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// The name of the application.
pub const APP_NAME: &str = "slotbook";

/// Default home timezone of the service.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Default event-creation page of the external calendar service.
pub const DEFAULT_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Default location shown when a session has no usable meeting link.
pub const DEFAULT_ONLINE_PLACEHOLDER: &str = "Online";

/// Configuration of the booking core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// IANA timezone in which every date and time is expressed.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Event-creation URL of the external calendar service.
    #[serde(default = "default_calendar_url")]
    pub calendar_base_url: String,

    /// Location text used when no meeting URL is known.
    #[serde(default = "default_online_placeholder")]
    pub online_placeholder: String,
}

impl Config {
    /// Resolves the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not in the timezone database.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        TimeZone::get(&self.timezone)
    }

    /// Today's date in the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured timezone cannot be resolved.
    pub fn today(&self) -> Result<Date, jiff::Error> {
        let tz = self.time_zone()?;
        Ok(Zoned::now().with_time_zone(tz).date())
    }

    /// Checks the configuration and trims surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error naming the invalid setting.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.timezone = self.timezone.trim().to_string();
        self.calendar_base_url = self.calendar_base_url.trim().to_string();

        self.time_zone()
            .map_err(|e| format!("Unknown timezone {:?}: {e}", self.timezone))?;

        let url = url::Url::parse(&self.calendar_base_url)
            .map_err(|e| format!("Invalid calendar_base_url {:?}: {e}", self.calendar_base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "calendar_base_url must be http or https, got {:?}",
                self.calendar_base_url
            )
            .into());
        }

        if self.online_placeholder.trim().is_empty() {
            tracing::warn!("online_placeholder is empty, falling back to the default");
            self.online_placeholder = default_online_placeholder();
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            calendar_base_url: default_calendar_url(),
            online_placeholder: default_online_placeholder(),
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_calendar_url() -> String {
    DEFAULT_CALENDAR_URL.to_string()
}

fn default_online_placeholder() -> String {
    DEFAULT_ONLINE_PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timezone, "Asia/Tokyo");
    }

    #[test]
    fn normalize_trims_and_validates() {
        let mut config: Config = toml::from_str(
            r#"
timezone = " Europe/Berlin "
online_placeholder = " "
"#,
        )
        .unwrap();
        config.normalize().unwrap();
        assert_eq!(config.timezone, "Europe/Berlin");
        assert_eq!(config.online_placeholder, DEFAULT_ONLINE_PLACEHOLDER);
    }

    #[test]
    fn normalize_rejects_unknown_timezone() {
        let mut config = Config {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        let err = config.normalize().unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn normalize_rejects_non_http_calendar_url() {
        let mut config = Config {
            calendar_base_url: "ftp://calendar.example.com".to_string(),
            ..Default::default()
        };
        let err = config.normalize().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn today_resolves_in_configured_zone() {
        let config = Config::default();
        assert!(config.today().is_ok());
    }
}
