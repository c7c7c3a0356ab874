//! Application configuration and environment variable handling.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual fields.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Home timezone of the school calendar.
pub const DEFAULT_TIMEZONE: &str = "Pacific/Auckland";
/// Configuration file looked up in the working directory when `CALENDAR_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "calendar.toml";

/// Server and dataset settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to bind (default: 8080)
    pub port: u16,
    /// Directory holding terms.json, holidays.json and key-dates.json
    pub data_dir: PathBuf,
    /// Directory served at `/`
    pub static_dir: PathBuf,
    /// IANA timezone name used to interpret every date
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CalendarError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| {
            CalendarError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Defaults overridden by environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `DATA_DIR` (optional, default: `data`)
    /// - `STATIC_DIR` (optional, default: `static`)
    /// - `CALENDAR_TZ` (optional, default: `Pacific/Auckland`)
    pub fn from_env() -> CalendarResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides on top of `self`.
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn with_env_overrides(mut self) -> CalendarResult<Self> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| CalendarError::Config(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        if let Ok(dir) = env::var("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Ok(tz) = env::var("CALENDAR_TZ") {
            self.timezone = tz;
        }
        Ok(self)
    }

    /// Load the configuration file named by `CALENDAR_CONFIG`, or
    /// `calendar.toml` if it exists, then apply environment overrides.
    pub fn load() -> CalendarResult<Self> {
        let base = match env::var("CALENDAR_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// The configured timezone.
    ///
    /// # Errors
    /// Returns [`CalendarError::UnknownTimezone`] for names missing from the tz database.
    pub fn tz(&self) -> CalendarResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| CalendarError::UnknownTimezone(self.timezone.clone()))
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
