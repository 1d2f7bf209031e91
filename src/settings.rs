//! Layered settings.
//!
//! Values come from built-in defaults, then an optional config file, then
//! `STATUSBOARD_*` environment variables. Command-line flags are applied on
//! top by the binary.
//!
//! ```toml
//! url = "https://status.example.com/status.json"
//! refresh_secs = 60
//! timeout_secs = 30
//! locale = "zh"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::Locale;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "statusboard";
/// Snapshot file written by the collector.
pub const DEFAULT_STATUS_FILE: &str = "frontend/status.json";

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Snapshot URL. Takes precedence over `file` when set.
    pub url: Option<String>,
    /// Snapshot file, used when no URL is configured.
    pub file: PathBuf,
    /// Seconds between scheduled refreshes.
    pub refresh_secs: u64,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    pub locale: Locale,
    /// Where to write logs while the TUI owns the terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: None,
            file: PathBuf::from(DEFAULT_STATUS_FILE),
            refresh_secs: 60,
            timeout_secs: 30,
            locale: Locale::default(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `path` (required if given) or from an optional
    /// `statusboard.{toml,json,yaml}` in the working directory, then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder();
        let builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix("STATUSBOARD").try_parsing(true))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            bail!("refresh interval must be at least 1 second");
        }
        if self.timeout_secs == 0 {
            bail!("request timeout must be at least 1 second");
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.file, PathBuf::from("frontend/status.json"));
        assert_eq!(settings.refresh_interval(), Duration::from_secs(60));
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.locale, Locale::En);
        assert!(settings.url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
url = "https://status.example.com/status.json"
refresh_secs = 15
locale = "zh"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.url.as_deref(), Some("https://status.example.com/status.json"));
        assert_eq!(settings.refresh_secs, 15);
        assert_eq!(settings.locale, Locale::Zh);
        // Unset keys keep their defaults.
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/statusboard.toml"))).is_err());
    }

    #[test]
    fn test_zero_refresh_rejected() {
        let settings = Settings {
            refresh_secs: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
