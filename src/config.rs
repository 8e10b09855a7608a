// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for wcagbot

use crate::error::{AuditError, Result};
use crate::issues::MAX_EXAMPLES;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "wcagbot.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Page retrieval settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Page retrieval configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Scheme prepended to URLs given without one
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            default_scheme: default_scheme(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("wcagbot/{}", env!("CARGO_PKG_VERSION"))
}

fn default_scheme() -> String {
    "https".to_string()
}

/// Report rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format used when the CLI does not override it
    #[serde(default = "default_format")]
    pub format: String,

    /// Examples printed per issue in text output
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            max_examples: default_max_examples(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

fn default_max_examples() -> usize {
    MAX_EXAMPLES
}

impl ReportConfig {
    /// Parsed output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse().map_err(AuditError::Config)
    }
}

impl Config {
    /// Reject values no run could use
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(AuditError::Config(
                "fetch.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.fetch.default_scheme != "http" && self.fetch.default_scheme != "https" {
            return Err(AuditError::Config(format!(
                "fetch.default_scheme must be http or https, got {}",
                self.fetch.default_scheme
            )));
        }
        self.report.output_format()?;
        Ok(())
    }
}

/// Load configuration from a path
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Resolve configuration: explicit path, else `wcagbot.toml` in `dir`, else defaults
pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AuditError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return load_config(path);
    }

    let candidate = default_config_path(dir);
    if candidate.exists() {
        return load_config(&candidate);
    }

    debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
    Ok(Config::default())
}

/// Get the default config path for a directory
pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.fetch.default_scheme, "https");
        assert!(config.fetch.user_agent.starts_with("wcagbot/"));
        assert_eq!(config.report.max_examples, 5);
        assert_eq!(config.report.output_format().expect("valid"), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            default_config_path(dir.path()),
            "[fetch]\ntimeout_secs = 30\n\n[report]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = discover(None, dir.path()).expect("loads");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.default_scheme, "https");
        assert_eq!(config.report.output_format().expect("valid"), OutputFormat::Json);
        assert_eq!(config.report.max_examples, 5);
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let config = discover(None, dir.path()).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(default_config_path(dir.path()), "[fetch]\ntimeout_secs = 30\n")
            .expect("write config");
        let other = dir.path().join("other.toml");
        std::fs::write(&other, "[fetch]\ntimeout_secs = 4\n").expect("write config");

        let config = discover(Some(&other), dir.path()).expect("loads");
        assert_eq!(config.fetch.timeout_secs, 4);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            discover(Some(&missing), dir.path()),
            Err(AuditError::Config(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(default_config_path(dir.path()), "[fetch\ntimeout_secs = ").expect("write");
        assert!(matches!(discover(None, dir.path()), Err(AuditError::Toml(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = Config {
            fetch: FetchConfig {
                timeout_secs: 0,
                ..FetchConfig::default()
            },
            ..Config::default()
        };
        assert!(zero.validate().is_err());

        let bad_format = Config {
            report: ReportConfig {
                format: "pdf".to_string(),
                ..ReportConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(bad_format.validate(), Err(AuditError::Config(_))));
    }
}
