// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for wcagbot
//!
//! The analysis rules themselves never fail; every variant here describes a
//! reason the page could not be produced or the run could not be configured.

use thiserror::Error;

/// Main error type for wcagbot
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request timeout fetching {0}")]
    Timeout(String),

    #[error("Failed to connect to {0}")]
    Connect(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;
