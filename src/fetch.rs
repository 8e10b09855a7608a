// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page retrieval: blocking HTTP or a saved file on disk.

use crate::charset::{charset_from_content_type, decode_html};
use crate::config::FetchConfig;
use crate::error::{AuditError, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Anything that can turn a URL into HTML
pub trait PageSource {
    /// Retrieve the page body
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Production source backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                AuditError::Timeout(url.to_string())
            } else if e.is_connect() {
                AuditError::Connect(url.to_string())
            } else {
                AuditError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success response");
            return Err(AuditError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?;
        debug!(url, bytes = body.len(), "page fetched");

        Ok(decode_html(
            &body,
            content_type.as_deref().and_then(charset_from_content_type),
        ))
    }
}

/// Trim the input and prepend `default_scheme` when no http(s) scheme is present
pub fn normalize_url(input: &str, default_scheme: &str) -> Result<String> {
    let url = input.trim();
    if url.is_empty() {
        return Err(AuditError::InvalidUrl("empty URL".to_string()));
    }
    if url.contains(char::is_whitespace) {
        return Err(AuditError::InvalidUrl(url.to_string()));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Ok(format!("{}://{}", default_scheme, url))
    }
}

/// Read a saved HTML page, decoding it per its BOM or `<meta charset>`
pub fn load_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "page loaded from file");
    Ok(decode_html(&bytes, None))
}
