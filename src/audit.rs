// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit runner: rules first, then the level deriver.

use crate::conformance::{self, ConformanceResult};
use crate::dom::Page;
use crate::error::Result;
use crate::fetch::{self, PageSource};
use crate::issues::IssueSet;
use crate::rules;
use crate::site::detect_required_level;
use crate::stats::Statistics;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Accumulator owned by one run and threaded through every rule
#[derive(Debug, Default)]
pub struct Audit {
    pub stats: Statistics,
    pub issues: IssueSet,
}

impl Audit {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Complete result of auditing one page
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub url: String,
    /// RFC 3339 time the analysis finished
    pub timestamp: String,
    pub issues: IssueSet,
    pub total_issues: usize,
    pub stats: Statistics,
    pub wcag_level: ConformanceResult,
}

impl AuditReport {
    /// Whether the achieved level satisfies the site's requirement
    pub fn meets_required(&self) -> bool {
        self.wcag_level.meets_required
    }
}

/// Analyse already-retrieved HTML. `url` drives site classification only.
pub fn analyze_html(url: &str, html: &str) -> AuditReport {
    let page = Page::parse(html);
    let mut audit = Audit::new();

    rules::run_all(&page, &mut audit);

    let required = detect_required_level(url);
    let wcag_level = conformance::derive(&audit.stats, &audit.issues, &required);

    info!(
        url,
        issues = audit.issues.len(),
        achieved = %wcag_level.achieved_level,
        required = %wcag_level.required_level,
        "audit complete"
    );

    AuditReport {
        url: url.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        total_issues: audit.issues.len(),
        issues: audit.issues,
        stats: audit.stats,
        wcag_level,
    }
}

/// Retrieve a page through `source` and analyse it
pub fn audit_url(source: &dyn PageSource, url: &str) -> Result<AuditReport> {
    info!(url, "fetching page");
    let html = source.fetch(url)?;
    Ok(analyze_html(url, &html))
}

/// Analyse a saved HTML file, classifying it by `url` when given
pub fn audit_file(path: &Path, url: Option<&str>) -> Result<AuditReport> {
    let html = fetch::load_file(path)?;
    let label = match url {
        Some(u) => u.to_string(),
        None => path.display().to_string(),
    };
    Ok(analyze_html(&label, &html))
}
