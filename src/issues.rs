// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue taxonomy shared by every rule.
//!
//! An [`Issue`] is created by exactly one rule invocation and then filed into
//! the [`IssueSet`] bucket matching its [`Severity`]. Nothing mutates an issue
//! after it has been filed.

use serde::Serialize;

/// Hard cap on the number of examples any issue may carry.
pub const MAX_EXAMPLES: usize = 5;

/// Severity levels for issues, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Page structure is broken for assistive technology
    Critical,
    /// Content is unreachable for some users
    High,
    /// Content is reachable but confusing
    Medium,
    /// Best-practice gap
    Low,
}

impl Severity {
    /// Every severity, in reporting order
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Lowercase key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

/// A single accessibility finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Severity bucket this issue belongs to
    #[serde(skip)]
    pub severity: Severity,
    /// Short category label (e.g. "Missing alt text")
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description with counts inline
    pub details: String,
    /// Number of occurrences, for "found N of a kind" rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Literal offending values, at most [`MAX_EXAMPLES`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Issue {
    /// Create a new issue
    pub fn new(severity: Severity, kind: &str, details: impl Into<String>) -> Self {
        Self {
            severity,
            kind: kind.to_string(),
            details: details.into(),
            count: None,
            examples: None,
        }
    }

    /// Set the occurrence count
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attach up to `limit` examples (never more than [`MAX_EXAMPLES`])
    pub fn with_examples<I, S>(mut self, examples: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let taken: Vec<String> = examples
            .into_iter()
            .take(limit.min(MAX_EXAMPLES))
            .map(Into::into)
            .collect();
        self.examples = Some(taken);
        self
    }
}

/// Issues grouped by severity. Always serializes all four buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueSet {
    pub critical: Vec<Issue>,
    pub high: Vec<Issue>,
    pub medium: Vec<Issue>,
    pub low: Vec<Issue>,
}

impl IssueSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// File an issue into its severity bucket
    pub fn add(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Critical => self.critical.push(issue),
            Severity::High => self.high.push(issue),
            Severity::Medium => self.medium.push(issue),
            Severity::Low => self.low.push(issue),
        }
    }

    /// Issues in one bucket, in insertion order
    pub fn by_severity(&self, severity: Severity) -> &[Issue] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }

    /// Number of issues in one bucket
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity(severity).len()
    }

    /// Total count
    pub fn len(&self) -> usize {
        Severity::ALL.iter().map(|s| self.count(*s)).sum()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All issues, most severe bucket first
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        Severity::ALL
            .into_iter()
            .flat_map(move |s| self.by_severity(s).iter())
    }
}
