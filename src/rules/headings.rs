// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Checks that:
//! - the page has exactly one `<h1>`
//! - heading levels never jump by more than one (h1 -> h3)
//!
//! Only the first skipped level is reported.

use crate::audit::Audit;
use crate::dom::{trimmed_text, truncate_chars, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

/// Heading text is cut to this many characters for reporting
const HEADING_TEXT_LIMIT: usize = 50;

/// A heading in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Heading hierarchy rule
pub struct HeadingRule;

impl Rule for HeadingRule {
    fn name(&self) -> &str {
        "Heading Hierarchy"
    }

    fn description(&self) -> &str {
        "Checks h1 presence and heading level order (WCAG 1.3.1)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let headings = collect_headings(page);
        let h1s: Vec<&Heading> = headings.iter().filter(|h| h.level == 1).collect();

        audit.stats.h1_count = h1s.len();

        match h1s.len() {
            0 => audit.issues.add(Issue::new(
                Severity::Critical,
                "Missing h1",
                "Page does not contain h1 heading",
            )),
            1 => debug!(h1 = %h1s[0].text, "found h1"),
            n => audit.issues.add(Issue::new(
                Severity::Medium,
                "Multiple h1",
                format!("Found {} h1 headings. Recommended: 1.", n),
            )),
        }

        let levels: Vec<u8> = headings.iter().map(|h| h.level).collect();
        if let Some((prev, curr)) = first_skip(&levels) {
            audit.issues.add(Issue::new(
                Severity::Medium,
                "Skipped heading level",
                format!("Heading hierarchy jumps from h{} to h{}", prev, curr),
            ));
        }

        debug!(total = headings.len(), "headings checked");
    }
}

/// All h1-h6 elements in document order
pub fn collect_headings(page: &Page) -> Vec<Heading> {
    page.select_all("h1, h2, h3, h4, h5, h6")
        .into_iter()
        .filter_map(|el| {
            let level = el.value().name().strip_prefix('h')?.parse::<u8>().ok()?;
            Some(Heading {
                level,
                text: truncate_chars(&trimmed_text(el), HEADING_TEXT_LIMIT),
            })
        })
        .collect()
}

/// First adjacent pair where the level rises by more than one
pub fn first_skip(levels: &[u8]) -> Option<(u8, u8)> {
    levels
        .windows(2)
        .map(|w| (w[0], w[1]))
        .find(|(prev, curr)| *curr > prev + 1)
}
