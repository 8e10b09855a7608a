// SPDX-License-Identifier: PMPL-1.0-or-later
//! Skip navigation - WCAG 2.4.1 Bypass Blocks (Level A)
//!
//! A skip link must be among the first few links on the page to be useful,
//! so only the first [`LINKS_EXAMINED`] anchors are considered.

use crate::audit::Audit;
use crate::dom::{trimmed_text, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

/// How many leading links may hold the skip link
pub const LINKS_EXAMINED: usize = 5;

/// Words that mark a skip link (English and Hebrew)
const SKIP_WORDS: &[&str] = &["skip", "jump", "דלג", "קפוץ"];

/// Skip link rule
pub struct SkipLinkRule;

impl Rule for SkipLinkRule {
    fn name(&self) -> &str {
        "Skip Link"
    }

    fn description(&self) -> &str {
        "Checks for a skip-to-content link near the top of the page (WCAG 2.4.1)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let found = page
            .select_all("a")
            .into_iter()
            .take(LINKS_EXAMINED)
            .any(|link| {
                let text = trimmed_text(link).to_lowercase();
                let href = link.value().attr("href").unwrap_or("");
                href.starts_with('#') && SKIP_WORDS.iter().any(|w| text.contains(w))
            });

        debug!(found, "skip link checked");

        if !found {
            audit.issues.add(Issue::new(
                Severity::Low,
                "Missing skip link",
                "No skip to main content link found. This helps keyboard users bypass repetitive navigation.",
            ));
        }
    }
}
