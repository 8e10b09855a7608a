// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link purpose - WCAG 2.4.4 Link Purpose (In Context) (Level A)
//!
//! A link is unclear when it has no text and no `aria-label`, or when its
//! whole text is a generic phrase such as "click here".

use crate::audit::Audit;
use crate::dom::{non_empty_attr, trimmed_text, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

/// Link texts that say nothing about the destination (English and Hebrew)
pub const AMBIGUOUS_LINK_TEXTS: &[&str] = &["click here", "read more", "לחץ כאן", "קרא עוד"];

const MAX_EXAMPLES: usize = 5;

/// Link text clarity rule
pub struct LinkTextRule;

impl Rule for LinkTextRule {
    fn name(&self) -> &str {
        "Link Text"
    }

    fn description(&self) -> &str {
        "Checks links have descriptive text (WCAG 2.4.4)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let links = page.select_all("a");
        let mut problematic = Vec::new();

        for link in &links {
            let text = trimmed_text(*link);
            let href = link.value().attr("href");

            if text.is_empty() && non_empty_attr(*link, "aria-label").is_none() {
                problematic.push(href.unwrap_or("unknown").to_string());
            } else if is_ambiguous(&text) {
                problematic.push(format!("{} -> {}", text, href.unwrap_or("")));
            }
        }

        audit.stats.total_links = links.len();
        audit.stats.unclear_links = problematic.len();

        debug!(total = links.len(), unclear = problematic.len(), "links checked");

        if !problematic.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::Medium,
                    "Unclear links",
                    format!("Found {} links without clear text", problematic.len()),
                )
                .with_count(problematic.len())
                .with_examples(problematic, MAX_EXAMPLES),
            );
        }
    }
}

/// Exact, case-insensitive match against [`AMBIGUOUS_LINK_TEXTS`]
pub fn is_ambiguous(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    AMBIGUOUS_LINK_TEXTS.contains(&lowered.as_str())
}
