// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules implementing the WCAG checks.
//!
//! Each rule inspects the parsed page, writes the statistics fields it owns
//! and files zero or more issues into the shared [`Audit`] accumulator. Rules
//! never read each other's output, so their order only affects the order of
//! issues inside a severity bucket.

pub mod buttons;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod images;
pub mod landmarks;
pub mod language;
pub mod links;
pub mod skip_link;
pub mod tables;

use crate::audit::Audit;
use crate::dom::Page;
use tracing::debug;

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Human-readable name of this rule
    fn name(&self) -> &str;

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    /// Inspect the page and record statistics and issues
    fn check(&self, page: &Page, audit: &mut Audit);
}

/// The full rule set, in the order the audit runs it
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(language::LanguageRule),
        Box::new(headings::HeadingRule),
        Box::new(images::AltTextRule),
        Box::new(links::LinkTextRule),
        Box::new(forms::FormLabelRule),
        Box::new(buttons::ButtonTextRule),
        Box::new(tables::TableHeaderRule),
        Box::new(landmarks::LandmarkRule),
        Box::new(skip_link::SkipLinkRule),
        Box::new(contrast::ContrastRule),
    ]
}

/// Run every rule against one page
pub fn run_all(page: &Page, audit: &mut Audit) {
    for rule in default_rules() {
        let before = audit.issues.len();
        rule.check(page, audit);
        debug!(
            rule = rule.name(),
            new_issues = audit.issues.len() - before,
            "rule finished"
        );
    }
}
