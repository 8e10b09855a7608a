// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA landmarks - WCAG 1.3.1 / 2.4.1 (best practice)
//!
//! Looks for the main, navigation and contentinfo regions, either as
//! semantic elements or via an explicit `role`. Reported at low severity and
//! never counted towards the conformance level.

use crate::audit::Audit;
use crate::dom::Page;
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

/// (reported name, selector matching the element or its explicit role)
const LANDMARKS: &[(&str, &str)] = &[
    ("main", r#"main, [role="main"]"#),
    ("navigation", r#"nav, [role="navigation"]"#),
    ("footer/contentinfo", r#"footer, [role="contentinfo"]"#),
];

/// ARIA landmark rule
pub struct LandmarkRule;

impl Rule for LandmarkRule {
    fn name(&self) -> &str {
        "ARIA Landmarks"
    }

    fn description(&self) -> &str {
        "Checks the page exposes main, navigation and footer landmarks"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let missing = missing_landmarks(page);

        debug!(missing = ?missing, "landmarks checked");

        if !missing.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::Low,
                    "Missing ARIA landmarks",
                    format!(
                        "Missing landmarks: {}. Landmarks help screen reader users navigate.",
                        missing.join(", ")
                    ),
                )
                .with_count(missing.len()),
            );
        }
    }
}

/// Names of the landmarks the page lacks, in fixed order
pub fn missing_landmarks(page: &Page) -> Vec<&'static str> {
    LANDMARKS
        .iter()
        .filter(|(_, css)| !page.exists(css))
        .map(|(name, _)| *name)
        .collect()
}
