// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` must carry an `alt` attribute. `alt=""` is the correct
//! markup for decorative images and counts as present.

use crate::audit::Audit;
use crate::dom::Page;
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

const MAX_EXAMPLES: usize = 3;

/// Image alt text rule
pub struct AltTextRule;

impl Rule for AltTextRule {
    fn name(&self) -> &str {
        "Alt Text"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for an alt attribute (WCAG 1.1.1)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let images = page.select_all("img");
        let missing: Vec<&str> = images
            .iter()
            .filter(|img| img.value().attr("alt").is_none())
            .map(|img| img.value().attr("src").unwrap_or("unknown"))
            .collect();

        audit.stats.total_images = images.len();
        audit.stats.images_without_alt = missing.len();

        debug!(total = images.len(), missing = missing.len(), "images checked");

        if !missing.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::High,
                    "Missing alt text",
                    format!(
                        "Found {} images without alt text out of {} total",
                        missing.len(),
                        images.len()
                    ),
                )
                .with_count(missing.len())
                .with_examples(missing, MAX_EXAMPLES),
            );
        }
    }
}
