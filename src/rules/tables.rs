// SPDX-License-Identifier: PMPL-1.0-or-later
//! Table headers - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! A data table needs `<th>` cells, or `<td>` cells carrying `scope` or
//! `headers`, so screen readers can announce what each cell belongs to.

use crate::audit::Audit;
use crate::dom::{non_empty_attr, selector, truncated_html, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use scraper::ElementRef;
use tracing::debug;

const MAX_EXAMPLES: usize = 2;
const EXAMPLE_CHARS: usize = 100;

/// Table header rule
pub struct TableHeaderRule;

impl Rule for TableHeaderRule {
    fn name(&self) -> &str {
        "Table Headers"
    }

    fn description(&self) -> &str {
        "Checks tables declare header cells (WCAG 1.3.1)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let tables = page.select_all("table");
        let headerless: Vec<String> = tables
            .iter()
            .filter(|t| !has_headers(**t))
            .map(|t| truncated_html(*t, EXAMPLE_CHARS))
            .collect();

        audit.stats.total_tables = tables.len();
        audit.stats.tables_without_headers = headerless.len();

        debug!(total = tables.len(), headerless = headerless.len(), "tables checked");

        if !headerless.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::Medium,
                    "Tables without headers",
                    format!("Found {} tables without proper headers", headerless.len()),
                )
                .with_count(headerless.len())
                .with_examples(headerless, MAX_EXAMPLES),
            );
        }
    }
}

fn has_headers(table: ElementRef<'_>) -> bool {
    let th = selector("th");
    let td = selector("td");

    table.select(&th).next().is_some()
        || table.select(&td).any(|cell| {
            non_empty_attr(cell, "scope").is_some() || non_empty_attr(cell, "headers").is_some()
        })
}
