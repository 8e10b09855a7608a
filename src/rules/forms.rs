// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labels - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! Every user-editable `input`, `textarea` and `select` needs an accessible
//! name from one of:
//! - a `<label for="...">` pointing at its id
//! - `aria-label` or `aria-labelledby`
//! - an enclosing `<label>`

use crate::audit::Audit;
use crate::dom::{has_ancestor, non_empty_attr, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use scraper::ElementRef;
use std::collections::HashSet;
use tracing::debug;

/// Input types that carry no user-entered value and need no label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button"];

const MAX_EXAMPLES: usize = 5;

/// Form label rule
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn name(&self) -> &str {
        "Form Labels"
    }

    fn description(&self) -> &str {
        "Checks form fields have accessible labels (WCAG 3.3.2)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let label_fors: HashSet<&str> = page
            .select_all("label[for]")
            .into_iter()
            .filter_map(|l| non_empty_attr(l, "for"))
            .collect();

        let mut checked = 0;
        let mut unlabelled = Vec::new();

        for field in page.select_all("input, textarea, select") {
            let input_type = field.value().attr("type").unwrap_or("text");
            if EXEMPT_INPUT_TYPES.contains(&input_type.to_ascii_lowercase().as_str()) {
                continue;
            }
            checked += 1;

            if !has_label(field, &label_fors) {
                unlabelled.push(format!("{} type='{}'", field.value().name(), input_type));
            }
        }

        audit.stats.total_forms = checked;
        audit.stats.forms_without_labels = unlabelled.len();

        debug!(total = checked, unlabelled = unlabelled.len(), "form fields checked");

        if !unlabelled.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::High,
                    "Form inputs without labels",
                    format!(
                        "Found {} form inputs without accessible labels",
                        unlabelled.len()
                    ),
                )
                .with_count(unlabelled.len())
                .with_examples(unlabelled, MAX_EXAMPLES),
            );
        }
    }
}

fn has_label(field: ElementRef<'_>, label_fors: &HashSet<&str>) -> bool {
    let labelled_by_for = non_empty_attr(field, "id").is_some_and(|id| label_fors.contains(id));
    let labelled_by_aria = non_empty_attr(field, "aria-label").is_some()
        || non_empty_attr(field, "aria-labelledby").is_some();

    labelled_by_for || labelled_by_aria || has_ancestor(field, "label")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Audit {
        let mut audit = Audit::new();
        FormLabelRule.check(&Page::parse(html), &mut audit);
        audit
    }

    #[test]
    fn test_all_labelling_techniques() {
        let audit = run(r#"
            <form>
                <label for="email">Email</label>
                <input type="email" id="email">
                <input type="search" aria-label="Search">
                <span id="pw-label">Password</span>
                <input type="password" aria-labelledby="pw-label">
                <label>Comment <textarea></textarea></label>
                <label>Country <select><option>IL</option></select></label>
            </form>
        "#);
        assert_eq!(audit.stats.total_forms, 5);
        assert_eq!(audit.stats.forms_without_labels, 0);
        assert!(audit.issues.is_empty());
    }

    #[test]
    fn test_exempt_types_not_counted() {
        let audit = run(r#"
            <input type="hidden" name="csrf">
            <input type="submit" value="Go">
            <input type="button" value="Clear">
        "#);
        assert_eq!(audit.stats.total_forms, 0);
        assert!(audit.issues.is_empty());
    }

    #[test]
    fn test_reset_and_image_inputs_are_checked() {
        let audit = run(r#"<input type="reset"><input type="image" src="go.png">"#);
        assert_eq!(audit.stats.total_forms, 2);
        assert_eq!(audit.stats.forms_without_labels, 2);
    }

    #[test]
    fn test_unlabelled_fields() {
        let audit = run(r#"
            <input name="q">
            <textarea></textarea>
            <select></select>
            <label for="other">Other</label><input type="tel" id="phone">
        "#);
        assert_eq!(audit.stats.forms_without_labels, 4);
        let issue = &audit.issues.high[0];
        assert_eq!(issue.kind, "Form inputs without labels");
        assert_eq!(
            issue.examples,
            Some(vec![
                "input type='text'".to_string(),
                "textarea type='text'".to_string(),
                "select type='text'".to_string(),
                "input type='tel'".to_string(),
            ])
        );
    }

    #[test]
    fn test_empty_aria_label_does_not_count() {
        let audit = run(r#"<input type="text" aria-label="">"#);
        assert_eq!(audit.stats.forms_without_labels, 1);
    }
}
