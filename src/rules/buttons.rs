// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button names - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! `<button>` elements and `<input type="button|submit|reset">` need text,
//! a `value` or an `aria-label`.

use crate::audit::Audit;
use crate::dom::{non_empty_attr, trimmed_text, truncated_html, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use scraper::ElementRef;
use tracing::debug;

/// Input types rendered as buttons
const BUTTON_INPUT_TYPES: &[&str] = &["button", "submit", "reset"];

const MAX_EXAMPLES: usize = 3;
const EXAMPLE_CHARS: usize = 100;

/// Button accessible text rule
pub struct ButtonTextRule;

impl Rule for ButtonTextRule {
    fn name(&self) -> &str {
        "Button Text"
    }

    fn description(&self) -> &str {
        "Checks buttons have an accessible name (WCAG 4.1.2)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let buttons: Vec<ElementRef<'_>> = page
            .select_all("button, input")
            .into_iter()
            .filter(|el| is_button(*el))
            .collect();

        let unnamed: Vec<String> = buttons
            .iter()
            .filter(|b| !has_accessible_name(**b))
            .map(|b| truncated_html(*b, EXAMPLE_CHARS))
            .collect();

        audit.stats.total_buttons = buttons.len();
        audit.stats.buttons_without_text = unnamed.len();

        debug!(total = buttons.len(), unnamed = unnamed.len(), "buttons checked");

        if !unnamed.is_empty() {
            audit.issues.add(
                Issue::new(
                    Severity::High,
                    "Buttons without accessible text",
                    format!("Found {} buttons without accessible text", unnamed.len()),
                )
                .with_count(unnamed.len())
                .with_examples(unnamed, MAX_EXAMPLES),
            );
        }
    }
}

fn is_button(element: ElementRef<'_>) -> bool {
    match element.value().name() {
        "button" => true,
        "input" => element
            .value()
            .attr("type")
            .is_some_and(|t| BUTTON_INPUT_TYPES.contains(&t.to_ascii_lowercase().as_str())),
        _ => false,
    }
}

fn has_accessible_name(button: ElementRef<'_>) -> bool {
    !trimmed_text(button).is_empty()
        || non_empty_attr(button, "value").is_some()
        || non_empty_attr(button, "aria-label").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Audit {
        let mut audit = Audit::new();
        ButtonTextRule.check(&Page::parse(html), &mut audit);
        audit
    }

    #[test]
    fn test_named_buttons() {
        let audit = run(r#"
            <button>Save</button>
            <button aria-label="Close"><svg></svg></button>
            <input type="submit" value="Send">
            <input type="reset" aria-label="Reset form">
        "#);
        assert_eq!(audit.stats.total_buttons, 4);
        assert_eq!(audit.stats.buttons_without_text, 0);
        assert!(audit.issues.is_empty());
    }

    #[test]
    fn test_other_inputs_are_not_buttons() {
        let audit = run(r#"<input type="text"><input><input type="checkbox">"#);
        assert_eq!(audit.stats.total_buttons, 0);
    }

    #[test]
    fn test_unnamed_buttons() {
        let audit = run(r#"
            <button class="icon-close"></button>
            <button>   </button>
            <input type="button">
            <input type="submit" value="">
        "#);
        assert_eq!(audit.stats.total_buttons, 4);
        assert_eq!(audit.stats.buttons_without_text, 4);
        let issue = &audit.issues.high[0];
        assert_eq!(issue.count, Some(4));
        let examples = issue.examples.clone().unwrap_or_default();
        assert_eq!(examples.len(), 3);
        assert!(examples[0].starts_with("<button"));
    }

    #[test]
    fn test_example_truncated_to_100_chars() {
        let class = "c".repeat(200);
        let audit = run(&format!(r#"<button class="{}"></button>"#, class));
        let examples = audit.issues.high[0].examples.clone().unwrap_or_default();
        assert_eq!(examples[0].chars().count(), 100);
    }
}
