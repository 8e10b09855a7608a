// SPDX-License-Identifier: PMPL-1.0-or-later
//! Language of page - WCAG 3.1.1 (Level A)
//!
//! The `<html>` element must declare a non-empty `lang` attribute so screen
//! readers pick the right pronunciation rules.

use crate::audit::Audit;
use crate::dom::{non_empty_attr, Page};
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use tracing::debug;

/// Language attribute rule
pub struct LanguageRule;

impl Rule for LanguageRule {
    fn name(&self) -> &str {
        "Language Attribute"
    }

    fn description(&self) -> &str {
        "Checks the <html> element declares its language (WCAG 3.1.1)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let lang = page
            .select_first("html")
            .and_then(|html| non_empty_attr(html, "lang"));

        audit.stats.has_lang = lang.is_some();

        match lang {
            Some(lang) => debug!(lang, "page language declared"),
            None => {
                audit.issues.add(Issue::new(
                    Severity::High,
                    "Missing lang attribute",
                    "HTML tag does not contain language attribute",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Audit {
        let mut audit = Audit::new();
        LanguageRule.check(&Page::parse(html), &mut audit);
        audit
    }

    #[test]
    fn test_html_with_lang() {
        let audit = run(r#"<html lang="en"><head><title>Test</title></head><body></body></html>"#);
        assert!(audit.stats.has_lang);
        assert!(audit.issues.is_empty());
    }

    #[test]
    fn test_html_no_lang() {
        let audit = run(r#"<html><head><title>Test</title></head><body></body></html>"#);
        assert!(!audit.stats.has_lang);
        assert_eq!(audit.issues.count(Severity::High), 1);
        assert_eq!(audit.issues.high[0].kind, "Missing lang attribute");
    }

    #[test]
    fn test_html_empty_lang() {
        let audit = run(r#"<html lang=""><body><p>Hello</p></body></html>"#);
        assert!(!audit.stats.has_lang);
        assert_eq!(audit.issues.count(Severity::High), 1);
    }

    #[test]
    fn test_fragment_without_html_tag() {
        // The parser synthesizes an <html> root without attributes
        let audit = run("<p>fragment</p>");
        assert!(!audit.stats.has_lang);
    }
}
