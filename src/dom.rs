// SPDX-License-Identifier: PMPL-1.0-or-later
//! Thin query layer over a parsed `scraper` document.
//!
//! Rules only ever need a handful of operations: select by CSS, read an
//! attribute, read trimmed text, look for an enclosing tag and serialize an
//! element to a bounded string. Keeping them here keeps the rules free of
//! `scraper` plumbing.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page. Immutable once built.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse raw HTML. Never fails; html5ever recovers from malformed input.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching a CSS selector, in document order
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        let sel = selector(css);
        self.document.select(&sel).collect()
    }

    /// First element matching a CSS selector
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let sel = selector(css);
        self.document.select(&sel).next()
    }

    /// Whether any element matches
    pub fn exists(&self, css: &str) -> bool {
        self.select_first(css).is_some()
    }
}

/// Compile a selector. Selectors in this crate are literals.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Text content with every text node trimmed and the pieces concatenated.
///
/// `<a> Read <b>more</b> </a>` yields `"Readmore"`.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Attribute value, treating an empty (or whitespace-only) value as absent
pub fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .filter(|v| !v.trim().is_empty())
}

/// Whether any ancestor of `element` has the given tag name
pub fn has_ancestor(element: ElementRef<'_>, tag: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == tag)
}

/// Outer HTML cut to at most `max_chars` characters
pub fn truncated_html(element: ElementRef<'_>, max_chars: usize) -> String {
    truncate_chars(&element.html(), max_chars)
}

/// Cut a string to at most `max_chars` characters on a char boundary
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
