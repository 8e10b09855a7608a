// SPDX-License-Identifier: PMPL-1.0-or-later
//! Raw counters accumulated by the rules and read by the level deriver.

use serde::Serialize;

/// Per-run statistics. Each field is written by exactly one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_images: usize,
    pub images_without_alt: usize,
    pub total_links: usize,
    pub unclear_links: usize,
    pub has_lang: bool,
    pub h1_count: usize,
    pub total_forms: usize,
    pub forms_without_labels: usize,
    pub total_buttons: usize,
    pub buttons_without_text: usize,
    pub total_tables: usize,
    pub tables_without_headers: usize,
    /// Reported only; never consulted by the level deriver
    pub elements_checked_for_contrast: usize,
    /// Always zero until real contrast checking exists
    pub low_contrast_elements: usize,
}

impl Statistics {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Every "bad" counter is bounded by its paired total
    pub fn is_consistent(&self) -> bool {
        self.images_without_alt <= self.total_images
            && self.unclear_links <= self.total_links
            && self.forms_without_labels <= self.total_forms
            && self.buttons_without_text <= self.total_buttons
            && self.tables_without_headers <= self.total_tables
            && self.low_contrast_elements <= self.elements_checked_for_contrast
    }
}

/// `bad / total * 100`, or 0 when there is nothing to measure
pub fn percentage(bad: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    bad as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = Statistics::new();
        assert!(!stats.has_lang);
        assert_eq!(stats.h1_count, 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_inconsistent_counters_detected() {
        let stats = Statistics {
            total_images: 1,
            images_without_alt: 2,
            ..Statistics::default()
        };
        assert!(!stats.is_consistent());
    }

    #[test]
    fn test_percentage_zero_guard() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert!((percentage(2, 10) - 20.0).abs() < f64::EPSILON);
        assert!((percentage(1, 3) - 33.333).abs() < 0.01);
    }
}
