// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast - WCAG 1.4.3 Contrast (Minimum) (Level AA), heuristic only
//!
//! Without a CSS cascade there is no reliable way to know which foreground
//! sits on which background, so the rule only counts elements with inline
//! color styling. When there are none it files a low-severity note saying
//! contrast could not be assessed. The luminance helpers below implement the
//! WCAG 2.x formulas for callers that do have resolved color pairs.

use crate::audit::Audit;
use crate::dom::Page;
use crate::issues::{Issue, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static INLINE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"color|background").expect("valid regex"));

/// Inline color heuristic rule
pub struct ContrastRule;

impl Rule for ContrastRule {
    fn name(&self) -> &str {
        "Color Contrast (heuristic)"
    }

    fn description(&self) -> &str {
        "Counts inline color styles; full contrast analysis needs rendered CSS (WCAG 1.4.3)"
    }

    fn check(&self, page: &Page, audit: &mut Audit) {
        let styled = page
            .select_all("[style]")
            .into_iter()
            .filter(|el| el.value().attr("style").is_some_and(|s| INLINE_COLOR.is_match(s)))
            .count();

        audit.stats.elements_checked_for_contrast = styled;

        debug!(styled, "elements with inline color styles");

        if styled == 0 {
            audit.issues.add(Issue::new(
                Severity::Low,
                "Color contrast check limited",
                "Contrast checking is limited without CSS parsing. Consider using browser-based tools for comprehensive contrast analysis.",
            ));
        }
    }
}

/// Parse a CSS hex color (#rgb, #rrggbb) into (r, g, b) components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Relative luminance of an sRGB color
/// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let [r, g, b] = [r, g, b].map(|c| {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, always >= 1.0
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
