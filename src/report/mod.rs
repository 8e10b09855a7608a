// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for audit results.
//!
//! Supports two output formats:
//! - Text: detailed human-readable report, level status first, then issues
//! - JSON: the full `AuditReport` for programmatic consumption

use crate::audit::AuditReport;
use crate::conformance::LevelCheck;
use crate::issues::Severity;
use crate::site::RequiredLevelInfo;

const RULE: &str =
    "================================================================================";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for one audit
///
/// `max_examples` bounds the examples printed per issue in text output; JSON
/// always carries every stored example.
pub fn generate_report(report: &AuditReport, format: OutputFormat, max_examples: usize) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report, max_examples),
        OutputFormat::Json => generate_json_report(report),
    }
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("\n{}\n{}\n{}\n", RULE, title, RULE));
}

fn level_status(output: &mut String, check: &LevelCheck) {
    let status = if check.passes { "PASS" } else { "FAIL" };
    output.push_str(&format!("\n{}: {}\n", check.label, status));
    output.push_str(&format!("   {}\n", check.description));

    let failed = check.failed();
    if !failed.is_empty() {
        output.push_str(&format!("   Failed criteria: {}\n", failed.join(", ")));
    }
}

fn generate_text_report(report: &AuditReport, max_examples: usize) -> String {
    let level = &report.wcag_level;
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str(&format!("{}\nDetailed Accessibility Report\n{}\n", RULE, RULE));
    output.push_str(&format!("\nAudited site: {}\n", report.url));
    output.push_str(&format!("Date: {}\n", report.timestamp));
    output.push_str(&format!("\nSite type: {}\n", level.site_type));
    output.push_str(&format!(
        "Required level: {} ({})\n",
        level.required_level.label(),
        level.required_reason
    ));
    output.push_str(&format!("Achieved level: {}\n", level.achieved_label));
    output.push_str(&format!("\n{}\n", level.achieved_description));
    output.push_str(&format!(
        "Meets required level: {}\n",
        if level.meets_required { "yes" } else { "no" }
    ));

    section(&mut output, "WCAG Level Status");
    level_status(&mut output, &level.all_levels.level_a);
    level_status(&mut output, &level.all_levels.level_aa);
    level_status(&mut output, &level.all_levels.level_aaa);

    section(&mut output, "Issue Summary");
    output.push_str(&format!("\nTotal issues: {}\n", report.total_issues));
    for severity in Severity::ALL {
        output.push_str(&format!(
            "{}: {}\n",
            severity,
            report.issues.count(severity)
        ));
    }

    for severity in Severity::ALL {
        let issues = report.issues.by_severity(severity);
        if issues.is_empty() {
            continue;
        }

        section(&mut output, &format!("{} Issues ({})", severity, issues.len()));

        for (i, issue) in issues.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", i + 1, issue.kind));
            output.push_str(&format!("   {}\n", issue.details));

            if let Some(count) = issue.count {
                output.push_str(&format!("   Occurrences: {}\n", count));
            }

            if let Some(ref examples) = issue.examples {
                if !examples.is_empty() && max_examples > 0 {
                    output.push_str("   Examples:\n");
                    for example in examples.iter().take(max_examples) {
                        output.push_str(&format!("      - {}\n", example));
                    }
                }
            }
        }
    }

    section(&mut output, "Detailed Statistics");
    output.push_str(&format!(
        "\nImages: {} total, {} without alt\n",
        stats.total_images, stats.images_without_alt
    ));
    output.push_str(&format!(
        "Links: {} total, {} unclear\n",
        stats.total_links, stats.unclear_links
    ));
    output.push_str(&format!(
        "Form fields: {} total, {} without labels\n",
        stats.total_forms, stats.forms_without_labels
    ));
    output.push_str(&format!(
        "Buttons: {} total, {} without text\n",
        stats.total_buttons, stats.buttons_without_text
    ));
    output.push_str(&format!(
        "Tables: {} total, {} without headers\n",
        stats.total_tables, stats.tables_without_headers
    ));
    output.push_str(&format!("H1 headings: {}\n", stats.h1_count));
    output.push_str(&format!(
        "Page language: {}\n",
        if stats.has_lang { "yes" } else { "no" }
    ));
    output.push_str(&format!(
        "Elements with inline color styles: {}\n",
        stats.elements_checked_for_contrast
    ));

    section(&mut output, "End of Report");
    output
}

/// Generate JSON report
fn generate_json_report(report: &AuditReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// One-line summary of an inferred requirement
pub fn required_level_summary(info: &RequiredLevelInfo) -> String {
    format!(
        "{}: {} ({})",
        info.site_type,
        info.required_level.label(),
        info.reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::analyze_html;
    use crate::site::detect_required_level;

    fn sample_report() -> AuditReport {
        analyze_html(
            "https://shop.example.com",
            r#"<html><body>
                <h1>A</h1><h1>B</h1>
                <img src="one.png"><img src="two.png"><img src="three.png"><img src="four.png">
            </body></html>"#,
        )
    }

    #[test]
    fn test_text_report_layout() {
        let text = generate_report(&sample_report(), OutputFormat::Text, 5);
        assert!(text.starts_with(RULE));
        assert!(text.contains("Detailed Accessibility Report"));
        assert!(text.contains("Audited site: https://shop.example.com"));
        assert!(text.contains("Site type: E-commerce"));
        assert!(text.contains("Achieved level: Non-compliant"));
        assert!(text.contains("Level A - Basic: FAIL"));
        assert!(text.contains("Failed criteria: has_lang, all_images_have_alt"));
        assert!(text.contains("HIGH Issues"));
        assert!(text.contains("1. Missing lang attribute"));
        assert!(text.contains("Images: 4 total, 4 without alt"));
        assert!(text.contains("Page language: no"));
        assert!(text.trim_end().ends_with(RULE));
    }

    #[test]
    fn test_text_report_limits_examples() {
        let report = sample_report();
        let full = generate_report(&report, OutputFormat::Text, 5);
        // Alt text rule keeps three examples
        assert!(full.contains("      - three.png"));
        assert!(!full.contains("four.png"));

        let limited = generate_report(&report, OutputFormat::Text, 1);
        assert!(limited.contains("      - one.png"));
        assert!(!limited.contains("      - two.png"));

        let none = generate_report(&report, OutputFormat::Text, 0);
        assert!(!none.contains("Examples:"));
    }

    #[test]
    fn test_json_report() {
        let json = generate_report(&sample_report(), OutputFormat::Json, 5);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["wcag_level"]["achieved_level"], "non_compliant");
        assert_eq!(parsed["wcag_level"]["required_level"], "level_a");
        assert_eq!(parsed["wcag_level"]["meets_required"], false);
        assert!(parsed["issues"]["critical"].is_array());
        assert_eq!(parsed["stats"]["total_images"], 4);
        assert_eq!(parsed["issues"]["high"][1]["examples"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_required_level_summary() {
        let summary = required_level_summary(&detect_required_level("https://bank.example"));
        assert!(summary.starts_with("Banking and finance: Level AA - Standard"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}
