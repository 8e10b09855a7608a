// SPDX-License-Identifier: PMPL-1.0-or-later
//! WCAG conformance level derivation.
//!
//! Three gates are evaluated over the final statistics and issue counts.
//! Each gate includes the one below it, so a page can only be AA if it is
//! also A, and only AAA if it is also AA:
//!
//! - **A**: language declared, at least one h1, and zero missing alt texts,
//!   unclear links, unlabelled fields and unnamed buttons.
//! - **AA**: exactly one h1, alt/link/form failure rates under 10% / 5% / 5%,
//!   and every table has headers.
//! - **AAA**: no critical or high issues and at most two medium ones.

use crate::issues::{IssueSet, Severity};
use crate::site::RequiredLevelInfo;
use crate::stats::{percentage, Statistics};
use serde::Serialize;

/// Achieved or required conformance, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformanceLevel {
    NonCompliant,
    LevelA,
    LevelAa,
    LevelAaa,
}

impl ConformanceLevel {
    /// Numeric rank used to compare achieved against required
    pub fn rank(&self) -> u8 {
        match self {
            ConformanceLevel::NonCompliant => 0,
            ConformanceLevel::LevelA => 1,
            ConformanceLevel::LevelAa => 2,
            ConformanceLevel::LevelAaa => 3,
        }
    }

    /// Whether this level satisfies `required`
    pub fn meets(&self, required: ConformanceLevel) -> bool {
        self.rank() >= required.rank()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConformanceLevel::NonCompliant => "Non-compliant",
            ConformanceLevel::LevelA => "Level A - Basic",
            ConformanceLevel::LevelAa => "Level AA - Standard",
            ConformanceLevel::LevelAaa => "Level AAA - Excellent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConformanceLevel::NonCompliant => {
                "The site does not meet the basic requirements of WCAG Level A"
            }
            ConformanceLevel::LevelA => "The site meets the basic requirements of WCAG",
            ConformanceLevel::LevelAa => "The site meets the accepted WCAG standard",
            ConformanceLevel::LevelAaa => "The site meets the highest accessibility standard",
        }
    }

    /// Display color token for report front ends
    pub fn color(&self) -> &'static str {
        match self {
            ConformanceLevel::NonCompliant => "#dc2626",
            ConformanceLevel::LevelA => "#f59e0b",
            ConformanceLevel::LevelAa => "#3b82f6",
            ConformanceLevel::LevelAaa => "#10b981",
        }
    }
}

impl std::fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConformanceLevel::NonCompliant => write!(f, "non_compliant"),
            ConformanceLevel::LevelA => write!(f, "level_a"),
            ConformanceLevel::LevelAa => write!(f, "level_aa"),
            ConformanceLevel::LevelAaa => write!(f, "level_aaa"),
        }
    }
}

/// One named condition inside a gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub name: &'static str,
    pub passed: bool,
}

/// Outcome of one gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCheck {
    /// Gate passed, including every gate below it
    pub passes: bool,
    pub label: &'static str,
    pub description: &'static str,
    /// This gate's own conditions, regardless of lower gates
    pub criteria: Vec<Criterion>,
}

impl LevelCheck {
    fn new(
        below: bool,
        label: &'static str,
        description: &'static str,
        criteria: Vec<Criterion>,
    ) -> Self {
        let own = criteria.iter().all(|c| c.passed);
        Self {
            passes: below && own,
            label,
            description,
            criteria,
        }
    }

    /// Names of the conditions that failed
    pub fn failed(&self) -> Vec<&'static str> {
        self.criteria
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name)
            .collect()
    }
}

/// Breakdown of all three gates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllLevels {
    pub level_a: LevelCheck,
    pub level_aa: LevelCheck,
    pub level_aaa: LevelCheck,
}

impl AllLevels {
    /// Highest gate on the ladder that passes
    pub fn achieved(&self) -> ConformanceLevel {
        if !self.level_a.passes {
            ConformanceLevel::NonCompliant
        } else if self.level_aaa.passes {
            ConformanceLevel::LevelAaa
        } else if self.level_aa.passes {
            ConformanceLevel::LevelAa
        } else {
            ConformanceLevel::LevelA
        }
    }
}

/// Final conformance verdict for one audit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformanceResult {
    pub achieved_level: ConformanceLevel,
    pub achieved_label: &'static str,
    pub achieved_description: &'static str,
    pub achieved_color: &'static str,
    pub required_level: ConformanceLevel,
    pub site_type: String,
    pub required_reason: String,
    pub meets_required: bool,
    pub all_levels: AllLevels,
}

fn criterion(name: &'static str, passed: bool) -> Criterion {
    Criterion { name, passed }
}

/// Evaluate the three gates
pub fn evaluate_levels(stats: &Statistics, issues: &IssueSet) -> AllLevels {
    let level_a = LevelCheck::new(
        true,
        ConformanceLevel::LevelA.label(),
        "Basic accessibility requirements",
        vec![
            criterion("has_lang", stats.has_lang),
            criterion("has_h1", stats.h1_count >= 1),
            criterion("all_images_have_alt", stats.images_without_alt == 0),
            criterion("all_links_clear", stats.unclear_links == 0),
            criterion("all_forms_labeled", stats.forms_without_labels == 0),
            criterion("all_buttons_labeled", stats.buttons_without_text == 0),
        ],
    );

    let alt_pct = percentage(stats.images_without_alt, stats.total_images);
    let link_pct = percentage(stats.unclear_links, stats.total_links);
    let form_pct = percentage(stats.forms_without_labels, stats.total_forms);

    let level_aa = LevelCheck::new(
        level_a.passes,
        ConformanceLevel::LevelAa.label(),
        "Accepted accessibility standard",
        vec![
            criterion("single_h1", stats.h1_count == 1),
            criterion("low_alt_issues", alt_pct < 10.0),
            criterion("low_link_issues", link_pct < 5.0),
            criterion("low_form_issues", form_pct < 5.0),
            criterion(
                "tables_accessible",
                stats.tables_without_headers == 0 || stats.total_tables == 0,
            ),
        ],
    );

    let level_aaa = LevelCheck::new(
        level_aa.passes,
        ConformanceLevel::LevelAaa.label(),
        "Highest level of accessibility",
        vec![
            criterion("no_critical", issues.count(Severity::Critical) == 0),
            criterion("no_high", issues.count(Severity::High) == 0),
            criterion("max_medium", issues.count(Severity::Medium) <= 2),
        ],
    );

    AllLevels {
        level_a,
        level_aa,
        level_aaa,
    }
}

/// Derive the achieved level and compare it with the site's requirement
pub fn derive(
    stats: &Statistics,
    issues: &IssueSet,
    required: &RequiredLevelInfo,
) -> ConformanceResult {
    let all_levels = evaluate_levels(stats, issues);
    let achieved = all_levels.achieved();

    ConformanceResult {
        achieved_level: achieved,
        achieved_label: achieved.label(),
        achieved_description: achieved.description(),
        achieved_color: achieved.color(),
        required_level: required.required_level,
        site_type: required.site_type.clone(),
        required_reason: required.reason.clone(),
        meets_required: achieved.meets(required.required_level),
        all_levels,
    }
}
