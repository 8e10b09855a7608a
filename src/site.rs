// SPDX-License-Identifier: PMPL-1.0-or-later
//! Required conformance level inferred from the audited URL.
//!
//! Categories are tried in table order and the first one with a keyword
//! contained in the lowercased URL wins. Keywords include Hebrew terms for
//! Israeli ministries, banks and public services.

use crate::conformance::ConformanceLevel;
use serde::Serialize;

/// What the site is expected to achieve, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredLevelInfo {
    pub required_level: ConformanceLevel,
    pub site_type: String,
    pub reason: String,
}

/// One row of the classification table
#[derive(Debug)]
pub struct SiteCategory {
    pub site_type: &'static str,
    pub keywords: &'static [&'static str],
    pub required_level: ConformanceLevel,
    pub reason: &'static str,
}

impl SiteCategory {
    fn matches(&self, url_lower: &str) -> bool {
        self.keywords.iter().any(|k| url_lower.contains(k))
    }

    fn info(&self) -> RequiredLevelInfo {
        RequiredLevelInfo {
            required_level: self.required_level,
            site_type: self.site_type.to_string(),
            reason: self.reason.to_string(),
        }
    }
}

/// Ordered classification table; earlier rows take precedence
pub const SITE_CATEGORIES: &[SiteCategory] = &[
    SiteCategory {
        site_type: "Government",
        keywords: &[".gov.", "gov.il", "משרד", "ממשלת", "government"],
        required_level: ConformanceLevel::LevelAaa,
        reason: "Government sites must meet the highest accessibility level (AAA)",
    },
    SiteCategory {
        site_type: "Banking and finance",
        keywords: &["bank", "בנק", "leumi", "hapoalim", "mizrahi", "discount", "finance"],
        required_level: ConformanceLevel::LevelAa,
        reason: "Banking and financial sites must meet the AA standard",
    },
    SiteCategory {
        site_type: "Public service",
        keywords: &[
            "health",
            "בריאות",
            "hospital",
            "clinic",
            "education",
            "חינוך",
            "university",
            "אוניברסיטה",
        ],
        required_level: ConformanceLevel::LevelAa,
        reason: "Health and education services must meet the AA standard",
    },
    SiteCategory {
        site_type: "E-commerce",
        keywords: &["shop", "store", "cart", "buy", "קנייה"],
        required_level: ConformanceLevel::LevelA,
        reason: "E-commerce sites are recommended to meet at least Level A",
    },
];

/// Fallback when no category matches
pub static DEFAULT_CATEGORY: SiteCategory = SiteCategory {
    site_type: "General",
    keywords: &[],
    required_level: ConformanceLevel::LevelA,
    reason: "Meeting at least the basic accessibility level (A) is recommended",
};

/// Infer the required level for a URL. Pure; no network access.
pub fn detect_required_level(url: &str) -> RequiredLevelInfo {
    let url_lower = url.to_lowercase();
    SITE_CATEGORIES
        .iter()
        .find(|c| c.matches(&url_lower))
        .unwrap_or(&DEFAULT_CATEGORY)
        .info()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_government() {
        let info = detect_required_level("https://www.gov.il/he/departments");
        assert_eq!(info.required_level, ConformanceLevel::LevelAaa);
        assert_eq!(info.site_type, "Government");

        let info = detect_required_level("https://portal.gov.uk");
        assert_eq!(info.required_level, ConformanceLevel::LevelAaa);
    }

    #[test]
    fn test_finance() {
        let info = detect_required_level("https://www.MyBank.com/login");
        assert_eq!(info.required_level, ConformanceLevel::LevelAa);
        assert_eq!(info.site_type, "Banking and finance");
    }

    #[test]
    fn test_public_service() {
        let info = detect_required_level("https://university.example.org");
        assert_eq!(info.required_level, ConformanceLevel::LevelAa);
        assert_eq!(info.site_type, "Public service");
    }

    #[test]
    fn test_commerce_and_default() {
        let shop = detect_required_level("https://shop.example.com");
        assert_eq!(shop.required_level, ConformanceLevel::LevelA);
        assert_eq!(shop.site_type, "E-commerce");

        let other = detect_required_level("https://example.com/blog");
        assert_eq!(other.required_level, ConformanceLevel::LevelA);
        assert_eq!(other.site_type, "General");
    }

    #[test]
    fn test_first_match_wins() {
        // Matches government, finance and commerce; government is first
        let info = detect_required_level("https://finance.gov.il/shop");
        assert_eq!(info.site_type, "Government");

        // Finance precedes public service
        let info = detect_required_level("https://health-bank.example");
        assert_eq!(info.site_type, "Banking and finance");
    }

    #[test]
    fn test_hebrew_keywords() {
        let info = detect_required_level("https://example.co.il/משרד-הבריאות");
        assert_eq!(info.required_level, ConformanceLevel::LevelAaa);
    }

    #[test]
    fn test_every_keyword_maps_to_its_category() {
        for category in SITE_CATEGORIES {
            for keyword in category.keywords {
                let url = format!("https://x.example/{}", keyword);
                let info = detect_required_level(&url);
                assert_eq!(info.site_type, category.site_type, "keyword {:?}", keyword);
                assert_eq!(info.required_level, category.required_level);
            }
        }
    }
}
