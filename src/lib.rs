// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcagbot - WCAG accessibility auditor for web pages
//!
//! Fetches a page (or reads a saved one), runs a fixed set of DOM inspection
//! rules over it and derives the WCAG conformance level the page achieves.
//! The achieved level is compared with the level the site is expected to
//! meet, inferred from its URL (government sites AAA, banks and public
//! services AA, everything else A).
//!
//! ## Rules
//!
//! - **Language** (3.1.1): `lang` attribute on the root element
//! - **Headings** (1.3.1): single h1, no skipped levels
//! - **Alt Text** (1.1.1): `alt` attribute on every image
//! - **Link Text** (2.4.4): no empty or ambiguous link text
//! - **Forms** (1.3.1/3.3.2): accessible labels on form fields
//! - **Buttons** (4.1.2): accessible name on every button
//! - **Tables** (1.3.1): header cells in data tables
//! - **Landmarks** (best practice): main, navigation and footer regions
//! - **Skip Link** (2.4.1): bypass link near the top of the page
//! - **Contrast** (1.4.3): inline color heuristic only
//!
//! ## Example
//!
//! ```
//! use wcagbot::audit::analyze_html;
//! use wcagbot::conformance::ConformanceLevel;
//!
//! let report = analyze_html(
//!     "https://example.com",
//!     r#"<html lang="en"><body><h1>Welcome</h1></body></html>"#,
//! );
//! assert_eq!(report.wcag_level.achieved_level, ConformanceLevel::LevelAaa);
//! ```

pub mod audit;
pub mod charset;
pub mod config;
pub mod conformance;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod issues;
pub mod report;
pub mod rules;
pub mod site;
pub mod stats;

pub use audit::{analyze_html, audit_url, Audit, AuditReport};
pub use error::{AuditError, Result};
