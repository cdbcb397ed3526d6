// src/report.rs
// =============================================================================
// Builds the final report from the audited pages and their violations.
//
// Steps:
// 1. Content-sparseness check: if the whole crawl found almost no
//    server-rendered copy, the site is most likely a JavaScript app. We say
//    so instead of reporting "0 issues, perfect copy".
// 2. Sort violations by severity, high first. The sort is stable, so
//    violations of equal severity keep the order they were found in.
// 3. Keep the first 10 for display, but count all of them.
// 4. Top issues = first 3 distinct violation types in sorted order.
// =============================================================================

use serde::Serialize;

use crate::audit::{Violation, ViolationType};
use crate::config::{DISPLAY_CAP, TOP_ISSUES};
use crate::extract::PageContent;

/// Fewer paragraphs than this (across all pages) may mean a JS-rendered site
pub const SPARSE_PARAGRAPHS: usize = 5;
/// ...but only if there are also fewer main-content characters than this
pub const SPARSE_CHARACTERS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    /// Count before the display cap was applied
    pub total_violations: usize,
    pub pages_crawled: usize,
    pub top_issues: Vec<ViolationType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub violations: Vec<Violation>,
    pub summary: AuditSummary,
}

/// What the crawl saw when it decided there was too little copy to audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseContent {
    pub pages_scanned: usize,
    pub text_blocks: usize,
    pub characters: usize,
}

/// The two non-error ways an audit run can end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Completed(AuditResult),
    /// Not enough server-rendered content to audit (likely a JavaScript app)
    InsufficientContent(SparseContent),
}

/// Checks for sparse content, then sorts, caps and summarizes the violations.
pub fn build_report(pages: &[PageContent], violations: Vec<Violation>) -> AuditOutcome {
    let text_blocks: usize = pages.iter().map(|p| p.paragraphs.len()).sum();
    let characters: usize = pages.iter().map(|p| p.content_chars()).sum();

    if text_blocks < SPARSE_PARAGRAPHS && characters < SPARSE_CHARACTERS {
        return AuditOutcome::InsufficientContent(SparseContent {
            pages_scanned: pages.len(),
            text_blocks,
            characters,
        });
    }

    AuditOutcome::Completed(aggregate(pages.len(), violations))
}

/// Sorts, caps and summarizes violations (no sparseness check).
pub fn aggregate(pages_crawled: usize, mut violations: Vec<Violation>) -> AuditResult {
    // sort_by is stable: equal severities keep their discovery order
    violations.sort_by(|a, b| b.severity.cmp(&a.severity));

    let total_violations = violations.len();

    let mut top_issues: Vec<ViolationType> = Vec::new();
    for violation in &violations {
        if top_issues.len() == TOP_ISSUES {
            break;
        }
        if !top_issues.contains(&violation.kind) {
            top_issues.push(violation.kind);
        }
    }

    violations.truncate(DISPLAY_CAP);

    AuditResult {
        violations,
        summary: AuditSummary {
            total_violations,
            pages_crawled,
            top_issues,
        },
    }
}
