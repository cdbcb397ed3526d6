// src/response.rs
// =============================================================================
// The JSON envelope returned to callers (HTTP API and `audit --json`).
//
//   success                -> 200 { success: true,  message, audit }
//   not enough content     -> 200 { success: false, message, details }
//   bad URL                -> 400 { success: false, message }
//   anything else failing  -> 500 { success: false, message }
//
// "Not enough content" is a 200 on purpose: it is a recognized outcome the
// frontend explains to the user, not a server error.
// =============================================================================

use serde::Serialize;

use crate::error::AuditError;
use crate::report::{AuditOutcome, AuditResult, SparseContent};

pub const JAVASCRIPT_APP_ISSUE: &str = "javascript_app";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SparseDetails {
    pub issue: &'static str,
    pub suggestion: String,
    pub pages_scanned: usize,
    /// e.g. "3 text blocks, 412 characters"
    pub content_found: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<SparseDetails>,
    // HTTP status this response should be sent with
    #[serde(skip)]
    status: u16,
}

impl AuditResponse {
    pub fn from_result(result: Result<AuditOutcome, AuditError>) -> Self {
        match result {
            Ok(AuditOutcome::Completed(audit)) => Self::completed(audit),
            Ok(AuditOutcome::InsufficientContent(sparse)) => Self::insufficient_content(sparse),
            Err(error) => Self::failed(&error),
        }
    }

    fn completed(audit: AuditResult) -> Self {
        let total = audit.summary.total_violations;
        let pages = audit.summary.pages_crawled;
        let message = if total == 0 {
            format!("Audit complete: no issues found across {} page(s)", pages)
        } else {
            format!(
                "Audit complete: found {} issue(s) across {} page(s)",
                total, pages
            )
        };

        Self {
            success: true,
            message,
            audit: Some(audit),
            details: None,
            status: 200,
        }
    }

    fn insufficient_content(sparse: SparseContent) -> Self {
        Self {
            success: false,
            message: "This site appears to load its content with JavaScript, so there was \
                      not enough server-rendered copy to audit"
                .to_string(),
            audit: None,
            details: Some(SparseDetails {
                issue: JAVASCRIPT_APP_ISSUE,
                suggestion: "Try auditing a static page such as a blog post, documentation \
                             page or landing page that renders its text on the server"
                    .to_string(),
                pages_scanned: sparse.pages_scanned,
                content_found: format!(
                    "{} text blocks, {} characters",
                    sparse.text_blocks, sparse.characters
                ),
            }),
            status: 200,
        }
    }

    pub fn failed(error: &AuditError) -> Self {
        let (status, message) = match error {
            AuditError::InvalidUrl(reason) => (400, reason.clone()),
            other => (500, format!("Audit failed: {}", other)),
        };

        Self {
            success: false,
            message,
            audit: None,
            details: None,
            status,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn is_sparse(&self) -> bool {
        self.details.is_some()
    }
}
