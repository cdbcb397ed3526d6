// src/lib.rs
// =============================================================================
// copy_auditor: audits the written copy of a website.
//
// The pipeline for one run (see pipeline::audit_site):
//   target   -> normalize and validate the user's URL
//   crawl    -> fetch the homepage, discover and fetch up to 3 subpages
//   extract  -> strip boilerplate, pull paragraphs and main content
//   audit    -> run the writing rules over every page's paragraphs
//   report   -> sort, cap and summarize, or flag a JavaScript-only site
//   response -> wrap the outcome in the JSON envelope callers receive
// =============================================================================

pub mod audit;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod response;
pub mod server;
pub mod target;

pub use config::AuditConfig;
pub use error::{AuditError, FetchError};
pub use pipeline::audit_site;
pub use report::{AuditOutcome, AuditResult};
pub use response::AuditResponse;
