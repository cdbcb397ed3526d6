// src/pipeline.rs
// =============================================================================
// One complete audit run: Validate -> Fetch -> Extract -> Discover ->
// Fetch subpages -> Audit -> Report.
//
// Everything the run needs is passed in (the raw URL and an AuditConfig)
// and everything it produces is returned. There is no cache and no state
// shared between runs.
// =============================================================================

use crate::audit::run_rules;
use crate::config::AuditConfig;
use crate::crawl::{discover_subpages, fetch_subpages, PageFetcher};
use crate::error::AuditError;
use crate::extract::{extract_page, PageContent};
use crate::report::{build_report, AuditOutcome};
use crate::target::normalize_url;

/// Audits the written copy of the site at `raw_url`.
///
/// Returns `AuditError::InvalidUrl` before any network call when the URL is
/// unusable, and `AuditError::HomepageFetch` when the homepage can't be
/// fetched. Subpage failures are never errors.
pub async fn audit_site(raw_url: &str, config: &AuditConfig) -> Result<AuditOutcome, AuditError> {
    let url = normalize_url(raw_url)?;
    log::info!("Auditing {}", url);

    let fetcher = PageFetcher::new(config)?;

    let homepage_html = fetcher
        .fetch_homepage(&url)
        .await
        .map_err(|source| AuditError::HomepageFetch {
            url: url.to_string(),
            source,
        })?;

    // The homepage is always pages[0]
    let mut pages: Vec<PageContent> = vec![extract_page(url.as_str(), &homepage_html)];

    let subpages =
        discover_subpages(&homepage_html, &url, &fetcher, config.probe_concurrency).await;
    log::info!("Discovered {} subpage(s)", subpages.len());
    for subpage in &subpages {
        log::debug!("  {}", subpage);
    }

    pages.extend(fetch_subpages(&fetcher, subpages).await);
    log::info!("Crawled {} page(s)", pages.len());

    let violations = run_rules(&pages, &config.rules);
    Ok(build_report(&pages, violations))
}
