// src/crawl/fetch.rs
// =============================================================================
// Fetches pages over HTTP.
//
// One PageFetcher is created per audit run and shares a single reqwest
// Client (connection pooling) between the homepage fetch, the subpage
// fetches and the existence probes. Each kind of request gets its own
// timeout:
// - homepage: no explicit cap unless configured
// - subpages: 5 seconds
// - probes:   2 seconds (HEAD request, body never downloaded)
//
// Every failure comes back as a FetchError value. Nothing here panics or
// bubbles up a raw reqwest error, so the caller decides whether a failure
// is fatal (homepage) or just means "skip this page" (subpage).
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::config::AuditConfig;
use crate::error::{AuditError, FetchError};

#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    homepage_timeout: Option<Duration>,
    subpage_timeout: Duration,
    probe_timeout: Duration,
}

impl PageFetcher {
    /// Builds the shared HTTP client for one audit run
    pub fn new(config: &AuditConfig) -> Result<Self, AuditError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .build()
            .map_err(|e| AuditError::Client(e.to_string()))?;

        Ok(Self {
            client,
            homepage_timeout: config.homepage_timeout,
            subpage_timeout: config.subpage_timeout,
            probe_timeout: config.probe_timeout,
        })
    }

    pub async fn fetch_homepage(&self, url: &Url) -> Result<String, FetchError> {
        let mut request = self.client.get(url.as_str());
        if let Some(timeout) = self.homepage_timeout {
            request = request.timeout(timeout);
        }
        fetch_html(request).await
    }

    pub async fn fetch_subpage(&self, url: &Url) -> Result<String, FetchError> {
        let request = self.client.get(url.as_str()).timeout(self.subpage_timeout);
        fetch_html(request).await
    }

    /// Lightweight existence check used by the common-path fallback.
    ///
    /// Returns true only when the path answers with a 2xx status (after
    /// following redirects). Any error just means "not there".
    pub async fn probe(&self, url: &Url) -> bool {
        let result = self
            .client
            .head(url.as_str())
            .timeout(self.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Probe of {} failed: {}", url, FetchError::from(e));
                false
            }
        }
    }
}

// Sends a GET request and returns the body of a successful HTML response
async fn fetch_html(request: RequestBuilder) -> Result<String, FetchError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    // A missing Content-Type is accepted; an explicit non-HTML one is not
    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !content_type.to_ascii_lowercase().contains("html") {
            return Err(FetchError::NotHtml(content_type.to_string()));
        }
    }

    // Body read errors (including timeouts mid-body) go through From<reqwest::Error>
    Ok(response.text().await?)
}
