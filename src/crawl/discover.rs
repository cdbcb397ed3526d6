// src/crawl/discover.rs
// =============================================================================
// Finds a few subpages worth auditing next to the homepage.
//
// Plain anchor scraping fails on single-page apps and on marketing sites
// that hide their navigation behind JavaScript, so discovery runs a short
// pipeline of strategies and stops as soon as it has enough candidates:
//
// 1. Anchors:         <a href> links on the homepage (always runs)
// 2. Common paths:    HEAD-probe /about, /pricing, ... (fewer than 2 found)
// 3. Data attributes: data-href / data-url / data-link (still fewer than 2)
//
// Whatever the strategies produce is deduplicated, kept in discovery order
// and truncated to MAX_SUBPAGES before anything is fetched.
// =============================================================================

use std::collections::HashSet;
use std::sync::LazyLock;

use futures::stream::{self, StreamExt};
use scraper::{Html, Selector};
use url::Url;

use crate::config::{MAX_SUBPAGES, MIN_ANCHOR_CANDIDATES, PROBE_TARGET};
use crate::crawl::fetch::PageFetcher;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("hardcoded selector 'a[href]'"));

static DATA_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[data-href], [data-url], [data-link]")
        .expect("hardcoded data attribute selector")
});

const DATA_LINK_ATTRIBUTES: &[&str] = &["data-href", "data-url", "data-link"];

// Links to these sites are never the audited site's own copy
const SOCIAL_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "tiktok.com",
    "pinterest.com",
    "github.com",
];

// Pages that are forms or app screens rather than written copy
const NON_CONTENT_PATHS: &[&str] = &[
    "/login",
    "/register",
    "/cart",
    "/checkout",
    "/search",
    "/contact-form",
];

/// Conventional paths tried (in this order) when the homepage has too few links
pub const COMMON_PATHS: &[&str] = &[
    "/about",
    "/about-us",
    "/company",
    "/team",
    "/products",
    "/services",
    "/solutions",
    "/features",
    "/pricing",
    "/plans",
    "/contact",
    "/support",
    "/help",
    "/docs",
    "/documentation",
    "/blog",
    "/news",
    "/careers",
    "/jobs",
    "/investors",
];

/// The candidate generators, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Anchors,
    CommonPaths,
    DataAttributes,
}

impl Strategy {
    pub const ORDER: [Strategy; 3] = [
        Strategy::Anchors,
        Strategy::CommonPaths,
        Strategy::DataAttributes,
    ];

    async fn run(
        self,
        markup: &str,
        base: &Url,
        fetcher: &PageFetcher,
        probe_concurrency: usize,
        current: &[Url],
    ) -> Vec<Url> {
        match self {
            Strategy::Anchors => anchor_candidates(markup, base, current),
            Strategy::CommonPaths => {
                probe_common_paths(fetcher, base, current, probe_concurrency).await
            }
            Strategy::DataAttributes => data_attribute_candidates(markup, base, current),
        }
    }
}

/// Produces at most MAX_SUBPAGES same-origin subpage URLs for the homepage.
pub async fn discover_subpages(
    markup: &str,
    base: &Url,
    fetcher: &PageFetcher,
    probe_concurrency: usize,
) -> Vec<Url> {
    let mut candidates: Vec<Url> = Vec::new();

    for strategy in Strategy::ORDER {
        if candidates.len() >= MIN_ANCHOR_CANDIDATES {
            break;
        }

        let found = strategy
            .run(markup, base, fetcher, probe_concurrency, &candidates)
            .await;
        log::debug!("{:?} strategy found {} candidate(s)", strategy, found.len());

        merge_candidates(&mut candidates, found);
    }

    candidates.truncate(MAX_SUBPAGES);
    candidates
}

/// Strategy 1: same-origin `<a href>` links, minus junk.
pub fn anchor_candidates(markup: &str, base: &Url, current: &[Url]) -> Vec<Url> {
    let document = Html::parse_document(markup);
    let mut found = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_link(base, href) else {
            continue;
        };
        if is_social_link(&url) || !is_same_origin(base, &url) || is_non_content_path(&url) {
            continue;
        }
        found.push(url);
    }

    dedupe_against(current, found)
}

/// Strategy 2: HEAD-probe the conventional paths until the candidate list
/// holds PROBE_TARGET entries.
///
/// Probes run with bounded concurrency but results are consumed in list
/// order, so the outcome does not depend on which server answers first.
/// Dropping the stream after the early exit cancels the probes still in flight.
pub async fn probe_common_paths(
    fetcher: &PageFetcher,
    base: &Url,
    current: &[Url],
    concurrency: usize,
) -> Vec<Url> {
    let needed = PROBE_TARGET.saturating_sub(current.len());
    if needed == 0 {
        return Vec::new();
    }

    let known: HashSet<String> = current.iter().map(candidate_key).collect();
    let urls: Vec<Url> = COMMON_PATHS
        .iter()
        .filter_map(|path| base.join(path).ok())
        .filter(|url| !known.contains(&candidate_key(url)))
        .collect();

    let mut probes = std::pin::pin!(stream::iter(urls)
        .map(|url| async move {
            let exists = fetcher.probe(&url).await;
            (url, exists)
        })
        .buffered(concurrency.max(1)));

    let mut found = Vec::new();
    while let Some((url, exists)) = probes.next().await {
        if exists {
            log::debug!("Probe hit: {}", url);
            found.push(url);
            if found.len() >= needed {
                break;
            }
        }
    }
    found
}

/// Strategy 3: root-relative paths stored in data attributes by JS routers.
pub fn data_attribute_candidates(markup: &str, base: &Url, current: &[Url]) -> Vec<Url> {
    let document = Html::parse_document(markup);
    let mut found = Vec::new();

    for element in document.select(&DATA_LINK_SELECTOR) {
        for attribute in DATA_LINK_ATTRIBUTES {
            let Some(value) = element.value().attr(attribute) else {
                continue;
            };
            let value = value.trim();
            // Root-relative only: "//cdn.example.com" is protocol-relative, not a path
            if !value.starts_with('/') || value.starts_with("//") {
                continue;
            }
            let Ok(mut url) = base.join(value) else {
                continue;
            };
            url.set_fragment(None);
            if is_same_origin(base, &url) && !is_root_path(&url) {
                found.push(url);
            }
        }
    }

    dedupe_against(current, found)
}

// Resolves an href against the page URL, dropping links that cannot be pages
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();

    // Skip anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("javascript:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

// Same-origin here means an identical hostname (www.example.com != example.com)
fn is_same_origin(base: &Url, url: &Url) -> bool {
    url.host_str().is_some() && url.host_str() == base.host_str()
}

fn is_social_link(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    SOCIAL_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}

fn is_root_path(url: &Url) -> bool {
    normalized_path(url).is_empty()
}

fn is_non_content_path(url: &Url) -> bool {
    let path = normalized_path(url);
    path.is_empty()
        || NON_CONTENT_PATHS.iter().any(|blocked| {
            path == *blocked
                || path
                    .strip_prefix(blocked)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
}

// Lowercased path without the trailing slash; the root path becomes ""
fn normalized_path(url: &Url) -> String {
    url.path().trim_end_matches('/').to_ascii_lowercase()
}

// Identity used for deduplication: /about and /about/ are the same page
fn candidate_key(url: &Url) -> String {
    let mut key = format!(
        "{}://{}{}",
        url.scheme(),
        url.host_str().unwrap_or_default(),
        url.path().trim_end_matches('/')
    );
    if let Some(port) = url.port() {
        key.push_str(&format!(":{}", port));
    }
    if let Some(query) = url.query() {
        key.push('?');
        key.push_str(query);
    }
    key
}

// Keeps the first occurrence of each page, skipping pages already in `current`
fn dedupe_against(current: &[Url], found: Vec<Url>) -> Vec<Url> {
    let mut seen: HashSet<String> = current.iter().map(candidate_key).collect();
    found
        .into_iter()
        .filter(|url| seen.insert(candidate_key(url)))
        .collect()
}

fn merge_candidates(candidates: &mut Vec<Url>, found: Vec<Url>) {
    let fresh = dedupe_against(candidates, found);
    candidates.extend(fresh);
}
