// src/crawl/mod.rs
// =============================================================================
// This module handles the (very shallow) website crawl.
//
// Features:
// - One PageFetcher per run with per-request timeouts
// - Subpage discovery restricted to the homepage's own hostname
// - Parallel subpage fetching where one bad page never affects the others
//
// Submodules:
// - fetch:    HTTP GET / HEAD with timeouts, typed FetchError
// - discover: anchor links, common-path probing, data attributes
// =============================================================================

pub mod discover;
pub mod fetch;

use futures::stream::{self, StreamExt};
use url::Url;

use crate::config::MAX_SUBPAGES;
use crate::extract::{extract_page, PageContent};

pub use discover::discover_subpages;
pub use fetch::PageFetcher;

/// Fetches and extracts every subpage concurrently.
///
/// Fetches run in parallel but pages come back in discovery order, so the
/// same site always yields the same report. A page that times out, answers
/// with an error status or isn't HTML is logged and left out.
pub async fn fetch_subpages(fetcher: &PageFetcher, urls: Vec<Url>) -> Vec<PageContent> {
    let futures = urls.into_iter().map(|url| async move {
        match fetcher.fetch_subpage(&url).await {
            Ok(html) => Some(extract_page(url.as_str(), &html)),
            Err(e) => {
                log::warn!("Skipping subpage {}: {}", url, e);
                None
            }
        }
    });

    stream::iter(futures)
        .buffered(MAX_SUBPAGES)
        .filter_map(|page| async move { page })
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at the same time
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures were created
//    - Total time is the same either way: the slowest page decides it
//
// 2. Why Option<PageContent> inside the stream?
//    - A failed subpage becomes None instead of an error
//    - filter_map then drops the Nones, so one bad page can't fail the rest
//
// 3. Why `async move` in the map closure?
//    - Each future needs its own copy of `url`
//    - `fetcher` is a shared reference (&PageFetcher), copying it is free
// -----------------------------------------------------------------------------
