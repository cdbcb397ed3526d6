// src/extract/mod.rs
// =============================================================================
// Pulls the real body copy out of a page's HTML.
//
// Two things come out of every page:
// - paragraphs:   the text of <p> and <h1>-<h6> elements, longer than 20
//                 characters, first 10 per page. Only these are ever fed to
//                 the sentence rules, so buttons and nav labels never get
//                 flagged.
// - main_content: one flattened string of the page's main region, used for
//                 the "is there any server-rendered copy at all?" check.
//
// Boilerplate (nav, header, footer, menus, ads, scripts, styles) is removed
// from the tree BEFORE any text is read.
// =============================================================================

pub mod dom;

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use dom::{collapse_whitespace, remove_matching, select_text};

pub const MIN_PARAGRAPH_CHARS: usize = 20;
pub const MAX_PARAGRAPHS: usize = 10;
pub const MAX_MAIN_CONTENT_CHARS: usize = 3000;

// Elements whose text is never body copy
const BOILERPLATE: &str = "script, style, noscript, template, iframe, svg, \
    nav, header, footer, aside, \
    [role=navigation], [role=banner], [role=contentinfo], \
    .menu, .nav, .navbar, .navigation, .sidebar, .side-bar, \
    .ad, .ads, .advert, .advertisement, .banner-ad, .cookie-banner, .cookie-notice";

static BOILERPLATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(BOILERPLATE).expect("hardcoded boilerplate selector"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("hardcoded selector 'title'"));

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p, h1, h2, h3, h4, h5, h6").expect("hardcoded paragraph selector")
});

// Main content regions, most specific first
static MAIN_CONTENT_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "main, [role=main]",
        "article",
        ".content, .post-content, .entry-content",
        "body",
    ]
    .iter()
    .map(|css| Selector::parse(css).expect("hardcoded main content selector"))
    .collect()
});

/// The extracted copy of one fetched page. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub url: String,
    pub title: String,
    pub main_content: String,
    pub paragraphs: Vec<String>,
}

impl PageContent {
    /// Length of main_content in characters (not bytes)
    pub fn content_chars(&self) -> usize {
        self.main_content.chars().count()
    }
}

/// Extracts title, paragraphs and main content from raw HTML.
///
/// Malformed markup never fails: html5ever repairs what it can, and every
/// missing piece just comes back empty.
pub fn extract_page(url: &str, html: &str) -> PageContent {
    let mut document = Html::parse_document(html);

    let title = select_text(&document, &TITLE_SELECTOR)
        .into_iter()
        .next()
        .unwrap_or_default();

    let removed = remove_matching(&mut document, &BOILERPLATE_SELECTOR);

    let paragraphs: Vec<String> = select_text(&document, &PARAGRAPH_SELECTOR)
        .into_iter()
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_PARAGRAPHS)
        .collect();

    let main_content = main_content(&document);

    log::debug!(
        "Extracted {}: removed {} boilerplate element(s), {} paragraph(s), {} chars of main content",
        url,
        removed,
        paragraphs.len(),
        main_content.chars().count()
    );

    PageContent {
        url: url.to_string(),
        title,
        main_content,
        paragraphs,
    }
}

// First region (main -> article -> content classes -> body) that has any text
fn main_content(document: &Html) -> String {
    let text = MAIN_CONTENT_SELECTORS
        .iter()
        .map(|selector| select_text(document, selector).join(" "))
        .find(|text| !text.is_empty())
        .unwrap_or_default();

    collapse_whitespace(&text)
        .chars()
        .take(MAX_MAIN_CONTENT_CHARS)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is built the first time it is used
//    - Selector::parse runs once per process instead of once per page
//    - The expect() calls can only fail if a hardcoded selector has a typo
//
// 2. Why chars().count() instead of len()?
//    - len() counts bytes; "café" is 5 bytes but 4 characters
//    - The 20 and 3000 limits are about characters a reader sees
//
// 3. Why take(3000) on chars()?
//    - Slicing a String by byte index can panic in the middle of a
//      multi-byte character; taking chars never can
// -----------------------------------------------------------------------------
