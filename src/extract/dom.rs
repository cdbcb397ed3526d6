// src/extract/dom.rs
// =============================================================================
// The two document operations the extractor needs:
// - "give me the text of every element matching these selectors"
// - "remove every element matching these selectors"
//
// scraper's Html keeps the whole DOM in an ego_tree::Tree. Removing an
// element means detaching its node: the node (and all its children) stays
// in memory but is no longer reachable from the document root, so later
// select() calls and text() walks never see it.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

/// Detaches every element matching `selector`. Returns how many were removed.
pub fn remove_matching(document: &mut Html, selector: &Selector) -> usize {
    // Collect ids first: we can't mutate the tree while iterating over it
    let ids: Vec<_> = document.select(selector).map(|element| element.id()).collect();

    let mut removed = 0;
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
            removed += 1;
        }
    }
    removed
}

/// Text of each matching element, whitespace-collapsed, in document order.
/// Elements without any text are skipped.
pub fn select_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// All text inside one element, whitespace-collapsed
pub fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Turns every run of whitespace (spaces, tabs, newlines) into a single space
/// and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn test_remove_matching_hides_subtree() {
        let mut document = Html::parse_document(
            "<body><nav><p>Menu text</p></nav><p>Body text</p></body>",
        );
        let removed = remove_matching(&mut document, &selector("nav"));
        assert_eq!(removed, 1);
        assert_eq!(select_text(&document, &selector("p")), vec!["Body text"]);
    }

    #[test]
    fn test_remove_nested_matches() {
        let mut document = Html::parse_document(
            "<body><div class='menu'><div class='menu'>Inner</div></div><p>Kept</p></body>",
        );
        remove_matching(&mut document, &selector(".menu"));
        assert_eq!(select_text(&document, &selector("body")), vec!["Kept"]);
    }

    #[test]
    fn test_select_text_collapses_whitespace() {
        let document = Html::parse_document("<p>  Hello\n\t  <b>world</b>  </p><p>   </p>");
        assert_eq!(select_text(&document, &selector("p")), vec!["Hello world"]);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\tc  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }
}
