// src/audit/sentences.rs
// Sentence splitting shared by every rule.

/// Pieces shorter than this are fragments ("Inc", "v2", "Learn more"), not sentences
pub const MIN_SENTENCE_CHARS: usize = 20;

/// A sentence together with where it came from on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub paragraph: usize,
    /// Index among the kept sentences of the paragraph
    pub index: usize,
    pub text: &'a str,
}

impl Sentence<'_> {
    /// Page-local ordering key: earlier paragraphs/sentences sort first
    pub fn position(&self) -> usize {
        self.paragraph * 100 + self.index
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Splits a paragraph on `.`, `!` and `?`, trims each piece and drops the
/// ones shorter than MIN_SENTENCE_CHARS. The punctuation itself is dropped.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    paragraph
        .split(&['.', '!', '?'][..])
        .map(str::trim)
        .filter(|piece| piece.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}

/// Every sentence of every paragraph, in reading order
pub fn page_sentences(paragraphs: &[String]) -> Vec<Sentence<'_>> {
    paragraphs
        .iter()
        .enumerate()
        .flat_map(|(paragraph, text)| {
            split_sentences(text)
                .into_iter()
                .enumerate()
                .map(move |(index, text)| Sentence {
                    paragraph,
                    index,
                    text,
                })
        })
        .collect()
}
