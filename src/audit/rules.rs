// src/audit/rules.rs
// =============================================================================
// The standard rules: long sentences and passive voice.
//
// Both work sentence by sentence over the page's paragraphs (see
// sentences.rs) and emit at most one violation per sentence.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::sentences::{page_sentences, Sentence};
use super::{Severity, Violation, ViolationType};

/// More words than this is a long sentence
pub const LONG_SENTENCE_WORDS: usize = 25;
/// More words than this is a very long sentence (high severity)
pub const VERY_LONG_SENTENCE_WORDS: usize = 35;
/// Target length used in the "split into N sentences" hint
const TARGET_SENTENCE_WORDS: usize = 15;

// A being-verb followed by a word ending in "ed": "was designed", "are used".
// This is a lexical heuristic, not a grammar parser: irregular participles
// ("was written") are missed and adjectives ("is red") are caught.
static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(was|were|is|are|been|being)\s+\w+ed\b").expect("hardcoded passive regex")
});

/// Flags sentences with more than 25 words.
pub fn long_sentences(page: &str, paragraphs: &[String]) -> Vec<Violation> {
    page_sentences(paragraphs)
        .into_iter()
        .filter_map(|sentence| {
            let words = sentence.word_count();
            if words <= LONG_SENTENCE_WORDS {
                return None;
            }

            let severity = if words > VERY_LONG_SENTENCE_WORDS {
                Severity::High
            } else {
                Severity::Medium
            };
            let suggestion = format!(
                "Split this {}-word sentence into about {} shorter sentences.",
                words,
                words.div_ceil(TARGET_SENTENCE_WORDS)
            );
            Some(violation(ViolationType::LongSentence, severity, page, &sentence, suggestion))
        })
        .collect()
}

/// Flags sentences containing a being-verb + "-ed" word.
pub fn passive_voice(page: &str, paragraphs: &[String]) -> Vec<Violation> {
    page_sentences(paragraphs)
        .into_iter()
        .filter(|sentence| PASSIVE_VOICE.is_match(sentence.text))
        .map(|sentence| {
            violation(
                ViolationType::PassiveVoice,
                Severity::Medium,
                page,
                &sentence,
                "Rewrite in active voice.".to_string(),
            )
        })
        .collect()
}

/// Builds a violation for one sentence of a page
pub(crate) fn violation(
    kind: ViolationType,
    severity: Severity,
    page: &str,
    sentence: &Sentence<'_>,
    suggestion: String,
) -> Violation {
    Violation {
        kind,
        severity,
        text: sentence.text.to_string(),
        suggestion,
        page: page.to_string(),
        position: sentence.position(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/";

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ")
    }

    fn paragraphs(texts: &[String]) -> Vec<String> {
        texts.to_vec()
    }

    #[test]
    fn test_forty_word_sentence_is_high() {
        let paras = paragraphs(&[format!("{}.", words(40))]);

        let long = long_sentences(PAGE, &paras);
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].kind, ViolationType::LongSentence);
        assert_eq!(long[0].severity, Severity::High);
        assert_eq!(long[0].text, words(40));
        assert_eq!(
            long[0].suggestion,
            "Split this 40-word sentence into about 3 shorter sentences."
        );
        assert_eq!(long[0].page, PAGE);
        assert_eq!(long[0].position, 0);

        assert!(passive_voice(PAGE, &paras).is_empty());
    }

    #[test]
    fn test_severity_thresholds() {
        let paras = paragraphs(&[
            format!("{}.", words(25)),
            format!("{}.", words(26)),
            format!("{}.", words(35)),
            format!("{}.", words(36)),
        ]);

        let found = long_sentences(PAGE, &paras);
        let summary: Vec<(usize, Severity)> =
            found.iter().map(|v| (v.position, v.severity)).collect();
        assert_eq!(
            summary,
            vec![(100, Severity::Medium), (200, Severity::Medium), (300, Severity::High)]
        );
    }

    #[test]
    fn test_split_hint_rounds_up() {
        let paras = paragraphs(&[format!("{}.", words(31))]);
        let found = long_sentences(PAGE, &paras);
        assert_eq!(
            found[0].suggestion,
            "Split this 31-word sentence into about 3 shorter sentences."
        );
    }

    #[test]
    fn test_passive_voice_detected_case_insensitively() {
        let paras = paragraphs(&[
            "Our platform WAS DESIGNED for busy teams. We build tools for busy teams.".to_string(),
            "Every order is checked by two people before shipping.".to_string(),
        ]);

        let found = passive_voice(PAGE, &paras);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "Our platform WAS DESIGNED for busy teams");
        assert_eq!(found[0].severity, Severity::Medium);
        assert_eq!(found[0].suggestion, "Rewrite in active voice.");
        assert_eq!(found[0].position, 0);
        assert_eq!(found[1].position, 100);
    }

    #[test]
    fn test_passive_voice_one_violation_per_sentence() {
        let paras = paragraphs(&[
            "The data was collected and was analyzed by our team last year.".to_string(),
        ]);
        assert_eq!(passive_voice(PAGE, &paras).len(), 1);
    }

    #[test]
    fn test_passive_heuristic_limits() {
        // Irregular participles are not caught; that's the documented trade-off
        let paras = paragraphs(&["The handbook was written by our founders.".to_string()]);
        assert!(passive_voice(PAGE, &paras).is_empty());

        // The being-verb must be a whole word
        let paras = paragraphs(&["This island used to be a fishing village.".to_string()]);
        assert!(passive_voice(PAGE, &paras).is_empty());
    }

    #[test]
    fn test_short_sentences_never_flagged() {
        let paras = paragraphs(&["It was planned. We shipped it.".to_string()]);
        assert!(passive_voice(PAGE, &paras).is_empty());
        assert!(long_sentences(PAGE, &paras).is_empty());
    }
}
