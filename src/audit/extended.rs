// src/audit/extended.rs
// =============================================================================
// Opt-in rules: jargon and spelling inconsistency.
//
// These are not part of the standard rule set. Enabling them changes the
// audit's output, so they are only run with --extended-rules (CLI) or
// "extendedRules": true (HTTP API).
//
// Same contract as rules.rs: pure functions over one page's paragraphs.
// =============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::rules::violation;
use super::sentences::page_sentences;
use super::{Severity, Violation, ViolationType};

const JARGON_TERMS: &[&str] = &[
    "synergy",
    "synergies",
    "leverage",
    "paradigm",
    "best-in-class",
    "world-class",
    "cutting-edge",
    "bleeding-edge",
    "disruptive",
    "holistic",
    "robust",
    "seamless",
    "seamlessly",
    "scalable",
    "turnkey",
    "mission-critical",
    "next-generation",
    "game-changer",
    "value-add",
    "actionable",
    "bandwidth",
    "empower",
    "utilize",
    "ideate",
    "omnichannel",
];

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("hardcoded word regex"));

/// US and UK spellings of the same word family
struct SpellingPair {
    us: &'static [&'static str],
    uk: &'static [&'static str],
}

const SPELLING_PAIRS: &[SpellingPair] = &[
    SpellingPair { us: &["color", "colors", "colored"], uk: &["colour", "colours", "coloured"] },
    SpellingPair { us: &["organize", "organized", "organizing"], uk: &["organise", "organised", "organising"] },
    SpellingPair { us: &["organization", "organizations"], uk: &["organisation", "organisations"] },
    SpellingPair { us: &["optimize", "optimized", "optimization"], uk: &["optimise", "optimised", "optimisation"] },
    SpellingPair { us: &["analyze", "analyzed", "analyzing"], uk: &["analyse", "analysed", "analysing"] },
    SpellingPair { us: &["center", "centers"], uk: &["centre", "centres"] },
    SpellingPair { us: &["behavior", "behaviors"], uk: &["behaviour", "behaviours"] },
    SpellingPair { us: &["favorite", "favorites"], uk: &["favourite", "favourites"] },
    SpellingPair { us: &["license", "licenses"], uk: &["licence", "licences"] },
    SpellingPair { us: &["catalog", "catalogs"], uk: &["catalogue", "catalogues"] },
    SpellingPair { us: &["customize", "customized", "customizing"], uk: &["customise", "customised", "customising"] },
    SpellingPair { us: &["recognize", "recognized"], uk: &["recognise", "recognised"] },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Us,
    Uk,
}

// (pair index, variant) for a lowercase word, if it belongs to a pair
fn spelling_variant(word: &str) -> Option<(usize, Variant)> {
    SPELLING_PAIRS.iter().enumerate().find_map(|(i, pair)| {
        if pair.us.contains(&word) {
            Some((i, Variant::Us))
        } else if pair.uk.contains(&word) {
            Some((i, Variant::Uk))
        } else {
            None
        }
    })
}

/// Flags sentences that use buzzwords; one low-severity violation per sentence.
pub fn jargon(page: &str, paragraphs: &[String]) -> Vec<Violation> {
    page_sentences(paragraphs)
        .into_iter()
        .filter_map(|sentence| {
            let mut terms: Vec<String> = Vec::new();
            for word in sentence.text.split_whitespace() {
                // Keep inner hyphens so "best-in-class" stays one term
                // and "non-robust" never matches "robust"
                let word = word
                    .trim_matches(|c: char| !c.is_alphanumeric() && c != '-')
                    .trim_matches('-')
                    .to_ascii_lowercase();
                if JARGON_TERMS.contains(&word.as_str()) && !terms.contains(&word) {
                    terms.push(word);
                }
            }

            if terms.is_empty() {
                return None;
            }
            let suggestion = format!(
                "Replace jargon ({}) with plain language your readers use.",
                terms.join(", ")
            );
            Some(violation(ViolationType::Jargon, Severity::Low, page, &sentence, suggestion))
        })
        .collect()
}

/// Flags sentences that switch between US and UK spelling within one page.
///
/// The first spelling seen for a word family sets the page's convention;
/// later sentences using the other spelling are flagged.
pub fn spelling_inconsistency(page: &str, paragraphs: &[String]) -> Vec<Violation> {
    let mut convention: HashMap<usize, (Variant, String)> = HashMap::new();
    let mut violations = Vec::new();

    for sentence in page_sentences(paragraphs) {
        let mut clashes: Vec<(String, String)> = Vec::new();

        for found in WORD.find_iter(sentence.text) {
            let word = found.as_str().to_ascii_lowercase();
            let Some((pair, variant)) = spelling_variant(&word) else {
                continue;
            };
            let (established, first) = convention
                .entry(pair)
                .or_insert_with(|| (variant, word.clone()));
            if *established != variant {
                clashes.push((first.clone(), word));
            }
        }

        if clashes.is_empty() {
            continue;
        }
        let details: Vec<String> = clashes
            .iter()
            .map(|(first, here)| format!("\"{}\" here but \"{}\" elsewhere", here, first))
            .collect();
        let suggestion = format!(
            "Use one spelling throughout the page: {}.",
            details.join("; ")
        );
        violations.push(violation(
            ViolationType::SpellingInconsistency,
            Severity::Low,
            page,
            &sentence,
            suggestion,
        ));
    }

    violations
}
