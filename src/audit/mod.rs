// src/audit/mod.rs
// =============================================================================
// The rule engine: turns extracted paragraphs into writing violations.
//
// A rule is a plain function
//
//     fn(page_url, paragraphs) -> Vec<Violation>
//
// with no state and no I/O. Rules don't know about each other, so adding a
// rule means writing one function and listing it in a RuleSet.
//
// Submodules:
// - sentences: splits paragraphs into sentences (shared by all rules)
// - rules:     long-sentence and passive-voice (the standard rule set)
// - extended:  jargon and spelling-inconsistency (opt-in rule set)
// =============================================================================

pub mod extended;
pub mod rules;
pub mod sentences;

use std::fmt;

use serde::Serialize;

use crate::extract::PageContent;

/// The kinds of writing issue we report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationType {
    LongSentence,
    PassiveVoice,
    Jargon,
    SpellingInconsistency,
}

/// Only used to order the report, never to filter it.
///
/// Variants are declared low to high so the derived Ord gives
/// Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One flagged piece of copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationType,
    pub severity: Severity,
    /// The offending sentence exactly as it appeared on the page
    pub text: String,
    pub suggestion: String,
    /// URL of the page the sentence was found on
    pub page: String,
    /// paragraph_index * 100 + sentence_index
    pub position: usize,
}

/// Signature every rule implements
pub type RuleFn = fn(&str, &[String]) -> Vec<Violation>;

/// An ordered list of rules applied to every page
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<(ViolationType, RuleFn)>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

impl RuleSet {
    /// Long-sentence and passive-voice: the reference behavior
    pub fn standard() -> Self {
        Self {
            rules: vec![
                (ViolationType::LongSentence, rules::long_sentences as RuleFn),
                (ViolationType::PassiveVoice, rules::passive_voice as RuleFn),
            ],
        }
    }

    /// The standard rules plus jargon and spelling-inconsistency.
    ///
    /// This changes the audit's output, so it is only used when asked for.
    pub fn extended() -> Self {
        let mut set = Self::standard();
        set.rules.push((ViolationType::Jargon, extended::jargon as RuleFn));
        set.rules.push((
            ViolationType::SpellingInconsistency,
            extended::spelling_inconsistency as RuleFn,
        ));
        set
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ViolationType> + '_ {
        self.rules.iter().map(|(kind, _)| *kind)
    }
}

/// Runs every rule over every page, in page order then rule order.
pub fn run_rules(pages: &[PageContent], rules: &RuleSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    for page in pages {
        for (kind, rule) in &rules.rules {
            let found = rule(&page.url, &page.paragraphs);
            log::debug!("{:?}: {} violation(s) on {}", kind, found.len(), page.url);
            violations.extend(found);
        }
    }

    violations
}
