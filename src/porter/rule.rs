//! Suffix rewrite rules and their first-suffix-match evaluation.
//!
//! A rule list is scanned in order for the first suffix the word ends with.
//! Once a suffix matches, the scan is over: if the rule's guard then fails,
//! the word is left unchanged and later suffixes are not tried.
//!
//! Guards only look at the stem of a suffix that matched, so a word with
//! punctuation in it fails only when such a stem reaches a guard.

use crate::error::Result;
use crate::porter::shape::Shape;

/// Condition a matched rule's stem must satisfy before it is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The stem's measure must be strictly greater than the given value.
    MeasureAbove(usize),
}

impl Guard {
    /// Evaluate the guard against the stem left after removing the suffix.
    pub fn holds(&self, stem: &str) -> Result<bool> {
        match self {
            Guard::MeasureAbove(min) => Ok(Shape::try_new(stem)?.measure() > *min),
        }
    }
}

/// A `(suffix, replacement, guard)` rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub guard: Guard,
}

impl SuffixRule {
    /// Create a new rule.
    pub const fn new(suffix: &'static str, replacement: &'static str, guard: Guard) -> Self {
        SuffixRule {
            suffix,
            replacement,
            guard,
        }
    }

    /// The stem left when the suffix is removed, if the word ends with it.
    pub fn stem<'a>(&self, word: &'a str) -> Option<&'a str> {
        word.strip_suffix(self.suffix)
    }
}

/// Outcome of evaluating a rule list against a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// No rule's suffix matched.
    NoMatch,
    /// A suffix matched but its guard failed; the word is unchanged.
    Blocked,
    /// A suffix matched and the word was rewritten.
    Rewritten(String),
}

impl RuleOutcome {
    /// The rewritten word, or `word` itself if nothing changed.
    pub fn into_word(self, word: &str) -> String {
        match self {
            RuleOutcome::Rewritten(rewritten) => rewritten,
            RuleOutcome::NoMatch | RuleOutcome::Blocked => word.to_string(),
        }
    }
}

/// Apply the first rule whose suffix matches `word`.
pub fn apply_first_match(word: &str, rules: &[SuffixRule]) -> Result<RuleOutcome> {
    for rule in rules {
        if let Some(stem) = rule.stem(word) {
            if rule.guard.holds(stem)? {
                return Ok(RuleOutcome::Rewritten(format!("{stem}{}", rule.replacement)));
            }
            return Ok(RuleOutcome::Blocked);
        }
    }

    Ok(RuleOutcome::NoMatch)
}
