//! The eight ordered steps of the Porter algorithm.
//!
//! Each step takes the lowercase working word and returns the rewritten word;
//! [`PIPELINE`] lists them in the order they must run:
//!
//! 1. `1a` plurals: `sses -> ss`, `ies -> i`, `ss -> ss`, `s -> ""`
//! 2. `1b` past tense and gerunds: `eed -> ee`, `ed -> ""`, `ing -> ""`
//! 3. `1c` `y -> i`
//! 4. `2` double suffixes: `ational -> ate`, `tional -> tion`, ..., `logi -> log`
//! 5. `3` `icate -> ic`, `ative -> ""`, ...
//! 6. `4` residual suffixes: `al`, `ance`, `ence`, ...
//! 7. `5a` final `e`
//! 8. `5b` final `ll`
//!
//! Steps 1a, 1b and 1c vary with the [`Dialect`]; the tables of steps 2 to 4
//! are fixed.

use crate::error::Result;
use crate::porter::config::Dialect;
use crate::porter::rule::{Guard, SuffixRule, apply_first_match};
use crate::porter::shape::Shape;

const STEP2_RULES: [SuffixRule; 21] = [
    SuffixRule::new("ational", "ate", Guard::MeasureAbove(0)),
    SuffixRule::new("tional", "tion", Guard::MeasureAbove(0)),
    SuffixRule::new("enci", "ence", Guard::MeasureAbove(0)),
    SuffixRule::new("anci", "ance", Guard::MeasureAbove(0)),
    SuffixRule::new("izer", "ize", Guard::MeasureAbove(0)),
    SuffixRule::new("bli", "ble", Guard::MeasureAbove(0)),
    SuffixRule::new("alli", "al", Guard::MeasureAbove(0)),
    SuffixRule::new("entli", "ent", Guard::MeasureAbove(0)),
    SuffixRule::new("eli", "e", Guard::MeasureAbove(0)),
    SuffixRule::new("ousli", "ous", Guard::MeasureAbove(0)),
    SuffixRule::new("ization", "ize", Guard::MeasureAbove(0)),
    SuffixRule::new("ation", "ate", Guard::MeasureAbove(0)),
    SuffixRule::new("ator", "ate", Guard::MeasureAbove(0)),
    SuffixRule::new("alism", "al", Guard::MeasureAbove(0)),
    SuffixRule::new("iveness", "ive", Guard::MeasureAbove(0)),
    SuffixRule::new("fulness", "ful", Guard::MeasureAbove(0)),
    SuffixRule::new("ousness", "ous", Guard::MeasureAbove(0)),
    SuffixRule::new("aliti", "al", Guard::MeasureAbove(0)),
    SuffixRule::new("iviti", "ive", Guard::MeasureAbove(0)),
    SuffixRule::new("biliti", "ble", Guard::MeasureAbove(0)),
    SuffixRule::new("logi", "log", Guard::MeasureAbove(0)),
];

const STEP3_RULES: [SuffixRule; 7] = [
    SuffixRule::new("icate", "ic", Guard::MeasureAbove(0)),
    SuffixRule::new("ative", "", Guard::MeasureAbove(0)),
    SuffixRule::new("alize", "al", Guard::MeasureAbove(0)),
    SuffixRule::new("iciti", "ic", Guard::MeasureAbove(0)),
    SuffixRule::new("ical", "ic", Guard::MeasureAbove(0)),
    SuffixRule::new("ful", "", Guard::MeasureAbove(0)),
    SuffixRule::new("ness", "", Guard::MeasureAbove(0)),
];

// `ion` is handled separately before this table is scanned.
const STEP4_RULES: [SuffixRule; 18] = [
    SuffixRule::new("al", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ance", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ence", "", Guard::MeasureAbove(1)),
    SuffixRule::new("er", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ic", "", Guard::MeasureAbove(1)),
    SuffixRule::new("able", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ible", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ant", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ement", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ment", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ent", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ou", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ism", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ate", "", Guard::MeasureAbove(1)),
    SuffixRule::new("iti", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ous", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ive", "", Guard::MeasureAbove(1)),
    SuffixRule::new("ize", "", Guard::MeasureAbove(1)),
];

/// One step of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Step1a,
    Step1b,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5a,
    Step5b,
}

/// All steps in execution order.
pub const PIPELINE: [Step; 8] = [
    Step::Step1a,
    Step::Step1b,
    Step::Step1c,
    Step::Step2,
    Step::Step3,
    Step::Step4,
    Step::Step5a,
    Step::Step5b,
];

impl Step {
    /// Short name of the step as used in the literature.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Step1a => "1a",
            Step::Step1b => "1b",
            Step::Step1c => "1c",
            Step::Step2 => "2",
            Step::Step3 => "3",
            Step::Step4 => "4",
            Step::Step5a => "5a",
            Step::Step5b => "5b",
        }
    }

    /// Apply this step to a lowercase word.
    ///
    /// Fails when a stem that has to be measured or classified contains a
    /// character other than a letter.
    pub fn apply(&self, word: &str, dialect: Dialect) -> Result<String> {
        match self {
            Step::Step1a => Ok(step1a(word, dialect)),
            Step::Step1b => step1b(word),
            Step::Step1c => step1c(word, dialect),
            Step::Step2 => Ok(apply_first_match(word, &STEP2_RULES)?.into_word(word)),
            Step::Step3 => Ok(apply_first_match(word, &STEP3_RULES)?.into_word(word)),
            Step::Step4 => step4(word),
            Step::Step5a => step5a(word),
            Step::Step5b => step5b(word),
        }
    }
}

/// Run every step in order.
pub fn run_pipeline(word: &str, dialect: Dialect) -> Result<String> {
    PIPELINE.iter().try_fold(word.to_string(), |word, step| {
        let next = step.apply(&word, dialect)?;
        log::trace!("step {}: {} -> {}", step.name(), word, next);
        Ok(next)
    })
}

fn step1a(word: &str, dialect: Dialect) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if dialect == Dialect::Extended && word.chars().count() == 4 {
            return format!("{stem}ie");
        }
        return format!("{stem}i");
    }

    if word.ends_with("ss") {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn step1b(word: &str) -> Result<String> {
    if let Some(stem) = word.strip_suffix("eed") {
        if Shape::try_new(stem)?.measure() > 0 {
            return Ok(format!("{stem}ee"));
        }
        return Ok(word.to_string());
    }

    let Some(stem) = word.strip_suffix("ed").or_else(|| word.strip_suffix("ing")) else {
        return Ok(word.to_string());
    };
    let shape = Shape::try_new(stem)?;
    if !shape.contains_vowel() {
        return Ok(word.to_string());
    }

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return Ok(format!("{stem}e"));
    }

    if shape.ends_double_consonant() {
        if matches!(shape.last(), Some('l' | 's' | 'z')) {
            return Ok(stem.to_string());
        }
        let mut chars = stem.chars();
        chars.next_back();
        return Ok(chars.as_str().to_string());
    }

    if shape.measure() == 1 && shape.ends_cvc() {
        return Ok(format!("{stem}e"));
    }

    Ok(stem.to_string())
}

fn step1c(word: &str, dialect: Dialect) -> Result<String> {
    let Some(stem) = word.strip_suffix('y') else {
        return Ok(word.to_string());
    };

    let shape = Shape::try_new(stem)?;
    let convert = match dialect {
        Dialect::Strict => shape.contains_vowel(),
        Dialect::Extended => shape.len() > 1 && shape.is_consonant(shape.len() - 1),
    };

    if convert {
        Ok(format!("{stem}i"))
    } else {
        Ok(word.to_string())
    }
}

fn step4(word: &str) -> Result<String> {
    if let Some(stem) = word.strip_suffix("ion") {
        if (stem.ends_with('s') || stem.ends_with('t')) && Shape::try_new(stem)?.measure() > 1 {
            return Ok(stem.to_string());
        }
    }

    Ok(apply_first_match(word, &STEP4_RULES)?.into_word(word))
}

fn step5a(word: &str) -> Result<String> {
    if let Some(stem) = word.strip_suffix('e') {
        let shape = Shape::try_new(stem)?;
        let m = shape.measure();
        if m > 1 || (m == 1 && !shape.ends_cvc()) {
            return Ok(stem.to_string());
        }
    }

    Ok(word.to_string())
}

fn step5b(word: &str) -> Result<String> {
    if let Some(without_last) = word.strip_suffix('l') {
        if without_last.ends_with('l') && Shape::try_new(without_last)?.measure() > 1 {
            return Ok(without_last.to_string());
        }
    }

    Ok(word.to_string())
}
