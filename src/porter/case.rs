//! Restoring the input word's casing onto a lowercase stem.
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::porter::case::apply_case_pattern;
//!
//! assert_eq!(apply_case_pattern("FLIES", "fli").unwrap(), "FLI");
//! assert_eq!(apply_case_pattern("Running", "run").unwrap(), "Run");
//! assert_eq!(apply_case_pattern("HaPpY", "happi").unwrap(), "HaPpI");
//! assert_eq!(apply_case_pattern("ABc", "abcdef").unwrap(), "ABcdef");
//! ```

use crate::error::{Result, StemError};

/// Upper/lower pattern of an original word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasePattern {
    /// Every cased letter is uppercase.
    Upper,
    /// Every cased letter is lowercase. Also used for an empty word.
    Lower,
    /// Per-position uppercase flags.
    Mixed(Vec<bool>),
}

impl CasePattern {
    /// Derive the pattern of `original`, which must be purely alphabetic.
    pub fn from_word(original: &str) -> Result<Self> {
        if original.is_empty() {
            return Ok(CasePattern::Lower);
        }

        if !original.chars().all(char::is_alphabetic) {
            return Err(StemError::unsupported_character(original));
        }

        let mut has_upper = false;
        let mut has_lower = false;
        for c in original.chars() {
            has_upper |= c.is_uppercase();
            has_lower |= c.is_lowercase();
        }

        Ok(match (has_upper, has_lower) {
            (true, false) => CasePattern::Upper,
            (false, true) => CasePattern::Lower,
            _ => CasePattern::Mixed(original.chars().map(char::is_uppercase).collect()),
        })
    }

    /// Apply the pattern to a stem. Positions past the end of the original
    /// word are lowercase.
    pub fn apply(&self, stemmed: &str) -> String {
        match self {
            CasePattern::Upper => stemmed.to_uppercase(),
            CasePattern::Lower => stemmed.to_lowercase(),
            CasePattern::Mixed(upper) => {
                let mut result = String::with_capacity(stemmed.len());
                for (i, c) in stemmed.chars().enumerate() {
                    if upper.get(i).copied().unwrap_or(false) {
                        result.extend(c.to_uppercase());
                    } else {
                        result.extend(c.to_lowercase());
                    }
                }
                result
            }
        }
    }
}

/// Map the casing of `original` onto `stemmed`.
pub fn apply_case_pattern(original: &str, stemmed: &str) -> Result<String> {
    if stemmed.is_empty() {
        return Ok(String::new());
    }
    Ok(CasePattern::from_word(original)?.apply(stemmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_case() {
        assert_eq!(CasePattern::from_word("FLIES").unwrap(), CasePattern::Upper);
        assert_eq!(CasePattern::from_word("happy").unwrap(), CasePattern::Lower);
        assert_eq!(apply_case_pattern("HAPPY", "happi").unwrap(), "HAPPI");
        assert_eq!(apply_case_pattern("happy", "HAPPI").unwrap(), "happi");
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(apply_case_pattern("HaPpIlY", "happili").unwrap(), "HaPpIlI");
        assert_eq!(apply_case_pattern("RuNNinG", "run").unwrap(), "RuN");
    }

    #[test]
    fn test_longer_stem_defaults_to_lowercase() {
        // "ABc" is mixed; only its first three positions carry case.
        assert_eq!(apply_case_pattern("ABc", "abcdef").unwrap(), "ABcdef");
        // Uniform uppercase covers the whole stem.
        assert_eq!(apply_case_pattern("ABC", "abcdef").unwrap(), "ABCDEF");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(apply_case_pattern("", "Test").unwrap(), "test");
        assert_eq!(apply_case_pattern("Test", "").unwrap(), "");
    }

    #[test]
    fn test_non_alphabetic_original() {
        let err = apply_case_pattern("don't", "do").unwrap_err();
        assert!(matches!(err, StemError::UnsupportedCharacter { .. }));
        assert!(apply_case_pattern("pre-process", "preprocess").is_err());
    }

    #[test]
    fn test_uncased_letters() {
        // Letters without case fall through to the positional mapping.
        assert_eq!(apply_case_pattern("日本", "日本").unwrap(), "日本");
    }
}
