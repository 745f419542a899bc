//! The Porter stemmer and its word, document and token-list entry points.
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::porter::{Dialect, PorterStemmer, StemmerConfig};
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem_word("running").unwrap(), "run");
//! assert_eq!(
//!     stemmer.stem_document("The boys are running quickly!", false).unwrap(),
//!     "the boi ar run quickli!"
//! );
//!
//! let extended = PorterStemmer::with_config(
//!     StemmerConfig::new().with_dialect(Dialect::Extended),
//! );
//! assert_eq!(extended.stem_word("dies").unwrap(), "die");
//! ```

use rayon::prelude::*;

use crate::analysis::char_filter::{CharFilter, PunctuationCharFilter};
use crate::analysis::token_filter::{Filter, StemFilter, Stemmer};
use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::error::{Result, StemError};
use crate::porter::case::apply_case_pattern;
use crate::porter::config::{Dialect, StemmerConfig};
use crate::porter::irregular;
use crate::porter::step::run_pipeline;

/// Words shorter than this are returned without running any step.
const MIN_STEMMABLE_LEN: usize = 3;

/// Porter stemmer with an immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer {
    config: StemmerConfig,
}

impl PorterStemmer {
    /// Create a stemmer with the default configuration: lowercase output,
    /// original word kept on failure, strict dialect.
    pub fn new() -> Self {
        PorterStemmer {
            config: StemmerConfig::default(),
        }
    }

    /// Create a stemmer with the given configuration.
    pub fn with_config(config: StemmerConfig) -> Self {
        PorterStemmer { config }
    }

    /// The configuration this stemmer was built with.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// The active rule dialect.
    pub fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Stem a single word.
    ///
    /// An empty word is rejected with [`StemError::InvalidInput`]. Characters
    /// other than letters are carried through the steps; the word fails only
    /// when a step has to measure a stem holding one, or when case restoration
    /// meets one. Such a word is returned unchanged when
    /// `preserve_original_on_error` is set, and otherwise reported as
    /// [`StemError::Word`].
    pub fn stem_word(&self, word: &str) -> Result<String> {
        if word.is_empty() {
            return Err(StemError::invalid_input("Word cannot be empty"));
        }

        match self.stem_unchecked(word) {
            Ok(stemmed) => Ok(stemmed),
            Err(e) if self.config.preserve_original_on_error && !e.is_input_error() => {
                log::debug!("returning '{word}' unchanged: {e}");
                Ok(word.to_string())
            }
            Err(e) => Err(StemError::word(word, e)),
        }
    }

    fn stem_unchecked(&self, word: &str) -> Result<String> {
        let lower = word.to_lowercase();

        if let Some(stem) = irregular::lookup(&lower, self.config.dialect) {
            log::debug!("irregular form: {lower} -> {stem}");
            return self.restore_case(word, stem);
        }

        if lower.chars().count() < MIN_STEMMABLE_LEN {
            return self.restore_case(word, &lower);
        }

        let stem = run_pipeline(&lower, self.config.dialect)?;
        self.restore_case(word, &stem)
    }

    fn restore_case(&self, original: &str, stem: &str) -> Result<String> {
        if self.config.to_lowercase {
            Ok(stem.to_string())
        } else {
            apply_case_pattern(original, stem)
        }
    }

    /// Stem every word of a free-form text.
    ///
    /// Only maximal runs of letters are rewritten; punctuation, digits and
    /// whitespace stay in place. A word that fails to stem is left as it was.
    /// With `clean_non_alphanumeric`, punctuation runs are first collapsed to
    /// single spaces and the text is trimmed.
    pub fn stem_document(&self, text: &str, clean_non_alphanumeric: bool) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let cleaned;
        let text = if clean_non_alphanumeric {
            cleaned = PunctuationCharFilter::new().filter(text);
            if cleaned.is_empty() {
                return Ok(cleaned);
            }
            cleaned.as_str()
        } else {
            text
        };

        let tokens = LetterTokenizer::new().tokenize(text)?;
        let stemmed = StemFilter::with_stemmer(Box::new(self.clone())).filter(tokens)?;

        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;
        for token in stemmed {
            output.push_str(&text[last_end..token.start_offset]);
            output.push_str(&token.text);
            last_end = token.end_offset;
        }
        output.push_str(&text[last_end..]);

        Ok(output)
    }

    /// Stem a list of pre-tokenized words, keeping their order.
    pub fn stem_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| self.stem_token(index, token.as_ref()))
            .collect()
    }

    /// Stem a list of pre-tokenized words on the rayon thread pool.
    ///
    /// The output order and error policy match [`stem_tokens`](Self::stem_tokens);
    /// when errors are surfaced, the lowest failing index is reported.
    pub fn par_stem_tokens<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Result<Vec<String>> {
        let results: Vec<Result<String>> = tokens
            .par_iter()
            .enumerate()
            .map(|(index, token)| self.stem_token(index, token.as_ref()))
            .collect();

        results.into_iter().collect()
    }

    pub(crate) fn stem_token(&self, index: usize, token: &str) -> Result<String> {
        match self.stem_word(token) {
            Ok(stemmed) => Ok(stemmed),
            Err(e) if self.config.preserve_original_on_error => {
                log::debug!("keeping token {index} unchanged: {e}");
                Ok(token.to_string())
            }
            Err(e) => Err(StemError::token(index, e)),
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        self.stem_word(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
