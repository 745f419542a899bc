//! Stemming token filter.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Filter that applies stemming to tokens.
///
/// A token whose stemming fails keeps its original text, so one bad word
/// never aborts the stream.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the default Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| match self.stemmer.stem(&token.text) {
                Ok(stemmed) => token.with_text(stemmed),
                Err(e) => {
                    log::debug!("keeping '{}' unstemmed: {}", token.text, e);
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::error::StemError;

    struct FailingStemmer;

    impl Stemmer for FailingStemmer {
        fn stem(&self, word: &str) -> Result<String> {
            if word == "bad" {
                Err(StemError::other("boom"))
            } else {
                Ok(word.to_uppercase())
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::with_offsets("running", 0, 0, 7),
            Token::with_offsets("flies", 1, 8, 13),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[0].end_offset, 7);
        assert_eq!(result[1].text, "fli");
    }

    #[test]
    fn test_failures_keep_original_text() {
        let filter = StemFilter::with_stemmer(Box::new(FailingStemmer));
        let tokens = vec![
            Token::with_offsets("good", 0, 0, 4),
            Token::with_offsets("bad", 1, 5, 8),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "GOOD");
        assert_eq!(result[1].text, "bad");
        assert_eq!(result[1].start_offset, 5);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
        assert_eq!(
            format!("{:?}", StemFilter::new()),
            "StemFilter { stemmer: \"porter\" }"
        );
    }
}
