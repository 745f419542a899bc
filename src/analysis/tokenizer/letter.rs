//! Letter-run tokenizer.

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

lazy_static! {
    /// A run of word characters. Combining marks are not word characters
    /// here, so they end a run instead of extending it.
    static ref WORD_RUN: Regex = Regex::new(r"[\p{L}\p{N}_]+").expect("word run pattern is valid");

    /// Runs glued to digits or underscores are not words.
    static ref LETTERS_ONLY: Regex = Regex::new(r"^\p{L}+$").expect("letters pattern is valid");
}

/// A tokenizer that extracts maximal runs of Unicode letters.
///
/// Digits, punctuation, combining marks and whitespace never appear in a
/// token. Offsets are byte offsets into the tokenized text.
#[derive(Clone, Debug, Default)]
pub struct LetterTokenizer;

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Self {
        LetterTokenizer
    }

    /// Collect the tokens of `text` eagerly.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        WORD_RUN
            .find_iter(text)
            .filter(|mat| LETTERS_ONLY.is_match(mat.as_str()))
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect()
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokens(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
