//! Token types for text analysis.
//!
//! A [`Token`] is a word located in a source text: its text plus the byte
//! offsets of the span it came from. Offsets always refer to the text that
//! was tokenized, so a token can be spliced back after its text is rewritten.
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use serde::{Deserialize, Serialize};

/// A single word located in a source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the source text
    pub start_offset: usize,

    /// The byte offset where this token ends in the source text
    pub end_offset: usize,
}

impl Token {
    /// Create a token spanning `start_offset..end_offset` of its source.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Clone this token with new text, keeping its span.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
