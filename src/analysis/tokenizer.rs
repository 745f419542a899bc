//! Tokenizers that locate words in free text.
//!
//! Tokenizers are the first step of document stemming: they find the spans
//! to rewrite and record where each one sits in the source text. Everything
//! between tokens is left untouched.
//!
//! # Available Tokenizers
//!
//! - [`letter::LetterTokenizer`] - Maximal runs of Unicode letters
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::analysis::tokenizer::Tokenizer;
//! use vanilla_porter::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod letter;

pub use letter::LetterTokenizer;
