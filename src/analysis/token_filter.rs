//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream, rewriting token text while keeping each token's source span.
//!
//! # Available Filters
//!
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Filter Chaining
//!
//! ```text
//! CharFilter → Tokenizer → StemFilter → splice back into the text
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;

pub use stem::{StemFilter, Stemmer};
