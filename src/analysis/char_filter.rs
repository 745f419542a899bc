//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole text before it is tokenized.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationCharFilter`] - Replaces punctuation with single spaces
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::analysis::char_filter::CharFilter;
//! use vanilla_porter::analysis::char_filter::punctuation::PunctuationCharFilter;
//!
//! let filter = PunctuationCharFilter::new();
//! let output = filter.filter("Hello, world!");
//! assert_eq!(output, "Hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;

pub use punctuation::PunctuationCharFilter;
