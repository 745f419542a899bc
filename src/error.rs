//! Error types for the vanilla-porter library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StemError`] enum. Input validation failures are always surfaced to the
//! caller; failures inside the rule pipeline for a single word are either
//! swallowed or wrapped with the offending word, token index or line number,
//! depending on the stemmer configuration.
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::error::{Result, StemError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemError::invalid_input("Word cannot be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stemming operations.
#[derive(Error, Debug)]
pub enum StemError {
    /// Null, wrongly typed or empty input where a value is required.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An element of a collection has the wrong type.
    #[error("Type mismatch: token at index {index} must be a string, got {found}")]
    TypeMismatch { index: usize, found: String },

    /// A stem a rule has to measure, or a word whose case is restored,
    /// contains non-alphabetic characters.
    #[error("Unsupported character(s) {chars:?} in '{word}': only alphabetic characters are stemmed")]
    UnsupportedCharacter { word: String, chars: Vec<char> },

    /// A single word failed inside the rule pipeline.
    #[error("Error stemming word '{word}': {source}")]
    Word {
        word: String,
        source: Box<StemError>,
    },

    /// An element of a token list failed to stem.
    #[error("Error stemming token at index {index}: {source}")]
    Token {
        index: usize,
        source: Box<StemError>,
    },

    /// A line of a streamed file failed to read or stem.
    #[error("Error stemming line {line}: {source}")]
    Line {
        line: usize,
        source: Box<StemError>,
    },

    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with StemError.
pub type Result<T> = std::result::Result<T, StemError>;

impl StemError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        StemError::InvalidInput(msg.into())
    }

    /// Create a new type mismatch error for a collection element.
    pub fn type_mismatch<S: Into<String>>(index: usize, found: S) -> Self {
        StemError::TypeMismatch {
            index,
            found: found.into(),
        }
    }

    /// Create an unsupported character error listing the offending characters.
    pub fn unsupported_character(word: &str) -> Self {
        StemError::UnsupportedCharacter {
            word: word.to_string(),
            chars: word.chars().filter(|c| !c.is_alphabetic()).collect(),
        }
    }

    /// Wrap a pipeline failure with the word that caused it.
    pub fn word<S: Into<String>>(word: S, source: StemError) -> Self {
        StemError::Word {
            word: word.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a failure with the index of the token that caused it.
    pub fn token(index: usize, source: StemError) -> Self {
        StemError::Token {
            index,
            source: Box::new(source),
        }
    }

    /// Wrap a failure with the 1-based line number that caused it.
    pub fn line(line: usize, source: StemError) -> Self {
        StemError::Line {
            line,
            source: Box::new(source),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemError::Other(msg.into())
    }

    /// Whether this error came from input validation rather than the pipeline.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StemError::InvalidInput(_) | StemError::TypeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = StemError::invalid_input("Word cannot be empty");
        assert_eq!(error.to_string(), "Invalid input: Word cannot be empty");

        let error = StemError::type_mismatch(2, "number");
        assert_eq!(
            error.to_string(),
            "Type mismatch: token at index 2 must be a string, got number"
        );
    }

    #[test]
    fn test_unsupported_character_lists_offenders() {
        let error = StemError::unsupported_character("don't");
        match &error {
            StemError::UnsupportedCharacter { word, chars } => {
                assert_eq!(word, "don't");
                assert_eq!(chars, &vec!['\'']);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrapped_errors_keep_context() {
        let inner = StemError::unsupported_character("x1");
        let error = StemError::token(3, StemError::word("x1", inner));
        let message = error.to_string();
        assert!(message.starts_with("Error stemming token at index 3"));
        assert!(message.contains("'x1'"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(StemError::invalid_input("x").is_input_error());
        assert!(StemError::type_mismatch(0, "null").is_input_error());
        assert!(!StemError::unsupported_character("a-b").is_input_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = StemError::from(io_error);
        assert!(matches!(error, StemError::Io(_)));
    }
}
