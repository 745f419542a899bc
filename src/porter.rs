//! Porter suffix-stripping stemmer.
//!
//! The stemmer reduces an English word to its stem by running it through a
//! fixed sequence of suffix rules (steps 1a through 5b). Each rule is guarded
//! by a condition on the consonant/vowel shape of the remaining stem. Two
//! rule dialects are available:
//!
//! - [`Dialect::Strict`] follows the published algorithm.
//! - [`Dialect::Extended`] adds a handful of irregular forms and the
//!   `-ies` and terminal `-y` adjustments used by later revisions.
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//! let stems = stemmer.stem_tokens(&["running", "flies", "happily"]).unwrap();
//! assert_eq!(stems, vec!["run", "fli", "happili"]);
//! ```

pub mod case;
pub mod config;
pub mod dynamic;
pub mod file;
pub mod irregular;
pub mod rule;
pub mod shape;
pub mod step;
pub mod stemmer;

pub use config::{Dialect, StemmerConfig};
pub use file::StemmedLines;
pub use stemmer::PorterStemmer;
