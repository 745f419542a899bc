//! # vanilla-porter
//!
//! An English Porter stemmer with strict and extended rule dialects.
//!
//! ## Features
//!
//! - Pure Rust implementation of the five-step Porter algorithm
//! - Strict and extended dialects with irregular-form tables
//! - Optional case preservation
//! - Word, token-list, document and streaming file entry points
//! - Parallel token-list stemming
//! - A command-line interface

pub mod analysis;
pub mod cli;
pub mod error;
pub mod porter;

pub mod prelude {
    pub use crate::error::{Result, StemError};
    pub use crate::porter::{Dialect, PorterStemmer, StemmerConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
