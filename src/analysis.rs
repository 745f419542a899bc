//! Text analysis used by document stemming.
//!
//! A document is cleaned by an optional char filter, split into letter runs
//! by a tokenizer, and each run is rewritten by a token filter before being
//! spliced back into the surrounding text.

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
