//! Configuration for the Porter stemmer.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Rule dialect.
///
/// `Strict` stays close to the 1980 paper. `Extended` adds the widely used
/// practical extensions: a 4-letter `ies -> ie` branch in step 1a, a
/// consonant-based `y -> i` guard in step 1c and a larger irregular-form
/// table. Steps 2 to 5b are shared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Close to Porter's original paper.
    #[default]
    Strict,
    /// Practical extensions (`dies -> die`, `say -> say`).
    Extended,
}

impl Dialect {
    /// Lowercase name of the dialect.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Strict => "strict",
            Dialect::Extended => "extended",
        }
    }
}

/// Configuration fixed at stemmer construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Return lowercase stems. When false, the input word's casing is
    /// restored onto the stem.
    pub to_lowercase: bool,
    /// Return the original word when the rule pipeline fails for it,
    /// instead of surfacing the error.
    pub preserve_original_on_error: bool,
    /// Rule dialect.
    pub dialect: Dialect,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            to_lowercase: true,
            preserve_original_on_error: true,
            dialect: Dialect::Strict,
        }
    }
}

impl StemmerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Set the rule dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set whether stems are lowercased.
    pub fn with_lowercase(mut self, to_lowercase: bool) -> Self {
        self.to_lowercase = to_lowercase;
        self
    }

    /// Set whether pipeline failures fall back to the original word.
    pub fn with_preserve_original_on_error(mut self, preserve: bool) -> Self {
        self.preserve_original_on_error = preserve;
        self
    }
}
