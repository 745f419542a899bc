//! Entry points over dynamically typed input.
//!
//! Callers that receive data from JSON (the command line, scripting bridges)
//! hand over a [`serde_json::Value`] instead of a typed string or slice. These
//! methods validate the value's shape before delegating to the typed entry
//! points on [`PorterStemmer`].

use serde_json::Value;

use crate::error::{Result, StemError};
use crate::porter::stemmer::PorterStemmer;

/// Human-readable name of a JSON value's type, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PorterStemmer {
    /// Stem a word given as a JSON value. Anything but a string is rejected.
    pub fn stem_value(&self, word: &Value) -> Result<String> {
        match word {
            Value::String(word) => self.stem_word(word),
            other => Err(StemError::invalid_input(format!(
                "Word must be a string, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Stem a document given as a JSON value.
    pub fn stem_document_value(&self, text: &Value, clean_non_alphanumeric: bool) -> Result<String> {
        match text {
            Value::String(text) => self.stem_document(text, clean_non_alphanumeric),
            other => Err(StemError::invalid_input(format!(
                "Text must be a string, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Stem a token list given as a JSON value.
    ///
    /// The value must be an array and every element a string; the first
    /// element of another type is reported as [`StemError::TypeMismatch`].
    pub fn stem_tokens_value(&self, tokens: &Value) -> Result<Vec<String>> {
        let items = match tokens {
            Value::Array(items) => items,
            other => {
                return Err(StemError::invalid_input(format!(
                    "Tokens must be an array, got {}",
                    value_kind(other)
                )));
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(token) => self.stem_token(index, token),
                other => Err(StemError::type_mismatch(index, value_kind(other))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::porter::config::StemmerConfig;

    #[test]
    fn test_stem_value() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem_value(&json!("running")).unwrap(), "run");

        assert!(matches!(
            stemmer.stem_value(&Value::Null),
            Err(StemError::InvalidInput(_))
        ));
        assert!(matches!(
            stemmer.stem_value(&json!(123)),
            Err(StemError::InvalidInput(_))
        ));
        assert!(matches!(
            stemmer.stem_value(&json!("")),
            Err(StemError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_stem_document_value() {
        let stemmer = PorterStemmer::new();
        assert_eq!(
            stemmer.stem_document_value(&json!("cats and dogs"), false).unwrap(),
            "cat and dog"
        );
        assert_eq!(stemmer.stem_document_value(&json!(""), true).unwrap(), "");

        let err = stemmer.stem_document_value(&Value::Null, false).unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_stem_tokens_value() {
        let stemmer = PorterStemmer::new();
        assert_eq!(
            stemmer
                .stem_tokens_value(&json!(["running", "flies", "happily"]))
                .unwrap(),
            vec!["run", "fli", "happili"]
        );
        assert!(stemmer.stem_tokens_value(&json!([])).unwrap().is_empty());

        assert!(matches!(
            stemmer.stem_tokens_value(&json!("running")),
            Err(StemError::InvalidInput(_))
        ));

        match stemmer.stem_tokens_value(&json!(["cats", 7, null])) {
            Err(StemError::TypeMismatch { index, found }) => {
                assert_eq!(index, 1);
                assert_eq!(found, "number");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch_ignores_error_policy() {
        let stemmer = PorterStemmer::with_config(
            StemmerConfig::new().with_preserve_original_on_error(true),
        );
        assert!(matches!(
            stemmer.stem_tokens_value(&json!([true])),
            Err(StemError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!({"a": 1})), "object");
        assert_eq!(value_kind(&json!(false)), "boolean");
        assert_eq!(value_kind(&json!([1])), "array");
    }
}
