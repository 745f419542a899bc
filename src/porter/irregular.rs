//! Irregular forms that bypass the rule pipeline.
//!
//! Words in these tables are looked up by their lowercase form before any
//! step runs and map directly to a fixed stem. The extended table is a
//! superset of the strict one.

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::porter::config::Dialect;

const STRICT_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("news", "news"),
    ("innings", "inning"),
    ("outing", "outing"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const EXTENDED_ONLY_FORMS: &[(&str, &str)] = &[
    ("dies", "die"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
];

lazy_static! {
    static ref STRICT_TABLE: AHashMap<&'static str, &'static str> =
        STRICT_FORMS.iter().copied().collect();
    static ref EXTENDED_TABLE: AHashMap<&'static str, &'static str> = STRICT_FORMS
        .iter()
        .chain(EXTENDED_ONLY_FORMS)
        .copied()
        .collect();
}

/// The irregular-form table active for a dialect.
pub fn table(dialect: Dialect) -> &'static AHashMap<&'static str, &'static str> {
    match dialect {
        Dialect::Strict => &*STRICT_TABLE,
        Dialect::Extended => &*EXTENDED_TABLE,
    }
}

/// Look up the fixed stem of a lowercase word.
pub fn lookup(word: &str, dialect: Dialect) -> Option<&'static str> {
    table(dialect).get(word).copied()
}
