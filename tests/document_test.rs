//! Integration tests for document stemming

use vanilla_porter::analysis::char_filter::{CharFilter, PunctuationCharFilter};
use vanilla_porter::prelude::*;

/// Everything in the text that is not a letter, in order.
fn skeleton(text: &str) -> String {
    text.chars().filter(|c| !c.is_alphabetic()).collect()
}

#[test]
fn test_stem_document_reference() -> Result<()> {
    let stemmer = PorterStemmer::new();

    assert_eq!(
        stemmer.stem_document("The boys are running quickly!", false)?,
        "the boi ar run quickli!"
    );
    assert_eq!(stemmer.stem_document("", false)?, "");
    assert_eq!(stemmer.stem_document("", true)?, "");
    Ok(())
}

#[test]
fn test_skeleton_is_preserved() -> Result<()> {
    let texts = [
        "The boys are running quickly!",
        "Relational databases, conditional logic; (and) 42 generalizations...",
        "  leading and trailing spaces  ",
        "tabs\tand\nnewlines\r\nmixed",
        "Numbers 1984 and symbols @#$% between hopeful words",
        "Unicode: café, naïve, résumé -- «quoted»",
        "abc123 x_y snake_case_words",
    ];

    for dialect in [Dialect::Strict, Dialect::Extended] {
        for to_lowercase in [true, false] {
            let stemmer = PorterStemmer::with_config(
                StemmerConfig::new()
                    .with_dialect(dialect)
                    .with_lowercase(to_lowercase),
            );

            for text in texts {
                let stemmed = stemmer.stem_document(text, false)?;
                assert_eq!(skeleton(&stemmed), skeleton(text), "skeleton of {text:?}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_letters_glued_to_digits_are_left_alone() -> Result<()> {
    let stemmer = PorterStemmer::new();
    assert_eq!(
        stemmer.stem_document("abc123 running x_y", false)?,
        "abc123 run x_y"
    );
    Ok(())
}

#[test]
fn test_decomposed_accents() -> Result<()> {
    let stemmer = PorterStemmer::new();
    let text = "the cafe\u{301} owners";

    let stemmed = stemmer.stem_document(text, false)?;
    assert_eq!(stemmed, "the cafe\u{301} owner");
    assert_eq!(skeleton(&stemmed), skeleton(text));
    Ok(())
}

#[test]
fn test_clean_pre_pass() -> Result<()> {
    let stemmer = PorterStemmer::new();

    assert_eq!(
        stemmer.stem_document("The boys are running quickly!", true)?,
        "the boi ar run quickli"
    );
    assert_eq!(
        stemmer.stem_document("  Hello,   running\tworld!!  ", true)?,
        "hello run world"
    );
    assert_eq!(stemmer.stem_document("?!...", true)?, "");

    // Apostrophes survive the pre-pass; the letters around them are
    // stemmed as separate runs.
    assert_eq!(stemmer.stem_document("Mary's ponies", true)?, "mari's poni");
    Ok(())
}

#[test]
fn test_clean_output_matches_char_filter() -> Result<()> {
    let stemmer = PorterStemmer::new();
    let filter = PunctuationCharFilter::new();
    let text = "Hello, world! (connected) [connecting] {connection}";

    let cleaned = filter.filter(text);
    assert_eq!(
        stemmer.stem_document(text, true)?,
        stemmer.stem_document(&cleaned, false)?
    );
    Ok(())
}

#[test]
fn test_document_preserving_case() -> Result<()> {
    let stemmer = PorterStemmer::with_config(StemmerConfig::new().with_lowercase(false));
    assert_eq!(
        stemmer.stem_document("RUNNING Quickly, happily", false)?,
        "RUN Quickli, happili"
    );
    Ok(())
}

#[test]
fn test_document_never_fails_on_words() -> Result<()> {
    let stemmer = PorterStemmer::with_config(
        StemmerConfig::new().with_preserve_original_on_error(false),
    );
    assert_eq!(
        stemmer.stem_document("it's 3 o'clock, e-mail me", false)?,
        "it's 3 o'clock, e-mail me"
    );
    Ok(())
}
