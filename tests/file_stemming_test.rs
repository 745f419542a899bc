//! Integration tests for streaming file stemming

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use vanilla_porter::prelude::*;

#[test]
fn test_stem_file_lines() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        "The boys are running quickly!\nGeneralizations, relational; conditional.\n\nno newline at end"
    )?;

    let stemmer = PorterStemmer::new();
    let lines = stemmer
        .stem_file_lines(file.path(), false)?
        .collect::<Result<Vec<_>>>()?;

    assert_eq!(
        lines,
        vec![
            "the boi ar run quickli!\n",
            "gener, relat; condit.\n",
            "\n",
            "no newlin at end",
        ]
    );
    Ok(())
}

#[test]
fn test_stem_file_lines_clean() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "Hello, (running) world!")?;
    writeln!(file, "  ponies   and flies  ")?;

    let stemmer = PorterStemmer::new();
    let lines = stemmer
        .stem_file_lines(file.path(), true)?
        .collect::<Result<Vec<_>>>()?;

    // The clean pre-pass trims the line ending along with other whitespace.
    assert_eq!(lines, vec!["hello run world", "poni and fli"]);
    Ok(())
}

#[test]
fn test_output_reproduces_layout() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("input.txt");
    let text = "Windows line\r\nUnix line\n\tindented line\n";
    fs::write(&input, text)?;

    let stemmer = PorterStemmer::new();
    let output: String = stemmer
        .stem_file_lines(&input, false)?
        .collect::<Result<Vec<_>>>()?
        .concat();

    assert_eq!(output, "window line\r\nunix line\n\tindent line\n");
    Ok(())
}

#[test]
fn test_large_input_is_streamed() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    for i in 0..5_000 {
        writeln!(file, "line {i}: connected connecting connection")?;
    }

    let stemmer = PorterStemmer::new();
    let mut count = 0;
    for line in stemmer.stem_file_lines(file.path(), false)? {
        let line = line?;
        assert!(line.ends_with(": connect connect connect\n"), "{line:?}");
        count += 1;
    }
    assert_eq!(count, 5_000);
    Ok(())
}

#[test]
fn test_invalid_utf8_line() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"running\n\xc3\x28 broken\nflies\n")?;

    let stemmer = PorterStemmer::new();
    let mut lines = stemmer.stem_file_lines(file.path(), false)?;

    assert_eq!(lines.next().unwrap()?, "run\n");
    match lines.next() {
        Some(Err(StemError::Line { line, .. })) => assert_eq!(line, 2),
        other => panic!("expected a line error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_file() {
    let stemmer = PorterStemmer::new();
    let dir = TempDir::new().unwrap();
    let result = stemmer.stem_file_lines(dir.path().join("missing.txt"), false);
    assert!(matches!(result, Err(StemError::Io(_))));
}
