//! Line-by-line stemming of files and readers.
//!
//! Lines are read and stemmed one at a time, so memory use does not grow
//! with the size of the input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, StemError};
use crate::porter::stemmer::PorterStemmer;

/// Iterator over the stemmed lines of a reader.
///
/// Each item is one input line passed through
/// [`PorterStemmer::stem_document`], line ending included, so concatenating
/// the items reproduces the layout of the input. Errors carry the 1-based
/// line number.
#[derive(Debug)]
pub struct StemmedLines<R = BufReader<File>> {
    stemmer: PorterStemmer,
    reader: R,
    clean_non_alphanumeric: bool,
    line_number: usize,
    buffer: String,
    done: bool,
}

impl<R: BufRead> StemmedLines<R> {
    fn new(stemmer: PorterStemmer, reader: R, clean_non_alphanumeric: bool) -> Self {
        StemmedLines {
            stemmer,
            reader,
            clean_non_alphanumeric,
            line_number: 0,
            buffer: String::new(),
            done: false,
        }
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for StemmedLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                let stemmed = self
                    .stemmer
                    .stem_document(&self.buffer, self.clean_non_alphanumeric)
                    .map_err(|e| StemError::line(self.line_number, e));
                Some(stemmed)
            }
            Err(e) => {
                // A failed read leaves the reader position unknown.
                self.done = true;
                self.line_number += 1;
                Some(Err(StemError::line(self.line_number, e.into())))
            }
        }
    }
}

impl PorterStemmer {
    /// Stem the lines of any buffered reader.
    pub fn stem_reader<R: BufRead>(&self, reader: R, clean_non_alphanumeric: bool) -> StemmedLines<R> {
        StemmedLines::new(self.clone(), reader, clean_non_alphanumeric)
    }

    /// Open a UTF-8 file and stem it line by line.
    pub fn stem_file_lines<P: AsRef<Path>>(
        &self,
        path: P,
        clean_non_alphanumeric: bool,
    ) -> Result<StemmedLines> {
        let file = File::open(path.as_ref())?;
        log::debug!("stemming lines of {}", path.as_ref().display());
        Ok(self.stem_reader(BufReader::new(file), clean_non_alphanumeric))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_stem_reader_preserves_line_endings() {
        let stemmer = PorterStemmer::new();
        let input = "The cats are running.\r\nflies\n\nlast line";
        let lines: Vec<String> = stemmer
            .stem_reader(Cursor::new(input), false)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            lines,
            vec!["the cat ar run.\r\n", "fli\n", "\n", "last line"]
        );
    }

    #[test]
    fn test_stem_reader_clean() {
        let stemmer = PorterStemmer::new();
        let lines: Vec<String> = stemmer
            .stem_reader(Cursor::new("Hello, running world!\n"), true)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["hello run world"]);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let stemmer = PorterStemmer::new();
        let input: &[u8] = b"cats\n\xff\xfe\n";
        let mut lines = stemmer.stem_reader(input, false);

        assert_eq!(lines.next().unwrap().unwrap(), "cat\n");
        match lines.next() {
            Some(Err(StemError::Line { line, source })) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, StemError::Io(_)));
            }
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_stem_file_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "connected connecting\nponies\n").unwrap();

        let stemmer = PorterStemmer::new();
        let mut lines = stemmer.stem_file_lines(file.path(), false).unwrap();
        assert_eq!(lines.next().unwrap().unwrap(), "connect connect\n");
        assert_eq!(lines.next().unwrap().unwrap(), "poni\n");
        assert!(lines.next().is_none());
        assert_eq!(lines.lines_read(), 2);
    }

    #[test]
    fn test_missing_file() {
        let stemmer = PorterStemmer::new();
        let result = stemmer.stem_file_lines("/nonexistent/path/to/input.txt", false);
        assert!(matches!(result, Err(StemError::Io(_))));
    }
}
