//! Command implementations for the vanilla-porter CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use serde_json::Value;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::porter::PorterStemmer;

/// Progress is only reported for inputs larger than this.
const PROGRESS_MIN_FILE_SIZE: u64 = 1024 * 1024;

/// Lines between progress updates.
const PROGRESS_LINE_INTERVAL: usize = 1000;

/// Execute a CLI command.
pub fn execute_command(args: VanillaPorterArgs) -> Result<()> {
    let config = args.stemmer_config()?;
    log::info!(
        "dialect: {}, lowercase: {}, preserve original on error: {}",
        config.dialect.name(),
        config.to_lowercase,
        config.preserve_original_on_error
    );
    let stemmer = PorterStemmer::with_config(config);

    match &args.command {
        Command::Word(word_args) => stem_words(word_args, &stemmer, &args),
        Command::Document(doc_args) => stem_document(doc_args, &stemmer, &args),
        Command::File(file_args) => stem_file(file_args, &stemmer, &args),
        Command::Tokens(tokens_args) => stem_tokens(tokens_args, &stemmer, &args),
    }
}

/// Stem each word given on the command line.
fn stem_words(args: &WordArgs, stemmer: &PorterStemmer, cli_args: &VanillaPorterArgs) -> Result<()> {
    let stems = args
        .words
        .iter()
        .map(|word| {
            Ok(WordStem {
                original: word.clone(),
                stem: stemmer.stem_word(word)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Stemmed words",
        &StemResults {
            dialect: stemmer.dialect().name().to_string(),
            stems,
        },
        cli_args,
    )
}

/// Stem a document given as an argument or on stdin.
fn stem_document(
    args: &DocumentArgs,
    stemmer: &PorterStemmer,
    cli_args: &VanillaPorterArgs,
) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let stemmed = stemmer.stem_document(&text, args.clean_non_alpha)?;

    output_result(
        "Stemmed document",
        &DocumentResult {
            dialect: stemmer.dialect().name().to_string(),
            original: text,
            stemmed,
        },
        cli_args,
    )
}

/// Stream a file through the stemmer.
///
/// The stemmed lines go to the output file, or to stdout when none is given.
/// In the latter case the run summary is logged instead of printed so it
/// does not mix with the stemmed text.
fn stem_file(args: &FileArgs, stemmer: &PorterStemmer, cli_args: &VanillaPorterArgs) -> Result<()> {
    let input_bytes = fs::metadata(&args.input)?.len();
    let show_progress = args.progress && input_bytes > PROGRESS_MIN_FILE_SIZE;

    if cli_args.verbosity() > 1 {
        eprintln!(
            "Stemming {} ({input_bytes} bytes) with the {} dialect",
            args.input.display(),
            stemmer.dialect().name()
        );
    }

    let start_time = Instant::now();
    let lines = stemmer.stem_file_lines(&args.input, args.clean_non_alpha)?;

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    let mut lines_processed = 0;
    let mut lines_failed = 0;
    let mut bytes_written = 0u64;

    for line in lines {
        lines_processed += 1;
        match line {
            Ok(stemmed) => {
                writer.write_all(stemmed.as_bytes())?;
                bytes_written += stemmed.len() as u64;
            }
            Err(e) => {
                lines_failed += 1;
                log::warn!("{e}");
            }
        }

        if show_progress && lines_processed % PROGRESS_LINE_INTERVAL == 0 {
            let percent = (bytes_written as f64 / input_bytes as f64 * 100.0).min(100.0);
            eprint!("\rProgress: {percent:5.1}% ({lines_processed} lines processed)");
        }
    }
    writer.flush()?;

    if show_progress {
        eprint!("\r{}\r", " ".repeat(60));
    }

    let summary = FileStemSummary {
        input: args.input.to_string_lossy().to_string(),
        output: args
            .output
            .as_ref()
            .map(|path| path.to_string_lossy().to_string()),
        input_bytes,
        lines_processed,
        lines_failed,
        bytes_written,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    if args.output.is_some() {
        output_result("File stemmed successfully", &summary, cli_args)
    } else {
        log::info!(
            "stemmed {} lines ({} failed, {} bytes) in {} ms",
            summary.lines_processed,
            summary.lines_failed,
            summary.bytes_written,
            summary.duration_ms
        );
        Ok(())
    }
}

/// Stem a JSON array of tokens read from a file or stdin.
fn stem_tokens(
    args: &TokensArgs,
    stemmer: &PorterStemmer,
    cli_args: &VanillaPorterArgs,
) -> Result<()> {
    let content = match &args.input {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let value: Value = serde_json::from_str(&content)?;
    let stemmed = stemmer.stem_tokens_value(&value)?;

    // stem_tokens_value has already checked that every element is a string.
    let stems = value
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .zip(stemmed)
        .map(|(original, stem)| WordStem {
            original: original.to_string(),
            stem,
        })
        .collect();

    output_result(
        "Stemmed tokens",
        &StemResults {
            dialect: stemmer.dialect().name().to_string(),
            stems,
        },
        cli_args,
    )
}

fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
