//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VanillaPorterArgs};
use crate::error::Result;

/// A single word and its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStem {
    pub original: String,
    pub stem: String,
}

/// Result structure for the `word` and `tokens` commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResults {
    pub dialect: String,
    pub stems: Vec<WordStem>,
}

/// Result structure for the `document` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResult {
    pub dialect: String,
    pub original: String,
    pub stemmed: String,
}

/// Summary of a `file` run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileStemSummary {
    pub input: String,
    pub output: Option<String>,
    pub input_bytes: u64,
    pub lines_processed: usize,
    pub lines_failed: usize,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Types that know how to print themselves for a human reader.
pub trait HumanOutput {
    fn print_human(&self, args: &VanillaPorterArgs);
}

impl HumanOutput for StemResults {
    fn print_human(&self, _args: &VanillaPorterArgs) {
        let width = self
            .stems
            .iter()
            .map(|s| s.original.chars().count())
            .max()
            .unwrap_or(0);

        for stem in &self.stems {
            println!("{:<width$} → {}", stem.original, stem.stem);
        }
    }
}

impl HumanOutput for DocumentResult {
    fn print_human(&self, _args: &VanillaPorterArgs) {
        println!("{}", self.stemmed);
    }
}

impl HumanOutput for FileStemSummary {
    fn print_human(&self, _args: &VanillaPorterArgs) {
        println!("Processing complete:");
        println!("  Input: {} ({})", self.input, format_bytes(self.input_bytes));
        println!("  Lines processed: {}", self.lines_processed);
        if self.lines_failed > 0 {
            println!("  Lines failed: {}", self.lines_failed);
        }
        println!("  Bytes written: {}", format_bytes(self.bytes_written));
        if let Some(output) = &self.output {
            println!("  Output written to: {output}");
        }
        println!("  Duration: {}", format_duration_ms(self.duration_ms));
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &VanillaPorterArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &VanillaPorterArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    result.print_human(args);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &VanillaPorterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}

/// Format a millisecond duration.
fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", ms as f64 / 1000.0)
    }
}
