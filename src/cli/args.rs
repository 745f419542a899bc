//! Command line argument parsing for the vanilla-porter CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::porter::{Dialect, StemmerConfig};

/// vanilla-porter - An English Porter stemmer
#[derive(Parser, Debug, Clone)]
#[command(name = "vanilla-porter")]
#[command(about = "Stem English words, documents and files with the Porter algorithm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VanillaPorterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Stemmer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Rule dialect (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub dialect: Option<Dialect>,

    /// Restore the input's upper/lower case pattern onto each stem
    #[arg(long, global = true)]
    pub preserve_case: bool,

    /// Report words that cannot be stemmed instead of returning them unchanged
    #[arg(long, global = true)]
    pub fail_on_error: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VanillaPorterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the stemmer configuration: the config file (if any) first,
    /// then command line overrides.
    pub fn stemmer_config(&self) -> Result<StemmerConfig> {
        let mut config = match &self.config {
            Some(path) => StemmerConfig::from_json_file(path)?,
            None => StemmerConfig::default(),
        };

        if let Some(dialect) = self.dialect {
            config = config.with_dialect(dialect);
        }
        if self.preserve_case {
            config = config.with_lowercase(false);
        }
        if self.fail_on_error {
            config = config.with_preserve_original_on_error(false);
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem individual words
    Word(WordArgs),

    /// Stem a free-form document
    Document(DocumentArgs),

    /// Stem a text file line by line
    File(FileArgs),

    /// Stem a JSON array of tokens
    Tokens(TokensArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming a document
#[derive(Parser, Debug, Clone)]
pub struct DocumentArgs {
    /// Text to stem (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Replace punctuation with spaces and trim before stemming
    #[arg(long)]
    pub clean_non_alpha: bool,
}

/// Arguments for stemming a file
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Input file path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Show progress for large files
    #[arg(long)]
    pub progress: bool,

    /// Replace punctuation with spaces and trim each line before stemming
    #[arg(long)]
    pub clean_non_alpha: bool,
}

/// Arguments for stemming a token list
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// JSON file holding an array of strings (read from stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
