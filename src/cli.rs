// Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "termsift")]
#[command(about = "Streaming parallel keyword filter for large delimited-text corpora")]
#[command(
    long_about = "Streaming parallel keyword filter for large delimited-text corpora.\n\nReads the source corpus in fixed-size chunks, scans the configured text\ncolumn against a keyword/alias dictionary with a multi-pattern automaton,\nand appends surviving rows to the output file under a single header.\n\nOutput row order follows chunk completion order, not source order.\n\nEXAMPLE:\n  termsift news.csv keywords.json candidates.csv --column CONTENT -w 8"
)]
#[command(version)]
pub struct Cli {
    /// Source corpus (delimited text with a header row)
    pub source: PathBuf,

    /// Keyword dictionary (JSON array of entries with `keyword` and optional `aliases`)
    pub dictionary: PathBuf,

    /// Destination for surviving rows
    pub output: PathBuf,

    /// Name of the text column to scan
    #[arg(
        short = 'c',
        long = "column",
        default_value = "CONTENT",
        help_heading = "Filtering Options"
    )]
    pub column: String,

    /// Records per chunk dispatched to a worker
    #[arg(
        long = "chunk-size",
        default_value_t = 10_000,
        help_heading = "Processing Options"
    )]
    pub chunk_size: usize,

    /// Worker threads (default: available cores minus one, minimum 1)
    #[arg(short = 'w', long = "workers", help_heading = "Processing Options")]
    pub workers: Option<usize>,

    /// Disable the progress bar
    #[arg(long = "no-progress", help_heading = "Output Options")]
    pub no_progress: bool,

    /// Suppress progress and non-error diagnostics (summary still printed)
    #[arg(short = 'q', long = "quiet", help_heading = "Output Options")]
    pub quiet: bool,
}
