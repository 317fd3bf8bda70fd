// Resolved run configuration.
//
// Components receive this (or the values they need from it) explicitly at
// construction; there is no ambient global state.

use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct SiftConfig {
    pub source: PathBuf,
    pub dictionary: PathBuf,
    pub output: PathBuf,
    pub text_column: String,
    pub chunk_size: usize,
    pub num_workers: usize,
    pub show_progress: bool,
    pub quiet: bool,
}

impl SiftConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            dictionary: cli.dictionary.clone(),
            output: cli.output.clone(),
            text_column: cli.column.clone(),
            chunk_size: cli.chunk_size.max(1),
            num_workers: cli.workers.unwrap_or_else(default_workers).max(1),
            show_progress: !cli.no_progress && !cli.quiet,
            quiet: cli.quiet,
        }
    }
}

/// One fewer than the available processing units, minimum 1. Keeps a core
/// free for the reader and sink threads.
pub fn default_workers() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}
