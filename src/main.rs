use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod dictionary;
mod error;
mod normalize;
mod parallel;
mod progress;
mod source;
mod stats;

use cli::Cli;
use config::SiftConfig;
use dictionary::KeywordMatcher;
use parallel::{ParallelConfig, ParallelProcessor};
use source::ChunkSource;
use stats::RunStats;

fn main() {
    let cli = Cli::parse();
    let config = SiftConfig::from_cli(&cli);

    match run(&config) {
        Ok(stats) => {
            if stats.chunks_lost > 0 {
                eprintln!(
                    "Warning: {} chunks were lost to worker failures; candidate counts are under-reported",
                    stats.chunks_lost
                );
            }
            eprintln!("{}", stats.format_summary());
        }
        Err(err) => {
            eprintln!("termsift: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Wire the pipeline: build the matcher once, open the source, start the
/// pool, drain results, report. All filtering logic lives in the
/// components; this function only owns process lifecycle.
fn run(config: &SiftConfig) -> Result<RunStats> {
    let matcher = KeywordMatcher::from_path(&config.dictionary)?;
    if !config.quiet {
        eprintln!(
            "Built keyword matcher with {} distinct terms",
            matcher.term_count()
        );
    }

    let source = ChunkSource::open(&config.source, &config.text_column, config.chunk_size)?;
    let estimate = source::estimate_chunk_count(&config.source, config.chunk_size);

    let progress = progress::chunk_progress(estimate, config.show_progress);
    let processor = ParallelProcessor::new(ParallelConfig {
        num_workers: config.num_workers,
    });

    let stats = processor.run(source, Arc::new(matcher), &config.output, progress)?;
    Ok(stats)
}
