//! Type definitions for the parallel pipeline.

use csv::StringRecord;

use crate::config::default_workers;

/// Configuration for parallel processing.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: default_workers(),
        }
    }
}

/// A bounded batch of corpus records processed as one unit of work.
///
/// Created by the chunk source, consumed and discarded by exactly one
/// worker. Never retried, never split.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub records: Vec<StringRecord>,
}

/// Result of filtering one chunk.
#[derive(Debug)]
pub struct FilterResult {
    pub surviving: Vec<StringRecord>,
    pub records_scanned: usize,
}
