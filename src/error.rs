// Fatal error taxonomy for the filtering pipeline.
//
// Per-row problems are never represented here: malformed corpus rows are
// skipped and tallied locally. Only conditions that abort the run (or
// prevent it from starting) get a variant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    /// Dictionary file missing, unreadable, or not parseable as a JSON array.
    #[error("failed to load keyword dictionary {}: {source}", .path.display())]
    DictionaryFormat {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dictionary entry without a usable `keyword` field.
    #[error("keyword dictionary entry #{index} is invalid: {source}")]
    DictionarySchema {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Source corpus path missing or unreadable. Reported before any output
    /// file is created.
    #[error("source corpus not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Failure persisting surviving rows. Fatal: the run cannot make
    /// progress without being able to write results.
    #[error("failed to write filtered output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
