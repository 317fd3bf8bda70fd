//! Parallel filtering pipeline.
//!
//! Splits corpus filtering across a fixed pool of worker threads: a single
//! reader thread streams chunks into a bounded work channel, workers apply
//! normalize-then-match per record, and a single sink thread appends
//! surviving rows to the output file and accumulates run statistics.
//!
//! # Module Structure
//!
//! - `types`: chunk, result, and configuration data structures
//! - `worker`: worker thread and the per-chunk filtering function
//! - `sink`: result sink owning the output writer and run statistics
//! - `processor`: ParallelProcessor orchestration
//!
//! Chunk dispatch order is source order; completion order is unspecified,
//! and output row order follows completion order. This reordering relative
//! to the source is a documented property of the pipeline, not a bug.

mod processor;
mod sink;
mod types;
mod worker;

pub use processor::ParallelProcessor;
pub use types::{Chunk, FilterResult, ParallelConfig};
