//! Main parallel processor.
//!
//! Orchestrates the reader thread, the worker pool, and the result sink.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;
use indicatif::ProgressBar;

use crate::dictionary::KeywordMatcher;
use crate::error::SiftError;
use crate::source::ChunkSource;
use crate::stats::RunStats;

use super::sink::{result_sink_thread, ResultSink};
use super::types::ParallelConfig;
use super::worker::worker_thread;

pub struct ParallelProcessor {
    config: ParallelConfig,
}

impl ParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: stream chunks from `source`, filter them on
    /// the worker pool, append surviving rows to `output_path`.
    ///
    /// The matcher is built once by the caller and handed to each worker as
    /// an `Arc` clone at startup. Bounded channels give backpressure in
    /// both directions, so memory stays flat however large the corpus is.
    pub fn run(
        &self,
        source: ChunkSource,
        matcher: Arc<KeywordMatcher>,
        output_path: &Path,
        progress: ProgressBar,
    ) -> Result<RunStats, SiftError> {
        let (work_sender, work_receiver) = bounded(self.config.num_workers * 2);
        let (result_sender, result_receiver) = bounded(self.config.num_workers * 4);

        let headers = source.headers().clone();
        let text_col = source.text_col();

        // Reader thread: single producer feeding the pool in source order.
        let reader_handle = thread::spawn(move || {
            let mut source = source;
            let mut chunks_read = 0u64;
            while let Some(chunk) = source.next() {
                chunks_read += 1;
                if work_sender.send(chunk).is_err() {
                    break;
                }
            }
            (chunks_read, source.rows_skipped())
        });

        let mut worker_handles = Vec::with_capacity(self.config.num_workers);
        for worker_id in 0..self.config.num_workers {
            let work_receiver = work_receiver.clone();
            let result_sender = result_sender.clone();
            let matcher = Arc::clone(&matcher);

            worker_handles.push(thread::spawn(move || {
                worker_thread(worker_id, work_receiver, result_sender, matcher, text_col)
            }));
        }
        // Only the workers hold channel endpoints now; dropping these lets
        // the result channel close once every worker finishes.
        drop(work_receiver);
        drop(result_sender);

        let sink_handle = {
            let sink = ResultSink::new(output_path.to_path_buf(), headers, progress);
            thread::spawn(move || result_sink_thread(result_receiver, sink))
        };

        let (chunks_read, rows_skipped) = reader_handle
            .join()
            .unwrap_or_else(|e| panic!("Reader thread panicked: {:?}", e));

        for (idx, handle) in worker_handles.into_iter().enumerate() {
            if handle.join().is_err() {
                eprintln!(
                    "Warning: worker thread {} terminated abnormally; its in-flight chunk was lost",
                    idx
                );
            }
        }

        let mut stats = sink_handle
            .join()
            .unwrap_or_else(|e| panic!("Sink thread panicked: {:?}", e))?;

        stats.rows_skipped = rows_skipped;
        // Surviving workers drain the queue before exiting, so any gap
        // between dispatched and processed is exactly the chunks that died
        // with their worker.
        stats.chunks_lost = chunks_read.saturating_sub(stats.chunks_processed as u64) as usize;
        Ok(stats)
    }
}
