//! Result sink for the parallel pipeline.
//!
//! A single sink thread consumes results in completion order and owns the
//! output file exclusively; no worker ever writes to it. The writer is
//! acquired lazily: the file is created and the header written on the
//! first result that carries surviving rows, so a run that keeps nothing
//! leaves no output file behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use crossbeam_channel::Receiver;
use csv::{StringRecord, Writer};
use indicatif::ProgressBar;

use crate::error::SiftError;
use crate::stats::RunStats;

use super::types::FilterResult;

pub(crate) struct ResultSink {
    output_path: PathBuf,
    headers: StringRecord,
    writer: Option<Writer<File>>,
    stats: RunStats,
    progress: ProgressBar,
}

impl ResultSink {
    pub fn new(output_path: PathBuf, headers: StringRecord, progress: ProgressBar) -> Self {
        Self {
            output_path,
            headers,
            writer: None,
            stats: RunStats::start(),
            progress,
        }
    }

    /// Consume one completed result: tally it, then append its surviving
    /// rows. Called only from the sink thread, never concurrently.
    pub fn accept(&mut self, result: FilterResult) -> Result<(), SiftError> {
        self.stats.chunks_processed += 1;
        self.stats.records_scanned += result.records_scanned;
        self.progress.inc(1);

        if result.surviving.is_empty() {
            return Ok(());
        }

        self.ensure_writer()?;
        let Self {
            output_path,
            writer,
            ..
        } = self;
        if let Some(writer) = writer.as_mut() {
            for record in &result.surviving {
                writer
                    .write_record(record)
                    .map_err(|e| write_error(output_path, e))?;
            }
            writer
                .flush()
                .map_err(|e| write_error(output_path, csv::Error::from(e)))?;
        }
        self.stats.records_kept += result.surviving.len();
        Ok(())
    }

    /// Flush and close the writer, finalize statistics.
    pub fn finish(mut self) -> Result<RunStats, SiftError> {
        if let Some(writer) = self.writer.as_mut() {
            writer
                .flush()
                .map_err(|e| write_error(&self.output_path, csv::Error::from(e)))?;
        }
        self.progress.finish_and_clear();
        self.stats.finish();
        Ok(self.stats)
    }

    /// Create the output file and write the single header row, once.
    fn ensure_writer(&mut self) -> Result<(), SiftError> {
        if self.writer.is_some() {
            return Ok(());
        }
        let mut writer =
            Writer::from_path(&self.output_path).map_err(|e| write_error(&self.output_path, e))?;
        writer
            .write_record(&self.headers)
            .map_err(|e| write_error(&self.output_path, e))?;
        self.writer = Some(writer);
        Ok(())
    }
}

fn write_error(path: &Path, source: csv::Error) -> SiftError {
    SiftError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Sink thread: drains results until the channel closes, then returns the
/// finalized run statistics.
pub(crate) fn result_sink_thread(
    result_receiver: Receiver<FilterResult>,
    mut sink: ResultSink,
) -> Result<RunStats, SiftError> {
    while let Ok(result) = result_receiver.recv() {
        sink.accept(result)?;
    }
    sink.finish()
}
