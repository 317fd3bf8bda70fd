//! Worker thread for the parallel pipeline.
//!
//! Each worker receives its automaton handle exactly once at startup and
//! reuses it for every chunk; the automaton is never rebuilt per chunk.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::dictionary::KeywordMatcher;
use crate::normalize::normalize;

use super::types::{Chunk, FilterResult};

/// Worker thread: drains chunks until the work channel closes.
pub(crate) fn worker_thread(
    _worker_id: usize,
    work_receiver: Receiver<Chunk>,
    result_sender: Sender<FilterResult>,
    matcher: Arc<KeywordMatcher>,
    text_col: Option<usize>,
) {
    while let Ok(chunk) = work_receiver.recv() {
        let result = filter_chunk(chunk, &matcher, text_col);
        if result_sender.send(result).is_err() {
            // Sink gone; nothing left to do.
            break;
        }
    }
}

/// Apply normalize-then-match to every record of a chunk.
///
/// A record with a missing text field normalizes to the empty string and is
/// therefore always dropped; no single record can fail the chunk. With no
/// resolvable text column the whole chunk filters to empty.
pub(crate) fn filter_chunk(
    chunk: Chunk,
    matcher: &KeywordMatcher,
    text_col: Option<usize>,
) -> FilterResult {
    let records_scanned = chunk.records.len();
    let surviving = match text_col {
        None => Vec::new(),
        Some(idx) => chunk
            .records
            .into_iter()
            .filter(|record| {
                let cleaned = record.get(idx).map(normalize).unwrap_or_default();
                matcher.is_match(&cleaned)
            })
            .collect(),
    };
    FilterResult {
        surviving,
        records_scanned,
    }
}
