//! Chunk Source: incremental corpus reading.
//!
//! Streams the corpus CSV in fixed-size chunks so memory stays flat
//! regardless of file size. The header row is parsed once and the
//! configured text column resolved once; rows that cannot be parsed or
//! whose field count disagrees with the header are skipped and tallied,
//! never fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::SiftError;
use crate::parallel::Chunk;

#[derive(Debug)]
pub struct ChunkSource {
    reader: Reader<File>,
    headers: StringRecord,
    text_col: Option<usize>,
    chunk_size: usize,
    rows_skipped: usize,
    done: bool,
}

impl ChunkSource {
    /// Open the corpus at `path`, yielding chunks of `chunk_size` records.
    ///
    /// A missing path fails with `SourceNotFound` before any output file is
    /// created. A header that lacks `text_column` is not fatal: the run
    /// proceeds and every record filters to non-matching.
    pub fn open(path: &Path, text_column: &str, chunk_size: usize) -> Result<Self, SiftError> {
        if !path.exists() {
            return Err(SiftError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|_| SiftError::SourceNotFound {
                path: path.to_path_buf(),
            })?;

        // An unreadable header leaves the record set empty; downstream this
        // behaves like a corpus with no parsable rows.
        let headers = reader.headers().map(|h| h.clone()).unwrap_or_default();
        let text_col = headers.iter().position(|name| name == text_column);

        Ok(Self {
            reader,
            headers,
            text_col,
            chunk_size: chunk_size.max(1),
            rows_skipped: 0,
            done: false,
        })
    }

    /// The corpus header row, in source column order.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Index of the configured text column, `None` if the header lacks it.
    pub fn text_col(&self) -> Option<usize> {
        self.text_col
    }

    /// Rows skipped so far because they were malformed.
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }
}

impl Iterator for ChunkSource {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.done {
            return None;
        }

        let expected_fields = self.headers.len();
        let mut records = Vec::with_capacity(self.chunk_size);
        let mut row = StringRecord::new();

        while records.len() < self.chunk_size {
            match self.reader.read_record(&mut row) {
                Ok(true) => {
                    // Ragged rows (an unescaped delimiter shifting columns)
                    // are skipped rather than written out misaligned.
                    if row.len() != expected_fields {
                        self.rows_skipped += 1;
                        continue;
                    }
                    records.push(row.clone());
                }
                Ok(false) => {
                    self.done = true;
                    break;
                }
                Err(_) => {
                    self.rows_skipped += 1;
                }
            }
        }

        if records.is_empty() {
            return None;
        }
        Some(Chunk { records })
    }
}

/// Best-effort total-chunk estimate for progress reporting, derived from a
/// raw line count. Any read failure degrades to `None`; the estimate never
/// blocks correctness.
pub fn estimate_chunk_count(path: &Path, chunk_size: usize) -> Option<u64> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut lines = 0u64;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => lines += 1,
            Err(_) => return None,
        }
    }
    Some(lines / chunk_size.max(1) as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp corpus");
        file.write_all(contents.as_bytes()).expect("write corpus");
        file
    }

    #[test]
    fn missing_path_is_source_not_found() {
        let err = ChunkSource::open(Path::new("/nonexistent/corpus.csv"), "CONTENT", 10)
            .unwrap_err();
        assert!(matches!(err, SiftError::SourceNotFound { .. }));
    }

    #[test]
    fn resolves_text_column_from_header() {
        let file = corpus_file("ID,CONTENT,DATE\n1,hello,2020-01-01\n");
        let source = ChunkSource::open(file.path(), "CONTENT", 10).unwrap();
        assert_eq!(source.text_col(), Some(1));
        assert_eq!(
            source.headers().iter().collect::<Vec<_>>(),
            vec!["ID", "CONTENT", "DATE"]
        );
    }

    #[test]
    fn absent_text_column_yields_none_not_an_error() {
        let file = corpus_file("ID,BODY\n1,hello\n");
        let source = ChunkSource::open(file.path(), "CONTENT", 10).unwrap();
        assert_eq!(source.text_col(), None);
    }

    #[test]
    fn chunks_are_bounded_and_final_chunk_may_be_short() {
        let mut contents = String::from("ID,CONTENT\n");
        for i in 0..7 {
            contents.push_str(&format!("{i},text {i}\n"));
        }
        let file = corpus_file(&contents);
        let chunks: Vec<Chunk> =
            ChunkSource::open(file.path(), "CONTENT", 3).unwrap().collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].records.len(), 3);
        assert_eq!(chunks[1].records.len(), 3);
        assert_eq!(chunks[2].records.len(), 1);
    }

    #[test]
    fn ragged_rows_are_skipped_and_counted() {
        let file = corpus_file("ID,CONTENT\n1,good row\n2,bad,extra,fields\n3,another good\n");
        let mut source = ChunkSource::open(file.path(), "CONTENT", 10).unwrap();
        let chunk = source.next().unwrap();
        assert_eq!(chunk.records.len(), 2);
        assert_eq!(source.rows_skipped(), 1);
        assert!(source.next().is_none());
    }

    #[test]
    fn empty_corpus_yields_no_chunks() {
        let file = corpus_file("ID,CONTENT\n");
        let mut source = ChunkSource::open(file.path(), "CONTENT", 10).unwrap();
        assert!(source.next().is_none());
    }

    #[test]
    fn estimate_counts_chunks_from_lines() {
        let mut contents = String::from("ID,CONTENT\n");
        for i in 0..25 {
            contents.push_str(&format!("{i},text\n"));
        }
        let file = corpus_file(&contents);
        // 26 lines at 10 per chunk rounds to 3.
        assert_eq!(estimate_chunk_count(file.path(), 10), Some(3));
    }

    #[test]
    fn estimate_degrades_to_none_for_missing_file() {
        assert_eq!(estimate_chunk_count(Path::new("/nonexistent.csv"), 10), None);
    }
}
