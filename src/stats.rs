use std::time::{Duration, Instant};

/// Statistics accumulated over one filtering run.
///
/// Mutated only by the single-threaded result sink (and finalized by the
/// driver), so no synchronization is needed.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub chunks_processed: usize,
    pub chunks_lost: usize,
    pub records_scanned: usize,
    pub records_kept: usize,
    pub rows_skipped: usize,
    pub processing_time: Duration,
    start_time: Option<Instant>,
}

impl RunStats {
    pub fn start() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn finish(&mut self) {
        if let Some(start) = self.start_time {
            self.processing_time = start.elapsed();
        }
    }

    pub fn format_summary(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Chunks processed: {} total; records: {} scanned, {} kept",
            self.chunks_processed, self.records_scanned, self.records_kept
        ));

        if self.rows_skipped > 0 {
            output.push_str(&format!(", {} malformed rows skipped", self.rows_skipped));
        }

        if self.chunks_lost > 0 {
            output.push_str(&format!(
                ", {} chunks lost to worker failures",
                self.chunks_lost
            ));
        }

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.records_scanned > 0 {
            let records_per_sec =
                (self.records_scanned as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} records/s)", records_per_sec));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_core_counts() {
        let stats = RunStats {
            chunks_processed: 4,
            records_scanned: 40_000,
            records_kept: 123,
            ..Default::default()
        };
        let summary = stats.format_summary();
        assert!(summary.contains("4 total"));
        assert!(summary.contains("40000 scanned"));
        assert!(summary.contains("123 kept"));
        assert!(!summary.contains("skipped"));
        assert!(!summary.contains("lost"));
    }

    #[test]
    fn summary_surfaces_skips_and_losses() {
        let stats = RunStats {
            chunks_processed: 2,
            chunks_lost: 1,
            records_scanned: 20_000,
            records_kept: 5,
            rows_skipped: 3,
            ..Default::default()
        };
        let summary = stats.format_summary();
        assert!(summary.contains("3 malformed rows skipped"));
        assert!(summary.contains("1 chunks lost to worker failures"));
    }

    #[test]
    fn finish_records_elapsed_time() {
        let mut stats = RunStats::start();
        stats.finish();
        assert!(stats.processing_time >= Duration::ZERO);
    }
}
