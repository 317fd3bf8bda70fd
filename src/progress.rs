//! Best-effort chunk progress reporting.
//!
//! The total is an estimate derived from a line count; when it is
//! unavailable the bar degrades to a spinner with a running chunk count.
//! Progress never affects correctness.

use indicatif::{ProgressBar, ProgressStyle};

pub fn chunk_progress(total_chunks: Option<u64>, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    match total_chunks {
        Some(total) => {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chunks")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("[{elapsed_precise}] {spinner} {pos} chunks")
                    .unwrap(),
            );
            bar
        }
    }
}
