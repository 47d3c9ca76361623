//! Scan progress reporting

use crate::scan::ScanObserver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Log cadence, in messages
const LOG_EVERY: usize = 50;

/// Terminal progress bar driven by the scan loop
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a progress bar sized to the scan.
    ///
    /// # Panics
    /// May panic if the progress bar template is invalid.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("█▓░"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Scan complete");
    }
}

impl ScanObserver for ProgressReporter {
    fn on_message(&mut self, done: usize, total: usize) -> bool {
        self.bar.set_position(done as u64);
        if done > 0 && done % LOG_EVERY == 0 {
            info!("Processed {done}/{total} messages...");
        }
        true
    }
}
